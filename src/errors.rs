/*!
 * Error Types
 *
 * `UnexpectedCode` describes a fatal pthread result. It is what the abort
 * report prints and what [`Op::check`](crate::classify::Op::check) returns on
 * the non-terminating path.
 */

use crate::classify::Op;
use libc::c_int;
use miette::Diagnostic;
use nix::errno::Errno;
use thiserror::Error;

/// A pthread call returned a code its operation does not allow
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Diagnostic)]
#[error("{} returned {}", .op.name(), describe(.code))]
#[diagnostic(
    code(pthread::unexpected_code),
    help("The primitive was misused (invalid or destroyed handle, wrong owner, double lock) or the system ran out of a resource.")
)]
pub struct UnexpectedCode {
    op: Op,
    code: c_int,
}

impl UnexpectedCode {
    pub const fn new(op: Op, code: c_int) -> Self {
        Self { op, code }
    }

    #[inline]
    pub const fn op(&self) -> Op {
        self.op
    }

    #[inline]
    pub const fn code(&self) -> c_int {
        self.code
    }

    /// Errno view of the code
    ///
    /// Codes outside the errno range (pthread's negative sentinels) map to
    /// `Errno::UnknownErrno`.
    pub fn errno(&self) -> Errno {
        Errno::from_raw(self.code)
    }
}

fn describe(code: &c_int) -> String {
    let code = *code;
    match Errno::from_raw(code) {
        Errno::UnknownErrno => format!("unknown code {}", code),
        errno => format!("{} ({})", errno, code),
    }
}
