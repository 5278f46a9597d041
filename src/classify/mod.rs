/*!
 * Result Classification
 *
 * Maps a raw pthread return code onto one of three outcomes:
 *
 * - **Success**: the call returned `0`
 * - **Expected**: the call returned the single non-zero code its operation
 *   declares as a legitimate runtime condition (busy, timed out, ...)
 * - **Fatal**: anything else
 *
 * The classifier is pure. Escalation of `Fatal` lives in [`crate::invoke`].
 */

mod op;

pub use op::{Alternate, Op};

use libc::c_int;

/// Classification of one raw pthread result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Result was zero
    Success,
    /// Result matched the operation's declared alternate
    Expected(c_int),
    /// Result is neither zero nor the declared alternate
    Fatal(c_int),
}

impl Outcome {
    /// Raw code carried by this outcome (`0` for success)
    #[inline]
    pub const fn code(self) -> c_int {
        match self {
            Outcome::Success => 0,
            Outcome::Expected(code) | Outcome::Fatal(code) => code,
        }
    }

    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    #[inline]
    pub const fn is_expected(self) -> bool {
        matches!(self, Outcome::Expected(_))
    }

    #[inline]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Outcome::Fatal(_))
    }
}

/// Classify `rc` against an operation's expected alternate code
///
/// `expected == 0` means the operation has no alternate: only success is
/// non-fatal.
#[inline]
pub const fn classify(rc: c_int, expected: c_int) -> Outcome {
    if rc == 0 {
        Outcome::Success
    } else if rc == expected {
        Outcome::Expected(rc)
    } else {
        Outcome::Fatal(rc)
    }
}
