/*!
 * Operation Descriptors
 *
 * One `Op` per wrapped pthread function, bound as a `const` next to the
 * wrapper so its alternate code is fixed at compile time.
 */

use super::{classify, Outcome};
use crate::errors::UnexpectedCode;
use crate::sys;
use libc::c_int;
use std::fmt;

/// The one non-zero result an operation may legitimately return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alternate {
    /// No alternate; only `0` is non-fatal
    None,
    /// `EBUSY`: try-variants against a held lock, `pthread_tryjoin_np`
    Busy,
    /// `ETIMEDOUT`: timed and clock-based waits
    TimedOut,
    /// `ERANGE`: thread name buffer too small or name too long
    OutOfRange,
    /// `PTHREAD_ATTR_NO_SIGMASK_NP`: attribute carries no signal mask
    NoSigmask,
    /// `PTHREAD_BARRIER_SERIAL_THREAD`: the one designated barrier waiter
    SerialThread,
}

impl Alternate {
    /// Raw code this alternate stands for
    #[inline]
    pub const fn code(self) -> c_int {
        match self {
            Alternate::None => 0,
            Alternate::Busy => libc::EBUSY,
            Alternate::TimedOut => libc::ETIMEDOUT,
            Alternate::OutOfRange => libc::ERANGE,
            Alternate::NoSigmask => sys::PTHREAD_ATTR_NO_SIGMASK_NP,
            Alternate::SerialThread => sys::PTHREAD_BARRIER_SERIAL_THREAD,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Alternate::None => "none",
            Alternate::Busy => "EBUSY",
            Alternate::TimedOut => "ETIMEDOUT",
            Alternate::OutOfRange => "ERANGE",
            Alternate::NoSigmask => "PTHREAD_ATTR_NO_SIGMASK_NP",
            Alternate::SerialThread => "PTHREAD_BARRIER_SERIAL_THREAD",
        }
    }
}

/// Identity of one wrapped pthread operation
///
/// # Example
///
/// ```
/// use pthread_strict::classify::{Alternate, Op, Outcome};
///
/// const TRYLOCK: Op = Op::new("pthread_mutex_trylock", Alternate::Busy);
/// assert_eq!(TRYLOCK.classify(libc::EBUSY), Outcome::Expected(libc::EBUSY));
/// assert!(TRYLOCK.classify(libc::EINVAL).is_fatal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Op {
    name: &'static str,
    alternate: Alternate,
}

impl Op {
    pub const fn new(name: &'static str, alternate: Alternate) -> Self {
        Self { name, alternate }
    }

    /// C function name
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn alternate(&self) -> Alternate {
        self.alternate
    }

    #[inline]
    pub const fn classify(&self, rc: c_int) -> Outcome {
        classify(rc, self.alternate.code())
    }

    /// Non-terminating check
    ///
    /// Returns the raw code for success and the expected alternate, and an
    /// [`UnexpectedCode`] describing anything else.
    pub fn check(&self, rc: c_int) -> Result<c_int, UnexpectedCode> {
        match self.classify(rc) {
            Outcome::Fatal(code) => Err(UnexpectedCode::new(*self, code)),
            _ => Ok(rc),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alternate {
            Alternate::None => f.write_str(self.name),
            alt => write!(f, "{} (expects {})", self.name, alt.name()),
        }
    }
}
