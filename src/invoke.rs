/*!
 * Fail-Fast Invocation
 *
 * Every wrapped pthread function is a call to [`invoke`]: run the primitive,
 * classify the result against the operation's declared alternate, and either
 * hand the raw code back or end the process.
 *
 * # Termination
 *
 * [`fatal`] is not an error path. It logs one `tracing` event and calls
 * [`std::process::abort`]: no unwinding, no destructors, no way to catch it.
 */

use crate::classify::{Op, Outcome};
use crate::errors::UnexpectedCode;
use libc::c_int;
use std::panic::Location;

/// Run `call` and apply the fail-fast policy of `op`
///
/// Returns `0` or the operation's expected alternate unchanged. Any other
/// result aborts the process.
#[inline]
#[track_caller]
pub fn invoke<F>(op: Op, call: F) -> c_int
where
    F: FnOnce() -> c_int,
{
    let rc = call();
    if let Outcome::Fatal(code) = op.classify(rc) {
        fatal(op, code);
    }
    rc
}

/// Report an unexpected pthread result and abort
#[cold]
#[inline(never)]
#[track_caller]
pub fn fatal(op: Op, code: c_int) -> ! {
    let error = UnexpectedCode::new(op, code);
    let caller = Location::caller();
    tracing::error!(
        operation = op.name(),
        code,
        errno = ?error.errno(),
        file = caller.file(),
        line = caller.line(),
        "{}; aborting",
        error
    );
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Alternate;
    use std::cell::Cell;

    const TRYLOCK: Op = Op::new("pthread_mutex_trylock", Alternate::Busy);

    #[test]
    fn test_invoke_passes_success_through() {
        let calls = Cell::new(0);
        let rc = invoke(TRYLOCK, || {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(rc, 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_invoke_returns_expected_alternate() {
        assert_eq!(invoke(TRYLOCK, || libc::EBUSY), libc::EBUSY);
    }
}
