/*!
 * Process-Wide Controls
 *
 * One-time initialization, signals, cancellation, fork handlers and
 * thread-specific data keys.
 */

use crate::sys::{ForkHandler, KeyDestructor, OnceRoutine, pthread_once_t};
use libc::{c_int, c_void, pthread_key_t, pthread_t, sigset_t};

#[cfg(all(target_os = "linux", target_env = "gnu"))]
use libc::sigval;

strict_ops! {
    catalogue common_operations;

    /// Run `init_routine` exactly once per `once_control`
    ONCE => pthread_once(once_control: *mut pthread_once_t, init_routine: OnceRoutine);
    /// Send `sig` to `thread`
    KILL => pthread_kill(thread: pthread_t, sig: c_int);
    /// Examine and change the calling thread's signal mask
    SIGMASK => pthread_sigmask(how: c_int, set: *const sigset_t, oldset: *mut sigset_t);
    /// Queue `sig` with a payload to `thread`
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    SIGQUEUE => pthread_sigqueue(thread: pthread_t, sig: c_int, value: sigval);
    /// Set the concurrency hint
    SETCONCURRENCY => pthread_setconcurrency(level: c_int);
    /// Enable or disable cancellation for the calling thread
    SETCANCELSTATE => pthread_setcancelstate(state: c_int, oldstate: *mut c_int);
    /// Select deferred or asynchronous cancellation
    SETCANCELTYPE => pthread_setcanceltype(kind: c_int, oldtype: *mut c_int);
    /// Register fork handlers
    ATFORK => pthread_atfork(prepare: ForkHandler, parent: ForkHandler, child: ForkHandler);
    /// Allocate a thread-specific data key
    KEY_CREATE => pthread_key_create(key: *mut pthread_key_t, destructor: KeyDestructor);
    /// Release a thread-specific data key
    KEY_DELETE => pthread_key_delete(key: pthread_key_t);
    /// Bind `value` to `key` for the calling thread
    SETSPECIFIC => pthread_setspecific(key: pthread_key_t, value: *const c_void);
}

/// Current concurrency hint
///
/// `pthread_getconcurrency` reports a level, not an error code, so there is
/// nothing to classify.
#[inline]
pub fn pthread_getconcurrency() -> c_int {
    // SAFETY: takes no arguments and cannot fail.
    unsafe { crate::sys::pthread_getconcurrency() }
}
