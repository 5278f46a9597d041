/*!
 * Condition Variables
 */

use libc::{pthread_cond_t, pthread_condattr_t, pthread_mutex_t, timespec};

#[cfg(all(target_os = "linux", target_env = "gnu"))]
use libc::clockid_t;

strict_ops! {
    catalogue cond_operations;

    COND_INIT => pthread_cond_init(cond: *mut pthread_cond_t, attr: *const pthread_condattr_t);
    COND_DESTROY => pthread_cond_destroy(cond: *mut pthread_cond_t);
    COND_SIGNAL => pthread_cond_signal(cond: *mut pthread_cond_t);
    COND_BROADCAST => pthread_cond_broadcast(cond: *mut pthread_cond_t);
    /// Atomically release `mutex` and wait; `mutex` is held again on return
    COND_WAIT => pthread_cond_wait(cond: *mut pthread_cond_t, mutex: *mut pthread_mutex_t);
    /// Returns `ETIMEDOUT` when `abstime` passes first (clock from the condattr)
    COND_TIMEDWAIT => pthread_cond_timedwait(cond: *mut pthread_cond_t, mutex: *mut pthread_mutex_t, abstime: *const timespec) expect TimedOut;
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    COND_CLOCKWAIT => pthread_cond_clockwait(cond: *mut pthread_cond_t, mutex: *mut pthread_mutex_t, clock_id: clockid_t, abstime: *const timespec) expect TimedOut;
}
