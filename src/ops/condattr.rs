/*!
 * Condition Variable Attributes
 */

use libc::{c_int, clockid_t, pthread_condattr_t};

strict_ops! {
    catalogue condattr_operations;

    CONDATTR_INIT => pthread_condattr_init(attr: *mut pthread_condattr_t);
    CONDATTR_DESTROY => pthread_condattr_destroy(attr: *mut pthread_condattr_t);
    CONDATTR_GETPSHARED => pthread_condattr_getpshared(attr: *const pthread_condattr_t, pshared: *mut c_int);
    CONDATTR_SETPSHARED => pthread_condattr_setpshared(attr: *mut pthread_condattr_t, pshared: c_int);
    CONDATTR_GETCLOCK => pthread_condattr_getclock(attr: *const pthread_condattr_t, clock_id: *mut clockid_t);
    /// Clock used by `pthread_cond_timedwait`
    CONDATTR_SETCLOCK => pthread_condattr_setclock(attr: *mut pthread_condattr_t, clock_id: clockid_t);
}
