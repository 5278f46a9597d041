/*!
 * Mutex Attributes
 */

use libc::{c_int, pthread_mutexattr_t};

strict_ops! {
    catalogue mutexattr_operations;

    MUTEXATTR_INIT => pthread_mutexattr_init(attr: *mut pthread_mutexattr_t);
    MUTEXATTR_DESTROY => pthread_mutexattr_destroy(attr: *mut pthread_mutexattr_t);
    MUTEXATTR_GETPSHARED => pthread_mutexattr_getpshared(attr: *const pthread_mutexattr_t, pshared: *mut c_int);
    MUTEXATTR_SETPSHARED => pthread_mutexattr_setpshared(attr: *mut pthread_mutexattr_t, pshared: c_int);
    MUTEXATTR_GETTYPE => pthread_mutexattr_gettype(attr: *const pthread_mutexattr_t, kind: *mut c_int);
    MUTEXATTR_SETTYPE => pthread_mutexattr_settype(attr: *mut pthread_mutexattr_t, kind: c_int);
    MUTEXATTR_GETPROTOCOL => pthread_mutexattr_getprotocol(attr: *const pthread_mutexattr_t, protocol: *mut c_int);
    MUTEXATTR_SETPROTOCOL => pthread_mutexattr_setprotocol(attr: *mut pthread_mutexattr_t, protocol: c_int);
    MUTEXATTR_GETPRIOCEILING => pthread_mutexattr_getprioceiling(attr: *const pthread_mutexattr_t, prioceiling: *mut c_int);
    MUTEXATTR_SETPRIOCEILING => pthread_mutexattr_setprioceiling(attr: *mut pthread_mutexattr_t, prioceiling: c_int);
    MUTEXATTR_GETROBUST => pthread_mutexattr_getrobust(attr: *const pthread_mutexattr_t, robust: *mut c_int);
    MUTEXATTR_SETROBUST => pthread_mutexattr_setrobust(attr: *mut pthread_mutexattr_t, robust: c_int);
    /// Pre-POSIX glibc name of `pthread_mutexattr_getrobust`
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    MUTEXATTR_GETROBUST_NP => pthread_mutexattr_getrobust_np(attr: *const pthread_mutexattr_t, robust: *mut c_int);
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    MUTEXATTR_SETROBUST_NP => pthread_mutexattr_setrobust_np(attr: *mut pthread_mutexattr_t, robust: c_int);
}
