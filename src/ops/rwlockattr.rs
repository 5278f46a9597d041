/*!
 * Read-Write Lock Attributes
 */

use libc::{c_int, pthread_rwlockattr_t};

strict_ops! {
    catalogue rwlockattr_operations;

    RWLOCKATTR_INIT => pthread_rwlockattr_init(attr: *mut pthread_rwlockattr_t);
    RWLOCKATTR_DESTROY => pthread_rwlockattr_destroy(attr: *mut pthread_rwlockattr_t);
    RWLOCKATTR_GETPSHARED => pthread_rwlockattr_getpshared(attr: *const pthread_rwlockattr_t, pshared: *mut c_int);
    RWLOCKATTR_SETPSHARED => pthread_rwlockattr_setpshared(attr: *mut pthread_rwlockattr_t, pshared: c_int);
    /// Reader/writer preference (`PTHREAD_RWLOCK_PREFER_*_NP`)
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    RWLOCKATTR_GETKIND_NP => pthread_rwlockattr_getkind_np(attr: *const pthread_rwlockattr_t, kind: *mut c_int);
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    RWLOCKATTR_SETKIND_NP => pthread_rwlockattr_setkind_np(attr: *mut pthread_rwlockattr_t, kind: c_int);
}
