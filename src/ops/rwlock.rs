/*!
 * Read-Write Locks
 */

use libc::{pthread_rwlock_t, pthread_rwlockattr_t, timespec};

#[cfg(all(target_os = "linux", target_env = "gnu"))]
use libc::clockid_t;

strict_ops! {
    catalogue rwlock_operations;

    RWLOCK_INIT => pthread_rwlock_init(rwlock: *mut pthread_rwlock_t, attr: *const pthread_rwlockattr_t);
    RWLOCK_DESTROY => pthread_rwlock_destroy(rwlock: *mut pthread_rwlock_t);
    RWLOCK_RDLOCK => pthread_rwlock_rdlock(rwlock: *mut pthread_rwlock_t);
    /// Returns `EBUSY` while a writer holds or waits for the lock
    RWLOCK_TRYRDLOCK => pthread_rwlock_tryrdlock(rwlock: *mut pthread_rwlock_t) expect Busy;
    RWLOCK_TIMEDRDLOCK => pthread_rwlock_timedrdlock(rwlock: *mut pthread_rwlock_t, abstime: *const timespec) expect TimedOut;
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    RWLOCK_CLOCKRDLOCK => pthread_rwlock_clockrdlock(rwlock: *mut pthread_rwlock_t, clock_id: clockid_t, abstime: *const timespec) expect TimedOut;
    RWLOCK_WRLOCK => pthread_rwlock_wrlock(rwlock: *mut pthread_rwlock_t);
    /// Returns `EBUSY` while any reader or writer holds the lock
    RWLOCK_TRYWRLOCK => pthread_rwlock_trywrlock(rwlock: *mut pthread_rwlock_t) expect Busy;
    RWLOCK_TIMEDWRLOCK => pthread_rwlock_timedwrlock(rwlock: *mut pthread_rwlock_t, abstime: *const timespec) expect TimedOut;
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    RWLOCK_CLOCKWRLOCK => pthread_rwlock_clockwrlock(rwlock: *mut pthread_rwlock_t, clock_id: clockid_t, abstime: *const timespec) expect TimedOut;
    RWLOCK_UNLOCK => pthread_rwlock_unlock(rwlock: *mut pthread_rwlock_t);
}
