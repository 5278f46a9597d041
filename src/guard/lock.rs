/*!
 * Lock Guards
 *
 * Mutex, read-write lock and spinlock kinds for [`ScopeGuard`]. Acquiring
 * constructors bind first and then lock through the fail-fast wrappers; a
 * null handle binds without locking.
 */

use super::scoped::ScopeGuard;
use super::traits::Resource;
use crate::ops::{
    pthread_mutex_lock, pthread_mutex_trylock, pthread_mutex_unlock, pthread_rwlock_rdlock,
    pthread_rwlock_tryrdlock, pthread_rwlock_trywrlock, pthread_rwlock_unlock,
    pthread_rwlock_wrlock, pthread_spin_lock, pthread_spin_trylock, pthread_spin_unlock,
};
use libc::{c_int, pthread_mutex_t, pthread_rwlock_t, pthread_spinlock_t};

/// `pthread_mutex_t` locked by this thread
pub struct MutexLock;

impl Resource for MutexLock {
    type Raw = pthread_mutex_t;
    const KIND: &'static str = "mutex";

    unsafe fn release(raw: *mut pthread_mutex_t) {
        if !raw.is_null() {
            pthread_mutex_unlock(raw);
        }
    }
}

/// `pthread_rwlock_t` held for reading or writing by this thread
pub struct RwLockLock;

impl Resource for RwLockLock {
    type Raw = pthread_rwlock_t;
    const KIND: &'static str = "rwlock";

    unsafe fn release(raw: *mut pthread_rwlock_t) {
        if !raw.is_null() {
            pthread_rwlock_unlock(raw);
        }
    }
}

/// `pthread_spinlock_t` held by this thread
pub struct SpinLock;

impl Resource for SpinLock {
    type Raw = pthread_spinlock_t;
    const KIND: &'static str = "spinlock";

    unsafe fn release(raw: *mut pthread_spinlock_t) {
        if !raw.is_null() {
            pthread_spin_unlock(raw);
        }
    }
}

pub type MutexGuard = ScopeGuard<MutexLock>;
pub type RwLockGuard = ScopeGuard<RwLockLock>;
pub type SpinGuard = ScopeGuard<SpinLock>;

/// Bind `handle`, then run `acquire` on it unless it is null
#[track_caller]
unsafe fn bind_and_acquire<R: Resource>(
    handle: *mut R::Raw,
    acquire: unsafe fn(*mut R::Raw) -> c_int,
) -> ScopeGuard<R> {
    let guard = ScopeGuard::bind(handle);
    if !handle.is_null() {
        acquire(handle);
    }
    guard
}

/// Run a try-acquire and bind only if it took the lock; `None` for null
#[track_caller]
unsafe fn try_acquire<R: Resource>(
    handle: *mut R::Raw,
    acquire: unsafe fn(*mut R::Raw) -> c_int,
) -> Option<ScopeGuard<R>> {
    if handle.is_null() {
        return None;
    }
    if acquire(handle) == 0 {
        Some(ScopeGuard::bind(handle))
    } else {
        None
    }
}

impl ScopeGuard<MutexLock> {
    /// Lock `mutex` and unlock it at scope exit
    ///
    /// # Safety
    ///
    /// `mutex` must be null or an initialized mutex that outlives the guard.
    #[track_caller]
    pub unsafe fn lock(mutex: *mut pthread_mutex_t) -> Self {
        bind_and_acquire(mutex, pthread_mutex_lock)
    }

    /// Lock `mutex` if it is free; `None` on `EBUSY` or a null `mutex`
    ///
    /// # Safety
    ///
    /// `mutex` must be null or an initialized mutex that outlives the guard.
    #[track_caller]
    pub unsafe fn try_lock(mutex: *mut pthread_mutex_t) -> Option<Self> {
        try_acquire(mutex, pthread_mutex_trylock)
    }
}

impl ScopeGuard<RwLockLock> {
    /// Take a read lock and release it at scope exit
    ///
    /// # Safety
    ///
    /// `rwlock` must be null or an initialized rwlock that outlives the guard.
    #[track_caller]
    pub unsafe fn read(rwlock: *mut pthread_rwlock_t) -> Self {
        bind_and_acquire(rwlock, pthread_rwlock_rdlock)
    }

    /// Take the write lock and release it at scope exit
    ///
    /// # Safety
    ///
    /// `rwlock` must be null or an initialized rwlock that outlives the guard.
    #[track_caller]
    pub unsafe fn write(rwlock: *mut pthread_rwlock_t) -> Self {
        bind_and_acquire(rwlock, pthread_rwlock_wrlock)
    }

    /// # Safety
    ///
    /// `rwlock` must be null or an initialized rwlock that outlives the guard.
    #[track_caller]
    pub unsafe fn try_read(rwlock: *mut pthread_rwlock_t) -> Option<Self> {
        try_acquire(rwlock, pthread_rwlock_tryrdlock)
    }

    /// # Safety
    ///
    /// `rwlock` must be null or an initialized rwlock that outlives the guard.
    #[track_caller]
    pub unsafe fn try_write(rwlock: *mut pthread_rwlock_t) -> Option<Self> {
        try_acquire(rwlock, pthread_rwlock_trywrlock)
    }
}

impl ScopeGuard<SpinLock> {
    /// # Safety
    ///
    /// `lock` must be null or an initialized spinlock that outlives the guard.
    #[track_caller]
    pub unsafe fn lock(lock: *mut pthread_spinlock_t) -> Self {
        bind_and_acquire(lock, pthread_spin_lock)
    }

    /// # Safety
    ///
    /// `lock` must be null or an initialized spinlock that outlives the guard.
    #[track_caller]
    pub unsafe fn try_lock(lock: *mut pthread_spinlock_t) -> Option<Self> {
        try_acquire(lock, pthread_spin_trylock)
    }
}
