/*!
 * Spinlocks
 */

use libc::{c_int, pthread_spinlock_t};

strict_ops! {
    catalogue spin_operations;

    SPIN_INIT => pthread_spin_init(lock: *mut pthread_spinlock_t, pshared: c_int);
    SPIN_DESTROY => pthread_spin_destroy(lock: *mut pthread_spinlock_t);
    SPIN_LOCK => pthread_spin_lock(lock: *mut pthread_spinlock_t);
    /// Returns `EBUSY` when the spinlock is held
    SPIN_TRYLOCK => pthread_spin_trylock(lock: *mut pthread_spinlock_t) expect Busy;
    SPIN_UNLOCK => pthread_spin_unlock(lock: *mut pthread_spinlock_t);
}
