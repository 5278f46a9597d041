/*!
 * Scoped Acquisition Guards
 *
 * "Acquire now, release at scope exit" for pthread locks and attribute
 * objects, on every exit path: normal return, early `?` return, or a panic
 * unwinding through the scope.
 *
 * ## Design Principles
 *
 * 1. **One guard type**: [`ScopeGuard<R>`] is generic over a [`Resource`]
 *    kind that names the handle type and a null-safe release function
 * 2. **Bind and acquire are separate**: a guard can be bound over a handle
 *    that a following statement initializes or locks
 * 3. **At most once**: release runs once per guard; a null handle releases
 *    to a no-op
 * 4. **No ownership**: the guard holds a pointer to storage it does not own
 *
 * ## Guard Types
 *
 * - **MutexGuard**: `pthread_mutex_lock` / `pthread_mutex_unlock`
 * - **RwLockGuard**: read or write lock, one guard type, one unlock
 * - **SpinGuard**: `pthread_spin_lock` / `pthread_spin_unlock`
 * - **ThreadAttrGuard**, **MutexAttrGuard**, **RwLockAttrGuard**,
 *   **CondAttrGuard**, **BarrierAttrGuard**: `*_init` / `*_destroy`
 *
 * ## Example
 *
 * ```no_run
 * use pthread_strict::guard::MutexGuard;
 * # let mutex: *mut libc::pthread_mutex_t = std::ptr::null_mut();
 * unsafe {
 *     let _held = MutexGuard::lock(mutex);
 *     // critical section
 * } // unlocked here, however the block is left
 * ```
 */

mod attr;
mod lock;
mod scoped;
mod traits;

pub use attr::{
    BarrierAttr, BarrierAttrGuard, CondAttr, CondAttrGuard, MutexAttr, MutexAttrGuard,
    RwLockAttr, RwLockAttrGuard, ThreadAttr, ThreadAttrGuard,
};
pub use lock::{MutexGuard, MutexLock, RwLockGuard, RwLockLock, SpinGuard, SpinLock};
pub use scoped::{GuardState, ScopeGuard};
pub use traits::{Guard, Resource};

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Guard misuse detectable without touching the primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    #[error("Guard already bound to a handle")]
    AlreadyBound,

    #[error("Resource already released")]
    AlreadyReleased,
}
