/*!
 * Attribute Guards
 *
 * Attribute objects are bound first and initialized by the next statement,
 * so `init` takes storage that is still uninitialized.
 */

use super::scoped::ScopeGuard;
use super::traits::Resource;
use crate::ops::{
    pthread_attr_destroy, pthread_attr_init, pthread_barrierattr_destroy,
    pthread_barrierattr_init, pthread_condattr_destroy, pthread_condattr_init,
    pthread_mutexattr_destroy, pthread_mutexattr_init, pthread_rwlockattr_destroy,
    pthread_rwlockattr_init,
};
use libc::{
    pthread_attr_t, pthread_barrierattr_t, pthread_condattr_t, pthread_mutexattr_t,
    pthread_rwlockattr_t,
};

/// Declares an attribute resource kind, its guard alias and `init`
macro_rules! attr_guard {
    ($(#[$meta:meta])* $kind:ident, $alias:ident, $raw:ty, $name:literal, $init:path, $destroy:path) => {
        $(#[$meta])*
        pub struct $kind;

        impl Resource for $kind {
            type Raw = $raw;
            const KIND: &'static str = $name;

            unsafe fn release(raw: *mut $raw) {
                if !raw.is_null() {
                    $destroy(raw);
                }
            }
        }

        pub type $alias = ScopeGuard<$kind>;

        impl ScopeGuard<$kind> {
            /// Bind `attr`, then initialize it; destroyed at scope exit
            ///
            /// # Safety
            ///
            /// `attr` must be null or point at writable storage that outlives
            /// the guard. A null `attr` binds without initializing.
            #[track_caller]
            pub unsafe fn init(attr: *mut $raw) -> Self {
                let guard = Self::bind(attr);
                if !attr.is_null() {
                    $init(attr);
                }
                guard
            }
        }
    };
}

attr_guard!(
    /// `pthread_attr_t`
    ThreadAttr, ThreadAttrGuard, pthread_attr_t, "thread_attr",
    pthread_attr_init, pthread_attr_destroy
);
attr_guard!(
    /// `pthread_mutexattr_t`
    MutexAttr, MutexAttrGuard, pthread_mutexattr_t, "mutex_attr",
    pthread_mutexattr_init, pthread_mutexattr_destroy
);
attr_guard!(
    /// `pthread_rwlockattr_t`
    RwLockAttr, RwLockAttrGuard, pthread_rwlockattr_t, "rwlock_attr",
    pthread_rwlockattr_init, pthread_rwlockattr_destroy
);
attr_guard!(
    /// `pthread_condattr_t`
    CondAttr, CondAttrGuard, pthread_condattr_t, "cond_attr",
    pthread_condattr_init, pthread_condattr_destroy
);
attr_guard!(
    /// `pthread_barrierattr_t`
    BarrierAttr, BarrierAttrGuard, pthread_barrierattr_t, "barrier_attr",
    pthread_barrierattr_init, pthread_barrierattr_destroy
);
