/*!
 * Wrapped pthread Vocabulary
 *
 * One `unsafe fn` per pthread operation, with the C name and signature. Each
 * wrapper routes through [`invoke`](crate::invoke::invoke) with a descriptor
 * constant that fixes the operation's expected alternate.
 *
 * ## Families
 *
 * - [`common`]: once, signals, cancellation, fork handlers, TLS keys
 * - [`attr`] / [`thread`]: thread attributes and lifecycle
 * - [`mutexattr`] / [`mutex`]
 * - [`rwlockattr`] / [`rwlock`]
 * - [`condattr`] / [`cond`]
 * - [`spin`]
 * - [`barrierattr`] / [`barrier`]
 *
 * Every family exports a `*_operations()` catalogue of its descriptors;
 * [`catalogue`] chains them.
 */

/// Generates descriptor constants, wrappers and a catalogue function
///
/// ```text
/// strict_ops! {
///     catalogue mutex_operations + [MUTEX_INIT];
///
///     /// Lock a mutex
///     MUTEX_LOCK => pthread_mutex_lock(mutex: *mut pthread_mutex_t);
///     MUTEX_TRYLOCK => pthread_mutex_trylock(mutex: *mut pthread_mutex_t) expect Busy;
/// }
/// ```
macro_rules! strict_ops {
    (@alt) => {
        $crate::classify::Alternate::None
    };
    (@alt $alt:ident) => {
        $crate::classify::Alternate::$alt
    };
    (
        catalogue $catalogue:ident $(+ [$($extra:ident),* $(,)?])?;
        $(
            $(#[doc = $doc:expr])*
            $(#[cfg($cfg:meta)])?
            $op:ident => $name:ident ( $($arg:ident : $ty:ty),* $(,)? ) $(expect $alt:ident)? ;
        )*
    ) => {
        $(
            $(#[cfg($cfg)])?
            #[doc = concat!("Descriptor for `", stringify!($name), "`")]
            pub const $op: $crate::classify::Op =
                $crate::classify::Op::new(stringify!($name), strict_ops!(@alt $($alt)?));

            $(#[doc = $doc])*
            ///
            /// # Safety
            ///
            #[doc = concat!("Same pointer and lifetime contract as the C `", stringify!($name), "`.")]
            /// Aborts the process on any result other than `0` or the
            /// descriptor's alternate.
            $(#[cfg($cfg)])?
            #[inline]
            #[track_caller]
            pub unsafe fn $name($($arg: $ty),*) -> ::libc::c_int {
                $crate::invoke::invoke($op, || unsafe { $crate::sys::$name($($arg),*) })
            }
        )*

        /// Descriptors of every operation in this family
        pub fn $catalogue() -> Vec<$crate::classify::Op> {
            #[allow(unused_mut)]
            let mut ops = vec![$($($extra),*)?];
            $(
                $(#[cfg($cfg)])?
                ops.push($op);
            )*
            ops
        }
    };
}

pub mod attr;
pub mod barrier;
pub mod barrierattr;
pub mod common;
pub mod cond;
pub mod condattr;
pub mod mutex;
pub mod mutexattr;
pub mod rwlock;
pub mod rwlockattr;
pub mod spin;
pub mod thread;

pub use attr::*;
pub use barrier::*;
pub use barrierattr::*;
pub use common::*;
pub use cond::*;
pub use condattr::*;
pub use mutex::*;
pub use mutexattr::*;
pub use rwlock::*;
pub use rwlockattr::*;
pub use spin::*;
pub use thread::*;

use crate::classify::Op;

/// Every wrapped operation's descriptor
pub fn catalogue() -> impl Iterator<Item = Op> {
    [
        common::common_operations(),
        attr::attr_operations(),
        thread::thread_operations(),
        mutexattr::mutexattr_operations(),
        mutex::mutex_operations(),
        rwlockattr::rwlockattr_operations(),
        rwlock::rwlock_operations(),
        condattr::condattr_operations(),
        cond::cond_operations(),
        spin::spin_operations(),
        barrierattr::barrierattr_operations(),
        barrier::barrier_operations(),
    ]
    .into_iter()
    .flatten()
}

/// Look up a descriptor by C function name
pub fn find(name: &str) -> Option<Op> {
    catalogue().find(|op| op.name() == name)
}
