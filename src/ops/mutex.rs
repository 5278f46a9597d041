/*!
 * Mutexes
 *
 * `pthread_mutex_init` is the one wrapper that does more than inspect the
 * result: with null attributes and the elaboration enabled (see
 * [`crate::config`]) it initializes the mutex as `PTHREAD_MUTEX_ERRORCHECK`
 * through a temporary attribute object.
 */

use crate::classify::{Alternate, Op};
use crate::config::{self, InitConfig};
use crate::guard::MutexAttrGuard;
use crate::invoke::invoke;
use crate::ops::mutexattr::pthread_mutexattr_settype;
use crate::sys;
use libc::{c_int, pthread_mutex_t, pthread_mutexattr_t, timespec};
use std::mem::MaybeUninit;

#[cfg(all(target_os = "linux", target_env = "gnu"))]
use libc::clockid_t;

/// Descriptor for `pthread_mutex_init`
pub const MUTEX_INIT: Op = Op::new("pthread_mutex_init", Alternate::None);

strict_ops! {
    catalogue mutex_operations + [MUTEX_INIT];

    MUTEX_DESTROY => pthread_mutex_destroy(mutex: *mut pthread_mutex_t);
    MUTEX_LOCK => pthread_mutex_lock(mutex: *mut pthread_mutex_t);
    /// Returns `EBUSY` when the mutex is held
    MUTEX_TRYLOCK => pthread_mutex_trylock(mutex: *mut pthread_mutex_t) expect Busy;
    /// Returns `ETIMEDOUT` when `abstime` (`CLOCK_REALTIME`) passes first
    MUTEX_TIMEDLOCK => pthread_mutex_timedlock(mutex: *mut pthread_mutex_t, abstime: *const timespec) expect TimedOut;
    /// Returns `ETIMEDOUT` when `abstime` on `clock_id` passes first
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    MUTEX_CLOCKLOCK => pthread_mutex_clocklock(mutex: *mut pthread_mutex_t, clock_id: clockid_t, abstime: *const timespec) expect TimedOut;
    MUTEX_UNLOCK => pthread_mutex_unlock(mutex: *mut pthread_mutex_t);
    MUTEX_GETPRIOCEILING => pthread_mutex_getprioceiling(mutex: *const pthread_mutex_t, prioceiling: *mut c_int);
    MUTEX_SETPRIOCEILING => pthread_mutex_setprioceiling(mutex: *mut pthread_mutex_t, prioceiling: c_int, old_ceiling: *mut c_int);
    /// Mark a robust mutex whose owner died as consistent again
    MUTEX_CONSISTENT => pthread_mutex_consistent(mutex: *mut pthread_mutex_t);
    /// Pre-POSIX glibc name of `pthread_mutex_consistent`
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    MUTEX_CONSISTENT_NP => pthread_mutex_consistent_np(mutex: *mut pthread_mutex_t);
}

/// Initialize a mutex
///
/// Null `attr` is elaborated to an error-checking mutex when the build
/// configuration asks for it ([`config::BUILD`]).
///
/// # Safety
///
/// Same contract as the C `pthread_mutex_init`. Aborts the process on any
/// non-zero result.
#[inline]
#[track_caller]
pub unsafe fn pthread_mutex_init(
    mutex: *mut pthread_mutex_t,
    attr: *const pthread_mutexattr_t,
) -> c_int {
    mutex_init_with(&config::BUILD, mutex, attr)
}

/// [`pthread_mutex_init`] with an explicit configuration
///
/// # Safety
///
/// Same contract as the C `pthread_mutex_init`.
#[track_caller]
pub unsafe fn mutex_init_with(
    config: &InitConfig,
    mutex: *mut pthread_mutex_t,
    attr: *const pthread_mutexattr_t,
) -> c_int {
    if !attr.is_null() || !config.elaborates_mutex_init() {
        return invoke(MUTEX_INIT, || unsafe { sys::pthread_mutex_init(mutex, attr) });
    }

    let mut errorcheck = MaybeUninit::<pthread_mutexattr_t>::uninit();
    let attr = MutexAttrGuard::init(errorcheck.as_mut_ptr());
    pthread_mutexattr_settype(attr.handle(), libc::PTHREAD_MUTEX_ERRORCHECK);
    invoke(MUTEX_INIT, || unsafe { sys::pthread_mutex_init(mutex, attr.handle()) })
}
