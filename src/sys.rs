/*!
 * Raw pthread FFI
 *
 * Every function in the wrapped vocabulary, unchecked. Bindings the `libc`
 * crate ships are re-exported from it; the rest (`pthread_*concurrency`,
 * cancellation controls, priority ceilings, scope, `clock*` variants and a
 * few glibc extensions) are declared here with `libc` types. The `ops`
 * modules route each call through `invoke`.
 *
 * Functions that only exist on glibc are gated on
 * `target_os = "linux"` + `target_env = "gnu"`.
 */

use libc::{
    c_int, c_void, pthread_attr_t, pthread_mutex_t, pthread_mutexattr_t, pthread_rwlock_t, timespec,
};

#[cfg(all(target_os = "linux", target_env = "gnu"))]
use libc::{clockid_t, pthread_cond_t, sigset_t};

pub use libc::{
    pthread_once_t, PTHREAD_BARRIER_SERIAL_THREAD, PTHREAD_EXPLICIT_SCHED, PTHREAD_INHERIT_SCHED,
    PTHREAD_MUTEX_ROBUST, PTHREAD_MUTEX_STALLED, PTHREAD_ONCE_INIT, PTHREAD_PRIO_INHERIT,
    PTHREAD_PRIO_NONE, PTHREAD_PRIO_PROTECT,
};

// common
pub use libc::{
    pthread_atfork, pthread_key_create, pthread_key_delete, pthread_kill, pthread_once,
    pthread_setspecific, pthread_sigmask,
};

// pthread_attr_t
pub use libc::{
    pthread_attr_destroy, pthread_attr_getguardsize, pthread_attr_getinheritsched,
    pthread_attr_getschedparam, pthread_attr_getschedpolicy, pthread_attr_getstack,
    pthread_attr_getstacksize, pthread_attr_init, pthread_attr_setdetachstate,
    pthread_attr_setguardsize, pthread_attr_setinheritsched, pthread_attr_setschedparam,
    pthread_attr_setschedpolicy, pthread_attr_setstack, pthread_attr_setstacksize,
};

// pthread_t
pub use libc::{
    pthread_cancel, pthread_create, pthread_detach, pthread_getcpuclockid, pthread_getschedparam,
    pthread_join, pthread_setschedparam, pthread_setschedprio,
};

// pthread_mutexattr_t / pthread_mutex_t
pub use libc::{
    pthread_mutex_consistent, pthread_mutex_destroy, pthread_mutex_init, pthread_mutex_lock,
    pthread_mutex_timedlock, pthread_mutex_trylock, pthread_mutex_unlock,
    pthread_mutexattr_destroy, pthread_mutexattr_getprotocol, pthread_mutexattr_getpshared,
    pthread_mutexattr_getrobust, pthread_mutexattr_init, pthread_mutexattr_setprotocol,
    pthread_mutexattr_setpshared, pthread_mutexattr_setrobust, pthread_mutexattr_settype,
};

// pthread_rwlockattr_t / pthread_rwlock_t
pub use libc::{
    pthread_rwlock_destroy, pthread_rwlock_init, pthread_rwlock_rdlock, pthread_rwlock_tryrdlock,
    pthread_rwlock_trywrlock, pthread_rwlock_unlock, pthread_rwlock_wrlock,
    pthread_rwlockattr_destroy, pthread_rwlockattr_getpshared, pthread_rwlockattr_init,
    pthread_rwlockattr_setpshared,
};

// pthread_condattr_t / pthread_cond_t
pub use libc::{
    pthread_cond_broadcast, pthread_cond_destroy, pthread_cond_init, pthread_cond_signal,
    pthread_cond_timedwait, pthread_cond_wait, pthread_condattr_destroy,
    pthread_condattr_getclock, pthread_condattr_getpshared, pthread_condattr_init,
    pthread_condattr_setclock, pthread_condattr_setpshared,
};

// spinlocks and barriers
pub use libc::{
    pthread_barrier_destroy, pthread_barrier_init, pthread_barrier_wait,
    pthread_barrierattr_destroy, pthread_barrierattr_getpshared, pthread_barrierattr_init,
    pthread_barrierattr_setpshared, pthread_spin_destroy, pthread_spin_init, pthread_spin_lock,
    pthread_spin_trylock, pthread_spin_unlock,
};

// Linux extensions
pub use libc::{
    pthread_getaffinity_np, pthread_getattr_np, pthread_getname_np, pthread_setaffinity_np,
    pthread_setname_np,
};

#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub use libc::{
    pthread_attr_getaffinity_np, pthread_attr_setaffinity_np, pthread_rwlockattr_getkind_np,
    pthread_rwlockattr_setkind_np, pthread_sigqueue, pthread_timedjoin_np, pthread_tryjoin_np,
};

/// Returned by `pthread_attr_getsigmask_np` when the attribute carries no mask
pub const PTHREAD_ATTR_NO_SIGMASK_NP: c_int = -1;

pub const PTHREAD_CANCEL_ENABLE: c_int = 0;
pub const PTHREAD_CANCEL_DISABLE: c_int = 1;
pub const PTHREAD_CANCEL_DEFERRED: c_int = 0;
pub const PTHREAD_CANCEL_ASYNCHRONOUS: c_int = 1;

pub const PTHREAD_SCOPE_SYSTEM: c_int = 0;
pub const PTHREAD_SCOPE_PROCESS: c_int = 1;

pub const PTHREAD_RWLOCK_PREFER_READER_NP: c_int = 0;
pub const PTHREAD_RWLOCK_PREFER_WRITER_NP: c_int = 1;
pub const PTHREAD_RWLOCK_PREFER_WRITER_NONRECURSIVE_NP: c_int = 2;

// Callback parameter types, as `libc` spells them
pub type StartRoutine = extern "C" fn(*mut c_void) -> *mut c_void;
pub type ForkHandler = Option<unsafe extern "C" fn()>;
pub type KeyDestructor = Option<unsafe extern "C" fn(*mut c_void)>;
pub type OnceRoutine = extern "C" fn();

// Not bound by `libc`
extern "C" {
    pub fn pthread_getconcurrency() -> c_int;
    pub fn pthread_setconcurrency(level: c_int) -> c_int;
    pub fn pthread_setcancelstate(state: c_int, oldstate: *mut c_int) -> c_int;
    pub fn pthread_setcanceltype(kind: c_int, oldtype: *mut c_int) -> c_int;

    pub fn pthread_attr_getdetachstate(attr: *const pthread_attr_t, state: *mut c_int) -> c_int;
    pub fn pthread_attr_getscope(attr: *const pthread_attr_t, scope: *mut c_int) -> c_int;
    pub fn pthread_attr_setscope(attr: *mut pthread_attr_t, scope: c_int) -> c_int;
    pub fn pthread_attr_getstackaddr(
        attr: *const pthread_attr_t,
        stackaddr: *mut *mut c_void,
    ) -> c_int;
    pub fn pthread_attr_setstackaddr(attr: *mut pthread_attr_t, stackaddr: *mut c_void) -> c_int;

    pub fn pthread_mutexattr_gettype(attr: *const pthread_mutexattr_t, kind: *mut c_int) -> c_int;
    pub fn pthread_mutexattr_getprioceiling(
        attr: *const pthread_mutexattr_t,
        prioceiling: *mut c_int,
    ) -> c_int;
    pub fn pthread_mutexattr_setprioceiling(
        attr: *mut pthread_mutexattr_t,
        prioceiling: c_int,
    ) -> c_int;
    pub fn pthread_mutex_getprioceiling(
        mutex: *const pthread_mutex_t,
        prioceiling: *mut c_int,
    ) -> c_int;
    pub fn pthread_mutex_setprioceiling(
        mutex: *mut pthread_mutex_t,
        prioceiling: c_int,
        old_ceiling: *mut c_int,
    ) -> c_int;

    pub fn pthread_rwlock_timedrdlock(
        rwlock: *mut pthread_rwlock_t,
        abstime: *const timespec,
    ) -> c_int;
    pub fn pthread_rwlock_timedwrlock(
        rwlock: *mut pthread_rwlock_t,
        abstime: *const timespec,
    ) -> c_int;
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
extern "C" {
    pub fn pthread_attr_getsigmask_np(attr: *const pthread_attr_t, sigmask: *mut sigset_t)
        -> c_int;
    pub fn pthread_attr_setsigmask_np(attr: *mut pthread_attr_t, sigmask: *const sigset_t)
        -> c_int;
    pub fn pthread_getattr_default_np(attr: *mut pthread_attr_t) -> c_int;
    pub fn pthread_setattr_default_np(attr: *const pthread_attr_t) -> c_int;

    pub fn pthread_clockjoin_np(
        thread: libc::pthread_t,
        retval: *mut *mut c_void,
        clock_id: clockid_t,
        abstime: *const timespec,
    ) -> c_int;

    // Since glibc 2.34 the `_np` robust-mutex aliases exist only as compat
    // symbols (no default version), so bind them at their GLIBC_2.4 version.
    #[link_name = "pthread_mutexattr_getrobust_np@GLIBC_2.4"]
    pub fn pthread_mutexattr_getrobust_np(
        attr: *const pthread_mutexattr_t,
        robust: *mut c_int,
    ) -> c_int;
    #[link_name = "pthread_mutexattr_setrobust_np@GLIBC_2.4"]
    pub fn pthread_mutexattr_setrobust_np(attr: *mut pthread_mutexattr_t, robust: c_int) -> c_int;
    #[link_name = "pthread_mutex_consistent_np@GLIBC_2.4"]
    pub fn pthread_mutex_consistent_np(mutex: *mut pthread_mutex_t) -> c_int;
    pub fn pthread_mutex_clocklock(
        mutex: *mut pthread_mutex_t,
        clock_id: clockid_t,
        abstime: *const timespec,
    ) -> c_int;

    pub fn pthread_rwlock_clockrdlock(
        rwlock: *mut pthread_rwlock_t,
        clock_id: clockid_t,
        abstime: *const timespec,
    ) -> c_int;
    pub fn pthread_rwlock_clockwrlock(
        rwlock: *mut pthread_rwlock_t,
        clock_id: clockid_t,
        abstime: *const timespec,
    ) -> c_int;

    pub fn pthread_cond_clockwait(
        cond: *mut pthread_cond_t,
        mutex: *mut pthread_mutex_t,
        clock_id: clockid_t,
        abstime: *const timespec,
    ) -> c_int;
}
