/*!
 * Thread Attributes
 */

use libc::{c_int, c_void, pthread_attr_t, sched_param, size_t};

#[cfg(all(target_os = "linux", target_env = "gnu"))]
use libc::{cpu_set_t, pthread_t, sigset_t};

strict_ops! {
    catalogue attr_operations;

    ATTR_INIT => pthread_attr_init(attr: *mut pthread_attr_t);
    ATTR_DESTROY => pthread_attr_destroy(attr: *mut pthread_attr_t);
    ATTR_GETDETACHSTATE => pthread_attr_getdetachstate(attr: *const pthread_attr_t, state: *mut c_int);
    ATTR_SETDETACHSTATE => pthread_attr_setdetachstate(attr: *mut pthread_attr_t, state: c_int);
    ATTR_GETGUARDSIZE => pthread_attr_getguardsize(attr: *const pthread_attr_t, size: *mut size_t);
    ATTR_SETGUARDSIZE => pthread_attr_setguardsize(attr: *mut pthread_attr_t, size: size_t);
    ATTR_GETSCHEDPARAM => pthread_attr_getschedparam(attr: *const pthread_attr_t, param: *mut sched_param);
    ATTR_SETSCHEDPARAM => pthread_attr_setschedparam(attr: *mut pthread_attr_t, param: *const sched_param);
    ATTR_GETSCHEDPOLICY => pthread_attr_getschedpolicy(attr: *const pthread_attr_t, policy: *mut c_int);
    ATTR_SETSCHEDPOLICY => pthread_attr_setschedpolicy(attr: *mut pthread_attr_t, policy: c_int);
    ATTR_GETINHERITSCHED => pthread_attr_getinheritsched(attr: *const pthread_attr_t, inherit: *mut c_int);
    ATTR_SETINHERITSCHED => pthread_attr_setinheritsched(attr: *mut pthread_attr_t, inherit: c_int);
    ATTR_GETSCOPE => pthread_attr_getscope(attr: *const pthread_attr_t, scope: *mut c_int);
    ATTR_SETSCOPE => pthread_attr_setscope(attr: *mut pthread_attr_t, scope: c_int);
    /// Deprecated by POSIX in favour of [`pthread_attr_getstack`]
    ATTR_GETSTACKADDR => pthread_attr_getstackaddr(attr: *const pthread_attr_t, stackaddr: *mut *mut c_void);
    /// Deprecated by POSIX in favour of [`pthread_attr_setstack`]
    ATTR_SETSTACKADDR => pthread_attr_setstackaddr(attr: *mut pthread_attr_t, stackaddr: *mut c_void);
    ATTR_GETSTACKSIZE => pthread_attr_getstacksize(attr: *const pthread_attr_t, size: *mut size_t);
    ATTR_SETSTACKSIZE => pthread_attr_setstacksize(attr: *mut pthread_attr_t, size: size_t);
    ATTR_GETSTACK => pthread_attr_getstack(attr: *const pthread_attr_t, stackaddr: *mut *mut c_void, stacksize: *mut size_t);
    ATTR_SETSTACK => pthread_attr_setstack(attr: *mut pthread_attr_t, stackaddr: *mut c_void, stacksize: size_t);
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    ATTR_GETAFFINITY_NP => pthread_attr_getaffinity_np(attr: *const pthread_attr_t, cpusetsize: size_t, cpuset: *mut cpu_set_t);
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    ATTR_SETAFFINITY_NP => pthread_attr_setaffinity_np(attr: *mut pthread_attr_t, cpusetsize: size_t, cpuset: *const cpu_set_t);
    /// Returns `PTHREAD_ATTR_NO_SIGMASK_NP` when no mask was set
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    ATTR_GETSIGMASK_NP => pthread_attr_getsigmask_np(attr: *const pthread_attr_t, sigmask: *mut sigset_t) expect NoSigmask;
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    ATTR_SETSIGMASK_NP => pthread_attr_setsigmask_np(attr: *mut pthread_attr_t, sigmask: *const sigset_t);
    /// Read the process-wide default creation attributes
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    GETATTR_DEFAULT_NP => pthread_getattr_default_np(attr: *mut pthread_attr_t);
    /// Replace the process-wide default creation attributes
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    SETATTR_DEFAULT_NP => pthread_setattr_default_np(attr: *const pthread_attr_t);
    /// Fill `attr` with the attributes of a running thread
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    GETATTR_NP => pthread_getattr_np(thread: pthread_t, attr: *mut pthread_attr_t);
}
