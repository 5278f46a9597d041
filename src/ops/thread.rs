/*!
 * Thread Lifecycle and Scheduling
 */

use crate::sys::StartRoutine;
use libc::{c_int, c_void, clockid_t, pthread_attr_t, pthread_t, sched_param};

#[cfg(all(target_os = "linux", target_env = "gnu"))]
use libc::{c_char, cpu_set_t, size_t, timespec};

strict_ops! {
    catalogue thread_operations;

    CREATE => pthread_create(thread: *mut pthread_t, attr: *const pthread_attr_t, start_routine: StartRoutine, arg: *mut c_void);
    JOIN => pthread_join(thread: pthread_t, retval: *mut *mut c_void);
    /// Returns `EBUSY` while the thread is still running
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    TRYJOIN_NP => pthread_tryjoin_np(thread: pthread_t, retval: *mut *mut c_void) expect Busy;
    /// Returns `ETIMEDOUT` if the thread outlives `abstime` (`CLOCK_REALTIME`)
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    TIMEDJOIN_NP => pthread_timedjoin_np(thread: pthread_t, retval: *mut *mut c_void, abstime: *const timespec) expect TimedOut;
    /// Returns `ETIMEDOUT` if the thread outlives `abstime` on `clock_id`
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    CLOCKJOIN_NP => pthread_clockjoin_np(thread: pthread_t, retval: *mut *mut c_void, clock_id: clockid_t, abstime: *const timespec) expect TimedOut;
    DETACH => pthread_detach(thread: pthread_t);
    CANCEL => pthread_cancel(thread: pthread_t);
    SETSCHEDPARAM => pthread_setschedparam(thread: pthread_t, policy: c_int, param: *const sched_param);
    GETSCHEDPARAM => pthread_getschedparam(thread: pthread_t, policy: *mut c_int, param: *mut sched_param);
    SETSCHEDPRIO => pthread_setschedprio(thread: pthread_t, prio: c_int);
    /// Returns `ERANGE` when `len` cannot hold the name
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    GETNAME_NP => pthread_getname_np(thread: pthread_t, name: *mut c_char, len: size_t) expect OutOfRange;
    /// Returns `ERANGE` when `name` exceeds 15 bytes
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    SETNAME_NP => pthread_setname_np(thread: pthread_t, name: *const c_char) expect OutOfRange;
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    GETAFFINITY_NP => pthread_getaffinity_np(thread: pthread_t, cpusetsize: size_t, cpuset: *mut cpu_set_t);
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    SETAFFINITY_NP => pthread_setaffinity_np(thread: pthread_t, cpusetsize: size_t, cpuset: *const cpu_set_t);
    GETCPUCLOCKID => pthread_getcpuclockid(thread: pthread_t, clock_id: *mut clockid_t);
}
