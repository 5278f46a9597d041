/*!
 * Barriers
 */

use libc::{c_uint, pthread_barrier_t, pthread_barrierattr_t};

strict_ops! {
    catalogue barrier_operations;

    BARRIER_INIT => pthread_barrier_init(barrier: *mut pthread_barrier_t, attr: *const pthread_barrierattr_t, count: c_uint);
    BARRIER_DESTROY => pthread_barrier_destroy(barrier: *mut pthread_barrier_t);
    /// Exactly one waiter per cycle gets `PTHREAD_BARRIER_SERIAL_THREAD`, the
    /// rest get `0`
    BARRIER_WAIT => pthread_barrier_wait(barrier: *mut pthread_barrier_t) expect SerialThread;
}
