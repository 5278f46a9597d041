/*!
 * Barrier Attributes
 */

use libc::{c_int, pthread_barrierattr_t};

strict_ops! {
    catalogue barrierattr_operations;

    BARRIERATTR_INIT => pthread_barrierattr_init(attr: *mut pthread_barrierattr_t);
    BARRIERATTR_DESTROY => pthread_barrierattr_destroy(attr: *mut pthread_barrierattr_t);
    BARRIERATTR_GETPSHARED => pthread_barrierattr_getpshared(attr: *const pthread_barrierattr_t, pshared: *mut c_int);
    BARRIERATTR_SETPSHARED => pthread_barrierattr_setpshared(attr: *mut pthread_barrierattr_t, pshared: c_int);
}
