/*!
 * Strict pthreads
 *
 * Fail-fast wrappers over the POSIX threads API. Each wrapper has the C name
 * and signature, returns `0` or the one alternate code its operation allows
 * (`EBUSY` from a trylock, `ETIMEDOUT` from a timed wait, ...) and aborts the
 * process on anything else. Scoped guards release locks and attribute objects
 * on every exit path.
 *
 * ## Layout
 *
 * - [`classify`]: pure result classification (`Success` / `Expected` / `Fatal`)
 * - [`invoke`]: apply the classification; abort on `Fatal`
 * - [`ops`]: the wrapped vocabulary, one module per primitive family
 * - [`guard`]: scope-bound release
 * - [`config`]: default-attributes elaboration of `pthread_mutex_init`
 * - [`sys`]: raw FFI declarations
 */

pub mod classify;
pub mod config;
pub mod errors;
pub mod guard;
pub mod invoke;
pub mod logging;
pub mod ops;
pub mod sys;

// Re-exports
pub use classify::{classify, Alternate, Op, Outcome};
pub use config::{InitConfig, MutexDefault};
pub use errors::UnexpectedCode;
pub use guard::{
    BarrierAttrGuard, CondAttrGuard, Guard, GuardError, GuardResult, GuardState, MutexAttrGuard,
    MutexGuard, RwLockAttrGuard, RwLockGuard, ScopeGuard, SpinGuard, ThreadAttrGuard,
};
pub use invoke::{fatal, invoke};
pub use logging::init_tracing;
pub use ops::*;
