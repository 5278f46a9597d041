/*!
 * Initialization Configuration
 *
 * Controls the default-attributes elaboration of `pthread_mutex_init`: when
 * the caller passes no attributes, initialize the mutex as
 * `PTHREAD_MUTEX_ERRORCHECK` instead of the platform default so relocking
 * and foreign unlocks are reported (and abort) instead of deadlocking.
 *
 * The build switch is `debug_assertions`, the counterpart of C's `NDEBUG`:
 * debug builds elaborate, release builds pass straight through.
 */

/// Mutex type used when `pthread_mutex_init` receives null attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutexDefault {
    /// Synthesize a temporary `PTHREAD_MUTEX_ERRORCHECK` attribute
    ErrorCheck,
    /// Pass null through; the platform picks the type
    Platform,
}

/// Initialization configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitConfig {
    pub mutex_default: MutexDefault,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self::from_build()
    }
}

impl InitConfig {
    /// Configuration selected by the build profile
    pub const fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::errorcheck()
        } else {
            Self::passthrough()
        }
    }

    /// Always elaborate null mutex attributes to error-checking
    pub const fn errorcheck() -> Self {
        Self {
            mutex_default: MutexDefault::ErrorCheck,
        }
    }

    /// Never elaborate; `pthread_mutex_init` is a direct pass-through
    pub const fn passthrough() -> Self {
        Self {
            mutex_default: MutexDefault::Platform,
        }
    }

    #[inline]
    pub const fn elaborates_mutex_init(&self) -> bool {
        matches!(self.mutex_default, MutexDefault::ErrorCheck)
    }
}

/// Configuration used by [`crate::ops::mutex::pthread_mutex_init`]
pub const BUILD: InitConfig = InitConfig::from_build();
