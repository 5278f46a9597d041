/*!
 * Generic Scope Guard
 *
 * State machine: `Unbound -> Bound -> Released`. `Bound -> Released` happens
 * once, on [`ScopeGuard::release`] or on drop, whichever comes first.
 */

use super::traits::{Guard, Resource};
use super::{GuardError, GuardResult};
use std::fmt;
use std::marker::PhantomData;
use std::ptr;

/// Lifecycle of a [`ScopeGuard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// No handle yet
    Unbound,
    /// Handle set (possibly null), release still owed
    Bound,
    /// Release ran, or the obligation was given up
    Released,
}

/// Release `R` exactly once when the guard leaves scope
///
/// The guard stores a raw pointer and never owns the pthread object. It is
/// neither `Send` nor `Sync`: locks must be released by the thread that took
/// them.
pub struct ScopeGuard<R: Resource> {
    handle: *mut R::Raw,
    state: GuardState,
    _kind: PhantomData<R>,
}

impl<R: Resource> ScopeGuard<R> {
    /// Guard with no handle; dropping it does nothing
    pub const fn unbound() -> Self {
        Self {
            handle: ptr::null_mut(),
            state: GuardState::Unbound,
            _kind: PhantomData,
        }
    }

    /// Take on the obligation to release `handle`
    ///
    /// Binding performs no acquisition. A null `handle` is accepted and
    /// releases to a no-op.
    ///
    /// # Safety
    ///
    /// Before the guard is released or dropped, `handle` must be null or
    /// point at a resource that is acquired (or initialized) by this thread,
    /// and it must stay valid until then.
    pub unsafe fn bind(handle: *mut R::Raw) -> Self {
        tracing::trace!(kind = R::KIND, null = handle.is_null(), "guard bound");
        Self {
            handle,
            state: GuardState::Bound,
            _kind: PhantomData,
        }
    }

    /// Bind an [`unbound`](Self::unbound) guard
    ///
    /// # Safety
    ///
    /// Same as [`bind`](Self::bind).
    pub unsafe fn rebind(&mut self, handle: *mut R::Raw) -> GuardResult<()> {
        match self.state {
            GuardState::Unbound => {
                *self = Self::bind(handle);
                Ok(())
            }
            GuardState::Bound => Err(GuardError::AlreadyBound),
            GuardState::Released => Err(GuardError::AlreadyReleased),
        }
    }

    /// Guarded handle (null when unbound)
    #[inline]
    pub fn handle(&self) -> *mut R::Raw {
        self.handle
    }

    #[inline]
    pub fn state(&self) -> GuardState {
        self.state
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// Give up the release obligation and return the handle
    pub fn into_raw(mut self) -> *mut R::Raw {
        self.state = GuardState::Released;
        self.handle
    }

    fn release_once(&mut self) -> GuardResult<()> {
        match self.state {
            GuardState::Released => Err(GuardError::AlreadyReleased),
            GuardState::Unbound => {
                self.state = GuardState::Released;
                Ok(())
            }
            GuardState::Bound => {
                self.state = GuardState::Released;
                tracing::trace!(kind = R::KIND, null = self.handle.is_null(), "guard released");
                // SAFETY: `bind` obliges the caller to keep `handle` null or
                // acquired until this point; state guarantees a single call.
                unsafe { R::release(self.handle) };
                Ok(())
            }
        }
    }
}

impl<R: Resource> Default for ScopeGuard<R> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<R: Resource> Guard for ScopeGuard<R> {
    fn resource_type(&self) -> &'static str {
        R::KIND
    }

    fn is_active(&self) -> bool {
        self.state == GuardState::Bound
    }

    fn release(&mut self) -> GuardResult<()> {
        self.release_once()
    }
}

impl<R: Resource> Drop for ScopeGuard<R> {
    fn drop(&mut self) {
        if self.state != GuardState::Released {
            let _ = self.release_once();
        }
    }
}

impl<R: Resource> fmt::Debug for ScopeGuard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("kind", &R::KIND)
            .field("handle", &self.handle)
            .field("state", &self.state)
            .finish()
    }
}
