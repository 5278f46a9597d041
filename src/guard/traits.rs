/*!
 * Guard Traits
 *
 * Core abstractions for scoped release
 */

use super::GuardResult;

/// A kind of pthread resource a [`ScopeGuard`](super::ScopeGuard) can release
///
/// Implementors pair a raw handle type with the operation that gives it back
/// (unlock or destroy).
pub trait Resource {
    /// pthread object the handle points at
    type Raw;

    /// Resource kind name for logging/debugging
    const KIND: &'static str;

    /// Give the resource back
    ///
    /// # Safety
    ///
    /// `raw` must be null or point at a resource this thread acquired or
    /// initialized. A null `raw` must be a no-op.
    unsafe fn release(raw: *mut Self::Raw);
}

/// Core guard trait
///
/// All guards must implement this to provide:
/// - Resource type identification
/// - Manual release capability
pub trait Guard {
    /// Resource type name for logging/debugging
    fn resource_type(&self) -> &'static str;

    /// Check if the guard still owes a release
    fn is_active(&self) -> bool;

    /// Release the resource before scope exit
    ///
    /// Returns `Err` if already released
    fn release(&mut self) -> GuardResult<()>;
}
