//! Deferred execution for bottom-half processing.
//!
//! A top half runs in interrupt context and cannot afford to walk the
//! pin registry; it schedules a [`Work`] item here instead. The
//! platform decides when and on what context queued work runs, with
//! the one guarantee the driver relies on: work scheduled after an
//! edge runs at least once, outside interrupt context.

use alloc::sync::Arc;

/// A unit of deferred work.
///
/// Ref-counted so a top half can re-schedule the same item from
/// interrupt context without allocating.
pub type Work = Arc<dyn Fn() + Send + Sync>;

/// A platform deferred-work facility.
///
/// Implementations may coalesce, reorder, or delay items; the driver's
/// handoff flag makes duplicate runs harmless.
pub trait WorkQueue: Send + Sync {
    /// Queue `work` to run soon, outside interrupt context.
    ///
    /// Callable from interrupt context: must not block or allocate.
    fn schedule(&self, work: Work);
}
