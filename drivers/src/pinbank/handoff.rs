//! Interrupt handoff between top half and bottom half.
//!
//! The only state shared between interrupt context and deferred work
//! is one pending flag behind a busy-wait lock. The top half sets it;
//! the bottom half consumes it. Critical sections are a single
//! read-test-set or read-test-clear, never iteration or I/O.

use spin::Mutex;

use crate::hal::gpio::{PinHandle, PinLevel};
use crate::pinbank::registry::PinRegistry;

/// The single-bit channel between interrupt context and deferred work.
pub struct HandoffState {
    pending: Mutex<bool>,
}

impl HandoffState {
    pub(crate) const fn new() -> Self {
        Self {
            pending: Mutex::new(false),
        }
    }

    /// Mark an edge pending. Top-half side; safe in interrupt context.
    ///
    /// Idempotent: back-to-back edges before a drain coalesce into one
    /// pending action.
    pub fn raise(&self) {
        *self.pending.lock() = true;
    }

    /// Consume the pending flag. Bottom-half side.
    ///
    /// Returns whether an edge was pending; at most one caller
    /// observes `true` per raised edge burst.
    pub fn take(&self) -> bool {
        let mut pending = self.pending.lock();
        core::mem::replace(&mut *pending, false)
    }

    /// Peek without consuming. Test and teardown diagnostics only.
    pub fn is_pending(&self) -> bool {
        *self.pending.lock()
    }
}

/// Bottom-half body: consume the flag and, if an edge was pending,
/// force every controlled output low.
///
/// Runs outside interrupt context. Individual drive failures are not
/// expected (handles stay valid for the registry's lifetime) and are
/// not reported.
pub fn run_bottom_half<H: PinHandle>(handoff: &HandoffState, registry: &PinRegistry<H>) {
    if !handoff.take() {
        return;
    }
    for record in registry.controlled() {
        let _ = record.handle().lock().set_level(PinLevel::Low);
    }
}
