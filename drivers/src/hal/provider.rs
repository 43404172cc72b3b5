//! Platform pin services consumed by the driver.
//!
//! The platform owns pin muxing and interrupt controller plumbing; the
//! driver only ever sees the operations below.

use common::config::PinNode;

use crate::hal::gpio::PinHandle;
use crate::hal::irq::{IrqHandler, IrqNumber, TriggerMode};

/// Platform collaborator: resolves configuration nodes to pin handles
/// and wires handlers to interrupt lines.
///
/// One provider instance serves one attached driver; it is owned by
/// the driver's lifecycle object, not addressed through globals.
pub trait PinProvider {
    /// Handle type produced by [`resolve`](Self::resolve).
    type Handle: PinHandle<Error = Self::Error>;

    /// Error type for resolution and interrupt plumbing.
    type Error: core::fmt::Debug;

    /// Resolve a configuration node to a physical pin handle.
    ///
    /// Fails if no physical pin is assigned to the node; the error is
    /// surfaced to the attach caller unchanged.
    fn resolve(&mut self, node: &PinNode) -> Result<Self::Handle, Self::Error>;

    /// Map an input-configured handle to its interrupt line number.
    fn irq_number(&mut self, handle: &Self::Handle) -> Result<IrqNumber, Self::Error>;

    /// Bind `handler` to `irq`, configured for `trigger`.
    ///
    /// After a successful bind the platform may invoke the handler at
    /// any time, including before this call's caller regains control.
    fn bind_irq(
        &mut self,
        irq: IrqNumber,
        trigger: TriggerMode,
        handler: IrqHandler,
    ) -> Result<(), Self::Error>;

    /// Unbind whatever handler is bound to `irq`.
    ///
    /// On return the platform guarantees no further handler
    /// invocations for this line.
    fn unbind_irq(&mut self, irq: IrqNumber);
}
