//! Interrupt line types and the top-half handler contract.

use alloc::boxed::Box;

/// Interrupt number type.
pub type IrqNumber = u32;

/// Interrupt trigger mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TriggerMode {
    /// Interrupt triggers on a rising edge.
    RisingEdge,
    /// Interrupt triggers on a falling edge.
    FallingEdge,
    /// Interrupt is active when the signal is high.
    LevelHigh,
    /// Interrupt is active when the signal is low.
    LevelLow,
}

/// Status returned by a top-half handler.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IrqStatus {
    /// The handler recognized and serviced the interrupt.
    Handled,
    /// The interrupt was not for this handler.
    Unclaimed,
}

/// A top-half handler bound to an interrupt line.
///
/// Runs synchronously in interrupt context on the triggering edge.
/// It must not block, sleep, allocate, or do unbounded-latency work;
/// anything beyond flag-and-schedule belongs in deferred work (see
/// [`work`](crate::hal::work)).
///
/// Boxed closure rather than a fn pointer so the handler can carry the
/// driver state it operates on.
pub type IrqHandler = Box<dyn Fn() -> IrqStatus + Send + Sync>;
