//! Pin-bank driver: enumeration, interrupt handoff, lifecycle.
//!
//! [`PinBank::attach`] walks the configuration tree, resolves every
//! node to a pin handle, classifies the reserved interrupt pin apart
//! from the controlled outputs, registers attribute endpoints for the
//! outputs, and finally binds the top-half handler to the interrupt
//! line. From then on every falling edge forces all controlled
//! outputs low, via the deferred bottom half.
//!
//! All state lives in the [`PinBank`] value; handlers carry it in
//! their closures instead of reaching for globals.

pub mod attrs;
pub mod error;
pub mod handoff;
pub mod registry;

pub use attrs::{AttributeHost, PinAttributes};
pub use error::BankError;
pub use handoff::HandoffState;
pub use registry::{INTERRUPT_PIN_LABEL, PinRecord, PinRegistry, PinRole};

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use common::config::ConfigTree;

use crate::hal::gpio::{PinDirection, PinHandle};
use crate::hal::irq::{IrqHandler, IrqNumber, IrqStatus, TriggerMode};
use crate::hal::provider::PinProvider;
use crate::hal::work::{Work, WorkQueue};
use handoff::run_bottom_half;
use registry::{label_from, placeholder_label};

/// The attached driver: pin registry, interrupt handoff state, and the
/// platform provider that resolved it all.
pub struct PinBank<P: PinProvider> {
    provider: P,
    registry: Option<Arc<PinRegistry<P::Handle>>>,
    handoff: Arc<HandoffState>,
    irq: Option<IrqNumber>,
}

impl<P: PinProvider> PinBank<P>
where
    P::Handle: Send + 'static,
{
    /// Enumerate the configuration tree and bring the bank up.
    ///
    /// For each node, in tree order: resolve a handle, determine the
    /// label (declared, truncated to fit; otherwise a synthesized
    /// placeholder), classify against [`INTERRUPT_PIN_LABEL`].
    /// Controlled pins are configured as low outputs and registered
    /// with `host`; the interrupt pin is configured as an input and
    /// its line remembered. The top half is bound only after the walk
    /// completes, so the bottom half never sees a half-built registry
    /// and a failed attach never leaves a bound line behind.
    ///
    /// Errors abort enumeration immediately and surface the platform
    /// error unchanged. Outputs configured before the failure stay
    /// configured; that is harmless.
    pub fn attach(
        tree: &ConfigTree,
        mut provider: P,
        queue: Arc<dyn WorkQueue>,
        host: &mut dyn AttributeHost<P::Handle>,
    ) -> Result<Self, BankError<P::Error>> {
        if tree.is_empty() {
            return Err(BankError::EmptyConfig);
        }

        let mut records = Vec::with_capacity(tree.len());
        let mut irq_line: Option<IrqNumber> = None;

        for (index, node) in tree.iter().enumerate() {
            let mut handle = provider.resolve(node).map_err(BankError::Resolve)?;

            let label = match node.label() {
                Some(text) => label_from(text),
                None => {
                    let placeholder = placeholder_label(index);
                    log::warn!(
                        "pin node '{}' carries no label, using '{}'",
                        node.name(),
                        placeholder
                    );
                    placeholder
                }
            };

            if label.as_str() == INTERRUPT_PIN_LABEL {
                if irq_line.is_some() {
                    return Err(BankError::DuplicateInterruptPin);
                }
                handle
                    .set_direction(PinDirection::Input)
                    .map_err(BankError::DirectionSet)?;
                let irq = provider.irq_number(&handle).map_err(BankError::Resolve)?;
                irq_line = Some(irq);
                records.push(PinRecord::new(label, PinRole::Interrupt, handle));
            } else {
                handle
                    .set_direction(PinDirection::Output)
                    .map_err(BankError::DirectionSet)?;
                handle.set_low().map_err(BankError::DirectionSet)?;
                let record = PinRecord::new(label, PinRole::Controlled, handle);
                host.register_pin(PinAttributes::for_record(&record));
                records.push(record);
            }
        }

        let registry = Arc::new(PinRegistry::new(records));
        let handoff = Arc::new(HandoffState::new());

        if let Some(irq) = irq_line {
            let handler = top_half(&handoff, &registry, queue);
            provider
                .bind_irq(irq, TriggerMode::FallingEdge, handler)
                .map_err(BankError::IrqBind)?;
            log::debug!("interrupt pin bound to irq {irq}, falling edge");
        }

        log::debug!(
            "pin bank attached: {} pins, {} controlled",
            registry.len(),
            registry.controlled().count()
        );

        Ok(Self {
            provider,
            registry: Some(registry),
            handoff,
            irq: irq_line,
        })
    }
}

impl<P: PinProvider> PinBank<P> {
    /// Tear the bank down: unbind the interrupt line first, then drop
    /// the registry. Idempotent; also run on `Drop`.
    pub fn detach(&mut self) {
        if let Some(irq) = self.irq.take() {
            self.provider.unbind_irq(irq);
            log::debug!("irq {irq} unbound");
        }
        // A bottom half queued before the unbind may still run once;
        // with the flag cleared it does nothing.
        self.handoff.take();
        self.registry = None;
    }

    /// The pin registry, while attached.
    pub fn registry(&self) -> Option<&PinRegistry<P::Handle>> {
        self.registry.as_deref()
    }

    /// The bound interrupt line, if the configuration declared one.
    pub fn irq(&self) -> Option<IrqNumber> {
        self.irq
    }
}

impl<P: PinProvider> Drop for PinBank<P> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Build the top-half handler.
///
/// Interrupt context: raise the pending flag, schedule the bottom
/// half, report handled. No registry walk, no allocation, no
/// blocking; that is the entire point of the split.
fn top_half<H>(
    handoff: &Arc<HandoffState>,
    registry: &Arc<PinRegistry<H>>,
    queue: Arc<dyn WorkQueue>,
) -> IrqHandler
where
    H: PinHandle + Send + 'static,
{
    let work: Work = {
        let handoff = Arc::clone(handoff);
        let registry = Arc::clone(registry);
        Arc::new(move || run_bottom_half(&handoff, &registry))
    };
    let handoff = Arc::clone(handoff);
    Box::new(move || {
        handoff.raise();
        queue.schedule(Arc::clone(&work));
        IrqStatus::Handled
    })
}
