//! Shared fakes for unit tests: observable pins, a scriptable platform
//! provider with a fireable interrupt line, a drain-on-demand work
//! queue, and a recording attribute host.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::Mutex;

use common::config::{ConfigTree, PinNode};

use crate::hal::gpio::{PinDirection, PinHandle, PinLevel};
use crate::hal::irq::{IrqHandler, IrqNumber, IrqStatus, TriggerMode};
use crate::hal::provider::PinProvider;
use crate::hal::work::{Work, WorkQueue};
use crate::pinbank::attrs::{AttributeHost, PinAttributes};

/// Errno-style platform error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError(pub i32);

#[derive(Debug, Clone, Copy)]
struct PinState {
    direction: PinDirection,
    level: PinLevel,
    writes: usize,
}

impl Default for PinState {
    fn default() -> Self {
        Self {
            direction: PinDirection::Input,
            level: PinLevel::Low,
            writes: 0,
        }
    }
}

/// A pin whose state stays observable after the handle moves into the
/// registry: clones share the same state.
#[derive(Clone, Default)]
pub struct FakePin {
    state: Arc<Mutex<PinState>>,
}

impl FakePin {
    /// Set the level from the outside without counting it as a write.
    pub fn force_level(&self, level: PinLevel) {
        self.state.lock().level = level;
    }

    pub fn observed_level(&self) -> PinLevel {
        self.state.lock().level
    }

    pub fn observed_direction(&self) -> PinDirection {
        self.state.lock().direction
    }

    /// Number of `set_level` calls made through the handle.
    pub fn write_count(&self) -> usize {
        self.state.lock().writes
    }
}

impl PinHandle for FakePin {
    type Error = FakeError;

    fn direction(&self) -> Result<PinDirection, Self::Error> {
        Ok(self.state.lock().direction)
    }

    fn set_direction(&mut self, direction: PinDirection) -> Result<(), Self::Error> {
        self.state.lock().direction = direction;
        Ok(())
    }

    fn level(&self) -> Result<PinLevel, Self::Error> {
        Ok(self.state.lock().level)
    }

    fn set_level(&mut self, level: PinLevel) -> Result<(), Self::Error> {
        let mut state = self.state.lock();
        state.level = level;
        state.writes += 1;
        Ok(())
    }
}

/// The fake interrupt line: holds at most one bound handler and lets
/// tests simulate edges.
#[derive(Clone, Default)]
pub struct FakeLine {
    handler: Arc<Mutex<Option<IrqHandler>>>,
    trigger: Arc<Mutex<Option<TriggerMode>>>,
}

impl FakeLine {
    /// Simulate one triggering edge. Returns the handler's status, or
    /// `None` if nothing is bound.
    pub fn fire(&self) -> Option<IrqStatus> {
        let guard = self.handler.lock();
        guard.as_ref().map(|handler| handler())
    }

    pub fn is_bound(&self) -> bool {
        self.handler.lock().is_some()
    }

    pub fn bound_trigger(&self) -> Option<TriggerMode> {
        *self.trigger.lock()
    }
}

/// Scriptable platform provider. Clones share pin state and the
/// interrupt line, so tests keep an observer clone across `attach`.
#[derive(Clone, Default)]
pub struct FakeProvider {
    pins: Arc<Mutex<BTreeMap<String, FakePin>>>,
    missing: BTreeSet<String>,
    line: FakeLine,
    fail_irq_lookup: bool,
    fail_bind: bool,
}

/// Interrupt line number the fake reports for the interrupt pin.
pub const FAKE_IRQ: IrqNumber = 60;

impl FakeProvider {
    /// Make resolution fail for the named node.
    pub fn fail_resolve(&mut self, node_name: &str) {
        self.missing.insert(String::from(node_name));
    }

    pub fn fail_irq_lookup(&mut self) {
        self.fail_irq_lookup = true;
    }

    pub fn fail_bind(&mut self) {
        self.fail_bind = true;
    }

    /// The pin resolved for the named node. Panics if never resolved.
    pub fn pin(&self, node_name: &str) -> FakePin {
        self.pins.lock().get(node_name).cloned().unwrap()
    }

    pub fn line(&self) -> FakeLine {
        self.line.clone()
    }
}

impl PinProvider for FakeProvider {
    type Handle = FakePin;
    type Error = FakeError;

    fn resolve(&mut self, node: &PinNode) -> Result<FakePin, FakeError> {
        if self.missing.contains(node.name()) {
            return Err(FakeError(-19));
        }
        let pin = FakePin::default();
        self.pins
            .lock()
            .insert(String::from(node.name()), pin.clone());
        Ok(pin)
    }

    fn irq_number(&mut self, _handle: &FakePin) -> Result<IrqNumber, FakeError> {
        if self.fail_irq_lookup {
            return Err(FakeError(-22));
        }
        Ok(FAKE_IRQ)
    }

    fn bind_irq(
        &mut self,
        _irq: IrqNumber,
        trigger: TriggerMode,
        handler: IrqHandler,
    ) -> Result<(), FakeError> {
        if self.fail_bind {
            return Err(FakeError(-16));
        }
        *self.line.trigger.lock() = Some(trigger);
        *self.line.handler.lock() = Some(handler);
        Ok(())
    }

    fn unbind_irq(&mut self, _irq: IrqNumber) {
        *self.line.handler.lock() = None;
    }
}

/// Work queue that only runs items when the test says so.
#[derive(Default)]
pub struct ManualQueue {
    pending: Mutex<Vec<Work>>,
}

impl ManualQueue {
    /// Run everything queued so far; returns how many items ran.
    pub fn drain(&self) -> usize {
        let items = core::mem::take(&mut *self.pending.lock());
        let count = items.len();
        for work in items {
            work();
        }
        count
    }

    pub fn pending_len(&self) -> usize {
        self.pending.lock().len()
    }
}

impl WorkQueue for ManualQueue {
    fn schedule(&self, work: Work) {
        self.pending.lock().push(work);
    }
}

/// Attribute host that just keeps what the driver registers.
#[derive(Default)]
pub struct RecordingHost {
    pub entries: Vec<PinAttributes<FakePin>>,
}

impl RecordingHost {
    pub fn by_label(&self, label: &str) -> &PinAttributes<FakePin> {
        self.entries
            .iter()
            .find(|attrs| attrs.label() == label)
            .unwrap()
    }
}

impl AttributeHost<FakePin> for RecordingHost {
    fn register_pin(&mut self, attrs: PinAttributes<FakePin>) {
        self.entries.push(attrs);
    }
}

/// A node named `name` labeled `label`.
pub fn labeled_node(name: &str, label: &str) -> PinNode {
    PinNode::new(name).with_property("label", label)
}

/// A tree of labeled nodes, in order.
pub fn labeled_tree(pins: &[(&str, &str)]) -> ConfigTree {
    pins.iter()
        .map(|(name, label)| labeled_node(name, label))
        .collect()
}
