//! Pin registry: one record per configured pin, in configuration order.
//!
//! The registry is built once at attach time and is structurally
//! immutable afterwards; only the per-record handle's direction and
//! level mutate, through the handle's own lock.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Write as _;

use spin::Mutex;

use crate::hal::gpio::PinHandle;

/// Maximum label length in characters; longer labels are truncated.
pub const LABEL_CAPACITY: usize = 19;

/// Reserved label marking the interrupt source pin (bank 1, pin 2).
pub const INTERRUPT_PIN_LABEL: &str = "gpio1_2";

/// Bounded pin label with silent truncation.
pub type Label = heapless::String<LABEL_CAPACITY>;

/// Build a label from configuration input, truncating past capacity.
pub fn label_from(text: &str) -> Label {
    let mut label = Label::new();
    for ch in text.chars() {
        if label.push(ch).is_err() {
            break;
        }
    }
    label
}

/// Placeholder label for a node that declares none, embedding the
/// pin's position in the configuration tree.
pub fn placeholder_label(index: usize) -> Label {
    let mut label = Label::new();
    // "pin" plus a usize always fits in 19 chars.
    let _ = write!(label, "pin{index}");
    label
}

/// What a pin is for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinRole {
    /// The edge-triggered interrupt source.
    Interrupt,
    /// An output under driver control, forced low on each edge.
    Controlled,
}

/// One configured pin: label, role, and the resolved handle.
///
/// The handle sits behind a busy-wait lock because the bottom half and
/// the attribute endpoints touch it from different contexts.
pub struct PinRecord<H: PinHandle> {
    label: Label,
    role: PinRole,
    handle: Arc<Mutex<H>>,
}

impl<H: PinHandle> PinRecord<H> {
    pub(crate) fn new(label: Label, role: PinRole, handle: H) -> Self {
        Self {
            label,
            role,
            handle: Arc::new(Mutex::new(handle)),
        }
    }

    /// The label supplied at configuration time (or synthesized).
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn label_owned(&self) -> Label {
        self.label.clone()
    }

    /// The record's role.
    pub fn role(&self) -> PinRole {
        self.role
    }

    /// Shared access to the handle.
    pub fn handle(&self) -> &Arc<Mutex<H>> {
        &self.handle
    }
}

/// Ordered collection of pin records, fixed at attach time.
pub struct PinRegistry<H: PinHandle> {
    records: Vec<PinRecord<H>>,
}

impl<H: PinHandle> PinRegistry<H> {
    pub(crate) fn new(records: Vec<PinRecord<H>>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no pins were configured.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all records in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &PinRecord<H>> {
        self.records.iter()
    }

    /// Iterate only the controlled output records.
    pub fn controlled(&self) -> impl Iterator<Item = &PinRecord<H>> {
        self.records
            .iter()
            .filter(|r| r.role() == PinRole::Controlled)
    }

    /// The interrupt record, if one was configured.
    pub fn interrupt(&self) -> Option<&PinRecord<H>> {
        self.records.iter().find(|r| r.role() == PinRole::Interrupt)
    }
}
