//! Per-pin attribute endpoints.
//!
//! Each controlled pin gets a direction, value, and label endpoint,
//! registered with the external device-management collaborator at
//! attach time. Endpoints act directly on the pin handle; they never
//! touch the interrupt handoff state. A value write may race the
//! bottom half forcing outputs low; last write wins.

use alloc::sync::Arc;

use spin::Mutex;

use crate::hal::gpio::{PinDirection, PinHandle, PinLevel};
use crate::pinbank::error::BankError;
use crate::pinbank::registry::{Label, PinRecord};

/// Attribute bindings for one controlled pin.
pub struct PinAttributes<H: PinHandle> {
    label: Label,
    handle: Arc<Mutex<H>>,
}

impl<H: PinHandle> PinAttributes<H> {
    pub(crate) fn for_record(record: &PinRecord<H>) -> Self {
        Self {
            label: record.label_owned(),
            handle: Arc::clone(record.handle()),
        }
    }

    /// Read the pin direction as `"in"` or `"out"`.
    pub fn show_direction(&self) -> Result<&'static str, BankError<H::Error>> {
        let direction = self.handle.lock().direction().map_err(BankError::Pin)?;
        Ok(match direction {
            PinDirection::Input => "in",
            PinDirection::Output => "out",
        })
    }

    /// Write the pin direction from `"in"` or `"out"`.
    ///
    /// Input is trimmed and ASCII-case-insensitive; anything else
    /// fails with [`BankError::InvalidArgument`] and changes nothing.
    /// Switching to output drives the pin low.
    pub fn store_direction(&self, input: &str) -> Result<(), BankError<H::Error>> {
        let word = input.trim();
        let direction = if word.eq_ignore_ascii_case("in") {
            PinDirection::Input
        } else if word.eq_ignore_ascii_case("out") {
            PinDirection::Output
        } else {
            return Err(BankError::InvalidArgument);
        };

        let mut handle = self.handle.lock();
        handle
            .set_direction(direction)
            .map_err(BankError::DirectionSet)?;
        if direction == PinDirection::Output {
            handle.set_low().map_err(BankError::Pin)?;
        }
        Ok(())
    }

    /// Read the pin level as `"0"` or `"1"`.
    pub fn show_value(&self) -> Result<&'static str, BankError<H::Error>> {
        let level = self.handle.lock().level().map_err(BankError::Pin)?;
        Ok(match level {
            PinLevel::Low => "0",
            PinLevel::High => "1",
        })
    }

    /// Write the pin level from a textual integer.
    ///
    /// A parse failure fails with [`BankError::InvalidArgument`] and
    /// changes nothing; any nonzero value maps to high.
    pub fn store_value(&self, input: &str) -> Result<(), BankError<H::Error>> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| BankError::InvalidArgument)?;
        let level = PinLevel::from(value != 0);
        self.handle.lock().set_level(level).map_err(BankError::Pin)
    }

    /// The stored label. Never fails.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// External device-management collaborator.
///
/// The driver registers one [`PinAttributes`] per controlled pin; how
/// the endpoints are named, permissioned, and exposed is the
/// collaborator's business.
pub trait AttributeHost<H: PinHandle> {
    /// Take ownership of one pin's attribute bindings.
    fn register_pin(&mut self, attrs: PinAttributes<H>);
}
