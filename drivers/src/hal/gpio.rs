//! GPIO (General Purpose Input/Output) Hardware Abstraction Layer.
//!
//! This module defines the platform-independent view of a single pin.

/// Pin logic level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinLevel {
    /// Logic low (0V or ground).
    Low,
    /// Logic high (VDD or 3.3V/5V depending on system).
    High,
}

impl From<bool> for PinLevel {
    fn from(value: bool) -> Self {
        if value {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> bool {
        matches!(level, PinLevel::High)
    }
}

/// Pin direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinDirection {
    /// Pin samples an external signal.
    Input,
    /// Pin drives its level onto the line.
    Output,
}

/// A platform-resolved reference to one physical pin.
///
/// Handles are produced by the platform's
/// [`PinProvider`](crate::hal::provider::PinProvider) and owned
/// exclusively by the pin record that resolved them; they are neither
/// shared nor copied.
pub trait PinHandle {
    /// Error type for pin operations.
    type Error: core::fmt::Debug;

    /// Query the current direction.
    fn direction(&self) -> Result<PinDirection, Self::Error>;

    /// Change the direction.
    ///
    /// Switching to [`PinDirection::Output`] does not define the driven
    /// level; callers that care must set it explicitly afterwards.
    fn set_direction(&mut self, direction: PinDirection) -> Result<(), Self::Error>;

    /// Read the current logic level.
    fn level(&self) -> Result<PinLevel, Self::Error>;

    /// Drive the pin to a specific level.
    fn set_level(&mut self, level: PinLevel) -> Result<(), Self::Error>;

    /// Drive the pin to logic high.
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_level(PinLevel::High)
    }

    /// Drive the pin to logic low.
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_level(PinLevel::Low)
    }

    /// Check if the pin currently reads high.
    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.level()? == PinLevel::High)
    }

    /// Check if the pin currently reads low.
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.level()? == PinLevel::Low)
    }
}
