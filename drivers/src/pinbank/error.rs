//! Driver error types.

use core::fmt;

/// Errors surfaced by the pin-bank driver.
///
/// `E` is the platform error type; platform failures travel through
/// unchanged inside the carrying variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankError<E> {
    /// The configuration tree declares no pins.
    EmptyConfig,
    /// Two configuration nodes carry the reserved interrupt label.
    DuplicateInterruptPin,
    /// Malformed direction or value string on an attribute write.
    InvalidArgument,
    /// The platform could not map a configuration node to a pin, or
    /// could not report an input pin's interrupt line.
    Resolve(E),
    /// The hardware rejected a direction change.
    DirectionSet(E),
    /// The platform could not bind the handler to the interrupt line.
    IrqBind(E),
    /// A pin level or direction query/drive failed on the attribute path.
    Pin(E),
}

impl<E: fmt::Debug> fmt::Display for BankError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyConfig => f.write_str("configuration declares no pins"),
            Self::DuplicateInterruptPin => {
                f.write_str("more than one pin carries the interrupt label")
            }
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::Resolve(e) => write!(f, "pin resolution failed: {e:?}"),
            Self::DirectionSet(e) => write!(f, "direction change rejected: {e:?}"),
            Self::IrqBind(e) => write!(f, "interrupt bind failed: {e:?}"),
            Self::Pin(e) => write!(f, "pin operation failed: {e:?}"),
        }
    }
}
