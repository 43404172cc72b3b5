//! Pin-Bank Interrupt Driver
//!
//! This crate drives a bank of digital I/O pins: one pin, identified by
//! a reserved label in the configuration tree, is an edge-triggered
//! interrupt source; every other pin is an independently controllable
//! output. On each falling edge all controlled outputs are forced low.
//!
//! # Module Organization
//!
//! - [`hal`]: platform-independent trait definitions
//! - [`pinbank`]: the driver itself (registry, interrupt handoff,
//!   attribute endpoints, attach/detach lifecycle)
//!
//! # Design Principles
//!
//! 1. **Split interrupt handling**: a non-blocking top half running in
//!    interrupt context hands off to a deferred bottom half through a
//!    single lock-protected flag
//! 2. **No globals**: all state lives in a [`pinbank::PinBank`] owned
//!    by the attach/detach lifecycle
//! 3. **Platform at arm's length**: pin resolution, interrupt line
//!    plumbing, and deferred scheduling come in through [`hal`] traits

#![no_std]

extern crate alloc;

pub mod hal;
pub mod pinbank;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use hal::gpio::{PinDirection, PinHandle, PinLevel};
pub use hal::irq::{IrqNumber, IrqStatus, TriggerMode};
pub use pinbank::{BankError, PinBank};
