//! Hardware Abstraction Layer (HAL) - Platform-Independent Traits
//!
//! This module defines the seams between the pin-bank driver and the
//! platform it runs on. The driver never touches hardware directly;
//! everything goes through these traits.
//!
//! # Design Principles
//!
//! - **No platform leakage**: traits must not reference platform-specific types
//! - **Type safety**: associated types catch mismatched handles at compile time
//! - **Explicit context**: handlers are closures carrying their own state,
//!   not free functions reaching for globals
//!
//! # Available Interfaces
//!
//! - [`gpio`]: per-pin direction and level primitives
//! - [`irq`]: interrupt line types and the handler contract
//! - [`provider`]: platform services (pin resolution, interrupt binding)
//! - [`work`]: deferred execution for bottom-half processing

pub mod gpio;
pub mod irq;
pub mod provider;
pub mod work;
