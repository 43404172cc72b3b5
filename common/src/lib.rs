//! Types shared between the configuration parser and the pin-bank driver.
//!
//! The parser that turns raw configuration text into a tree lives
//! outside this workspace; it hands the driver a [`config::ConfigTree`]
//! built from these types.

#![no_std]

extern crate alloc;

pub mod config;

pub use config::{ConfigTree, PinNode};
