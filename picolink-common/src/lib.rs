// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Link-state supervisor for picolink devices.
//!
//! This crate supports both `no_std` (embedded) and `std` (host) environments:
//! - Default: `no_std` mode for embedded targets
//! - `std` feature: Enables `std` support for host tools
//! - `embedded` feature: Enables RP2040 board bindings (rp2040-hal)
//! - `defmt` feature: Logs transitions and faults over defmt

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod detector;
pub mod net;
pub mod service;
pub mod services;
pub mod supervisor;
pub mod timer;

// RP2040 board bindings (requires embedded feature)
#[cfg(feature = "embedded")]
pub mod board;

// Re-export commonly used types
pub use config::SupervisorConfig;
pub use config::{JOIN_DOWN_MS, LINK_DOWN_BLINK_MS, LINK_UP_BLINK_MS, POLL_WAIT_MS};
pub use detector::StateChangeDetector;
pub use net::{Drive, InterfaceState, NetworkStack, RadioDriver};
pub use service::{EventBus, LinkEvent, ReadyAddr};
pub use supervisor::{Peripherals, Supervisor};
pub use timer::{is_due, Clock, Tick};
