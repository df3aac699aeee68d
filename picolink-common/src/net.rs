// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Boundary to the network stack and the radio driver.
//!
//! Both collaborators are owned elsewhere; the supervisor only reads interface state
//! and decides when the radio needs an explicit poll.

use core::net::Ipv4Addr;
use serde::{Deserialize, Serialize};

/// Connectivity phase of the network interface, in the order the stack advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum InterfaceState {
    /// No link.
    Down = 0,
    /// Link up, not yet associated.
    Up = 1,
    /// Associated, requesting an address.
    #[serde(alias = "req", alias = "requesting")]
    Joining = 2,
    /// Address assigned.
    Ready = 3,
}

impl InterfaceState {
    pub const ALL: [Self; 4] = [Self::Down, Self::Up, Self::Joining, Self::Ready];

    /// Decode a raw state byte. Values past READY are rejected.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Down),
            1 => Some(Self::Up),
            2 => Some(Self::Joining),
            3 => Some(Self::Ready),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Console label used in state transition messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Down => "DOWN",
            Self::Up => "UP",
            Self::Joining => "REQ",
            Self::Ready => "READY",
        }
    }

    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl TryFrom<u8> for InterfaceState {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(raw)
    }
}

impl core::fmt::Display for InterfaceState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Network stack driven by the supervisor loop.
pub trait NetworkStack {
    /// Service pending I/O for at most `max_wait_ms`.
    ///
    /// This is the loop's only suspension point. Request handlers registered with the
    /// stack run synchronously inside this call.
    fn poll(&mut self, max_wait_ms: u32);

    fn state(&self) -> InterfaceState;

    /// Whether the radio reports a carrier/association.
    fn link_up(&self) -> bool;

    /// Interface address. Only meaningful once the state is READY.
    fn ip(&self) -> Ipv4Addr;

    /// Default gateway. Only meaningful once the state is READY.
    fn gateway(&self) -> Ipv4Addr;
}

/// Who schedules the radio during the current iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum Drive {
    /// The network stack polled the radio as part of its own I/O.
    Stack,
    /// The stack left the radio alone; the loop must poll it.
    External,
}

/// Radio driver plugged under the network stack.
pub trait RadioDriver {
    /// Capability check made once per iteration, after the stack poll.
    fn drive(&mut self) -> Drive;

    /// Give the radio scheduling time outside the stack.
    fn poll(&mut self);
}
