// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Supervisor timing configuration.

use serde::{Deserialize, Serialize};

/// Indicator half-period while the link is up (slow blink).
pub const LINK_UP_BLINK_MS: u32 = 500;
/// Indicator half-period while the link is down (fast blink).
pub const LINK_DOWN_BLINK_MS: u32 = 100;
/// Time without a state change below READY before the force-down flag flips.
pub const JOIN_DOWN_MS: u32 = 3000;
/// Upper bound on each network stack poll.
pub const POLL_WAIT_MS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct SupervisorConfig {
    pub link_up_blink_ms: u32,
    pub link_down_blink_ms: u32,
    pub join_down_ms: u32,
    pub poll_wait_ms: u32,
}

impl SupervisorConfig {
    pub const fn new() -> Self {
        Self {
            link_up_blink_ms: LINK_UP_BLINK_MS,
            link_down_blink_ms: LINK_DOWN_BLINK_MS,
            join_down_ms: JOIN_DOWN_MS,
            poll_wait_ms: POLL_WAIT_MS,
        }
    }

    /// Blink half-period for the given link status.
    pub const fn blink_interval(&self, link_up: bool) -> u32 {
        if link_up {
            self.link_up_blink_ms
        } else {
            self.link_down_blink_ms
        }
    }
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self::new()
    }
}
