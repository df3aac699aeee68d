// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Interface state change detection.

use crate::net::InterfaceState;

/// Remembers the last reported interface state and labels transitions away from it.
///
/// DOWN is the implicit starting point, so observing DOWN first reports nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateChangeDetector {
    last: InterfaceState,
}

impl StateChangeDetector {
    pub const fn new() -> Self {
        Self {
            last: InterfaceState::Down,
        }
    }

    pub const fn last(&self) -> InterfaceState {
        self.last
    }

    /// Returns the label of `state` if it differs from the last observation.
    pub fn detect(&mut self, state: InterfaceState) -> Option<&'static str> {
        if state == self.last {
            return None;
        }
        self.last = state;
        Some(state.label())
    }

    /// Same as [`detect`](Self::detect) for a raw state byte. Out-of-range values are
    /// ignored and leave the remembered state untouched.
    pub fn detect_raw(&mut self, raw: u8) -> Option<&'static str> {
        InterfaceState::from_raw(raw).and_then(|state| self.detect(state))
    }
}

impl Default for StateChangeDetector {
    fn default() -> Self {
        Self::new()
    }
}
