// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Millisecond timeouts over a wrapping monotonic counter.

/// Source of monotonic milliseconds.
///
/// The counter is allowed to wrap at `u32::MAX`; every elapsed-time computation in
/// this crate uses wrapping subtraction.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Timestamp of the last time a timeout fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick(u32);

impl Tick {
    pub const fn new(ms: u32) -> Self {
        Self(ms)
    }

    pub const fn ms(self) -> u32 {
        self.0
    }

    /// Milliseconds since the tick was last reset, modulo 2^32.
    pub const fn elapsed(self, now: u32) -> u32 {
        now.wrapping_sub(self.0)
    }

    /// Fire if `interval_ms` has elapsed at `now`, or unconditionally when the interval
    /// is zero. Firing moves the tick to `now`.
    pub fn fire_at(&mut self, now: u32, interval_ms: u32) -> bool {
        if interval_ms == 0 || self.elapsed(now) >= interval_ms {
            self.0 = now;
            return true;
        }
        false
    }
}

/// Check a timeout against the current clock reading.
pub fn is_due(clock: &impl Clock, tick: &mut Tick, interval_ms: u32) -> bool {
    tick.fire_at(clock.now_ms(), interval_ms)
}
