// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Indicator service: blink cadence encodes link status.

use crate::config::SupervisorConfig;
use crate::net::NetworkStack;
use crate::service::{Service, ServiceContext};
use crate::supervisor::Peripherals;
use crate::timer::{is_due, Clock, Tick};
use embedded_hal::digital::{OutputPin, PinState};

/// Service that toggles the status LED, slowly while the link is up and quickly while
/// it is down
pub struct IndicatorService {
    tick: Tick,
    on: bool,
    config: SupervisorConfig,
}

impl IndicatorService {
    pub fn new(config: &SupervisorConfig, now_ms: u32) -> Self {
        Self {
            tick: Tick::new(now_ms),
            on: false,
            config: *config,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }
}

impl<N, R, L, C> Service<Peripherals<N, R, L, C>> for IndicatorService
where
    N: NetworkStack,
    L: OutputPin,
    C: Clock,
{
    fn process(&mut self, ctx: &mut ServiceContext<Peripherals<N, R, L, C>>) {
        let p = &mut *ctx.peripherals;
        let interval = self.config.blink_interval(p.net.link_up());

        if is_due(&p.clock, &mut self.tick, interval) {
            self.on = !self.on;
            p.led.set_state(PinState::from(self.on)).ok();
        }
    }
}
