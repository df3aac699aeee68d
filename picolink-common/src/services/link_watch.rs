// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Link watch service: reports interface transitions and detects a stuck join.

use crate::config::SupervisorConfig;
use crate::detector::StateChangeDetector;
use crate::net::{InterfaceState, NetworkStack};
use crate::service::{LinkEvent, ReadyAddr, Service, ServiceContext};
use crate::supervisor::Peripherals;
use crate::timer::{is_due, Clock, Tick};

/// Service tracking interface state.
///
/// Every iteration the interface state is compared with the last one seen. A change is
/// published and restarts the readiness watchdog. While the state stays below READY
/// without changing, the force-down flag is inverted once per `join_down_ms`.
pub struct LinkWatchService {
    detector: StateChangeDetector,
    tick: Tick,
    force_down: bool,
    join_down_ms: u32,
}

impl LinkWatchService {
    pub fn new(config: &SupervisorConfig, now_ms: u32) -> Self {
        Self {
            detector: StateChangeDetector::new(),
            tick: Tick::new(now_ms),
            force_down: false,
            join_down_ms: config.join_down_ms,
        }
    }

    pub fn force_down(&self) -> bool {
        self.force_down
    }

    pub fn last_state(&self) -> InterfaceState {
        self.detector.last()
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    fn state_changed<N: NetworkStack>(net: &N, state: InterfaceState) -> LinkEvent {
        // Addresses are only valid once READY
        let addr = state.is_ready().then(|| ReadyAddr {
            ip: net.ip(),
            gateway: net.gateway(),
        });

        #[cfg(feature = "defmt")]
        match addr {
            Some(addr) => defmt::println!("IP state: {}, {}", state.label(), addr),
            None => defmt::println!("IP state: {}", state.label()),
        }

        LinkEvent::StateChanged { state, addr }
    }
}

impl<N, R, L, C> Service<Peripherals<N, R, L, C>> for LinkWatchService
where
    N: NetworkStack,
    C: Clock,
{
    fn process(&mut self, ctx: &mut ServiceContext<Peripherals<N, R, L, C>>) {
        let p = &*ctx.peripherals;
        let state = p.net.state();

        if self.detector.detect(state).is_some() {
            ctx.events.publish(Self::state_changed(&p.net, state));
            is_due(&p.clock, &mut self.tick, 0);
        } else if !state.is_ready() && is_due(&p.clock, &mut self.tick, self.join_down_ms) {
            self.force_down = !self.force_down;

            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Link: no progress past {} for {} ms, force down = {}",
                state,
                self.join_down_ms,
                self.force_down
            );

            ctx.events.publish(LinkEvent::ForceDown {
                active: self.force_down,
            });
        }
    }
}
