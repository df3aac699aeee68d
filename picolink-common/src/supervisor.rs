// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Link-state supervisor main loop.
//!
//! One iteration runs the services in a fixed order:
//! - `NetPollService`: bounded network stack poll (the only suspension point)
//! - `IndicatorService`: LED toggle when the blink interval for the link status is due
//! - `LinkWatchService`: state change reporting and the stuck-join watchdog
//! - `RadioPollService`: explicit radio poll when the stack did not drive it
//!
//! Nothing here fails. The force-down flag is the only fault signal, and acting on it
//! is left to the caller.

use crate::config::SupervisorConfig;
use crate::net::{InterfaceState, NetworkStack, RadioDriver};
use crate::service::{EventBus, LinkEvent, Service, ServiceContext};
use crate::services::{IndicatorService, LinkWatchService, NetPollService, RadioPollService};
use crate::timer::Clock;
use embedded_hal::digital::OutputPin;

/// Hardware and collaborators driven by the supervisor.
pub struct Peripherals<N, R, L, C> {
    pub net: N,
    pub radio: R,
    pub led: L,
    pub clock: C,
}

pub struct Supervisor<N, R, L, C> {
    peripherals: Peripherals<N, R, L, C>,
    events: EventBus,
    net_poll: NetPollService,
    indicator: IndicatorService,
    link_watch: LinkWatchService,
    radio_poll: RadioPollService,
    iterations: u64,
}

impl<N, R, L, C> Supervisor<N, R, L, C>
where
    N: NetworkStack,
    R: RadioDriver,
    L: OutputPin,
    C: Clock,
{
    /// Both timeouts start counting from the current clock reading.
    pub fn new(config: SupervisorConfig, mut peripherals: Peripherals<N, R, L, C>) -> Self {
        let now = peripherals.clock.now_ms();
        peripherals.led.set_low().ok();

        Self {
            peripherals,
            events: EventBus::new(),
            net_poll: NetPollService::new(config.poll_wait_ms),
            indicator: IndicatorService::new(&config, now),
            link_watch: LinkWatchService::new(&config, now),
            radio_poll: RadioPollService::new(),
            iterations: 0,
        }
    }

    /// Run one loop iteration. Published events stay on the bus until drained.
    pub fn step(&mut self) {
        let mut ctx = ServiceContext {
            peripherals: &mut self.peripherals,
            events: &self.events,
        };

        self.net_poll.process(&mut ctx);
        self.indicator.process(&mut ctx);
        self.link_watch.process(&mut ctx);
        self.radio_poll.process(&mut ctx);

        self.iterations = self.iterations.wrapping_add(1);
    }

    /// Run `iterations` loop iterations, passing each event to `on_event` as soon as
    /// its iteration completes.
    pub fn run_for<F>(&mut self, iterations: u64, mut on_event: F)
    where
        F: FnMut(LinkEvent),
    {
        for _ in 0..iterations {
            self.step();
            self.events.drain(&mut on_event);
        }
    }

    /// Device main loop. Only a reset ends it.
    pub fn run<F>(&mut self, mut on_event: F) -> !
    where
        F: FnMut(LinkEvent),
    {
        loop {
            self.step();
            self.events.drain(&mut on_event);
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn peripherals(&self) -> &Peripherals<N, R, L, C> {
        &self.peripherals
    }

    pub fn peripherals_mut(&mut self) -> &mut Peripherals<N, R, L, C> {
        &mut self.peripherals
    }

    /// Current value of the advisory force-down flag.
    pub fn force_down(&self) -> bool {
        self.link_watch.force_down()
    }

    pub fn indicator_on(&self) -> bool {
        self.indicator.is_on()
    }

    pub fn last_state(&self) -> InterfaceState {
        self.link_watch.last_state()
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn into_peripherals(self) -> Peripherals<N, R, L, C> {
        self.peripherals
    }
}
