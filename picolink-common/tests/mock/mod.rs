// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Test doubles for the supervisor's collaborators.

#![allow(dead_code)]

use std::cell::Cell;
use std::convert::Infallible;
use std::net::Ipv4Addr;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use picolink_common::{
    Clock, Drive, InterfaceState, NetworkStack, Peripherals, RadioDriver, Supervisor,
    SupervisorConfig,
};

/// Simulated millisecond clock shared between the stack and the supervisor.
#[derive(Clone, Default)]
pub struct SimClock(Rc<Cell<u32>>);

impl SimClock {
    pub fn starting_at(ms: u32) -> Self {
        Self(Rc::new(Cell::new(ms)))
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }

    pub fn set(&self, ms: u32) {
        self.0.set(ms);
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

/// Network stack whose poll just lets simulated time pass.
pub struct MockStack {
    pub clock: SimClock,
    pub state: InterfaceState,
    pub link_up: bool,
    pub ip: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub polls: u32,
}

impl MockStack {
    pub fn new(clock: SimClock) -> Self {
        Self {
            clock,
            state: InterfaceState::Down,
            link_up: false,
            ip: Ipv4Addr::UNSPECIFIED,
            gateway: Ipv4Addr::UNSPECIFIED,
            polls: 0,
        }
    }
}

impl NetworkStack for MockStack {
    fn poll(&mut self, max_wait_ms: u32) {
        self.polls += 1;
        self.clock.advance(max_wait_ms);
    }

    fn state(&self) -> InterfaceState {
        self.state
    }

    fn link_up(&self) -> bool {
        self.link_up
    }

    fn ip(&self) -> Ipv4Addr {
        self.ip
    }

    fn gateway(&self) -> Ipv4Addr {
        self.gateway
    }
}

pub struct MockRadio {
    pub drive: Drive,
    pub polls: u32,
}

impl MockRadio {
    pub fn new(drive: Drive) -> Self {
        Self { drive, polls: 0 }
    }
}

impl RadioDriver for MockRadio {
    fn drive(&mut self) -> Drive {
        self.drive
    }

    fn poll(&mut self) {
        self.polls += 1;
    }
}

/// Output pin remembering every level written to it.
#[derive(Default)]
pub struct RecordingPin {
    pub levels: Vec<bool>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

pub type TestSupervisor = Supervisor<MockStack, MockRadio, RecordingPin, SimClock>;

pub fn supervisor_at(start_ms: u32, drive: Drive) -> (TestSupervisor, SimClock) {
    let clock = SimClock::starting_at(start_ms);
    let peripherals = Peripherals {
        net: MockStack::new(clock.clone()),
        radio: MockRadio::new(drive),
        led: RecordingPin::default(),
        clock: clock.clone(),
    };
    (
        Supervisor::new(SupervisorConfig::default(), peripherals),
        clock,
    )
}

pub fn supervisor() -> (TestSupervisor, SimClock) {
    supervisor_at(0, Drive::Stack)
}
