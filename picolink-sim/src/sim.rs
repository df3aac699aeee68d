// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Simulated collaborators: a clock advanced by stack polls, a scripted network
//! stack, a radio that counts its polls and an LED that counts its toggles.

use std::cell::Cell;
use std::convert::Infallible;
use std::net::Ipv4Addr;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use picolink_common::{Clock, Drive, InterfaceState, NetworkStack, RadioDriver};

use crate::scenario::{Scenario, Step};

/// Millisecond clock that only moves when the stack "waits".
#[derive(Clone)]
pub struct SimClock {
    now: Rc<Cell<u32>>,
    start: u32,
}

impl SimClock {
    pub fn new(start: u32) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
            start,
        }
    }

    fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Simulated time since power-up.
    pub fn elapsed(&self) -> u32 {
        self.now.get().wrapping_sub(self.start)
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Network stack replaying a scenario timeline.
pub struct ScriptedStack {
    clock: SimClock,
    steps: Vec<Step>,
    next: usize,
    state: InterfaceState,
    link_up: bool,
    ip: Ipv4Addr,
    gateway: Ipv4Addr,
}

impl ScriptedStack {
    pub fn new(scenario: &Scenario, clock: SimClock) -> Self {
        let mut stack = Self {
            clock,
            steps: scenario.steps.clone(),
            next: 0,
            state: InterfaceState::Down,
            link_up: false,
            ip: scenario.ip,
            gateway: scenario.gateway,
        };
        stack.apply_due_steps();
        stack
    }

    fn apply_due_steps(&mut self) {
        let elapsed = self.clock.elapsed();
        while let Some(step) = self
            .steps
            .get(self.next)
            .copied()
            .filter(|s| s.at_ms <= elapsed)
        {
            self.state = step.state;
            self.link_up = step.link_up();
            self.next += 1;
        }
    }
}

impl NetworkStack for ScriptedStack {
    fn poll(&mut self, max_wait_ms: u32) {
        self.clock.advance(max_wait_ms);
        self.apply_due_steps();
    }

    fn state(&self) -> InterfaceState {
        self.state
    }

    fn link_up(&self) -> bool {
        self.link_up
    }

    fn ip(&self) -> Ipv4Addr {
        if self.state.is_ready() {
            self.ip
        } else {
            Ipv4Addr::UNSPECIFIED
        }
    }

    fn gateway(&self) -> Ipv4Addr {
        if self.state.is_ready() {
            self.gateway
        } else {
            Ipv4Addr::UNSPECIFIED
        }
    }
}

pub struct SimRadio {
    drive: Drive,
    pub polls: u64,
}

impl SimRadio {
    pub fn new(drive: Drive) -> Self {
        Self { drive, polls: 0 }
    }
}

impl RadioDriver for SimRadio {
    fn drive(&mut self) -> Drive {
        self.drive
    }

    fn poll(&mut self) {
        self.polls += 1;
    }
}

#[derive(Default)]
pub struct SimLed {
    pub on: bool,
    pub toggles: u64,
}

impl ErrorType for SimLed {
    type Error = Infallible;
}

impl OutputPin for SimLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

impl SimLed {
    fn set(&mut self, on: bool) {
        if on != self.on {
            self.toggles += 1;
        }
        self.on = on;
    }
}
