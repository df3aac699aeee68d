// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Service system for the cooperative supervisor loop.

use core::cell::RefCell;
use core::fmt;
use core::net::Ipv4Addr;
use heapless::Vec;

use crate::net::InterfaceState;

/// Capacity of the event bus.
pub const EVENT_BUS_CAPACITY: usize = 32;

/// Addresses read from the interface on arrival in READY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyAddr {
    pub ip: Ipv4Addr,
    pub gateway: Ipv4Addr,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReadyAddr {
    fn format(&self, f: defmt::Formatter) {
        let [a, b, c, d] = self.ip.octets();
        let [e, g, h, i] = self.gateway.octets();
        defmt::write!(f, "IP: {}.{}.{}.{}, GW: {}.{}.{}.{}", a, b, c, d, e, g, h, i);
    }
}

/// Events published by the supervisor services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// The interface moved to a new state. `addr` is set for READY only.
    StateChanged {
        state: InterfaceState,
        addr: Option<ReadyAddr>,
    },
    /// The stuck-join watchdog flipped the force-down flag.
    ForceDown { active: bool },
}

impl fmt::Display for LinkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateChanged {
                state,
                addr: Some(addr),
            } => write!(
                f,
                "IP state: {}, IP: {}, GW: {}",
                state.label(),
                addr.ip,
                addr.gateway
            ),
            Self::StateChanged { state, addr: None } => {
                write!(f, "IP state: {}", state.label())
            }
            Self::ForceDown { active } => {
                write!(f, "Force down: {}", if *active { "on" } else { "off" })
            }
        }
    }
}

/// Event bus for inter-service communication
pub struct EventBus {
    events: RefCell<Vec<LinkEvent, EVENT_BUS_CAPACITY>>,
}

impl EventBus {
    pub const fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Publish an event to the bus
    pub fn publish(&self, event: LinkEvent) {
        if self.events.borrow_mut().push(event).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Event bus full, dropping event: {:?}", event);
        }
    }

    /// Consume events matching a filter
    pub fn consume<F>(&self, mut filter: F)
    where
        F: FnMut(&LinkEvent) -> bool,
    {
        self.events.borrow_mut().retain(|e| !filter(e));
    }

    /// Hand every pending event to `f` in publish order and empty the bus
    pub fn drain<F>(&self, mut f: F)
    where
        F: FnMut(LinkEvent),
    {
        let pending = core::mem::take(&mut *self.events.borrow_mut());
        pending.into_iter().for_each(&mut f);
    }

    /// Check if an event exists without consuming it
    pub fn has_event<F>(&self, filter: F) -> bool
    where
        F: FnMut(&LinkEvent) -> bool,
    {
        self.events.borrow().iter().any(filter)
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared context passed to all services
pub struct ServiceContext<'a, P> {
    pub peripherals: &'a mut P,
    pub events: &'a EventBus,
}

/// Trait for services that run in the main loop
pub trait Service<P> {
    /// Process this service's logic for one loop iteration
    fn process(&mut self, ctx: &mut ServiceContext<P>);
}
