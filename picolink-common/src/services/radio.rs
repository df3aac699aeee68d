// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Radio scheduling service.

use crate::net::{Drive, RadioDriver};
use crate::service::{Service, ServiceContext};
use crate::supervisor::Peripherals;

/// Service that polls the radio on iterations where the network stack did not
pub struct RadioPollService;

impl RadioPollService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RadioPollService {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, R, L, C> Service<Peripherals<N, R, L, C>> for RadioPollService
where
    R: RadioDriver,
{
    fn process(&mut self, ctx: &mut ServiceContext<Peripherals<N, R, L, C>>) {
        let radio = &mut ctx.peripherals.radio;
        if radio.drive() == Drive::External {
            #[cfg(feature = "defmt")]
            defmt::trace!("Radio: polling outside the stack");
            radio.poll();
        }
    }
}
