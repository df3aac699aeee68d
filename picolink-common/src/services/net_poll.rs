// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Network stack polling service.

use crate::net::NetworkStack;
use crate::service::{Service, ServiceContext};
use crate::supervisor::Peripherals;

/// Service that hands the network stack its bounded I/O slot
pub struct NetPollService {
    max_wait_ms: u32,
}

impl NetPollService {
    pub fn new(max_wait_ms: u32) -> Self {
        Self { max_wait_ms }
    }
}

impl<N, R, L, C> Service<Peripherals<N, R, L, C>> for NetPollService
where
    N: NetworkStack,
{
    fn process(&mut self, ctx: &mut ServiceContext<Peripherals<N, R, L, C>>) {
        ctx.peripherals.net.poll(self.max_wait_ms);
    }
}
