// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! RP2040 board bindings: millisecond clock and status LED.

use rp2040_hal::{
    clocks::init_clocks_and_plls,
    gpio::{bank0::Gpio25, FunctionSioOutput, Pin, Pins, PullDown},
    pac, Sio, Timer, Watchdog,
};

use crate::timer::Clock;

/// External crystal frequency on Pico boards
pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Status LED on GP25.
pub type LedPin = Pin<Gpio25, FunctionSioOutput, PullDown>;

impl Clock for Timer {
    /// The hardware counter runs at 1 MHz over 64 bits; truncation to `u32` gives the
    /// wrapping millisecond counter the supervisor expects.
    fn now_ms(&self) -> u32 {
        (self.get_counter().ticks() / 1_000) as u32
    }
}

/// Bring up clocks, the microsecond timer and the status LED.
///
/// Returns `None` if the peripherals were already taken or the PLLs failed to lock.
pub fn init_board() -> Option<(Timer, LedPin)> {
    let mut pac = pac::Peripherals::take()?;
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()?;

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let sio = Sio::new(pac.SIO);
    let pins = Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    Some((timer, pins.gpio25.into_push_pull_output()))
}
