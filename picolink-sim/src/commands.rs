// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Simulation run and report.

use std::fmt;

use anyhow::Result;
use picolink_common::{Clock, InterfaceState, LinkEvent, Peripherals, Supervisor};

use crate::scenario::Scenario;
use crate::sim::{ScriptedStack, SimClock, SimLed, SimRadio};

/// Something observed during a run, stamped with simulated time since power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    Event { at: u32, event: LinkEvent },
    Led { at: u32, on: bool, clock: u32 },
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event { at, event } => write!(f, "[{at:>7} ms] {event}"),
            Self::Led { at, on, clock } => write!(
                f,
                "[{at:>7} ms] LED {} (clock {clock})",
                if *on { "on" } else { "off" }
            ),
        }
    }
}

/// Outcome of a simulated run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub iterations: u64,
    pub final_state: InterfaceState,
    pub force_down: bool,
    pub led_toggles: u64,
    pub radio_polls: u64,
    pub events: Vec<(u32, LinkEvent)>,
}

impl Summary {
    pub fn force_down_toggles(&self) -> usize {
        self.events
            .iter()
            .filter(|(_, e)| matches!(e, LinkEvent::ForceDown { .. }))
            .count()
    }
}

/// Run the supervisor over the whole scenario, one iteration at a time.
pub fn execute<F>(scenario: &Scenario, mut observe: F) -> Summary
where
    F: FnMut(&Trace),
{
    let clock = SimClock::new(scenario.start_ms);
    let peripherals = Peripherals {
        net: ScriptedStack::new(scenario, clock.clone()),
        radio: SimRadio::new(scenario.radio),
        led: SimLed::default(),
        clock: clock.clone(),
    };
    let mut supervisor = Supervisor::new(scenario.config, peripherals);
    let mut events = Vec::new();

    for _ in 0..scenario.iterations() {
        let was_on = supervisor.indicator_on();

        supervisor.run_for(1, |event| {
            let at = clock.elapsed();
            observe(&Trace::Event { at, event });
            events.push((at, event));
        });

        let on = supervisor.indicator_on();
        if on != was_on {
            observe(&Trace::Led {
                at: clock.elapsed(),
                on,
                clock: clock.now_ms(),
            });
        }
    }

    Summary {
        iterations: supervisor.iterations(),
        final_state: supervisor.last_state(),
        force_down: supervisor.force_down(),
        led_toggles: supervisor.peripherals().led.toggles,
        radio_polls: supervisor.peripherals().radio.polls,
        events,
    }
}

/// Run a scenario and print its event log.
pub fn simulate(scenario: &Scenario, show_led: bool) -> Result<()> {
    println!("Picolink v{}", env!("PICOLINK_VERSION"));
    println!(
        "Scenario: {} ms from clock {} ({} steps, radio {:?})",
        scenario.duration_ms,
        scenario.start_ms,
        scenario.steps.len(),
        scenario.radio
    );
    println!();

    let summary = execute(scenario, |trace| {
        if show_led || matches!(trace, Trace::Event { .. }) {
            println!("{trace}");
        }
    });

    println!();
    println!("Summary:");
    println!("  Iterations:  {}", summary.iterations);
    println!("  Final state: {}", summary.final_state);
    println!(
        "  Force down:  {} ({} toggles)",
        if summary.force_down { "on" } else { "off" },
        summary.force_down_toggles()
    );
    println!("  LED toggles: {}", summary.led_toggles);
    println!("  Radio polls: {}", summary.radio_polls);

    Ok(())
}
