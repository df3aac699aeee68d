// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Scenario files: a timeline of interface states fed to the simulated stack.
//!
//! ```toml
//! duration_ms = 6000
//! ip = "192.168.1.42"
//! gateway = "192.168.1.1"
//!
//! [config]
//! join_down_ms = 2000
//!
//! [[step]]
//! at_ms = 300
//! state = "up"
//! ```

use std::fs;
use std::net::Ipv4Addr;
use std::path::Path;

use anyhow::{bail, Context, Result};
use picolink_common::{Drive, InterfaceState, SupervisorConfig};
use serde::Deserialize;

/// State the stack switches to once `at_ms` of simulated time has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub at_ms: u32,
    pub state: InterfaceState,
    /// Defaults to "up" for every state past DOWN.
    pub link_up: Option<bool>,
}

impl Step {
    pub fn link_up(&self) -> bool {
        self.link_up.unwrap_or(self.state > InterfaceState::Down)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub config: SupervisorConfig,
    /// Clock reading at power-up. Values close to `u32::MAX` exercise counter wrap.
    #[serde(default)]
    pub start_ms: u32,
    pub duration_ms: u32,
    #[serde(default = "default_radio")]
    pub radio: Drive,
    #[serde(default = "default_ip")]
    pub ip: Ipv4Addr,
    #[serde(default = "default_gateway")]
    pub gateway: Ipv4Addr,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

fn default_radio() -> Drive {
    Drive::External
}

fn default_ip() -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 1, 42)
}

fn default_gateway() -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 1, 1)
}

impl Scenario {
    /// Read and validate a TOML scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let scenario: Self = toml::from_str(content).context("Failed to parse scenario")?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Normal join: link comes up, the radio associates, DHCP completes.
    pub fn join() -> Self {
        Self::with_steps(
            8_000,
            vec![
                step(400, InterfaceState::Up),
                step(1_200, InterfaceState::Joining),
                step(2_600, InterfaceState::Ready),
            ],
        )
    }

    /// Interface advances to `state` and never gets further.
    pub fn stuck(state: InterfaceState, duration_ms: u32) -> Self {
        let steps = match state {
            InterfaceState::Down => Vec::new(),
            _ => vec![step(400, state)],
        };
        Self::with_steps(duration_ms, steps)
    }

    fn with_steps(duration_ms: u32, steps: Vec<Step>) -> Self {
        Self {
            config: SupervisorConfig::default(),
            start_ms: 0,
            duration_ms,
            radio: default_radio(),
            ip: default_ip(),
            gateway: default_gateway(),
            steps,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.config.poll_wait_ms == 0 {
            bail!("config.poll_wait_ms must be non-zero");
        }
        if self.duration_ms < self.config.poll_wait_ms {
            bail!(
                "duration_ms ({}) is shorter than one poll ({} ms)",
                self.duration_ms,
                self.config.poll_wait_ms
            );
        }
        for pair in self.steps.windows(2) {
            if pair[1].at_ms < pair[0].at_ms {
                bail!(
                    "steps must be in time order: {} ms comes after {} ms",
                    pair[1].at_ms,
                    pair[0].at_ms
                );
            }
        }
        if let Some(last) = self.steps.last() {
            if last.at_ms > self.duration_ms {
                bail!(
                    "step at {} ms is past the end of the run ({} ms)",
                    last.at_ms,
                    self.duration_ms
                );
            }
        }
        Ok(())
    }

    /// Number of supervisor iterations covering `duration_ms`.
    pub fn iterations(&self) -> u64 {
        u64::from(self.duration_ms / self.config.poll_wait_ms)
    }
}

fn step(at_ms: u32, state: InterfaceState) -> Step {
    Step {
        at_ms,
        state,
        link_up: None,
    }
}
