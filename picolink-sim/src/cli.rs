// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use picolink_common::InterfaceState;

use crate::commands;
use crate::scenario::Scenario;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "picolink-sim")]
#[command(about = "Run the picolink link-state supervisor against a simulated network stack")]
pub struct Cli {
    #[command(flatten)]
    pub options: RunOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides applied on top of the selected scenario.
#[derive(Args)]
pub struct RunOptions {
    /// Clock reading at power-up, e.g. 4294966000 to cross the counter wrap
    #[arg(long, global = true)]
    pub start_ms: Option<u32>,

    /// Length of the simulated run in milliseconds
    #[arg(short, long, global = true)]
    pub duration_ms: Option<u32>,

    /// Print every LED toggle
    #[arg(long, global = true)]
    pub show_led: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Replay a TOML scenario file
    Run {
        /// Scenario file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Interface goes DOWN -> UP -> REQ -> READY
    Join,

    /// Interface reaches a state and never gets further
    Stuck {
        /// State to stall in (down, up, req, ready)
        #[arg(value_name = "STATE", default_value = "up", value_parser = parse_state)]
        state: InterfaceState,
    },
}

/// Parse an interface state by label or number.
fn parse_state(s: &str) -> Result<InterfaceState, String> {
    if let Ok(raw) = s.parse::<u8>() {
        return InterfaceState::from_raw(raw).ok_or_else(|| format!("no interface state {raw}"));
    }
    InterfaceState::ALL
        .into_iter()
        .find(|state| {
            state.label().eq_ignore_ascii_case(s) || format!("{state:?}").eq_ignore_ascii_case(s)
        })
        .ok_or_else(|| format!("unknown interface state: {s}"))
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    let mut scenario = match cli.command {
        Commands::Run { file } => Scenario::load(&file)?,
        Commands::Join => Scenario::join(),
        Commands::Stuck { state } => Scenario::stuck(state, 12_000),
    };

    if let Some(start_ms) = cli.options.start_ms {
        scenario.start_ms = start_ms;
    }
    if let Some(duration_ms) = cli.options.duration_ms {
        scenario.duration_ms = duration_ms;
    }
    scenario.validate()?;

    commands::simulate(&scenario, cli.options.show_led)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_accepts_labels_and_numbers() {
        assert_eq!(parse_state("REQ"), Ok(InterfaceState::Joining));
        assert_eq!(parse_state("joining"), Ok(InterfaceState::Joining));
        assert_eq!(parse_state("ready"), Ok(InterfaceState::Ready));
        assert_eq!(parse_state("1"), Ok(InterfaceState::Up));
        assert!(parse_state("4").is_err());
        assert!(parse_state("bogus").is_err());
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "picolink-sim",
            "stuck",
            "req",
            "--start-ms",
            "4294966000",
            "--show-led",
        ])
        .unwrap();

        assert_eq!(cli.options.start_ms, Some(4_294_966_000));
        assert!(cli.options.show_led);
        assert!(matches!(
            cli.command,
            Commands::Stuck {
                state: InterfaceState::Joining
            }
        ));
    }
}
