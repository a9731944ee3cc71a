// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "plotter",
    about = "Animated and static plots of a three-phase system and its Clarke/Park transforms"
)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: tracing::Level,

    /// Delay between animation frames in milliseconds
    #[arg(
        long,
        default_value_t = 20,
        global = true,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub interval_ms: u64,

    /// Go straight to the static plots
    #[arg(long, global = true)]
    pub skip_animation: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Three phases only
    ThreePhase,
    /// Three phases, Clarke transform and Park transform
    ClarkePark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["plotter", "clarke-park"]).unwrap();
        assert_eq!(cli.command, Commands::ClarkePark);
        assert_eq!(cli.interval_ms, 20);
        assert_eq!(cli.log_level, tracing::Level::INFO);
        assert!(!cli.skip_animation);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "plotter",
            "three-phase",
            "--skip-animation",
            "--interval-ms",
            "5",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.command, Commands::ThreePhase);
        assert!(cli.skip_animation);
        assert_eq!(cli.interval_ms, 5);
        assert_eq!(cli.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn interval_out_of_range_is_rejected() {
        for value in ["0", "60001", "18446744073709551615"] {
            let parsed = Cli::try_parse_from(["plotter", "clarke-park", "--interval-ms", value]);
            assert!(parsed.is_err(), "accepted --interval-ms {value}");
        }
        let cli = Cli::try_parse_from(["plotter", "clarke-park", "--interval-ms", "60000"]).unwrap();
        assert_eq!(cli.interval_ms, 60_000);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["plotter"]).is_err());
    }
}
