// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

mod app;
mod cli;
mod layout;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use clarkepark_algo::animation::Playback;
use clarkepark_algo::{ClarkeParkSystem, SignalConfig, ThreePhaseSystem};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use app::PlotMode;
use cli::{Cli, Commands};
use layout::Figure;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let config = SignalConfig::DEFAULT;
    let figure = match cli.command {
        Commands::ThreePhase => {
            let system = ThreePhaseSystem::compute(&config).context("three-phase signal")?;
            info!(
                max_imbalance = system.phases.max_imbalance(),
                "three-phase system ready"
            );
            layout::three_phase_figure(&system)
        }
        Commands::ClarkePark => {
            let system = ClarkeParkSystem::compute(&config).context("clarke/park transforms")?;
            log_summary(&system);
            layout::clarke_park_figure(&system)
        }
    };

    run(figure, &cli)
}

/// Animated window first, then the static one. Each blocks until closed.
fn run(figure: Figure, cli: &Cli) -> anyhow::Result<()> {
    if cli.skip_animation {
        info!("animation skipped");
    } else {
        let playback = Playback::new(
            figure.time.len(),
            Duration::from_millis(cli.interval_ms),
            true,
        );
        info!(frames = playback.frame_count(), "showing animation");
        app::show(figure.clone(), PlotMode::Animated(playback))?;
    }

    info!(panels = figure.panels().count(), "showing static plots");
    app::show(figure, PlotMode::Static)
}

fn log_summary(system: &ClarkeParkSystem) {
    let range = |values: Vec<f64>| {
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    };
    let (ab_min, ab_max) = range(system.stationary.magnitude());
    let (dq_min, dq_max) = range(system.rotating.magnitude());
    info!(ab_min, ab_max, dq_min, dq_max, "alpha-beta and d-q magnitudes");
}
