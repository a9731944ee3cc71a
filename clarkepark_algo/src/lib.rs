// Generates a synthetic three-phase signal and carries it through the Clarke
// (abc -> alpha-beta) and Park (alpha-beta -> d-q) transforms.

// Key Features:
// - Builds an inclusive, evenly spaced time grid and validates its bounds
// - Samples three sinusoids offset by 120 degrees
// - Applies the Clarke and Park transforms (and their inverses) pointwise
// - Describes animation frames as plain data, independent of any display

// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

pub mod animation;
pub mod config;
pub mod error;
pub mod math_float;
pub mod signal;

pub use config::SignalConfig;
pub use error::InvalidRangeError;

use animation::Series;
use signal::{PhaseSignal, RotatingAngle, RotatingSignal, StationarySignal, TimeGrid};

/// Imbalance above this share of the amplitude is reported.
const IMBALANCE_WARN_RATIO: f64 = 1e-9;

/// Signal-only pipeline: time grid and three phases.
#[derive(Clone, Debug, PartialEq)]
pub struct ThreePhaseSystem {
    pub time: TimeGrid,
    pub phases: PhaseSignal,
}

impl ThreePhaseSystem {
    pub fn compute(config: &SignalConfig) -> Result<Self, InvalidRangeError> {
        config.validate_waveform()?;
        let time = TimeGrid::new(config.t0, config.t_end, config.dt)?;
        let phases = PhaseSignal::generate(&time, config.amplitude, config.frequency);

        check_balance(&phases, config.amplitude);
        tracing::info!(samples = time.len(), "three-phase system computed");
        Ok(Self { time, phases })
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn series(&self) -> [Series<'_>; 3] {
        phase_series(&self.phases)
    }
}

/// Full pipeline: three phases, stationary frame and rotating frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ClarkeParkSystem {
    pub time: TimeGrid,
    pub phases: PhaseSignal,
    pub stationary: StationarySignal,
    pub angle: RotatingAngle,
    pub rotating: RotatingSignal,
}

impl ClarkeParkSystem {
    pub fn compute(config: &SignalConfig) -> Result<Self, InvalidRangeError> {
        let ThreePhaseSystem { time, phases } = ThreePhaseSystem::compute(config)?;

        // Clarke Transform (Iabc -> Iab)
        let stationary = StationarySignal::from_phases(&phases);

        // Park Transform (Iab -> Idq)
        let angle = RotatingAngle::new(&time, config.frequency, config.delta);
        let rotating = RotatingSignal::from_stationary(&stationary, &angle);

        tracing::info!(
            samples = time.len(),
            delta = config.delta,
            "clarke and park transforms computed"
        );
        Ok(Self {
            time,
            phases,
            stationary,
            angle,
            rotating,
        })
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn phase_series(&self) -> [Series<'_>; 3] {
        phase_series(&self.phases)
    }

    pub fn stationary_series(&self) -> [Series<'_>; 2] {
        [
            Series::new("ialpha", &self.stationary.ialpha),
            Series::new("ibeta", &self.stationary.ibeta),
        ]
    }

    pub fn rotating_series(&self) -> [Series<'_>; 2] {
        [
            Series::new("id", &self.rotating.id),
            Series::new("iq", &self.rotating.iq),
        ]
    }
}

fn phase_series(phases: &PhaseSignal) -> [Series<'_>; 3] {
    [
        Series::new("Phase 1", &phases.phase1),
        Series::new("Phase 2", &phases.phase2),
        Series::new("Phase 3", &phases.phase3),
    ]
}

fn check_balance(phases: &PhaseSignal, amplitude: f64) {
    let imbalance = phases.max_imbalance();
    if imbalance > IMBALANCE_WARN_RATIO * amplitude.abs().max(1.0) {
        tracing::warn!(imbalance, "three-phase sum is not zero, system is unbalanced");
    } else {
        tracing::debug!(imbalance, "three-phase sum is balanced");
    }
}
