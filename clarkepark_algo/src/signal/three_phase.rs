// Implements the three-phase signal generator: three sinusoids of equal amplitude,
// offset by 120 degrees, sampled on a shared time grid.

// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use core::f64::consts::PI;

use super::TimeGrid;

/// 120 degrees in radians
const PHASE_SHIFT: f64 = 2.0 * PI / 3.0;

/// Three phase sequences sampled on one `TimeGrid`.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseSignal {
    pub phase1: Vec<f64>,
    pub phase2: Vec<f64>,
    pub phase3: Vec<f64>,
}

impl PhaseSignal {
    /// Samples the three phases over `grid`.
    ///
    /// Phase 1 runs at `2*pi*f*t`. Phases 2 and 3 run at `2*pi*t` with the
    /// `∓2*pi/3` offset scaled by `f`, so the three only form a balanced system
    /// for `f = 1`.
    pub fn generate(grid: &TimeGrid, amplitude: f64, frequency: f64) -> Self {
        let len = grid.len();
        let mut phase1 = Vec::with_capacity(len);
        let mut phase2 = Vec::with_capacity(len);
        let mut phase3 = Vec::with_capacity(len);

        for t in grid.iter() {
            phase1.push(amplitude * (2.0 * PI * frequency * t).sin());
            phase2.push(amplitude * (2.0 * PI * t - PHASE_SHIFT * frequency).sin());
            phase3.push(amplitude * (2.0 * PI * t + PHASE_SHIFT * frequency).sin());
        }

        Self {
            phase1,
            phase2,
            phase3,
        }
    }

    pub fn len(&self) -> usize {
        self.phase1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phase1.is_empty()
    }

    /// Sample `i` as `(a, b, c)`.
    #[inline(always)]
    pub fn abc(&self, i: usize) -> (f64, f64, f64) {
        (self.phase1[i], self.phase2[i], self.phase3[i])
    }

    /// Pointwise sum of the three phases. Zero for a balanced system.
    pub fn sum(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| {
                let (a, b, c) = self.abc(i);
                a + b + c
            })
            .collect()
    }

    /// Largest absolute value of `sum()`, 0 for an empty signal.
    pub fn max_imbalance(&self) -> f64 {
        self.sum().iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}
