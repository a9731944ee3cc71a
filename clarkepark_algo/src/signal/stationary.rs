// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use super::PhaseSignal;
use crate::math_float::clarke_transform::{direct_clarke_transform, inverse_clarke_transform};
use crate::math_float::trigonometry::magnitude;

/// Two-axis stationary frame (alpha-beta) signal.
#[derive(Clone, Debug, PartialEq)]
pub struct StationarySignal {
    pub ialpha: Vec<f64>,
    pub ibeta: Vec<f64>,
}

impl StationarySignal {
    /// Applies the Clarke transform sample by sample (`ia = phase1`, `ib = phase2`,
    /// `ic = phase3`).
    pub fn from_phases(phases: &PhaseSignal) -> Self {
        let (ialpha, ibeta) = (0..phases.len())
            .map(|i| {
                let (ia, ib, ic) = phases.abc(i);
                direct_clarke_transform(ia, ib, ic)
            })
            .unzip();
        Self { ialpha, ibeta }
    }

    /// Inverse Clarke transform back to three phases.
    pub fn to_phases(&self) -> PhaseSignal {
        let len = self.len();
        let mut phase1 = Vec::with_capacity(len);
        let mut phase2 = Vec::with_capacity(len);
        let mut phase3 = Vec::with_capacity(len);
        for (&alpha, &beta) in self.ialpha.iter().zip(&self.ibeta) {
            let (a, b, c) = inverse_clarke_transform(alpha, beta);
            phase1.push(a);
            phase2.push(b);
            phase3.push(c);
        }
        PhaseSignal {
            phase1,
            phase2,
            phase3,
        }
    }

    pub fn len(&self) -> usize {
        self.ialpha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ialpha.is_empty()
    }

    /// Length of the alpha-beta vector at every sample.
    pub fn magnitude(&self) -> Vec<f64> {
        self.ialpha
            .iter()
            .zip(&self.ibeta)
            .map(|(&alpha, &beta)| magnitude(alpha, beta))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::TimeGrid;

    fn default_stationary() -> (PhaseSignal, StationarySignal) {
        let grid = TimeGrid::new(0.0, 2.0, 0.005).unwrap();
        let phases = PhaseSignal::generate(&grid, 50.0, 1.0);
        let stationary = StationarySignal::from_phases(&phases);
        (phases, stationary)
    }

    #[test]
    fn first_sample_points_along_negative_beta() {
        let (_, stationary) = default_stationary();
        assert!(stationary.ialpha[0].abs() < 1e-9);
        assert!((stationary.ibeta[0] + 50.0).abs() < 1e-9);
    }

    #[test]
    fn alpha_follows_phase_one_for_balanced_input() {
        let (phases, stationary) = default_stationary();
        for (alpha, a) in stationary.ialpha.iter().zip(&phases.phase1) {
            assert!((alpha - a).abs() < 1e-9);
        }
    }

    #[test]
    fn balanced_input_has_constant_magnitude() {
        let (_, stationary) = default_stationary();
        for m in stationary.magnitude() {
            assert!((m - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn inverse_restores_phases() {
        let (phases, stationary) = default_stationary();
        let restored = stationary.to_phases();
        assert_eq!(restored.len(), phases.len());
        for i in 0..phases.len() {
            let (a, b, c) = phases.abc(i);
            let (ra, rb, rc) = restored.abc(i);
            assert!((a - ra).abs() < 1e-9);
            assert!((b - rb).abs() < 1e-9);
            assert!((c - rc).abs() < 1e-9);
        }
    }

    #[test]
    fn unbalanced_input_is_still_transformed() {
        let phases = PhaseSignal {
            phase1: vec![1.0],
            phase2: vec![1.0],
            phase3: vec![0.0],
        };
        let stationary = StationarySignal::from_phases(&phases);
        assert!((stationary.ialpha[0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((stationary.ibeta[0] - 3f64.sqrt() / 3.0).abs() < 1e-12);
    }
}
