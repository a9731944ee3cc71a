// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use crate::error::InvalidRangeError;

/// Relative tolerance used when `(t_end - t0) / dt` lands next to an integer.
const STEP_ROUNDING: f64 = 1e-9;

/// Largest grid a `Vec<f64>` can address.
const MAX_SAMPLES: usize = isize::MAX as usize / core::mem::size_of::<f64>();

/// Evenly spaced time samples from `t0` to `t_end` inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    samples: Vec<f64>,
}

impl TimeGrid {
    /// Builds the grid by sample count rather than by accumulation, so the
    /// endpoint survives floating point drift.
    pub fn new(t0: f64, t_end: f64, dt: f64) -> Result<Self, InvalidRangeError> {
        if !(t0.is_finite() && t_end.is_finite() && dt.is_finite()) {
            return Err(InvalidRangeError::NonFinite { t0, t_end, dt });
        }
        if dt <= 0.0 {
            return Err(InvalidRangeError::NonPositiveStep { dt });
        }
        if t_end < t0 {
            return Err(InvalidRangeError::ReversedRange { t0, t_end });
        }

        let len = Self::sample_count(t0, t_end, dt)
            .ok_or(InvalidRangeError::TooManySamples { t0, t_end, dt })?;
        let samples = (0..len).map(|i| t0 + i as f64 * dt).collect();

        tracing::debug!(t0, t_end, dt, len, "time grid created");
        Ok(Self { samples })
    }

    /// `floor((t_end - t0) / dt) + 1`, where a ratio within rounding noise of an
    /// integer counts as that integer (2 / 0.005 is 400, not 399).
    /// `None` when the count does not fit in memory.
    fn sample_count(t0: f64, t_end: f64, dt: f64) -> Option<usize> {
        let steps = (t_end - t0) / dt;
        let nearest = steps.round();
        let steps = if (steps - nearest).abs() <= STEP_ROUNDING * nearest.max(1.0) {
            nearest
        } else {
            steps.floor()
        };
        if !steps.is_finite() || steps >= MAX_SAMPLES as f64 {
            return None;
        }
        Some(steps as usize + 1)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Never true for a validated grid.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First sample.
    pub fn start(&self) -> f64 {
        self.samples[0]
    }

    /// Last sample.
    pub fn end(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_has_401_samples_and_keeps_endpoint() {
        let grid = TimeGrid::new(0.0, 2.0, 0.005).unwrap();
        assert_eq!(grid.len(), 401);
        assert_eq!(grid.start(), 0.0);
        assert!((grid.end() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn samples_are_strictly_increasing_and_evenly_spaced() {
        let grid = TimeGrid::new(-1.0, 1.0, 0.1).unwrap();
        assert_eq!(grid.len(), 21);
        for pair in grid.as_slice().windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn partial_last_step_is_floored() {
        let grid = TimeGrid::new(0.0, 1.0, 0.3).unwrap();
        assert_eq!(grid.len(), 4);
        assert!((grid.end() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn degenerate_range_gives_single_sample() {
        let grid = TimeGrid::new(1.5, 1.5, 0.01).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.start(), 1.5);
    }

    #[test]
    fn non_positive_step_is_rejected() {
        assert_eq!(
            TimeGrid::new(0.0, 2.0, 0.0),
            Err(InvalidRangeError::NonPositiveStep { dt: 0.0 })
        );
        assert!(matches!(
            TimeGrid::new(0.0, 2.0, -0.1),
            Err(InvalidRangeError::NonPositiveStep { .. })
        ));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(
            TimeGrid::new(2.0, 0.0, 0.005),
            Err(InvalidRangeError::ReversedRange { t0: 2.0, t_end: 0.0 })
        );
    }

    #[test]
    fn tiny_step_is_rejected_instead_of_overflowing() {
        assert_eq!(
            TimeGrid::new(0.0, 1.0, 5e-324),
            Err(InvalidRangeError::TooManySamples {
                t0: 0.0,
                t_end: 1.0,
                dt: 5e-324
            })
        );
        // Span overflows to infinity
        assert!(matches!(
            TimeGrid::new(-f64::MAX, f64::MAX, 1.0),
            Err(InvalidRangeError::TooManySamples { .. })
        ));
        assert!(matches!(
            TimeGrid::new(0.0, 1e300, 1e-10),
            Err(InvalidRangeError::TooManySamples { .. })
        ));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(matches!(
            TimeGrid::new(0.0, f64::INFINITY, 0.005),
            Err(InvalidRangeError::NonFinite { .. })
        ));
        assert!(matches!(
            TimeGrid::new(0.0, 2.0, f64::NAN),
            Err(InvalidRangeError::NonFinite { .. })
        ));
    }
}
