// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use core::f64::consts::PI;

use super::{StationarySignal, TimeGrid};
use crate::math_float::park_transform::{direct_park_transform, inverse_park_transform};
use crate::math_float::trigonometry::magnitude;

/// Angle of the rotating frame, `theta[i] = 2*pi*f*t[i] + delta`.
#[derive(Clone, Debug, PartialEq)]
pub struct RotatingAngle {
    pub theta: Vec<f64>,
}

impl RotatingAngle {
    /// Changing `delta` shifts the d-q split of the same stationary vector.
    pub fn new(grid: &TimeGrid, frequency: f64, delta: f64) -> Self {
        let theta = grid.iter().map(|t| 2.0 * PI * frequency * t + delta).collect();
        Self { theta }
    }

    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }
}

/// Rotating frame (d-q) signal.
#[derive(Clone, Debug, PartialEq)]
pub struct RotatingSignal {
    pub id: Vec<f64>,
    pub iq: Vec<f64>,
}

impl RotatingSignal {
    /// Applies the Park transform sample by sample.
    pub fn from_stationary(stationary: &StationarySignal, angle: &RotatingAngle) -> Self {
        let (id, iq) = stationary
            .ialpha
            .iter()
            .zip(&stationary.ibeta)
            .zip(&angle.theta)
            .map(|((&alpha, &beta), &theta)| direct_park_transform(alpha, beta, theta))
            .unzip();
        Self { id, iq }
    }

    /// Inverse Park transform back to the stationary frame.
    pub fn to_stationary(&self, angle: &RotatingAngle) -> StationarySignal {
        let (ialpha, ibeta) = self
            .id
            .iter()
            .zip(&self.iq)
            .zip(&angle.theta)
            .map(|((&d, &q), &theta)| inverse_park_transform(d, q, theta))
            .unzip();
        StationarySignal { ialpha, ibeta }
    }

    pub fn len(&self) -> usize {
        self.id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Length of the d-q vector at every sample.
    pub fn magnitude(&self) -> Vec<f64> {
        self.id
            .iter()
            .zip(&self.iq)
            .map(|(&d, &q)| magnitude(d, q))
            .collect()
    }
}
