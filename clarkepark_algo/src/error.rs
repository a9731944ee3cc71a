// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use thiserror::Error;

/// Rejected signal constants. Raised before any sequence is allocated, so a bad
/// range never turns into an empty or negative-length grid.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidRangeError {
    /// One of the grid bounds or the step is NaN or infinite.
    #[error("time grid bounds must be finite (t0 = {t0}, t_end = {t_end}, dt = {dt})")]
    NonFinite { t0: f64, t_end: f64, dt: f64 },

    /// Step is zero or negative.
    #[error("time step must be positive, got dt = {dt}")]
    NonPositiveStep { dt: f64 },

    /// End of the grid lies before its start.
    #[error("time grid end {t_end} lies before its start {t0}")]
    ReversedRange { t0: f64, t_end: f64 },

    /// Range divided by step gives more samples than can be stored.
    #[error("time grid from {t0} to {t_end} with dt = {dt} has too many samples")]
    TooManySamples { t0: f64, t_end: f64, dt: f64 },

    /// Amplitude, frequency or angle offset is NaN or infinite.
    #[error("signal parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}
