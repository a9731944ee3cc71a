// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use crate::error::InvalidRangeError;

/// Constants driving both pipelines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalConfig {
    pub t0: f64,        // Starting time (s)
    pub t_end: f64,     // Ending time (s), included in the grid
    pub dt: f64,        // Time interval (s)
    pub amplitude: f64, // Amplitude of the phases (V)
    pub frequency: f64, // Frequency of the phases (Hz)
    pub delta: f64,     // Offset added to the rotating frame angle (rad)
}

impl SignalConfig {
    /// 2 s of a 50 V, 1 Hz system sampled every 5 ms (401 samples).
    /// 1 Hz keeps the animation readable.
    pub const DEFAULT: SignalConfig = SignalConfig {
        t0: 0.0,
        t_end: 2.0,
        dt: 0.005,
        amplitude: 50.0,
        frequency: 1.0,
        delta: 0.0,
    };

    /// Checks the waveform parameters. Grid bounds are checked by `TimeGrid::new`.
    pub fn validate_waveform(&self) -> Result<(), InvalidRangeError> {
        let params = [
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("delta", self.delta),
        ];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(InvalidRangeError::NonFiniteParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        let cfg = SignalConfig::default();
        assert_eq!(cfg.t0, 0.0);
        assert_eq!(cfg.t_end, 2.0);
        assert_eq!(cfg.dt, 0.005);
        assert_eq!(cfg.amplitude, 50.0);
        assert_eq!(cfg.frequency, 1.0);
        assert_eq!(cfg.delta, 0.0);
    }

    #[test]
    fn non_finite_waveform_parameter_is_rejected() {
        let cfg = SignalConfig {
            frequency: f64::NAN,
            ..SignalConfig::DEFAULT
        };
        match cfg.validate_waveform() {
            Err(InvalidRangeError::NonFiniteParameter { name, .. }) => assert_eq!(name, "frequency"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(SignalConfig::DEFAULT.validate_waveform().is_ok());
    }
}
