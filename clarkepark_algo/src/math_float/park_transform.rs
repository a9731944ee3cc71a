// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use super::trigonometry::{angle2sincos, rotate_sincos};

/// Performs the direct Park transform: projects the stationary `(alpha, beta)` vector
/// onto a frame rotated by `theta`.
///
/// `d = cos(theta) * alpha + sin(theta) * beta`
/// `q = -sin(theta) * alpha + cos(theta) * beta`
#[inline]
pub fn direct_park_transform(alpha: f64, beta: f64, theta: f64) -> (f64, f64) {
    let (sin, cos) = angle2sincos(theta);
    // Frame turns forward, so the vector turns back by the same angle
    rotate_sincos((alpha, beta), (-sin, cos))
}

/// Performs the inverse Park transform, returning the stationary `(alpha, beta)` vector.
#[inline]
pub fn inverse_park_transform(d: f64, q: f64, theta: f64) -> (f64, f64) {
    rotate_sincos((d, q), angle2sincos(theta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    #[test]
    fn zero_angle_is_identity() {
        let (d, q) = direct_park_transform(0.0, -50.0, 0.0);
        assert!(d.abs() < EPS);
        assert!((q + 50.0).abs() < EPS);
    }

    #[test]
    fn matches_rotation_matrix() {
        let (alpha, beta, theta) = (12.0, -7.5, 0.8);
        let (d, q) = direct_park_transform(alpha, beta, theta);
        assert!((d - (theta.cos() * alpha + theta.sin() * beta)).abs() < EPS);
        assert!((q - (-theta.sin() * alpha + theta.cos() * beta)).abs() < EPS);
    }

    #[test]
    fn vector_aligned_with_frame_is_pure_d() {
        let (d, q) = direct_park_transform(0.0, 2.0, FRAC_PI_2);
        assert!((d - 2.0).abs() < EPS);
        assert!(q.abs() < EPS);
    }

    #[test]
    fn inverse_undoes_direct() {
        let (d, q) = direct_park_transform(1.5, 4.0, PI / 5.0);
        let (alpha, beta) = inverse_park_transform(d, q, PI / 5.0);
        assert!((alpha - 1.5).abs() < EPS);
        assert!((beta - 4.0).abs() < EPS);
    }
}
