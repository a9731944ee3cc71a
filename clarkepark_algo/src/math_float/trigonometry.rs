// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

/// Computes the sine and cosine of an angle in radians.
#[inline(always)]
pub fn angle2sincos(angle: f64) -> (f64, f64) {
    angle.sin_cos()
}

/// Rotates the vector `(x, y)` by the angle given as `(sin, cos)`.
///
/// ### Arguments
/// * `vector` - A tuple `(x, y)` to be rotated.
/// * `offset` - A tuple `(sin, cos)` of the rotation angle.
///
/// ### Returns
/// * A tuple `(x', y')`, the vector rotated counter-clockwise.
///
/// ### Notes
/// * Pass `(-sin, cos)` to rotate clockwise.
#[inline(always)]
pub fn rotate_sincos(vector: (f64, f64), offset: (f64, f64)) -> (f64, f64) {
    let (x, y) = vector;
    let (sin, cos) = offset;
    (x * cos - y * sin, x * sin + y * cos)
}

/// Length of the vector `(x, y)`.
#[inline(always)]
pub fn magnitude(x: f64, y: f64) -> f64 {
    x.hypot(y)
}
