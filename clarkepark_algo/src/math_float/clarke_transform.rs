// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

/// Performs the direct Clarke transform to calculate the `alpha` and `beta` components
/// from the phase values `a`, `b`, and `c`.
///
/// # Parameters
/// - `a`: Phase A component.
/// - `b`: Phase B component.
/// - `c`: Phase C component.
///
/// # Returns
/// A tuple `(alpha, beta)` representing the calculated components for the α and β axes.
///
/// The 2/3 scaling keeps the amplitude of a balanced input. Unbalanced input is accepted
/// as is, the zero-sequence part simply drops out of alpha.
#[inline]
pub fn direct_clarke_transform(a: f64, b: f64, c: f64) -> (f64, f64) {
    // Alpha: 2/3 * (V_A - V_B / 2 - V_C / 2)
    let alpha = TWO_THIRDS * (a - 0.5 * b - 0.5 * c);

    // Beta: 2/3 * (sqrt(3)/2 * V_B - sqrt(3)/2 * V_C)
    let beta = TWO_THIRDS * (SQRT3DIV2 * b - SQRT3DIV2 * c);

    (alpha, beta)
}

/// Performs the inverse Clarke transform to calculate phase values (A, B, C)
/// from the `alpha` and `beta` components. Zero-sequence component is assumed to be 0.
///
/// # Returns
/// A tuple `(a, b, c)` representing the calculated phase values for A, B, and C.
#[inline]
pub fn inverse_clarke_transform(alpha: f64, beta: f64) -> (f64, f64, f64) {
    let beta_sqrt3_div2 = SQRT3DIV2 * beta;

    // Set phase A value to the alpha component
    let a = alpha;

    // Calculate phase B value: -1/2 * V_alpha + sqrt(3)/2 * V_beta
    let b = -0.5 * alpha + beta_sqrt3_div2;

    // Calculate phase C value: -1/2 * V_alpha - sqrt(3)/2 * V_beta
    let c = -0.5 * alpha - beta_sqrt3_div2;

    (a, b, c)
}

const TWO_THIRDS: f64 = 2.0 / 3.0;
/// Precalculated sqrt(3)/2
const SQRT3DIV2: f64 = 0.866_025_403_784_438_6;
