//! Core constants and shared angle primitives for the Kerbol system catalog.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Gravitational constant (m³·kg⁻¹·s⁻²).
    pub const G: f64 = 6.674e-11;
    /// One full turn in radians.
    pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
    /// A quarter turn in radians.
    pub const HALF_PI: f64 = 0.5 * std::f64::consts::PI;
}

/// Angle reduction helpers shared across crates.
pub mod angles {
    use super::constants::TWO_PI;

    /// Reduce an angle in radians to the half-open interval `[0, 2π)`.
    ///
    /// Rust's `%` keeps the dividend's sign, so a negative input would
    /// otherwise come back negative; the second step folds it into range.
    #[inline]
    pub fn normalize_two_pi(raw: f64) -> f64 {
        let rem = raw % TWO_PI;
        if rem < 0.0 { rem + TWO_PI } else { rem }
    }
}
