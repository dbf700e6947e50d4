//! Half-up rounding used for every derived figure.
//!
//! The semantics are multiply, round half-up, divide: `floor(x * 10^n +
//! 0.5) / 10^n`. Derived values are display precision by contract, so the
//! rounding happens at computation time rather than at render time.

/// Round half-up to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Round half-up to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
