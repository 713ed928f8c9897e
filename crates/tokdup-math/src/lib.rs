//! Deterministic numeric helpers shared by the clustering and reporting crates.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Return a 4-decimal ratio and guard division by zero.
#[must_use]
pub fn safe_ratio(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        round_f64(numer as f64 / denom as f64, 4)
    }
}

/// Absolute difference between `other` and `base`, as a percentage of `base`.
///
/// A zero `base` yields `f64::INFINITY` unless `other` is zero too, so that
/// any finite tolerance rejects the pair.
#[must_use]
pub fn relative_deviation_pct(base: usize, other: usize) -> f64 {
    let diff = base.abs_diff(other);
    if diff == 0 {
        return 0.0;
    }
    if base == 0 {
        return f64::INFINITY;
    }
    diff as f64 * 100.0 / base as f64
}

/// Express a fraction in percent, rounded to 4 decimals.
#[must_use]
pub fn to_percent(fraction: f64) -> f64 {
    round_f64(fraction * 100.0, 4)
}
