//! Common test utilities for stat4trading.
//!
//! Float comparison and deterministic synthetic price series.

#![allow(dead_code)]

/// Tiered float comparison.
///
/// - NaN only matches NaN
/// - For values near zero (|expected| < 1e-10): absolute tolerance
/// - Otherwise: relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{context}: expected NaN but got {actual}");
        return;
    }
    assert!(!actual.is_nan(), "{context}: got NaN but expected {expected}");

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{context}: expected {expected} but got {actual} (diff: {diff})"
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{context}: expected {expected} but got {actual} (rel diff: {rel_diff:.2e})"
    );
}

/// Assert two series are equal with tolerance.
pub fn assert_series_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{name}: length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert_float_eq(a, e, epsilon, &format!("{name}[{i}]"));
    }
}

// ============================================================================
// Synthetic Data Generators
// ============================================================================

/// Constant price series.
pub fn generate_constant(value: f64, len: usize) -> Vec<f64> {
    vec![value; len]
}

/// Linear price series.
pub fn generate_linear(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Sine wave around `center`.
pub fn generate_sine(center: f64, amplitude: f64, period: usize, len: usize) -> Vec<f64> {
    use std::f64::consts::PI;
    (0..len)
        .map(|i| center + amplitude * (2.0 * PI * i as f64 / period as f64).sin())
        .collect()
}

/// Random walk with a deterministic seed, floored at 0.01.
pub fn generate_random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next_unit = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    let mut prices = Vec::with_capacity(len);
    let mut last = start;
    for i in 0..len {
        if i > 0 {
            last = (last + next_unit() * volatility).max(0.01);
        }
        prices.push(last);
    }
    prices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_nan() {
        assert_float_eq(f64::NAN, f64::NAN, 1e-10, "test");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_nan_mismatch() {
        assert_float_eq(1.0, f64::NAN, 1e-10, "test");
    }

    #[test]
    fn test_generate_random_walk_deterministic() {
        let a = generate_random_walk(100.0, 1.0, 10, 12345);
        let b = generate_random_walk(100.0, 1.0, 10, 12345);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }
}
