//! Numeric coercion and the arithmetic guards every calculator relies on.
//!
//! Nothing in here fails loudly: unparsable text becomes an absent
//! [`NumericInput`], undefined divisions become `0.0`, and non-finite
//! values never reach the display layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Default relative tolerance used by [`approx_eq`] callers (2%).
pub const DEFAULT_TOLERANCE: f64 = 0.02;

/// A decimal value typed into a form field, or nothing yet.
///
/// Absent values never take part in arithmetic: [`NumericInput::or_nan`]
/// carries "not computable" into a formula that is total over non-finite
/// input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericInput(pub Option<f64>);

impl NumericInput {
    pub fn parse(text: &str) -> Self {
        Self(parse_decimal(text))
    }

    pub fn value(self) -> Option<f64> {
        self.0
    }

    pub fn or_nan(self) -> f64 {
        self.0.unwrap_or(f64::NAN)
    }
}

/// Parse a decimal typed with either `.` or `,` as the separator.
///
/// Returns `None` for empty, unparsable or non-finite text so callers can
/// tell "unset" apart from zero.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Round to two decimal places for display. Non-finite input yields `0.0`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scaled = value * 100.0;
    // Magnitudes this large carry no fractional digits.
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / 100.0;
    // Normalise -0.0 so it never prints as "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Round to the nearest integer. Non-finite input yields `0.0`.
pub fn round_whole(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let rounded = value.round();
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format a value the way result panels show it: two decimals at most,
/// trailing zeros dropped.
pub fn display(value: f64) -> String {
    format!("{}", round2(value))
}

/// Division that returns `0.0` when either operand is non-finite or the
/// divisor is not strictly positive. The quotient is not rounded.
pub fn safe_div(numerator: f64, divisor: f64) -> f64 {
    if !numerator.is_finite() || !divisor.is_finite() || divisor <= 0.0 {
        return 0.0;
    }
    numerator / divisor
}

/// Relative equality: `|actual - expected| <= tolerance * max(1, |expected|)`.
///
/// The floor of 1 keeps the tolerance meaningful near zero. Non-finite
/// operands never compare equal.
pub fn approx_eq(actual: f64, expected: f64, tolerance: f64) -> bool {
    if !actual.is_finite() || !expected.is_finite() {
        return false;
    }
    (actual - expected).abs() <= tolerance * expected.abs().max(1.0)
}
