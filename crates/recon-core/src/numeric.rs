//! Field coercion helpers.
//!
//! Export cells are loosely typed: pallet counts arrive as `"5"` or `"5.0"`,
//! dwell times as `"80 hrs"`, and blanks are common.  Every helper here
//! returns a definite number and falls back to zero when nothing numeric
//! leads the cell, so metric outputs never depend on a missing value.

use std::sync::OnceLock;

use regex::Regex;

/// Longest leading decimal literal, optional exponent included, or a
/// signed `Infinity`.
fn float_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)")
            .expect("float prefix pattern is valid")
    })
}

/// Leading optionally-signed run of digits.
fn int_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+").expect("int prefix pattern is valid"))
}

/// Trim and upper-case a cell for comparison.
///
/// ```
/// use recon_core::numeric::normalize;
///
/// assert_eq!(normalize("  ps12 "), "PS12");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Parse the numeric prefix of `value` as a float.
///
/// Leading whitespace is skipped and trailing text ignored, so `"5 plt"`
/// yields `5.0`.  Cells with no numeric prefix yield `0.0`; literals too
/// large for `f64` yield infinity.
///
/// ```
/// use recon_core::numeric::parse_float_or_zero;
///
/// assert_eq!(parse_float_or_zero("12.5"), 12.5);
/// assert_eq!(parse_float_or_zero(" 3 pallets"), 3.0);
/// assert_eq!(parse_float_or_zero("n/a"), 0.0);
/// ```
pub fn parse_float_or_zero(value: &str) -> f64 {
    float_prefix()
        .find(value.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

/// Parse the integer prefix of `value`.
///
/// A fractional part is truncated by virtue of stopping at the first
/// non-digit: `"10.7"` yields `10`.  Anything unparsable yields `0`.
///
/// ```
/// use recon_core::numeric::parse_int_or_zero;
///
/// assert_eq!(parse_int_or_zero("10.7"), 10);
/// assert_eq!(parse_int_or_zero("-4"), -4);
/// assert_eq!(parse_int_or_zero(""), 0);
/// ```
pub fn parse_int_or_zero(value: &str) -> i64 {
    int_prefix()
        .find(value.trim_start())
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Parse a yard dwell cell such as `"80hrs"` or `"72.5 HRS"` into hours.
///
/// Only the first `hrs` unit suffix is removed.
pub fn parse_hours(value: &str) -> f64 {
    let lowered = value.to_lowercase().replacen("hrs", "", 1);
    parse_float_or_zero(lowered.trim())
}
