//! # Numeric Coercion
//!
//! Lenient parsing of raw form-field text, shared by every calculation in the
//! engine.
//!
//! ## The Permissiveness Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A user typing "12." or "-" mid-value must NEVER see an error.          │
//! │                                                                         │
//! │  ""        → 0.0        "2"        → 2.0                                │
//! │  "  1.5 "  → 1.5        "abc"      → 0.0                                │
//! │  "12."     → 12.0       "1,000"    → 0.0   (thousands separators are    │
//! │  "-3"      → -3.0                          presentation sugar)          │
//! │  "NaN"     → 0.0        "inf"      → 0.0   (non-finite parses read as 0)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed input is recovered locally by coercion to zero; it is never
//! surfaced, never thrown. Stricter checks (e.g. "quantity must be positive")
//! belong to the submission boundary, see [`crate::validation`].

// =============================================================================
// Coercion
// =============================================================================

/// Coerces raw field text to a number: parse as float, default to 0.
///
/// ## Example
/// ```rust
/// use folio_core::numeric::coerce_number;
///
/// assert_eq!(coerce_number("2"), 2.0);
/// assert_eq!(coerce_number(""), 0.0);
/// assert_eq!(coerce_number("not a number"), 0.0);
/// ```
pub fn coerce_number(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

// =============================================================================
// Display Rounding
// =============================================================================

/// Rounds to two decimal places.
///
/// The subtotal accumulates at full precision so rounding error cannot
/// compound across rows; this pins the tax line to cent granularity and
/// backs the two-decimal display output.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a value with exactly two decimal places, e.g. `45` → `"45.00"`.
///
/// ## Example
/// ```rust
/// use folio_core::numeric::format2;
///
/// assert_eq!(format2(200.0), "200.00");
/// assert_eq!(format2(44.1), "44.10");
/// ```
pub fn format2(value: f64) -> String {
    format!("{:.2}", value)
}

// =============================================================================
// Unit Tests
// =============================================================================
