//! # Line Items
//!
//! One editable row of a transaction document and the amount calculation
//! behind it.
//!
//! ## Where Rows Are Used
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Row Editing Flow                                     │
//! │                                                                         │
//! │  User types in qty/rate/discount cell                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemRow stores the raw text exactly as typed                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_amount() ← recomputed for the EDITED ROW ONLY                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  amount: Some(200.0)   → renders "200.00"                               │
//! │  amount: None          → renders blank (untouched rows never show       │
//! │                          "0.00")                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `amount` field is always derivable from the other three; the UI marks
//! it read-only and nothing else may write it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::{coerce_number, format2};

// =============================================================================
// Item Row
// =============================================================================

/// A single row in a document's item table.
///
/// ## Design Notes
/// - Quantity, rate and discount hold the **raw field text**. The presentation
///   layer feeds keystrokes straight in; coercion happens at calculation time
///   so a half-typed value never errors.
/// - `amount` is the derived line amount. `None` is the "empty" amount: an
///   untouched or zeroed-out row renders blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    /// Free-text description of the line.
    pub description: String,

    /// Quantity as typed (may be empty or non-numeric mid-edit).
    pub quantity: String,

    /// Unit rate as typed.
    pub rate: String,

    /// Discount percentage as typed.
    pub discount_percent: String,

    /// Derived line amount; `None` when the computed amount is exactly zero.
    /// Never edited independently.
    pub amount: Option<f64>,
}

impl ItemRow {
    /// Creates a blank row, the state every "Add row" click starts from.
    pub fn new() -> Self {
        ItemRow::default()
    }

    /// Recomputes this row's amount from its own fields.
    ///
    /// Callers invoke this for the edited row only; sibling rows are
    /// untouched.
    pub fn recompute(&mut self) {
        self.amount = compute_amount(&self.quantity, &self.rate, &self.discount_percent);
    }

    /// The amount this row contributes to the subtotal (empty counts as 0).
    #[inline]
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }

    /// Display form of the amount: two decimals, or blank for the empty
    /// amount.
    pub fn amount_display(&self) -> String {
        match self.amount {
            Some(value) => format2(value),
            None => String::new(),
        }
    }

    /// True when the user has typed nothing into any field. Blank rows are
    /// skipped by submission validation and excluded from minimum-row
    /// counts.
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
            && self.quantity.trim().is_empty()
            && self.rate.trim().is_empty()
            && self.discount_percent.trim().is_empty()
    }
}

// =============================================================================
// Amount Calculation
// =============================================================================

/// Computes a line amount from raw quantity, rate and discount text.
///
/// ## Algorithm
/// ```text
/// gross  = quantity × rate
/// amount = gross - gross × discount / 100
/// ```
///
/// Each input is coerced with "parse as float, default 0"; the function is
/// total and pure. An exactly-zero result is returned as `None` so the row
/// renders blank rather than "0.00".
///
/// ## Example
/// ```rust
/// use folio_core::line::compute_amount;
///
/// assert_eq!(compute_amount("2", "100", "0"), Some(200.0));
/// assert_eq!(compute_amount("1", "50", "10"), Some(45.0));
/// assert_eq!(compute_amount("", "", ""), None);
/// ```
pub fn compute_amount(quantity: &str, rate: &str, discount_percent: &str) -> Option<f64> {
    let quantity = coerce_number(quantity);
    let rate = coerce_number(rate);
    let discount = coerce_number(discount_percent);

    let gross = quantity * rate;
    let amount = gross - gross * discount / 100.0;

    if amount == 0.0 {
        None
    } else {
        Some(amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(quantity: &str, rate: &str, discount: &str) -> ItemRow {
        let mut row = ItemRow {
            quantity: quantity.to_string(),
            rate: rate.to_string(),
            discount_percent: discount.to_string(),
            ..ItemRow::default()
        };
        row.recompute();
        row
    }

    #[test]
    fn test_amount_basic() {
        assert_eq!(compute_amount("2", "100", "0"), Some(200.0));
        assert_eq!(compute_amount("3", "9.5", "0"), Some(28.5));
    }

    #[test]
    fn test_amount_with_discount() {
        assert_eq!(compute_amount("1", "50", "10"), Some(45.0));
        assert_eq!(compute_amount("4", "25", "50"), Some(50.0));
    }

    #[test]
    fn test_full_discount_yields_empty() {
        // 100% discount nets to exactly zero, which renders blank
        assert_eq!(compute_amount("2", "100", "100"), None);
    }

    #[test]
    fn test_zero_quantity_yields_empty() {
        assert_eq!(compute_amount("0", "999", "5"), None);
        assert_eq!(compute_amount("", "999", ""), None);
    }

    #[test]
    fn test_garbage_input_coerces_to_zero() {
        // Mid-edit text behaves as zero, never as an error
        assert_eq!(compute_amount("two", "100", "0"), None);
        assert_eq!(compute_amount("2", "1o0", "0"), None);
        assert_eq!(compute_amount("2", "100", "x"), Some(200.0));
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        // The engine does not reject negative values; that is a boundary
        // concern
        assert_eq!(compute_amount("1", "-50", "0"), Some(-50.0));
    }

    #[test]
    fn test_overflowing_product_passes_through() {
        // The non-finite guard covers parsed inputs only; a product that
        // overflows still flows through as computed
        let amount = compute_amount("1e308", "1e308", "50");
        assert!(amount.unwrap().is_nan());
    }

    #[test]
    fn test_row_recompute_and_display() {
        let r = row("2", "100", "0");
        assert_eq!(r.amount, Some(200.0));
        assert_eq!(r.amount_display(), "200.00");

        let r = row("1", "50", "10");
        assert_eq!(r.amount_display(), "45.00");

        let blank = ItemRow::new();
        assert_eq!(blank.amount, None);
        assert_eq!(blank.amount_display(), "");
        assert_eq!(blank.amount_or_zero(), 0.0);
    }

    #[test]
    fn test_fractional_quantity_display() {
        let r = row("1.5", "99.9", "0");
        assert_eq!(r.amount_display(), "149.85");
    }

    #[test]
    fn test_blank_detection() {
        assert!(ItemRow::new().is_blank());

        let mut spaced = ItemRow::new();
        spaced.quantity = "  ".to_string();
        assert!(spaced.is_blank());

        let mut described = ItemRow::new();
        described.description = "Consulting".to_string();
        assert!(!described.is_blank());

        assert!(!row("2", "100", "0").is_blank());
    }
}
