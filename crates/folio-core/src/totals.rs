//! # Totals Engine
//!
//! Folds the full row set and the current tax selection into one summary.
//!
//! ## Pipeline
//! ```text
//! ┌──────────┐   sum amounts    ┌──────────┐
//! │ ItemRow[]│ ───────────────► │ subtotal │
//! └──────────┘                  └────┬─────┘
//!                                    │
//! ┌──────────────┐  resolve rate     ▼
//! │ TaxSelection │ ───────────► tax = round2(subtotal * rate / 100)
//! │ TaxBracket[] │                   │
//! └──────────────┘                   ▼
//!              grand = subtotal ± tax + adjustment
//!                              (− for withholding, + otherwise)
//! ```
//!
//! The summary is a derived value: recompute it from the inputs on every
//! change, never store and patch it. Same input tuple, same output,
//! regardless of the edit sequence that produced the inputs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::line::ItemRow;
use crate::numeric::{coerce_number, round2};
use crate::tax::{TaxBracket, TaxRegime, TaxSelection};

// =============================================================================
// Totals Summary
// =============================================================================

/// The computed money footer of one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TotalsSummary {
    /// Sum of all row amounts, unrounded.
    pub subtotal: f64,

    /// The resolved tax rate as a percentage.
    pub tax_rate: f64,

    /// `round2(subtotal * tax_rate / 100)`, always non-negative for
    /// non-negative subtotals; the sign rule lives in `grand_total`.
    pub tax_amount: f64,

    /// `subtotal - tax_amount + adjustment` under withholding,
    /// `subtotal + tax_amount + adjustment` otherwise.
    pub grand_total: f64,
}

// =============================================================================
// Rate Resolution
// =============================================================================

/// Resolves the active tax rate from the selection and the bracket set.
///
/// - [`TaxRegime::None`]: always 0, whatever the selector holds.
/// - [`TaxRegime::Withholding`]: the selector **is** the percentage, as
///   typed; unparsable text counts as 0.
/// - [`TaxRegime::Collected`]: the selector is a bracket id; a miss (stale
///   id, typo) resolves to 0 rather than failing.
pub fn resolve_rate(selection: &TaxSelection, brackets: &[TaxBracket]) -> f64 {
    match selection.regime {
        TaxRegime::None => 0.0,
        TaxRegime::Withholding => coerce_number(&selection.selected),
        TaxRegime::Collected => brackets
            .iter()
            .find(|bracket| bracket.id == selection.selected)
            .map(|bracket| bracket.rate_percent)
            .unwrap_or(0.0),
    }
}

// =============================================================================
// Totals Computation
// =============================================================================

/// Computes the totals summary for the whole document.
///
/// Pure and total: no input combination fails. Empty rows contribute 0 to
/// the subtotal, the tax amount is rounded to cents, and the manual
/// adjustment is added as-is; the regime never inverts it.
///
/// ## Example
/// ```
/// use folio_core::line::ItemRow;
/// use folio_core::tax::{TaxRegime, TaxRegistry, TaxSelection};
/// use folio_core::totals::compute_totals;
///
/// let mut row = ItemRow::new();
/// row.quantity = "2".to_string();
/// row.rate = "100".to_string();
/// row.recompute();
///
/// let registry = TaxRegistry::new();
/// let selection = TaxSelection {
///     regime: TaxRegime::Collected,
///     selected: "tcs_18".to_string(),
///     adjustment: String::new(),
/// };
///
/// let totals = compute_totals(&[row], &selection, registry.brackets());
/// assert_eq!(totals.subtotal, 200.0);
/// assert_eq!(totals.tax_amount, 36.0);
/// assert_eq!(totals.grand_total, 236.0);
/// ```
pub fn compute_totals(
    rows: &[ItemRow],
    selection: &TaxSelection,
    brackets: &[TaxBracket],
) -> TotalsSummary {
    let subtotal: f64 = rows.iter().map(ItemRow::amount_or_zero).sum();

    let tax_rate = resolve_rate(selection, brackets);
    let tax_amount = round2(subtotal * tax_rate / 100.0);

    let signed_tax = match selection.regime {
        TaxRegime::Withholding => -tax_amount,
        TaxRegime::None | TaxRegime::Collected => tax_amount,
    };

    let grand_total = subtotal + signed_tax + selection.adjustment_value();

    TotalsSummary {
        subtotal,
        tax_rate,
        tax_amount,
        grand_total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::TaxRegistry;

    fn row(quantity: &str, rate: &str, discount: &str) -> ItemRow {
        let mut row = ItemRow::new();
        row.quantity = quantity.to_string();
        row.rate = rate.to_string();
        row.discount_percent = discount.to_string();
        row.recompute();
        row
    }

    fn selection(regime: TaxRegime, selected: &str, adjustment: &str) -> TaxSelection {
        TaxSelection {
            regime,
            selected: selected.to_string(),
            adjustment: adjustment.to_string(),
        }
    }

    #[test]
    fn test_regime_sign_law() {
        // Fixed subtotal 1000, rate 10%, no adjustment.
        let rows = vec![row("10", "100", "0")];
        let brackets = vec![TaxBracket::new("tcs_10", "TCS 10%", 10.0)];

        let withheld = compute_totals(
            &rows,
            &selection(TaxRegime::Withholding, "10", ""),
            &brackets,
        );
        assert_eq!(withheld.tax_amount, 100.0);
        assert_eq!(withheld.grand_total, 900.0);

        let collected = compute_totals(
            &rows,
            &selection(TaxRegime::Collected, "tcs_10", ""),
            &brackets,
        );
        assert_eq!(collected.tax_amount, 100.0);
        assert_eq!(collected.grand_total, 1100.0);

        let untaxed = compute_totals(&rows, &selection(TaxRegime::None, "10", ""), &brackets);
        assert_eq!(untaxed.tax_rate, 0.0);
        assert_eq!(untaxed.grand_total, 1000.0);
    }

    #[test]
    fn test_none_regime_ignores_selector() {
        let rows = vec![row("1", "500", "0")];
        let registry = TaxRegistry::new();

        let totals = compute_totals(
            &rows,
            &selection(TaxRegime::None, "tcs_18", "0"),
            registry.brackets(),
        );
        assert_eq!(totals.tax_rate, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.grand_total, 500.0);
    }

    #[test]
    fn test_withholding_selector_is_raw_percentage() {
        let rows = vec![row("1", "2000", "0")];

        let totals = compute_totals(&rows, &selection(TaxRegime::Withholding, "2.5", ""), &[]);
        assert_eq!(totals.tax_rate, 2.5);
        assert_eq!(totals.tax_amount, 50.0);
        assert_eq!(totals.grand_total, 1950.0);
    }

    #[test]
    fn test_withholding_garbage_selector_means_zero_rate() {
        let rows = vec![row("1", "2000", "0")];

        let totals = compute_totals(&rows, &selection(TaxRegime::Withholding, "abc", ""), &[]);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.grand_total, 2000.0);
    }

    #[test]
    fn test_collected_unknown_bracket_degrades_to_zero() {
        let rows = vec![row("1", "100", "0")];
        let registry = TaxRegistry::new();

        let totals = compute_totals(
            &rows,
            &selection(TaxRegime::Collected, "tcs_99", ""),
            registry.brackets(),
        );
        assert_eq!(totals.tax_rate, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.grand_total, 100.0);
    }

    #[test]
    fn test_adjustment_added_even_under_withholding() {
        let rows = vec![row("1", "1000", "0")];

        let totals = compute_totals(
            &rows,
            &selection(TaxRegime::Withholding, "10", "-25"),
            &[],
        );
        // 1000 - 100 + (-25)
        assert_eq!(totals.grand_total, 875.0);
    }

    #[test]
    fn test_unparsable_adjustment_counts_as_zero() {
        let rows = vec![row("1", "100", "0")];

        let totals = compute_totals(&rows, &selection(TaxRegime::None, "", "n/a"), &[]);
        assert_eq!(totals.grand_total, 100.0);
    }

    #[test]
    fn test_tax_amount_rounded_to_cents() {
        // 45 * 7.77% = 3.4965 → 3.50 on the summary.
        let rows = vec![row("1", "45", "0")];
        let brackets = vec![TaxBracket::new("odd", "Odd 7.77%", 7.77)];

        let totals = compute_totals(
            &rows,
            &selection(TaxRegime::Collected, "odd", ""),
            &brackets,
        );
        assert_eq!(totals.tax_amount, 3.5);
        assert_eq!(totals.grand_total, 48.5);
    }

    #[test]
    fn test_empty_rows_total_to_adjustment() {
        let totals = compute_totals(&[], &selection(TaxRegime::None, "", "12"), &[]);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.grand_total, 12.0);
    }

    #[test]
    fn test_blank_rows_contribute_nothing() {
        let rows = vec![row("2", "100", "0"), ItemRow::new(), ItemRow::new()];

        let totals = compute_totals(&rows, &selection(TaxRegime::None, "", ""), &[]);
        assert_eq!(totals.subtotal, 200.0);
    }

    #[test]
    fn test_same_inputs_same_summary() {
        let rows = vec![row("3", "33.5", "5"), row("1", "120", "0")];
        let registry = TaxRegistry::new();
        let selection = selection(TaxRegime::Collected, "tcs_12", "1.5");

        let first = compute_totals(&rows, &selection, registry.brackets());
        let second = compute_totals(&rows, &selection, registry.brackets());
        assert_eq!(first, second);
    }

    #[test]
    fn test_end_to_end_document() {
        // Two priced rows plus one untouched row.
        let rows = vec![row("2", "100", "0"), row("1", "50", "10"), ItemRow::new()];

        assert_eq!(rows[0].amount_display(), "200.00");
        assert_eq!(rows[1].amount_display(), "45.00");
        assert_eq!(rows[2].amount_display(), "");

        let registry = TaxRegistry::new();
        let selection = selection(TaxRegime::Collected, "tcs_18", "5");

        let totals = compute_totals(&rows, &selection, registry.brackets());
        assert_eq!(totals.subtotal, 245.0);
        assert_eq!(totals.tax_rate, 18.0);
        assert_eq!(totals.tax_amount, 44.1);
        assert_eq!(totals.grand_total, 294.1);
    }
}
