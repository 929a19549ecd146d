//! # Form Views
//!
//! Read-only render DTOs for the frontend. Everything here is a formatted
//! string: two decimals on money, blank (never "0.00") for the empty row
//! amount, and a ready-made label for the tax line.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sales Order  SO-202503-001                             2025-03-15      │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Description        Qty      Rate      Disc %      Amount               │
//! │  Widgets            2        100       0           200.00               │
//! │  Fitting service    1        50        10          45.00                │
//! │  ▁▁▁▁▁▁▁▁▁▁▁▁▁      ▁▁       ▁▁        ▁▁          (blank)              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Subtotal                                          245.00               │
//! │  TCS 18%                                            44.10               │
//! │  Adjustment                                          5.00               │
//! │  TOTAL                                             294.10               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use folio_core::line::ItemRow;
use folio_core::numeric::format2;
use folio_core::tax::{TaxBracket, TaxRegime, TaxSelection};
use folio_core::totals::TotalsSummary;

use crate::form::DocumentForm;

/// Renders a rate without a trailing `.0` (`18` rather than `18.0`, but
/// `2.5` stays `2.5`).
fn rate_text(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}", rate as i64)
    } else {
        format!("{}", rate)
    }
}

// =============================================================================
// Row View
// =============================================================================

/// One table row as rendered. Raw field text is echoed back; only the
/// amount is formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub description: String,
    pub quantity: String,
    pub rate: String,
    pub discount_percent: String,

    /// `"200.00"` style, or `""` for the empty amount.
    pub amount: String,
}

impl From<&ItemRow> for RowView {
    fn from(row: &ItemRow) -> Self {
        RowView {
            description: row.description.clone(),
            quantity: row.quantity.clone(),
            rate: row.rate.clone(),
            discount_percent: row.discount_percent.clone(),
            amount: row.amount_display(),
        }
    }
}

// =============================================================================
// Totals View
// =============================================================================

/// The money footer as rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsView {
    pub subtotal: String,

    /// `"TCS 18%"` / `"TDS (10%)"`, or empty when no tax applies.
    pub tax_label: String,

    pub tax_amount: String,
    pub adjustment: String,
    pub grand_total: String,
}

impl TotalsView {
    /// Builds the footer from a computed summary plus the selection and
    /// bracket set that produced it.
    pub fn build(
        summary: &TotalsSummary,
        selection: &TaxSelection,
        brackets: &[TaxBracket],
    ) -> Self {
        let tax_label = match selection.regime {
            TaxRegime::None => String::new(),
            TaxRegime::Withholding => format!("TDS ({}%)", rate_text(summary.tax_rate)),
            TaxRegime::Collected => brackets
                .iter()
                .find(|bracket| bracket.id == selection.selected)
                .map(|bracket| bracket.label.clone())
                .unwrap_or_default(),
        };

        TotalsView {
            subtotal: format2(summary.subtotal),
            tax_label,
            tax_amount: format2(summary.tax_amount),
            adjustment: format2(selection.adjustment_value()),
            grand_total: format2(summary.grand_total),
        }
    }
}

// =============================================================================
// Form View
// =============================================================================

/// The whole form as rendered: header, rows, footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    /// Display name of the document kind, e.g. `"Sales Order"`.
    pub kind: String,

    pub document_number: String,

    /// ISO date, e.g. `"2025-03-15"`.
    pub document_date: String,

    pub notes: Option<String>,
    pub rows: Vec<RowView>,
    pub totals: TotalsView,
}

impl From<&DocumentForm> for FormView {
    fn from(form: &DocumentForm) -> Self {
        let summary = form.totals();

        FormView {
            kind: form.kind().label().to_string(),
            document_number: form.header().document_number.clone(),
            document_date: form.header().document_date.to_string(),
            notes: form.header().notes.clone(),
            rows: form.rows().iter().map(RowView::from).collect(),
            totals: TotalsView::build(&summary, form.selection(), form.registry().brackets()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
