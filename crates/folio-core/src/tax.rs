//! # Tax Model
//!
//! The two mutually-exclusive tax regimes, the selectable bracket set for the
//! collected regime, and the per-document tax selection.
//!
//! ## Regime Cheat Sheet
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Regime        Selector holds          Effect on grand total            │
//! │  ──────        ──────────────          ─────────────────────            │
//! │  None          (nothing)               subtotal + adjustment            │
//! │  Withholding   raw percentage ("10")   subtotal - tax + adjustment      │
//! │  Collected     bracket id ("tcs_18")   subtotal + tax + adjustment      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Withholding tax (TDS) is deducted by the payer before disbursing, so it
//! reduces what the issuer nets; collected tax (TCS) is charged on top.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::coerce_number;

// =============================================================================
// Tax Regime
// =============================================================================

/// The active tax regime for one document. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    /// No tax applied.
    None,
    /// TDS: tax withheld from the payable amount (subtracted).
    Withholding,
    /// TCS: tax collected on top of the amount (added).
    Collected,
}

impl Default for TaxRegime {
    fn default() -> Self {
        TaxRegime::None
    }
}

// =============================================================================
// Tax Bracket
// =============================================================================

/// A named, selectable tax rate option within the collected regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    /// Business identifier, e.g. `"tcs_18"`.
    pub id: String,

    /// Display label, e.g. `"TCS 18%"`.
    pub label: String,

    /// Rate as a percentage.
    pub rate_percent: f64,
}

impl TaxBracket {
    /// Creates a bracket with an explicit id.
    pub fn new(id: impl Into<String>, label: impl Into<String>, rate_percent: f64) -> Self {
        TaxBracket {
            id: id.into(),
            label: label.into(),
            rate_percent,
        }
    }

    /// Creates a user-defined bracket, minting the id from the rate
    /// (`7` → `"tcs_7"`, `0.5` → `"tcs_0.5"`).
    pub fn custom(label: impl Into<String>, rate_percent: f64) -> Self {
        let id = if rate_percent.fract() == 0.0 {
            format!("tcs_{}", rate_percent as i64)
        } else {
            format!("tcs_{}", rate_percent)
        };
        TaxBracket::new(id, label, rate_percent)
    }
}

// =============================================================================
// Tax Selection
// =============================================================================

/// The tax choices made on one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxSelection {
    /// Which regime is active.
    pub regime: TaxRegime,

    /// Bracket id under [`TaxRegime::Collected`]; raw percentage text under
    /// [`TaxRegime::Withholding`]; ignored under [`TaxRegime::None`].
    pub selected: String,

    /// Manual signed correction as typed. Always **added** to the grand
    /// total, never inverted by the regime.
    pub adjustment: String,
}

impl TaxSelection {
    /// The adjustment's numeric value; unparsable text counts as 0.
    #[inline]
    pub fn adjustment_value(&self) -> f64 {
        coerce_number(&self.adjustment)
    }
}

// =============================================================================
// Tax Registry
// =============================================================================

/// The standard collected-tax ladder every new document starts from.
const STANDARD_RATES: [f64; 6] = [1.0, 2.0, 5.0, 12.0, 18.0, 28.0];

/// The selectable bracket set for the collected regime of one document
/// session.
///
/// ## Invariants
/// - Brackets are appended, never removed, and never deduplicated; a lookup
///   returns the **first** bracket with a matching id, so adding a duplicate
///   id cannot change what an existing selection resolves to.
/// - The set is session-scoped: each form owns its registry exclusively and
///   user additions do not leak across forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxRegistry {
    brackets: Vec<TaxBracket>,
}

impl TaxRegistry {
    /// Creates a registry seeded with the standard rate ladder.
    pub fn new() -> Self {
        let brackets = STANDARD_RATES
            .iter()
            .map(|&rate| {
                TaxBracket::new(
                    format!("tcs_{}", rate as i64),
                    format!("TCS {}%", rate as i64),
                    rate,
                )
            })
            .collect();
        TaxRegistry { brackets }
    }

    /// Creates a registry with no brackets at all.
    pub fn empty() -> Self {
        TaxRegistry {
            brackets: Vec::new(),
        }
    }

    /// Appends a bracket. No duplicate-id or duplicate-rate checks are
    /// performed.
    pub fn add_bracket(&mut self, bracket: TaxBracket) {
        self.brackets.push(bracket);
    }

    /// Resolves a bracket id to its rate; `None` when absent.
    pub fn rate_for(&self, bracket_id: &str) -> Option<f64> {
        self.brackets
            .iter()
            .find(|bracket| bracket.id == bracket_id)
            .map(|bracket| bracket.rate_percent)
    }

    /// All brackets in insertion order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Number of brackets currently selectable.
    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Checks whether the registry has no brackets.
    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }
}

impl Default for TaxRegistry {
    fn default() -> Self {
        TaxRegistry::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
