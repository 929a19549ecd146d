//! # Document Numbering
//!
//! Builds human-facing document numbers like `SO-202503-001` from a
//! per-document-type configuration and a reference date.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ tag "SO-"   │     │ pattern + date   │     │ sequence "001"   │
//! │ (doc kind)  │ ──► │ "SO-202503-"     │ ──► │ "SO-202503-001"  │
//! └─────────────┘     └──────────────────┘     └──────────────────┘
//! ```
//!
//! The produced string is opaque to everything downstream; only the header
//! field stores it. Long-lived counter storage (and the fiscal-year restart
//! it implies) belongs to the caller, not here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sequence used when the configured one is empty.
pub const DEFAULT_SEQUENCE: &str = "001";

// =============================================================================
// Numbering Mode
// =============================================================================

/// Whether confirming the numbering dialog writes the header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NumberingMode {
    /// Confirmation overwrites the header's document number.
    Auto,
    /// Confirmation leaves the header exactly as the user typed it.
    Manual,
}

impl Default for NumberingMode {
    fn default() -> Self {
        NumberingMode::Auto
    }
}

// =============================================================================
// Prefix Pattern
// =============================================================================

/// Date-derived prefix shapes.
///
/// | pattern          | prefix for 2025-03-15, tag `SO-` |
/// |------------------|----------------------------------|
/// | `None`           | `SO-`                            |
/// | `Year`           | `SO-2025-`                       |
/// | `YearMonth`      | `SO-202503-`                     |
/// | `DateDdmmyyyy`   | `SO-15032025-`                   |
/// | `YearSlashMonth` | `SO-2025/03-`                    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PrefixPattern {
    None,
    Year,
    YearMonth,
    DateDdmmyyyy,
    YearSlashMonth,
}

impl Default for PrefixPattern {
    fn default() -> Self {
        PrefixPattern::None
    }
}

// =============================================================================
// Numbering Config
// =============================================================================

/// One document type's numbering settings, as edited in its settings dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NumberingConfig {
    pub mode: NumberingMode,
    pub prefix_pattern: PrefixPattern,

    /// Next sequence as text, e.g. `"042"`. Empty falls back to
    /// [`DEFAULT_SEQUENCE`] at build time.
    pub next_sequence: String,

    /// Honored by the counter-storage collaborator, not by this module.
    pub restart_every_fiscal_year: bool,
}

impl NumberingConfig {
    /// Builds the full document number for a tag and reference date.
    pub fn generate(&self, tag: &str, reference: NaiveDate) -> String {
        let prefix = build_prefix(tag, self.prefix_pattern, reference);
        build_document_number(&prefix, &self.next_sequence)
    }
}

// =============================================================================
// Prefix / Number Builders
// =============================================================================

/// Expands a prefix pattern against a reference date.
///
/// The tag already carries its trailing separator (`"SO-"`), so patterns
/// only append the date part and a closing dash.
pub fn build_prefix(tag: &str, pattern: PrefixPattern, reference: NaiveDate) -> String {
    match pattern {
        PrefixPattern::None => tag.to_string(),
        PrefixPattern::Year => format!("{}{}-", tag, reference.format("%Y")),
        PrefixPattern::YearMonth => format!("{}{}-", tag, reference.format("%Y%m")),
        PrefixPattern::DateDdmmyyyy => format!("{}{}-", tag, reference.format("%d%m%Y")),
        PrefixPattern::YearSlashMonth => format!("{}{}-", tag, reference.format("%Y/%m")),
    }
}

/// Appends the sequence to the prefix, defaulting an empty sequence to
/// [`DEFAULT_SEQUENCE`].
pub fn build_document_number(prefix: &str, sequence: &str) -> String {
    let sequence = if sequence.is_empty() {
        DEFAULT_SEQUENCE
    } else {
        sequence
    };
    format!("{}{}", prefix, sequence)
}

// =============================================================================
// Unit Tests
// =============================================================================
