//! # folio-core: Pure Calculation Engine for Folio Documents
//!
//! This crate is the **heart** of Folio. It contains the calculation and
//! numbering logic shared by every transaction document form as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Folio Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Document Forms (any frontend)                  │   │
//! │  │   Sales Order ── Invoice ── Bill ── Credit Note ── Journal …   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ field edits / renders                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    folio-forms (controller)                     │   │
//! │  │    DocumentForm: rows + header + tax selection + registry       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ folio-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   line    │  │  totals   │  │    tax    │  │ numbering │  │   │
//! │  │   │  ItemRow  │  │ Summary   │  │ Registry  │  │  prefixes │  │   │
//! │  │   │  amounts  │  │ sign rule │  │ brackets  │  │ sequences │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshot on submit                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Persistence collaborator (out of scope)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Document kinds and their numbering tags
//! - [`numeric`] - Lenient text→number coercion and cent rounding
//! - [`line`] - Item rows and the per-line amount calculation
//! - [`tax`] - Tax regimes, brackets, selections, and the bracket registry
//! - [`totals`] - Subtotal/tax/grand-total summary
//! - [`numbering`] - Document number prefixes and sequences
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in submission-boundary checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same input =
//!    same output, no hidden state
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Coercion over Errors**: Field text parses leniently; unparsable
//!    input counts as 0 so a half-typed value never raises
//! 4. **Derived, Never Stored**: Totals are recomputed from their inputs on
//!    every change; there is no patchable totals state to go stale
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_core::{compute_totals, ItemRow, TaxRegime, TaxRegistry, TaxSelection};
//!
//! let mut row = ItemRow::new();
//! row.quantity = "2".to_string();
//! row.rate = "100".to_string();
//! row.recompute();
//! assert_eq!(row.amount_display(), "200.00");
//!
//! let registry = TaxRegistry::new();
//! let selection = TaxSelection {
//!     regime: TaxRegime::Collected,
//!     selected: "tcs_18".to_string(),
//!     adjustment: String::new(),
//! };
//!
//! let totals = compute_totals(&[row], &selection, registry.brackets());
//! assert_eq!(totals.tax_amount, 36.0);
//! assert_eq!(totals.grand_total, 236.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod line;
pub mod numbering;
pub mod numeric;
pub mod tax;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use folio_core::ItemRow` instead of
// `use folio_core::line::ItemRow`

pub use error::ValidationError;
pub use line::{compute_amount, ItemRow};
pub use numbering::{
    build_document_number, build_prefix, NumberingConfig, NumberingMode, PrefixPattern,
    DEFAULT_SEQUENCE,
};
pub use numeric::{coerce_number, format2, round2};
pub use tax::{TaxBracket, TaxRegime, TaxRegistry, TaxSelection};
pub use totals::{compute_totals, resolve_rate, TotalsSummary};
pub use types::DocumentKind;
pub use validation::ValidationResult;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum rows allowed in a single document.
///
/// ## Business Reason
/// Prevents runaway documents (a held-down "Add row" key) and keeps
/// recomputation trivially cheap. Can be made configurable per document
/// kind in future versions.
pub const MAX_ROWS: usize = 200;

/// Maximum length of a row description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum length of the header's document number.
pub const MAX_DOCUMENT_NUMBER_LEN: usize = 60;

/// Maximum length of a numbering sequence.
pub const MAX_SEQUENCE_LEN: usize = 10;

/// Maximum quantity accepted at the submission boundary.
///
/// ## Business Reason
/// Catches obvious typos (e.g. a pasted phone number in the quantity cell)
/// before they reach a counterparty-facing document.
pub const MAX_QUANTITY: f64 = 1_000_000.0;

/// Maximum unit rate accepted at the submission boundary.
pub const MAX_RATE: f64 = 1_000_000_000.0;
