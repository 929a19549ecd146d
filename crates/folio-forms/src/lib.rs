//! # folio-forms: Document Form Orchestration
//!
//! The thin controller layer between a document-editing UI and the pure
//! calculations in `folio-core`. One [`DocumentForm`] per open document;
//! every page drives the same controller.
//!
//! ## What Lives Where
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  folio-forms                                                            │
//! │                                                                         │
//! │  ┌───────────┐   ┌───────────┐   ┌───────────┐   ┌───────────┐         │
//! │  │   form    │   │   view    │   │   state   │   │   error   │         │
//! │  │ Document  │   │ FormView  │   │ FormState │   │ FormError │         │
//! │  │   Form    │   │ RowView   │   │ Arc<Mutex>│   │  results  │         │
//! │  └───────────┘   └───────────┘   └───────────┘   └───────────┘         │
//! │                                                                         │
//! │  Owns WHICH rows/header/selection exist; folio-core owns every          │
//! │  number that is derived from them.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_forms::{DocumentForm, RowField};
//! use folio_core::types::DocumentKind;
//! use folio_core::tax::TaxRegime;
//!
//! let mut form = DocumentForm::new(DocumentKind::Invoice);
//! form.edit_row(0, RowField::Quantity, "2").unwrap();
//! form.edit_row(0, RowField::Rate, "100").unwrap();
//!
//! form.set_regime(TaxRegime::Collected);
//! form.select_tax("tcs_18");
//!
//! let totals = form.totals();
//! assert_eq!(totals.grand_total, 236.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod form;
pub mod state;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{FormError, FormResult};
pub use form::{DocumentForm, DocumentHeader, DocumentSnapshot, RowField};
pub use state::FormState;
pub use view::{FormView, RowView, TotalsView};
