//! # Error Types
//!
//! Boundary error types for folio-core.
//!
//! ## Where Errors Live (and Where They Don't)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  folio-core (this file)                                                 │
//! │  └── ValidationError  - Opt-in submission-boundary checks               │
//! │                                                                         │
//! │  folio-forms (separate crate)                                           │
//! │  └── FormError        - Structural edit failures (bad row index,        │
//! │                         removing below the minimum row count)           │
//! │                                                                         │
//! │  The compute path itself (line amounts, totals, numbering) is TOTAL:    │
//! │  malformed numbers coerce to 0, unknown brackets resolve to rate 0,     │
//! │  an empty sequence defaults to "001". Nothing in it can fail.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced only by the opt-in validators in [`crate::validation`], which
/// submission layers may run before persisting a document. The pure
/// calculations never raise these.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-digit characters in a sequence number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Document has fewer usable rows than its kind allows.
    #[error("document needs at least {minimum} line item(s)")]
    TooFewRows { minimum: usize },
}

// =============================================================================
// Unit Tests
// =============================================================================
