//! # Form Error Type
//!
//! Errors raised by structural form edits.
//!
//! The calculation path never fails; what can fail is the shape of the form
//! itself (removing a row a journal needs, pointing at a row that is not
//! there) and the opt-in submission validation.

use thiserror::Error;

use folio_core::ValidationError;

/// Errors from document form operations.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    /// A row index points past the end of the row list.
    #[error("no row at index {index} (document has {len})")]
    RowOutOfRange { index: usize, len: usize },

    /// Removing the row would drop the document below its kind's minimum.
    #[error("document must keep at least {minimum} row(s)")]
    MinimumRows { minimum: usize },

    /// Adding the row would exceed the hard row cap.
    #[error("document cannot have more than {max} rows")]
    TooManyRows { max: usize },

    /// Submission validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for form operations.
pub type FormResult<T> = Result<T, FormError>;

// =============================================================================
// Unit Tests
// =============================================================================
