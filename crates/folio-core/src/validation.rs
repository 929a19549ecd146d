//! # Validation Module
//!
//! Opt-in boundary checks for document submission.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form fields (while typing)                                    │
//! │  └── NO validation. Coercion makes every calculation total; a           │
//! │      half-typed "1." must never raise.                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Submission boundary                                           │
//! │  └── THIS MODULE: document number present, numbers parse, ranges        │
//! │      hold, enough non-blank rows for the document kind                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Persistence collaborator                                      │
//! │  └── Whatever store receives the snapshot enforces its own              │
//! │      constraints                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use folio_core::validation::{validate_document_number, validate_quantity};
//!
//! validate_document_number("SO-202503-001").unwrap();
//! validate_quantity("2.5").unwrap();
//! ```

use crate::error::ValidationError;
use crate::line::ItemRow;
use crate::types::DocumentKind;
use crate::{
    MAX_DESCRIPTION_LEN, MAX_DOCUMENT_NUMBER_LEN, MAX_QUANTITY, MAX_RATE, MAX_ROWS,
    MAX_SEQUENCE_LEN,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a row description.
///
/// ## Rules
/// - May be empty (blank rows are legal)
/// - Maximum 500 characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().len() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates the header's document number.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 60 characters
///
/// ## Example
/// ```rust
/// use folio_core::validation::validate_document_number;
///
/// assert!(validate_document_number("SO-202503-001").is_ok());
/// assert!(validate_document_number("").is_err());
/// ```
pub fn validate_document_number(number: &str) -> ValidationResult<()> {
    let number = number.trim();

    if number.is_empty() {
        return Err(ValidationError::Required {
            field: "document number".to_string(),
        });
    }

    if number.len() > MAX_DOCUMENT_NUMBER_LEN {
        return Err(ValidationError::TooLong {
            field: "document number".to_string(),
            max: MAX_DOCUMENT_NUMBER_LEN,
        });
    }

    Ok(())
}

/// Validates a numbering sequence.
///
/// ## Rules
/// - May be empty (falls back to the default sequence at build time)
/// - Must contain only digits
/// - Maximum 10 characters
pub fn validate_sequence(sequence: &str) -> ValidationResult<()> {
    let sequence = sequence.trim();

    if sequence.is_empty() {
        return Ok(());
    }

    if sequence.len() > MAX_SEQUENCE_LEN {
        return Err(ValidationError::TooLong {
            field: "sequence".to_string(),
            max: MAX_SEQUENCE_LEN,
        });
    }

    if !sequence.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "sequence".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Field Validators
// =============================================================================

/// Validates a quantity field's raw text.
///
/// ## Rules
/// - May be empty (the calculation treats it as 0)
/// - If present, must parse as a number
/// - Must be positive (> 0) and at most 1,000,000
pub fn validate_quantity(raw: &str) -> ValidationResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Ok(());
    }

    let quantity: f64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: "must be a number".to_string(),
    })?;

    if quantity <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0.0,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a rate field's raw text.
///
/// ## Rules
/// - May be empty
/// - If present, must parse as a number
/// - Zero is allowed (free lines); negatives are not
pub fn validate_rate(raw: &str) -> ValidationResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Ok(());
    }

    let rate: f64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "rate".to_string(),
        reason: "must be a number".to_string(),
    })?;

    if !(0.0..=MAX_RATE).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "rate".to_string(),
            min: 0.0,
            max: MAX_RATE,
        });
    }

    Ok(())
}

/// Validates a discount field's raw text.
///
/// ## Rules
/// - May be empty
/// - If present, must parse as a number between 0 and 100
pub fn validate_discount(raw: &str) -> ValidationResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Ok(());
    }

    let discount: f64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "discount".to_string(),
        reason: "must be a number".to_string(),
    })?;

    if !(0.0..=100.0).contains(&discount) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

// =============================================================================
// Row / Document Validators
// =============================================================================

/// Validates one row. Blank rows always pass; they are placeholder lines,
/// not data.
pub fn validate_row(row: &ItemRow) -> ValidationResult<()> {
    if row.is_blank() {
        return Ok(());
    }

    validate_description(&row.description)?;
    validate_quantity(&row.quantity)?;
    validate_rate(&row.rate)?;
    validate_discount(&row.discount_percent)?;

    Ok(())
}

/// Validates a whole document at the submission boundary.
///
/// ## Rules
/// - Document number passes [`validate_document_number`]
/// - Row count does not exceed the hard cap
/// - At least `kind.min_rows()` rows are non-blank
/// - Every non-blank row passes [`validate_row`]
pub fn validate_document(
    kind: DocumentKind,
    document_number: &str,
    rows: &[ItemRow],
) -> ValidationResult<()> {
    validate_document_number(document_number)?;

    if rows.len() > MAX_ROWS {
        return Err(ValidationError::OutOfRange {
            field: "rows".to_string(),
            min: 0.0,
            max: MAX_ROWS as f64,
        });
    }

    let usable = rows.iter().filter(|row| !row.is_blank()).count();
    if usable < kind.min_rows() {
        return Err(ValidationError::TooFewRows {
            minimum: kind.min_rows(),
        });
    }

    for row in rows {
        validate_row(row)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn priced_row(quantity: &str, rate: &str) -> ItemRow {
        let mut row = ItemRow::new();
        row.quantity = quantity.to_string();
        row.rate = rate.to_string();
        row.recompute();
        row
    }

    #[test]
    fn test_validate_document_number() {
        assert!(validate_document_number("SO-202503-001").is_ok());
        assert!(validate_document_number("custom/2025/17").is_ok());

        assert!(validate_document_number("").is_err());
        assert!(validate_document_number("   ").is_err());
        assert!(validate_document_number(&"X".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_sequence() {
        assert!(validate_sequence("").is_ok());
        assert!(validate_sequence("001").is_ok());
        assert!(validate_sequence("42").is_ok());

        assert!(validate_sequence("12a").is_err());
        assert!(validate_sequence("-1").is_err());
        assert!(validate_sequence("00000000001").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity("").is_ok());
        assert!(validate_quantity("1").is_ok());
        assert!(validate_quantity("2.5").is_ok());

        assert!(validate_quantity("0").is_err());
        assert!(validate_quantity("-3").is_err());
        assert!(validate_quantity("two").is_err());
        assert!(validate_quantity("1000001").is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate("").is_ok());
        assert!(validate_rate("0").is_ok());
        assert!(validate_rate("99.99").is_ok());

        assert!(validate_rate("-1").is_err());
        assert!(validate_rate("free").is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount("").is_ok());
        assert!(validate_discount("0").is_ok());
        assert!(validate_discount("100").is_ok());

        assert!(validate_discount("101").is_err());
        assert!(validate_discount("-5").is_err());
        assert!(validate_discount("ten").is_err());
    }

    #[test]
    fn test_validate_row_skips_blank() {
        assert!(validate_row(&ItemRow::new()).is_ok());

        let bad = priced_row("-1", "100");
        assert!(validate_row(&bad).is_err());
    }

    #[test]
    fn test_validate_document_minimum_rows() {
        let rows = vec![priced_row("1", "100"), ItemRow::new()];

        // One usable row satisfies an invoice but not a journal
        assert!(validate_document(DocumentKind::Invoice, "INV-001", &rows).is_ok());
        assert_eq!(
            validate_document(DocumentKind::Journal, "JRNL-001", &rows),
            Err(ValidationError::TooFewRows { minimum: 2 })
        );
    }

    #[test]
    fn test_validate_document_row_cap() {
        let rows: Vec<ItemRow> = (0..=MAX_ROWS).map(|_| ItemRow::new()).collect();
        assert_eq!(
            validate_document(DocumentKind::Invoice, "INV-001", &rows),
            Err(ValidationError::OutOfRange {
                field: "rows".to_string(),
                min: 0.0,
                max: MAX_ROWS as f64,
            })
        );
    }

    #[test]
    fn test_validate_document_requires_number() {
        let rows = vec![priced_row("1", "100")];
        assert!(validate_document(DocumentKind::Invoice, "", &rows).is_err());
    }
}
