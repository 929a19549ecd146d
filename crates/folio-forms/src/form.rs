//! # Document Form
//!
//! The editing session behind one open transaction document. Every document
//! page (sales order, invoice, bill, credit note, journal, …) drives the
//! same controller; only the [`DocumentKind`] differs.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Document Form Operations                             │
//! │                                                                         │
//! │  Frontend Action          Form Method              State Change         │
//! │  ───────────────          ───────────              ────────────         │
//! │                                                                         │
//! │  Type in a cell ─────────► edit_row() ───────────► row text + amount   │
//! │                                                     (edited row ONLY)   │
//! │                                                                         │
//! │  Click Add Line ─────────► add_row() ────────────► rows.push(blank)    │
//! │                                                                         │
//! │  Click Remove ───────────► remove_row() ─────────► rows.remove(i)      │
//! │                                                     (guarded by min)    │
//! │                                                                         │
//! │  Pick regime / bracket ──► set_regime() ─────────► tax selection       │
//! │                            select_tax()                                 │
//! │                                                                         │
//! │  Confirm numbering ──────► apply_numbering() ────► header number       │
//! │                                                     (AUTO mode only)    │
//! │                                                                         │
//! │  Render footer ──────────► totals() ─────────────► (recomputed, never  │
//! │                                                      stored)            │
//! │                                                                         │
//! │  Click Save ─────────────► submit() ─────────────► validated snapshot  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Notes
//! - Rows are private: `amount` is derived state and nothing outside this
//!   module may write it. Reads go through [`DocumentForm::rows`].
//! - Totals are never stored. [`DocumentForm::totals`] recomputes from the
//!   current inputs on every call, so a just-removed row can never linger in
//!   the footer.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use folio_core::line::ItemRow;
use folio_core::numbering::{NumberingConfig, NumberingMode};
use folio_core::tax::{TaxBracket, TaxRegime, TaxRegistry, TaxSelection};
use folio_core::totals::{compute_totals, TotalsSummary};
use folio_core::types::DocumentKind;
use folio_core::validation::validate_document;
use folio_core::MAX_ROWS;

use crate::error::{FormError, FormResult};

// =============================================================================
// Row Field
// =============================================================================

/// The editable cells of one row, as named by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowField {
    Description,
    Quantity,
    Rate,
    DiscountPercent,
}

// =============================================================================
// Document Header
// =============================================================================

/// The non-tabular fields of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    /// The document number, either generated or typed by the user.
    pub document_number: String,

    /// Document date; also the reference date for numbering prefixes.
    pub document_date: NaiveDate,

    /// Free-text notes.
    pub notes: Option<String>,
}

// =============================================================================
// Document Snapshot
// =============================================================================

/// The full submission payload handed to a persistence collaborator.
///
/// Opaque to this crate: nothing here serializes or transmits it, the host
/// does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    pub kind: DocumentKind,
    pub header: DocumentHeader,
    pub rows: Vec<ItemRow>,
    pub totals: TotalsSummary,
    pub tax: TaxSelection,
}

// =============================================================================
// Document Form
// =============================================================================

/// One document-editing session.
///
/// ## Invariants
/// - Owns its rows, tax selection and bracket registry exclusively; nothing
///   is shared with other open forms.
/// - Row count never drops below `kind.min_rows()` and never exceeds
///   [`MAX_ROWS`].
/// - Row amounts are recomputed for the edited row only; the totals footer
///   is recomputed from scratch on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentForm {
    kind: DocumentKind,

    /// Random id for correlating log lines of one session.
    session_id: String,

    created_at: DateTime<Utc>,
    header: DocumentHeader,
    rows: Vec<ItemRow>,
    selection: TaxSelection,
    registry: TaxRegistry,
}

impl DocumentForm {
    /// Opens a fresh form: the kind's minimum number of blank rows, the
    /// standard bracket ladder, no tax regime, today's date.
    pub fn new(kind: DocumentKind) -> Self {
        let session_id = Uuid::new_v4().to_string();
        debug!(kind = %kind.label(), session_id = %session_id, "document form opened");

        DocumentForm {
            kind,
            session_id,
            created_at: Utc::now(),
            header: DocumentHeader {
                document_number: String::new(),
                document_date: Local::now().date_naive(),
                notes: None,
            },
            rows: vec![ItemRow::new(); kind.min_rows()],
            selection: TaxSelection::default(),
            registry: TaxRegistry::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    #[inline]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[inline]
    pub fn header(&self) -> &DocumentHeader {
        &self.header
    }

    #[inline]
    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    /// One row by index.
    pub fn row(&self, index: usize) -> Option<&ItemRow> {
        self.rows.get(index)
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn selection(&self) -> &TaxSelection {
        &self.selection
    }

    #[inline]
    pub fn registry(&self) -> &TaxRegistry {
        &self.registry
    }

    // -------------------------------------------------------------------------
    // Header Edits
    // -------------------------------------------------------------------------

    /// Stores a manually typed document number, verbatim.
    pub fn set_document_number(&mut self, number: impl Into<String>) {
        self.header.document_number = number.into();
        debug!(number = %self.header.document_number, "document number set");
    }

    /// Changes the document date (and with it the numbering reference date).
    pub fn set_document_date(&mut self, date: NaiveDate) {
        self.header.document_date = date;
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.header.notes = notes;
    }

    // -------------------------------------------------------------------------
    // Row Edits
    // -------------------------------------------------------------------------

    /// Appends a blank row and returns its index.
    pub fn add_row(&mut self) -> FormResult<usize> {
        if self.rows.len() >= MAX_ROWS {
            return Err(FormError::TooManyRows { max: MAX_ROWS });
        }

        self.rows.push(ItemRow::new());
        let index = self.rows.len() - 1;
        debug!(index = %index, "row added");
        Ok(index)
    }

    /// Removes a row. The next [`DocumentForm::totals`] read reflects the
    /// removal immediately; there is no stored total to go stale.
    pub fn remove_row(&mut self, index: usize) -> FormResult<()> {
        if index >= self.rows.len() {
            return Err(FormError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }

        let minimum = self.kind.min_rows();
        if self.rows.len() <= minimum {
            return Err(FormError::MinimumRows { minimum });
        }

        self.rows.remove(index);
        debug!(index = %index, remaining = %self.rows.len(), "row removed");
        Ok(())
    }

    /// Applies one keystroke's worth of edit to one cell.
    ///
    /// Stores the raw text exactly as typed and recomputes the amount of
    /// **this row only**; sibling rows are untouched. Description edits do
    /// not touch the amount at all.
    pub fn edit_row(
        &mut self,
        index: usize,
        field: RowField,
        value: impl Into<String>,
    ) -> FormResult<()> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(FormError::RowOutOfRange { index, len })?;

        let value = value.into();
        debug!(index = %index, field = ?field, "row edited");

        match field {
            RowField::Description => {
                row.description = value;
            }
            RowField::Quantity => {
                row.quantity = value;
                row.recompute();
            }
            RowField::Rate => {
                row.rate = value;
                row.recompute();
            }
            RowField::DiscountPercent => {
                row.discount_percent = value;
                row.recompute();
            }
        }

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Tax Edits
    // -------------------------------------------------------------------------

    /// Switches the tax regime. Regimes are mutually exclusive, so the
    /// previous selector value is cleared; the adjustment survives.
    pub fn set_regime(&mut self, regime: TaxRegime) {
        self.selection.regime = regime;
        self.selection.selected.clear();
        debug!(regime = ?regime, "tax regime changed");
    }

    /// Stores the tax selector value: a bracket id under the collected
    /// regime, a raw percentage under withholding.
    ///
    /// An unresolvable bracket id degrades to rate 0 rather than failing;
    /// that is worth a warning in the log, since a stale id silently zeroes
    /// the tax line.
    pub fn select_tax(&mut self, value: impl Into<String>) {
        let value = value.into();

        if self.selection.regime == TaxRegime::Collected
            && !value.is_empty()
            && self.registry.rate_for(&value).is_none()
        {
            warn!(selected = %value, "tax bracket not found; rate resolves to 0");
        }

        self.selection.selected = value;
    }

    /// Stores the manual adjustment text as typed.
    pub fn set_adjustment(&mut self, raw: impl Into<String>) {
        self.selection.adjustment = raw.into();
    }

    /// Appends a user-defined collected-tax bracket to this session's
    /// registry and returns its minted id.
    pub fn add_custom_bracket(&mut self, label: impl Into<String>, rate_percent: f64) -> String {
        let bracket = TaxBracket::custom(label, rate_percent);
        let id = bracket.id.clone();
        debug!(id = %id, rate = %rate_percent, "custom tax bracket added");
        self.registry.add_bracket(bracket);
        id
    }

    // -------------------------------------------------------------------------
    // Derived State
    // -------------------------------------------------------------------------

    /// The totals footer, recomputed from the current rows, selection and
    /// brackets on every call.
    pub fn totals(&self) -> TotalsSummary {
        compute_totals(&self.rows, &self.selection, self.registry.brackets())
    }

    // -------------------------------------------------------------------------
    // Numbering
    // -------------------------------------------------------------------------

    /// Confirms the numbering dialog against the header.
    ///
    /// ## Mode Policy
    /// - `Manual`: the header keeps exactly what the user typed; no
    ///   generation happens.
    /// - `Auto`: the header is overwritten with the generated number, built
    ///   from the document date.
    pub fn apply_numbering(&mut self, config: &NumberingConfig) {
        match config.mode {
            NumberingMode::Manual => {
                debug!("numbering confirmed in manual mode; header untouched");
            }
            NumberingMode::Auto => {
                let number = config.generate(self.kind.tag(), self.header.document_date);
                debug!(number = %number, "document number generated");
                self.header.document_number = number;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// The current full payload, with totals recomputed at capture time.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            kind: self.kind,
            header: self.header.clone(),
            rows: self.rows.clone(),
            totals: self.totals(),
            tax: self.selection.clone(),
        }
    }

    /// Validates the document and, if it passes, captures the submission
    /// snapshot.
    pub fn submit(&self) -> FormResult<DocumentSnapshot> {
        validate_document(self.kind, &self.header.document_number, &self.rows)?;
        debug!(session_id = %self.session_id, "document submitted");
        Ok(self.snapshot())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::numbering::PrefixPattern;
    use folio_core::ValidationError;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn fill_row(form: &mut DocumentForm, index: usize, qty: &str, rate: &str, discount: &str) {
        form.edit_row(index, RowField::Quantity, qty).unwrap();
        form.edit_row(index, RowField::Rate, rate).unwrap();
        form.edit_row(index, RowField::DiscountPercent, discount).unwrap();
    }

    #[test]
    fn test_new_form_seeds_minimum_rows() {
        assert_eq!(DocumentForm::new(DocumentKind::SalesOrder).row_count(), 1);
        assert_eq!(DocumentForm::new(DocumentKind::Journal).row_count(), 2);
    }

    #[test]
    fn test_edit_recomputes_edited_row_only() {
        let mut form = DocumentForm::new(DocumentKind::SalesOrder);
        form.add_row().unwrap();

        fill_row(&mut form, 0, "2", "100", "0");
        assert_eq!(form.row(0).unwrap().amount, Some(200.0));
        assert_eq!(form.row(1).unwrap().amount, None);

        // A description edit never touches the amount
        form.edit_row(0, RowField::Description, "Widgets").unwrap();
        assert_eq!(form.row(0).unwrap().amount, Some(200.0));
    }

    #[test]
    fn test_edit_bad_index() {
        let mut form = DocumentForm::new(DocumentKind::SalesOrder);
        assert_eq!(
            form.edit_row(7, RowField::Quantity, "1"),
            Err(FormError::RowOutOfRange { index: 7, len: 1 })
        );
    }

    #[test]
    fn test_remove_row_enforces_minimum() {
        let mut form = DocumentForm::new(DocumentKind::SalesOrder);
        assert_eq!(
            form.remove_row(0),
            Err(FormError::MinimumRows { minimum: 1 })
        );

        let mut journal = DocumentForm::new(DocumentKind::Journal);
        journal.add_row().unwrap();
        assert!(journal.remove_row(2).is_ok());
        assert_eq!(
            journal.remove_row(0),
            Err(FormError::MinimumRows { minimum: 2 })
        );
    }

    #[test]
    fn test_remove_row_bad_index() {
        // A fresh journal sits at its minimum; the index guard still
        // answers first
        let mut journal = DocumentForm::new(DocumentKind::Journal);
        assert_eq!(
            journal.remove_row(5),
            Err(FormError::RowOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_add_row_stops_at_cap() {
        let mut form = DocumentForm::new(DocumentKind::SalesOrder);
        while form.row_count() < MAX_ROWS {
            form.add_row().unwrap();
        }

        assert_eq!(form.add_row(), Err(FormError::TooManyRows { max: MAX_ROWS }));
        assert_eq!(form.row_count(), MAX_ROWS);
    }

    #[test]
    fn test_removal_reflected_in_next_totals_read() {
        let mut form = DocumentForm::new(DocumentKind::SalesOrder);
        form.add_row().unwrap();
        fill_row(&mut form, 0, "1", "100", "0");
        fill_row(&mut form, 1, "1", "50", "0");
        assert_eq!(form.totals().subtotal, 150.0);

        form.remove_row(1).unwrap();
        assert_eq!(form.totals().subtotal, 100.0);
    }

    #[test]
    fn test_regime_switch_clears_selector() {
        let mut form = DocumentForm::new(DocumentKind::Invoice);
        form.set_regime(TaxRegime::Collected);
        form.select_tax("tcs_18");
        form.set_adjustment("5");

        form.set_regime(TaxRegime::Withholding);
        assert_eq!(form.selection().selected, "");
        // The adjustment is regime-independent and survives the switch
        assert_eq!(form.selection().adjustment, "5");
    }

    #[test]
    fn test_unknown_bracket_degrades_to_zero_rate() {
        let mut form = DocumentForm::new(DocumentKind::Invoice);
        fill_row(&mut form, 0, "1", "100", "0");
        form.set_regime(TaxRegime::Collected);
        form.select_tax("tcs_99");

        let totals = form.totals();
        assert_eq!(totals.tax_rate, 0.0);
        assert_eq!(totals.grand_total, 100.0);
    }

    #[test]
    fn test_custom_bracket_is_selectable() {
        let mut form = DocumentForm::new(DocumentKind::Invoice);
        fill_row(&mut form, 0, "1", "100", "0");

        form.set_regime(TaxRegime::Collected);
        let id = form.add_custom_bracket("TCS 7%", 7.0);
        assert_eq!(id, "tcs_7");

        form.select_tax(id);
        let totals = form.totals();
        assert_eq!(totals.tax_rate, 7.0);
        assert_eq!(totals.tax_amount, 7.0);
        assert_eq!(totals.grand_total, 107.0);
    }

    #[test]
    fn test_numbering_auto_overwrites_header() {
        let mut form = DocumentForm::new(DocumentKind::SalesOrder);
        form.set_document_date(march_15());

        let config = NumberingConfig {
            mode: NumberingMode::Auto,
            prefix_pattern: PrefixPattern::YearMonth,
            next_sequence: String::new(),
            restart_every_fiscal_year: false,
        };
        form.apply_numbering(&config);
        assert_eq!(form.header().document_number, "SO-202503-001");
    }

    #[test]
    fn test_numbering_manual_leaves_header_untouched() {
        let mut form = DocumentForm::new(DocumentKind::SalesOrder);
        form.set_document_number("SO-CUSTOM-9");

        let config = NumberingConfig {
            mode: NumberingMode::Manual,
            prefix_pattern: PrefixPattern::YearMonth,
            next_sequence: "777".to_string(),
            restart_every_fiscal_year: false,
        };
        form.apply_numbering(&config);
        assert_eq!(form.header().document_number, "SO-CUSTOM-9");
    }

    #[test]
    fn test_full_document_lifecycle() {
        let mut form = DocumentForm::new(DocumentKind::SalesOrder);
        form.set_document_date(march_15());
        form.add_row().unwrap();
        form.add_row().unwrap();

        fill_row(&mut form, 0, "2", "100", "0");
        fill_row(&mut form, 1, "1", "50", "10");
        // Row 2 stays blank

        assert_eq!(form.row(0).unwrap().amount_display(), "200.00");
        assert_eq!(form.row(1).unwrap().amount_display(), "45.00");
        assert_eq!(form.row(2).unwrap().amount_display(), "");

        form.set_regime(TaxRegime::Collected);
        form.select_tax("tcs_18");
        form.set_adjustment("5");

        let totals = form.totals();
        assert_eq!(totals.subtotal, 245.0);
        assert_eq!(totals.tax_amount, 44.1);
        assert_eq!(totals.grand_total, 294.1);

        form.apply_numbering(&NumberingConfig {
            mode: NumberingMode::Auto,
            prefix_pattern: PrefixPattern::YearMonth,
            next_sequence: String::new(),
            restart_every_fiscal_year: false,
        });

        let snapshot = form.submit().unwrap();
        assert_eq!(snapshot.kind, DocumentKind::SalesOrder);
        assert_eq!(snapshot.header.document_number, "SO-202503-001");
        assert_eq!(snapshot.rows.len(), 3);
        assert_eq!(snapshot.totals.grand_total, 294.1);
        assert_eq!(snapshot.tax.regime, TaxRegime::Collected);
    }

    #[test]
    fn test_submit_requires_document_number() {
        let mut form = DocumentForm::new(DocumentKind::SalesOrder);
        fill_row(&mut form, 0, "1", "100", "0");

        assert_eq!(
            form.submit().unwrap_err(),
            FormError::Validation(ValidationError::Required {
                field: "document number".to_string()
            })
        );
    }

    #[test]
    fn test_submit_journal_needs_two_usable_rows() {
        let mut form = DocumentForm::new(DocumentKind::Journal);
        form.set_document_number("JRNL-001");
        fill_row(&mut form, 0, "1", "500", "0");
        // Second row left blank

        assert_eq!(
            form.submit().unwrap_err(),
            FormError::Validation(ValidationError::TooFewRows { minimum: 2 })
        );

        fill_row(&mut form, 1, "1", "500", "0");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let mut form = DocumentForm::new(DocumentKind::Invoice);
        form.set_document_number("INV-42");
        fill_row(&mut form, 0, "3", "19.99", "0");

        let snapshot = form.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: DocumentSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.header.document_number, "INV-42");
        assert_eq!(parsed.rows[0].quantity, "3");
        assert_eq!(parsed.totals.subtotal, snapshot.totals.subtotal);
    }
}
