//! # Document Kinds
//!
//! The transaction document types the engine serves. Each kind carries its
//! numbering tag and its minimum row count; everything else about a kind
//! (fields, posting rules) lives outside this crate.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A forms-backed transaction document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    SalesOrder,
    PurchaseOrder,
    Invoice,
    Bill,
    CreditNote,
    VendorCredit,
    RecurringBill,
    Journal,
}

impl DocumentKind {
    /// Every kind, in menu order.
    pub const ALL: [DocumentKind; 8] = [
        DocumentKind::SalesOrder,
        DocumentKind::PurchaseOrder,
        DocumentKind::Invoice,
        DocumentKind::Bill,
        DocumentKind::CreditNote,
        DocumentKind::VendorCredit,
        DocumentKind::RecurringBill,
        DocumentKind::Journal,
    ];

    /// Static numbering tag, trailing separator included.
    #[inline]
    pub fn tag(&self) -> &'static str {
        match self {
            DocumentKind::SalesOrder => "SO-",
            DocumentKind::PurchaseOrder => "PO-",
            DocumentKind::Invoice => "INV-",
            DocumentKind::Bill => "BILL-",
            DocumentKind::CreditNote => "CN-",
            DocumentKind::VendorCredit => "VC-",
            DocumentKind::RecurringBill => "RB-",
            DocumentKind::Journal => "JRNL-",
        }
    }

    /// Display name for menus and dialog titles.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::SalesOrder => "Sales Order",
            DocumentKind::PurchaseOrder => "Purchase Order",
            DocumentKind::Invoice => "Invoice",
            DocumentKind::Bill => "Bill",
            DocumentKind::CreditNote => "Credit Note",
            DocumentKind::VendorCredit => "Vendor Credit",
            DocumentKind::RecurringBill => "Recurring Bill",
            DocumentKind::Journal => "Journal",
        }
    }

    /// Fewest rows a document of this kind may hold. Journals post paired
    /// debit/credit lines, so they need two.
    #[inline]
    pub fn min_rows(&self) -> usize {
        match self {
            DocumentKind::Journal => 2,
            _ => 1,
        }
    }
}

impl Default for DocumentKind {
    fn default() -> Self {
        DocumentKind::SalesOrder
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
