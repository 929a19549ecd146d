//! # Form State
//!
//! Shared-ownership wrapper around one open document form.
//!
//! ## Thread Safety
//! The form is wrapped in `Arc<Mutex<T>>` because:
//! 1. A host command layer may call in from concurrent handlers
//! 2. Only one handler should mutate the form at a time
//! 3. Every operation is short; there is nothing to hold the lock across
//!
//! The engine itself is single-threaded and synchronous; the lock exists
//! for the host's benefit, not for any background work in here (there is
//! none).

use std::sync::{Arc, Mutex};

use folio_core::types::DocumentKind;

use crate::form::DocumentForm;

/// Host-managed form state.
///
/// ## Why Not RwLock?
/// Form operations are quick, and most of them mutate. A RwLock would add
/// complexity with minimal benefit.
#[derive(Debug)]
pub struct FormState {
    form: Arc<Mutex<DocumentForm>>,
}

impl FormState {
    /// Opens a fresh form for the given document kind.
    pub fn new(kind: DocumentKind) -> Self {
        FormState {
            form: Arc::new(Mutex::new(DocumentForm::new(kind))),
        }
    }

    /// Executes a function with read access to the form.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = state.with_form(|form| form.totals());
    /// ```
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DocumentForm) -> R,
    {
        let form = self.form.lock().expect("Form mutex poisoned");
        f(&form)
    }

    /// Executes a function with write access to the form.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_form_mut(|form| form.edit_row(0, RowField::Quantity, "2"))?;
    /// ```
    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DocumentForm) -> R,
    {
        let mut form = self.form.lock().expect("Form mutex poisoned");
        f(&mut form)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
