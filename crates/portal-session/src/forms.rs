//! In-progress form buffers.
//!
//! The presentation layer edits these while a form view is open; the
//! session wipes them whenever a form view is entered, a role is selected
//! or the actor signs out. Form state never survives a navigation.

use serde::{Deserialize, Serialize};

use portal_engine::{InvoiceDraft, RequestDraft, VendorDraft};
use portal_model::PurchaseOrderId;

/// Invoice form fields before a purchase order has been chosen.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub order: Option<PurchaseOrderId>,
    pub amount: f64,
    pub document: String,
    pub notes: Option<String>,
}

impl InvoiceForm {
    /// Finished draft, once an order is selected.
    pub fn to_draft(&self) -> Option<InvoiceDraft> {
        Some(InvoiceDraft {
            order: self.order?,
            amount: self.amount,
            document: self.document.clone(),
            notes: self.notes.clone(),
        })
    }
}

/// All in-progress form state for the session.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FormState {
    pub request: RequestDraft,
    pub vendor: VendorDraft,
    pub invoice: InvoiceForm,
}

impl FormState {
    /// Drop every in-progress value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
