//! User intents and their results.
//!
//! Every external event enters the session as one of these values. The
//! serde representation is the wire format of the CLI script runner:
//! `{"type": "select_role", "role": "Coordinator"}` and so on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use portal_engine::{
    DecisionOutcome, EngineError, InvoiceAcknowledgement, InvoiceDraft, RequestDraft, VendorDraft,
};
use portal_model::{Decision, MonthWindow, RequestId, Role, VendorId};

use crate::navigation::View;

/// A user action fed into [`crate::Session::apply`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Pick the acting role; replaces any current identity.
    SelectRole { role: Role },
    /// Change the selected year-month window.
    SetWindow { window: MonthWindow },
    /// Open the current role's form view from its dashboard.
    NewRecord,
    /// Open the current role's review view for a request row.
    OpenRequest { id: RequestId },
    /// Submit the purchase request form.
    SubmitRequest { draft: RequestDraft },
    /// Approve or reject the focused request.
    DecideRequest { id: RequestId, decision: Decision },
    /// Approve or reject a pending vendor (procurement dashboard action).
    DecideVendor { id: VendorId, decision: Decision },
    /// Submit the vendor registration form.
    RegisterVendor { draft: VendorDraft },
    /// Submit the invoice form.
    SubmitInvoice { draft: InvoiceDraft },
    /// Explicit navigation to a view inside the transition table.
    Navigate { view: View },
    /// Leave the current form/review view without acting.
    Cancel,
    /// Clear the acting identity and return to the initial page.
    SignOut,
}

impl Intent {
    /// Short tag for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SelectRole { .. } => "select_role",
            Intent::SetWindow { .. } => "set_window",
            Intent::NewRecord => "new_record",
            Intent::OpenRequest { .. } => "open_request",
            Intent::SubmitRequest { .. } => "submit_request",
            Intent::DecideRequest { .. } => "decide_request",
            Intent::DecideVendor { .. } => "decide_vendor",
            Intent::RegisterVendor { .. } => "register_vendor",
            Intent::SubmitInvoice { .. } => "submit_invoice",
            Intent::Navigate { .. } => "navigate",
            Intent::Cancel => "cancel",
            Intent::SignOut => "sign_out",
        }
    }
}

/// What an accepted intent did.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    SignedIn { role: Role, view: View },
    WindowChanged { window: MonthWindow },
    Navigated { view: View },
    RequestCreated { id: RequestId },
    RequestDecided { id: RequestId, result: DecisionOutcome },
    VendorRegistered { id: VendorId },
    VendorDecided { id: VendorId, result: DecisionOutcome },
    InvoiceAccepted { ack: Option<InvoiceAcknowledgement> },
    /// Stale reference; nothing to do, nothing changed.
    Ignored,
    SignedOut,
}

/// A rejected intent. Session state is unchanged in every case.
#[derive(Debug, Error)]
pub enum IntentError {
    /// The intent needs an acting identity and there is none.
    #[error("no acting identity; select a role first")]
    NotSignedIn,
    /// Role resolution found neither staff nor vendors to act as.
    #[error("no staff or vendor record available to act as {0}")]
    NoActorAvailable(Role),
    /// The intent is not available from the current view.
    #[error("{intent} is not available from {view}")]
    Unavailable { intent: &'static str, view: View },
    /// The requested navigation is outside the transition table.
    #[error("navigation from {from} to {to} is not permitted")]
    Navigation { from: View, to: View },
    /// Field validation failed; the form stays open.
    #[error(transparent)]
    Validation(#[from] EngineError),
}
