//! Navigation state: the closed set of views and the transitions between
//! them.
//!
//! The router is a finite-state machine. Every reachable transition is
//! encoded in [`View::can_navigate`] and the role-specific constructors;
//! anything else is rejected by the session as an invalid intent.

use serde::{Deserialize, Serialize};
use std::fmt;

use portal_model::{RequestId, Role};

/// Current view/screen of the portal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    /// Role-selection screen. The only view with no acting identity.
    #[default]
    Initial,

    /// A role's dashboard.
    Dashboard(Role),

    /// New purchase request form (coordinator).
    RequestForm,

    /// Approve/reject screen for the focused request (supervisor, manager).
    RequestDecision(RequestId),

    /// Invoice submission form (vendor).
    VendorInvoiceForm,

    /// Vendor registration form (procurement).
    NewVendorForm,

    /// Invoice verification screen for the focused request (finance).
    InvoiceVerification(RequestId),
}

impl View {
    /// The form view the "new record" action opens from a role's dashboard,
    /// if the role has one.
    pub fn form_for(role: Role) -> Option<View> {
        match role {
            Role::Coordinator => Some(View::RequestForm),
            Role::Vendor => Some(View::VendorInvoiceForm),
            Role::ProcurementOfficer => Some(View::NewVendorForm),
            Role::Supervisor | Role::Manager | Role::FinanceOfficer => None,
        }
    }

    /// The review view a request row click opens from a role's dashboard,
    /// if the role has one.
    pub fn review_for(role: Role, request: RequestId) -> Option<View> {
        match role {
            Role::Supervisor | Role::Manager => Some(View::RequestDecision(request)),
            Role::FinanceOfficer => Some(View::InvoiceVerification(request)),
            Role::Coordinator | Role::Vendor | Role::ProcurementOfficer => None,
        }
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, View::Initial)
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self, View::Dashboard(_))
    }

    /// True for views whose entry resets the form buffers.
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            View::RequestForm | View::VendorInvoiceForm | View::NewVendorForm
        )
    }

    /// True for views that return to the owning dashboard on cancel/back.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, View::Initial | View::Dashboard(_))
    }

    /// Whether an explicit `navigate` from `self` to `target` is inside the
    /// transition table for a session acting under `role`.
    ///
    /// Reachable explicit moves: dashboard -> one of the role's own leaf
    /// views, leaf -> owning dashboard, dashboard -> itself (the nav-bar
    /// "dashboard" button). Everything else goes through the dedicated
    /// intents (role selection, sign-out).
    pub fn can_navigate(&self, role: Role, target: View) -> bool {
        match (self, target) {
            (View::Dashboard(current), View::Dashboard(requested)) => *current == requested,
            (View::Dashboard(current), target) if *current == role => match target {
                View::RequestForm | View::VendorInvoiceForm | View::NewVendorForm => {
                    View::form_for(role) == Some(target)
                }
                View::RequestDecision(id) | View::InvoiceVerification(id) => {
                    View::review_for(role, id) == Some(target)
                }
                _ => false,
            },
            (leaf, View::Dashboard(requested)) if leaf.is_leaf() => requested == role,
            _ => false,
        }
    }

    /// Stable name used in logs and summaries; dashboards follow the
    /// `<lowercased role>Dashboard` derivation.
    pub fn name(&self) -> String {
        match self {
            View::Initial => "initialPage".to_string(),
            View::Dashboard(role) => {
                format!("{}Dashboard", role.as_str().to_lowercase())
            }
            View::RequestForm => "requestForm".to_string(),
            View::RequestDecision(_) => "requestApprove".to_string(),
            View::VendorInvoiceForm => "vendorInvoiceForm".to_string(),
            View::NewVendorForm => "newVendorForm".to_string(),
            View::InvoiceVerification(_) => "invoiceVerification".to_string(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::RequestDecision(id) | View::InvoiceVerification(id) => {
                write!(f, "{}#{id}", self.name())
            }
            _ => f.write_str(&self.name()),
        }
    }
}
