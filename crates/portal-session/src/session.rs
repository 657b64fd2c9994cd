//! The session facade: one acting identity, one view, one window, one
//! store.
//!
//! Each intent is processed to completion before the next is accepted;
//! there is no concurrency and no I/O here. Rejected intents leave every
//! piece of state untouched.

use tracing::{debug, info, warn};

use portal_engine::{
    DomainStore, RequestMetrics, VendorAccountSummary, VendorStatusSummary, workflow,
};
use portal_engine::{InvoiceDraft, RequestDraft, VendorDraft};
use portal_model::{
    ActingIdentity, BudgetLine, Decision, Invoice, MonthWindow, PurchaseOrder, Request, RequestId,
    Role, VendorId,
};

use crate::forms::FormState;
use crate::identity::resolve_role;
use crate::intent::{Intent, IntentError, Outcome};
use crate::navigation::View;

/// The window the portal opens on, matching the seeded record set.
const DEFAULT_WINDOW: MonthWindow = MonthWindow::of(2026, 1);

/// Root state of one portal session.
pub struct Session {
    store: DomainStore,
    view: View,
    /// The role whose dashboard frames the session; set by role selection.
    /// May differ from the identity's role tag after a vendor fallback.
    role: Option<Role>,
    identity: Option<ActingIdentity>,
    window: MonthWindow,
    forms: FormState,
}

impl Session {
    pub fn new(store: DomainStore) -> Self {
        Self {
            store,
            view: View::Initial,
            role: None,
            identity: None,
            window: DEFAULT_WINDOW,
            forms: FormState::default(),
        }
    }

    /// A session over the demo record set.
    pub fn seeded() -> Self {
        Self::new(DomainStore::seeded())
    }

    // ------------------------------------------------------------------
    // Queries — all recomputed on every call
    // ------------------------------------------------------------------

    pub fn store(&self) -> &DomainStore {
        &self.store
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    pub fn identity(&self) -> Option<&ActingIdentity> {
        self.identity.as_ref()
    }

    pub fn window(&self) -> MonthWindow {
        self.window
    }

    pub fn forms(&self) -> &FormState {
        &self.forms
    }

    /// The presentation layer edits form fields through this while a form
    /// view is open.
    pub fn forms_mut(&mut self) -> &mut FormState {
        &mut self.forms
    }

    /// Requests visible to the acting identity in the selected window.
    ///
    /// With no identity (initial page) only the window applies.
    pub fn visible_requests(&self) -> Vec<&Request> {
        match &self.identity {
            Some(identity) => {
                portal_engine::visible_requests(&self.store, identity, self.window)
            }
            None => self
                .store
                .requests()
                .iter()
                .filter(|r| self.window.contains(r.created))
                .collect(),
        }
    }

    /// The Pending-Approval subset of the visible set.
    pub fn pending_requests(&self) -> Vec<&Request> {
        self.visible_requests()
            .into_iter()
            .filter(|r| r.status == portal_model::RequestStatus::PendingApproval)
            .collect()
    }

    /// Status counts over the visible set.
    pub fn metrics(&self) -> RequestMetrics {
        RequestMetrics::from_requests(self.visible_requests().into_iter())
    }

    /// Budget-line choices for the acting identity's department.
    pub fn budget_choices(&self) -> Vec<&BudgetLine> {
        match &self.identity {
            Some(identity) => self.store.budget_lines_for(&identity.department),
            None => Vec::new(),
        }
    }

    /// Purchase orders issued to the acting vendor.
    pub fn vendor_orders(&self) -> Vec<&PurchaseOrder> {
        match self.acting_vendor() {
            Some(vendor) => self.store.orders_for_vendor(vendor),
            None => Vec::new(),
        }
    }

    /// Invoices raised against the acting vendor's orders.
    pub fn vendor_invoices(&self) -> Vec<&Invoice> {
        match self.acting_vendor() {
            Some(vendor) => self.store.invoices_for_vendor(vendor),
            None => Vec::new(),
        }
    }

    /// Order/invoice counts for the vendor dashboard.
    pub fn vendor_summary(&self) -> VendorAccountSummary {
        VendorAccountSummary::from_records(&self.vendor_orders(), &self.vendor_invoices())
    }

    /// Vendor status counts for the procurement dashboard.
    pub fn vendor_status_summary(&self) -> VendorStatusSummary {
        VendorStatusSummary::from_vendors(self.store.vendors())
    }

    fn acting_vendor(&self) -> Option<VendorId> {
        self.identity.as_ref().and_then(ActingIdentity::vendor_id)
    }

    // ------------------------------------------------------------------
    // Intent dispatch
    // ------------------------------------------------------------------

    /// Process one user action to completion.
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome, IntentError> {
        debug!(intent = intent.name(), view = %self.view, "applying intent");
        let result = match intent {
            Intent::SelectRole { role } => self.select_role(role),
            Intent::SetWindow { window } => self.set_window(window),
            Intent::NewRecord => self.new_record(),
            Intent::OpenRequest { id } => self.open_request(id),
            Intent::SubmitRequest { draft } => self.submit_request(&draft),
            Intent::DecideRequest { id, decision } => self.decide_request(id, decision),
            Intent::DecideVendor { id, decision } => self.decide_vendor(id, decision),
            Intent::RegisterVendor { draft } => self.register_vendor(&draft),
            Intent::SubmitInvoice { draft } => self.submit_invoice(&draft),
            Intent::Navigate { view } => self.navigate(view),
            Intent::Cancel => self.cancel(),
            Intent::SignOut => self.sign_out(),
        };
        if let Err(error) = &result {
            warn!(view = %self.view, %error, "intent rejected");
        }
        result
    }

    /// Replace the acting identity and land on the requested role's
    /// dashboard. Resets all in-progress form state.
    fn select_role(&mut self, role: Role) -> Result<Outcome, IntentError> {
        let identity = resolve_role(&self.store, role)?;
        info!(requested = %role, acting = %identity.role, "role selected");
        self.identity = Some(identity);
        self.role = Some(role);
        self.forms.reset();
        self.view = View::Dashboard(role);
        Ok(Outcome::SignedIn {
            role,
            view: self.view,
        })
    }

    fn set_window(&mut self, window: MonthWindow) -> Result<Outcome, IntentError> {
        self.window = window;
        Ok(Outcome::WindowChanged { window })
    }

    fn new_record(&mut self) -> Result<Outcome, IntentError> {
        let role = self.dashboard_role("new_record")?;
        let Some(form) = View::form_for(role) else {
            return Err(IntentError::Unavailable {
                intent: "new_record",
                view: self.view,
            });
        };
        self.enter(form);
        Ok(Outcome::Navigated { view: form })
    }

    fn open_request(&mut self, id: RequestId) -> Result<Outcome, IntentError> {
        let role = self.dashboard_role("open_request")?;
        let Some(view) = View::review_for(role, id) else {
            return Err(IntentError::Unavailable {
                intent: "open_request",
                view: self.view,
            });
        };
        if self.store.request(id).is_none() {
            // Stale row reference; stay put.
            debug!(request = %id, "open ignored: request not found");
            return Ok(Outcome::Ignored);
        }
        self.enter(view);
        Ok(Outcome::Navigated { view })
    }

    fn submit_request(&mut self, draft: &RequestDraft) -> Result<Outcome, IntentError> {
        if self.view != View::RequestForm {
            return Err(IntentError::Unavailable {
                intent: "submit_request",
                view: self.view,
            });
        }
        let identity = self.identity.as_ref().ok_or(IntentError::NotSignedIn)?;
        let id = workflow::create_request(&mut self.store, identity, self.window, draft)?;
        self.forms.reset();
        self.view = self.owning_dashboard();
        Ok(Outcome::RequestCreated { id })
    }

    fn decide_request(
        &mut self,
        id: RequestId,
        decision: Decision,
    ) -> Result<Outcome, IntentError> {
        if !matches!(self.view, View::RequestDecision(_)) {
            return Err(IntentError::Unavailable {
                intent: "decide_request",
                view: self.view,
            });
        }
        let result = workflow::decide_request(&mut self.store, id, decision);
        self.view = self.owning_dashboard();
        Ok(Outcome::RequestDecided { id, result })
    }

    fn decide_vendor(&mut self, id: VendorId, decision: Decision) -> Result<Outcome, IntentError> {
        if self.view != View::Dashboard(Role::ProcurementOfficer) {
            return Err(IntentError::Unavailable {
                intent: "decide_vendor",
                view: self.view,
            });
        }
        let result = workflow::decide_vendor(&mut self.store, id, decision);
        Ok(Outcome::VendorDecided { id, result })
    }

    fn register_vendor(&mut self, draft: &VendorDraft) -> Result<Outcome, IntentError> {
        if self.view != View::NewVendorForm {
            return Err(IntentError::Unavailable {
                intent: "register_vendor",
                view: self.view,
            });
        }
        let id = workflow::register_vendor(&mut self.store, draft)?;
        self.forms.reset();
        self.view = self.owning_dashboard();
        Ok(Outcome::VendorRegistered { id })
    }

    fn submit_invoice(&mut self, draft: &InvoiceDraft) -> Result<Outcome, IntentError> {
        if self.view != View::VendorInvoiceForm {
            return Err(IntentError::Unavailable {
                intent: "submit_invoice",
                view: self.view,
            });
        }
        let identity = self.identity.as_ref().ok_or(IntentError::NotSignedIn)?;
        let ack = workflow::submit_invoice(&self.store, identity, draft)?;
        self.forms.reset();
        self.view = self.owning_dashboard();
        Ok(Outcome::InvoiceAccepted { ack })
    }

    fn navigate(&mut self, target: View) -> Result<Outcome, IntentError> {
        let role = self.session_role()?;
        if !self.view.can_navigate(role, target) {
            return Err(IntentError::Navigation {
                from: self.view,
                to: target,
            });
        }
        self.enter(target);
        Ok(Outcome::Navigated { view: target })
    }

    fn cancel(&mut self) -> Result<Outcome, IntentError> {
        if !self.view.is_leaf() {
            return Err(IntentError::Unavailable {
                intent: "cancel",
                view: self.view,
            });
        }
        let view = self.owning_dashboard();
        self.forms.reset();
        self.view = view;
        Ok(Outcome::Navigated { view })
    }

    fn sign_out(&mut self) -> Result<Outcome, IntentError> {
        if self.identity.is_none() {
            return Err(IntentError::NotSignedIn);
        }
        info!("signed out");
        self.identity = None;
        self.role = None;
        self.forms.reset();
        self.view = View::Initial;
        Ok(Outcome::SignedOut)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn session_role(&self) -> Result<Role, IntentError> {
        self.role.ok_or(IntentError::NotSignedIn)
    }

    /// The current role, required to be showing its dashboard.
    fn dashboard_role(&self, intent: &'static str) -> Result<Role, IntentError> {
        let role = self.session_role()?;
        if self.view != View::Dashboard(role) {
            return Err(IntentError::Unavailable {
                intent,
                view: self.view,
            });
        }
        Ok(role)
    }

    fn owning_dashboard(&self) -> View {
        match self.role {
            Some(role) => View::Dashboard(role),
            None => View::Initial,
        }
    }

    /// Move to `view`, wiping form buffers on form entry.
    fn enter(&mut self, view: View) {
        if view.is_form() {
            self.forms.reset();
        }
        debug!(from = %self.view, to = %view, "view changed");
        self.view = view;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::seeded()
    }
}
