//! Record lifecycle transitions.
//!
//! The functions here are the only writers of entity state. Validation
//! failures come back as [`EngineError`]; a decision against a record that
//! is missing or already settled comes back as a [`DecisionOutcome`] no-op,
//! never an error — the acting party only reaches that state through a
//! stale screen reference.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use portal_model::{
    ActingIdentity, Decision, MonthWindow, PurchaseOrderId, Request, RequestId, RequestStatus,
    Urgency, Vendor, VendorId, VendorStatus,
};

use crate::error::{EngineError, Result};
use crate::store::DomainStore;

/// Fields supplied when creating a purchase request.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RequestDraft {
    /// Chosen budget-line description.
    pub product_service: String,
    /// Free-text product entry; overrides `product_service` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_product: Option<String>,
    #[serde(default)]
    pub approx_amount: f64,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<String>,
    /// Explicit created date; defaults to the 15th of the selected window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDate>,
}

impl RequestDraft {
    /// The product description that ends up on the record.
    fn effective_product(&self) -> &str {
        match &self.custom_product {
            Some(custom) if !custom.trim().is_empty() => custom,
            _ => &self.product_service,
        }
    }
}

/// Fields supplied when registering a vendor.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VendorDraft {
    pub name: String,
    #[serde(default)]
    pub department: String,
}

/// Fields supplied when submitting an invoice against a purchase order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub order: PurchaseOrderId,
    pub amount: f64,
    /// Uploaded file name. Opaque; recorded for display only.
    pub document: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Result of a decision-style operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionOutcome {
    /// The transition was applied.
    Applied,
    /// The record was already past the deciding state; nothing changed.
    AlreadySettled,
    /// No record with that id; nothing changed.
    NotFound,
}

impl DecisionOutcome {
    pub fn changed_anything(&self) -> bool {
        matches!(self, DecisionOutcome::Applied)
    }
}

/// Acknowledgement of a validated invoice submission.
///
/// Invoice submission is validation-only in this core: the invoice
/// collection is not mutated. The acknowledgement carries the checked
/// fields so an external collaborator can record them if it wishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceAcknowledgement {
    pub vendor: VendorId,
    pub order: PurchaseOrderId,
    pub amount: f64,
    pub document: String,
}

/// Create a purchase request bound to the acting identity.
///
/// The new id is one past the current maximum; status starts at Pending
/// Approval; the department is copied from the identity and never diverges
/// afterwards.
pub fn create_request(
    store: &mut DomainStore,
    identity: &ActingIdentity,
    window: MonthWindow,
    draft: &RequestDraft,
) -> Result<RequestId> {
    let product = draft.effective_product().trim().to_string();
    if product.is_empty() {
        warn!("request draft rejected: product/service missing");
        return Err(EngineError::MissingField("product_service"));
    }
    let Some(requester) = identity.staff_id() else {
        // A vendor-backed identity cannot author requests.
        warn!(role = %identity.role, "request draft rejected: no staff backing");
        return Err(EngineError::MissingField("requester"));
    };

    let id = store.next_request_id();
    let request = Request {
        id,
        requester,
        product_service: product,
        approx_amount: draft.approx_amount,
        status: RequestStatus::PendingApproval,
        urgency: draft.urgency,
        created: draft.created.unwrap_or_else(|| window.mid_month()),
        department: identity.department.clone(),
        reason: draft.reason.clone(),
        documents: draft.documents.clone(),
    };
    info!(request = %id, department = %request.department, "request created");
    store.insert_request(request);
    Ok(id)
}

/// Approve or reject a pending request.
///
/// A request that is absent, already decided or already terminal is left
/// untouched; the outcome says which. Status never regresses.
pub fn decide_request(
    store: &mut DomainStore,
    id: RequestId,
    decision: Decision,
) -> DecisionOutcome {
    let Some(request) = store.request_mut(id) else {
        debug!(request = %id, "decision ignored: request not found");
        return DecisionOutcome::NotFound;
    };
    if request.status != RequestStatus::PendingApproval {
        debug!(request = %id, status = %request.status, "decision ignored: already settled");
        return DecisionOutcome::AlreadySettled;
    }
    request.status = match decision {
        Decision::Approve => RequestStatus::Approved,
        Decision::Reject => RequestStatus::Rejected,
    };
    info!(request = %id, status = %request.status, "request decided");
    DecisionOutcome::Applied
}

/// Move an approved request to Fulfilled, completing the monotone chain.
pub fn fulfill_request(store: &mut DomainStore, id: RequestId) -> DecisionOutcome {
    let Some(request) = store.request_mut(id) else {
        return DecisionOutcome::NotFound;
    };
    if request.status != RequestStatus::Approved {
        debug!(request = %id, status = %request.status, "fulfillment ignored");
        return DecisionOutcome::AlreadySettled;
    }
    request.status = RequestStatus::Fulfilled;
    info!(request = %id, "request fulfilled");
    DecisionOutcome::Applied
}

/// Register a vendor in Pending state.
pub fn register_vendor(store: &mut DomainStore, draft: &VendorDraft) -> Result<VendorId> {
    let name = draft.name.trim();
    if name.is_empty() {
        warn!("vendor draft rejected: name missing");
        return Err(EngineError::MissingField("name"));
    }
    let id = store.next_vendor_id();
    store.insert_vendor(Vendor {
        id,
        name: name.to_string(),
        department: draft.department.trim().to_string(),
        status: VendorStatus::Pending,
    });
    info!(vendor = %id, "vendor registered");
    Ok(id)
}

/// Approve or reject a pending vendor.
pub fn decide_vendor(store: &mut DomainStore, id: VendorId, decision: Decision) -> DecisionOutcome {
    let Some(vendor) = store.vendor_mut(id) else {
        debug!(vendor = %id, "vendor decision ignored: not found");
        return DecisionOutcome::NotFound;
    };
    if vendor.status != VendorStatus::Pending {
        debug!(vendor = %id, status = %vendor.status, "vendor decision ignored: already settled");
        return DecisionOutcome::AlreadySettled;
    }
    vendor.status = match decision {
        Decision::Approve => VendorStatus::Approved,
        Decision::Reject => VendorStatus::Rejected,
    };
    info!(vendor = %id, status = %vendor.status, "vendor decided");
    DecisionOutcome::Applied
}

/// Validate an invoice submission without recording it.
///
/// The purchase order must exist and belong to the acting vendor, the
/// amount must be positive and a document name must be attached.
pub fn submit_invoice(
    store: &DomainStore,
    identity: &ActingIdentity,
    draft: &InvoiceDraft,
) -> Result<Option<InvoiceAcknowledgement>> {
    let Some(vendor) = identity.vendor_id() else {
        return Err(EngineError::NotAVendor);
    };
    if draft.document.trim().is_empty() {
        return Err(EngineError::MissingField("document"));
    }
    if draft.amount <= 0.0 {
        return Err(EngineError::NonPositiveAmount(draft.amount));
    }
    let Some(order) = store.order(draft.order) else {
        // Stale screen reference; acknowledge nothing, fail nothing.
        debug!(order = %draft.order, "invoice ignored: purchase order not found");
        return Ok(None);
    };
    if order.vendor != vendor {
        return Err(EngineError::ForeignOrder {
            order: draft.order,
            vendor,
        });
    }
    info!(order = %draft.order, vendor = %vendor, "invoice accepted");
    Ok(Some(InvoiceAcknowledgement {
        vendor,
        order: draft.order,
        amount: draft.amount,
        document: draft.document.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_model::{IdentityBacking, Role, StaffId};

    fn coordinator() -> ActingIdentity {
        ActingIdentity {
            name: "John Coordinator".to_string(),
            department: "IT".to_string(),
            role: Role::Coordinator,
            backing: IdentityBacking::Staff(StaffId::new(1)),
        }
    }

    fn vendor_identity(id: u32) -> ActingIdentity {
        ActingIdentity {
            name: "TechSolutions Inc".to_string(),
            department: "IT".to_string(),
            role: Role::Vendor,
            backing: IdentityBacking::Vendor(VendorId::new(id)),
        }
    }

    fn window() -> MonthWindow {
        "2026-01".parse().expect("valid window")
    }

    #[test]
    fn create_request_defaults() {
        let mut store = DomainStore::seeded();
        let draft = RequestDraft {
            product_service: "Cloud Services".to_string(),
            approx_amount: 900.0,
            ..RequestDraft::default()
        };
        let id = create_request(&mut store, &coordinator(), window(), &draft).expect("create");
        assert_eq!(id, RequestId::new(105));

        let request = store.request(id).expect("inserted");
        assert_eq!(request.status, RequestStatus::PendingApproval);
        assert_eq!(request.department, "IT");
        assert_eq!(request.urgency, Urgency::Medium);
        assert_eq!(request.created, window().mid_month());
    }

    #[test]
    fn create_request_requires_product() {
        let mut store = DomainStore::seeded();
        let before = store.requests().len();
        let err = create_request(&mut store, &coordinator(), window(), &RequestDraft::default())
            .expect_err("empty product must fail");
        assert_eq!(err, EngineError::MissingField("product_service"));
        assert_eq!(store.requests().len(), before);
    }

    #[test]
    fn custom_product_overrides_selection() {
        let mut store = DomainStore::seeded();
        let draft = RequestDraft {
            product_service: "custom".to_string(),
            custom_product: Some("Bespoke Integration".to_string()),
            ..RequestDraft::default()
        };
        let id = create_request(&mut store, &coordinator(), window(), &draft).expect("create");
        assert_eq!(
            store.request(id).expect("inserted").product_service,
            "Bespoke Integration"
        );
    }

    #[test]
    fn decide_request_applies_once() {
        let mut store = DomainStore::seeded();
        let id = RequestId::new(101);
        assert_eq!(
            decide_request(&mut store, id, Decision::Approve),
            DecisionOutcome::Applied
        );
        assert_eq!(
            store.request(id).expect("present").status,
            RequestStatus::Approved
        );

        // A duplicate decision is a no-op, and status never regresses.
        assert_eq!(
            decide_request(&mut store, id, Decision::Reject),
            DecisionOutcome::AlreadySettled
        );
        assert_eq!(
            store.request(id).expect("present").status,
            RequestStatus::Approved
        );
    }

    #[test]
    fn decide_request_missing_is_a_noop() {
        let mut store = DomainStore::seeded();
        assert_eq!(
            decide_request(&mut store, RequestId::new(999), Decision::Approve),
            DecisionOutcome::NotFound
        );
    }

    #[test]
    fn terminal_requests_stay_terminal() {
        let mut store = DomainStore::seeded();
        let fulfilled = RequestId::new(103);
        assert_eq!(
            decide_request(&mut store, fulfilled, Decision::Reject),
            DecisionOutcome::AlreadySettled
        );
        assert_eq!(
            store.request(fulfilled).expect("present").status,
            RequestStatus::Fulfilled
        );
    }

    #[test]
    fn fulfillment_only_from_approved() {
        let mut store = DomainStore::seeded();
        assert_eq!(
            fulfill_request(&mut store, RequestId::new(102)),
            DecisionOutcome::Applied
        );
        assert_eq!(
            fulfill_request(&mut store, RequestId::new(101)),
            DecisionOutcome::AlreadySettled
        );
        assert_eq!(
            fulfill_request(&mut store, RequestId::new(999)),
            DecisionOutcome::NotFound
        );
    }

    #[test]
    fn register_vendor_assigns_next_id() {
        let mut store = DomainStore::seeded();
        let draft = VendorDraft {
            name: "Acme".to_string(),
            department: "IT".to_string(),
        };
        let id = register_vendor(&mut store, &draft).expect("register");
        assert_eq!(id, VendorId::new(4));
        assert_eq!(
            store.vendor(id).expect("inserted").status,
            VendorStatus::Pending
        );
    }

    #[test]
    fn register_vendor_requires_name() {
        let mut store = DomainStore::seeded();
        let err = register_vendor(&mut store, &VendorDraft::default())
            .expect_err("empty name must fail");
        assert_eq!(err, EngineError::MissingField("name"));
    }

    #[test]
    fn decide_vendor_transitions_pending_only() {
        let mut store = DomainStore::seeded();
        assert_eq!(
            decide_vendor(&mut store, VendorId::new(2), Decision::Approve),
            DecisionOutcome::Applied
        );
        assert_eq!(
            decide_vendor(&mut store, VendorId::new(1), Decision::Reject),
            DecisionOutcome::AlreadySettled
        );
        assert_eq!(
            store.vendor(VendorId::new(1)).expect("present").status,
            VendorStatus::Approved
        );
    }

    #[test]
    fn submit_invoice_validates_without_mutating() {
        let store = DomainStore::seeded();
        let draft = InvoiceDraft {
            order: PurchaseOrderId::new(2),
            amount: 1200.0,
            document: "invoice_jan2026.pdf".to_string(),
            notes: None,
        };
        let ack = submit_invoice(&store, &vendor_identity(3), &draft)
            .expect("valid")
            .expect("order found");
        assert_eq!(ack.order, PurchaseOrderId::new(2));
        assert_eq!(store.invoices().len(), 2);
    }

    #[test]
    fn submit_invoice_rejects_foreign_order() {
        let store = DomainStore::seeded();
        let draft = InvoiceDraft {
            order: PurchaseOrderId::new(1),
            amount: 450.0,
            document: "invoice.pdf".to_string(),
            notes: None,
        };
        let err = submit_invoice(&store, &vendor_identity(3), &draft).expect_err("foreign order");
        assert!(matches!(err, EngineError::ForeignOrder { .. }));
    }

    #[test]
    fn submit_invoice_stale_order_is_acknowledged_as_absent() {
        let store = DomainStore::seeded();
        let draft = InvoiceDraft {
            order: PurchaseOrderId::new(99),
            amount: 10.0,
            document: "invoice.pdf".to_string(),
            notes: None,
        };
        let ack = submit_invoice(&store, &vendor_identity(1), &draft).expect("no error");
        assert!(ack.is_none());
    }

    #[test]
    fn submit_invoice_field_validation() {
        let store = DomainStore::seeded();
        let missing_doc = InvoiceDraft {
            order: PurchaseOrderId::new(1),
            amount: 450.0,
            document: "  ".to_string(),
            notes: None,
        };
        assert_eq!(
            submit_invoice(&store, &vendor_identity(1), &missing_doc).expect_err("doc"),
            EngineError::MissingField("document")
        );

        let bad_amount = InvoiceDraft {
            order: PurchaseOrderId::new(1),
            amount: 0.0,
            document: "invoice.pdf".to_string(),
            notes: None,
        };
        assert_eq!(
            submit_invoice(&store, &vendor_identity(1), &bad_amount).expect_err("amount"),
            EngineError::NonPositiveAmount(0.0)
        );
    }
}
