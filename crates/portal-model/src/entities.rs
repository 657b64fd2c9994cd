//! Entity records held by the domain store.
//!
//! Cross-entity relations (`Request` -> `Staff`, `PurchaseOrder` ->
//! `Vendor`/`Request`, `Invoice` -> `PurchaseOrder`) are non-owning id
//! references; resolving them goes through the store and tolerates a missing
//! target.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{InvoiceStatus, OrderStatus, RequestStatus, Role, Urgency, VendorStatus};
use crate::ids::{BudgetLineId, InvoiceId, PurchaseOrderId, RequestId, StaffId, VendorId};

/// A staff member. Seeded reference data, never created at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
    pub department: String,
    pub role: Role,
}

/// A budget line. Immutable reference data used to populate the
/// request-creation choices for the requester's department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub id: BudgetLineId,
    pub description: String,
    pub department: String,
    pub budget_amount: f64,
}

/// A purchase request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: RequestId,
    pub requester: StaffId,
    pub product_service: String,
    pub approx_amount: f64,
    pub status: RequestStatus,
    pub urgency: Urgency,
    pub created: NaiveDate,
    /// Copied from the requester at creation; never diverges afterwards.
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Attached document names. Opaque, recorded for display only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<String>,
}

/// A vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub department: String,
    pub status: VendorStatus,
}

/// A purchase order. Created externally; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    pub vendor: VendorId,
    pub request: RequestId,
    pub amount: f64,
    pub status: OrderStatus,
}

/// An invoice. Created externally; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub order: PurchaseOrderId,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub uploaded: NaiveDate,
}
