//! Type-safe enumerations for the approval portal.
//!
//! These enums give compile-time coverage to the concepts the portal's data
//! set carries as strings (role tags, lifecycle statuses, urgency levels).
//! `FromStr` implementations accept the spellings used by the seed data
//! case-insensitively (e.g. "Pending Approval").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Actor role tag.
///
/// Five roles are staff-backed; `Vendor` acts through a vendor record.
/// The role drives both the visibility predicate and the default landing
/// view after sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Submits and tracks purchase requests.
    Coordinator,
    /// Reviews and approves requests from their department.
    Supervisor,
    /// Final approval for requests from their department.
    Manager,
    /// Views purchase orders and submits invoices.
    Vendor,
    /// Verifies invoices and payments; sees every request.
    FinanceOfficer,
    /// Manages vendor relationships; sees every request.
    ProcurementOfficer,
}

impl Role {
    /// Canonical tag as it appears in the seed data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Coordinator => "Coordinator",
            Role::Supervisor => "Supervisor",
            Role::Manager => "Manager",
            Role::Vendor => "Vendor",
            Role::FinanceOfficer => "FinanceOfficer",
            Role::ProcurementOfficer => "ProcurementOfficer",
        }
    }

    /// Short description shown on the role-selection screen.
    pub fn description(&self) -> &'static str {
        match self {
            Role::Coordinator => "Submit and track requests",
            Role::Supervisor => "Review and approve team requests",
            Role::Manager => "Final approve team requests",
            Role::Vendor => "View POs and submit invoices",
            Role::FinanceOfficer => "Verify invoices and payments",
            Role::ProcurementOfficer => "Manage vendor relationships",
        }
    }

    /// True for roles resolved through a Staff record rather than a Vendor.
    pub fn is_staff_backed(&self) -> bool {
        !matches!(self, Role::Vendor)
    }

    /// All roles in selection-screen order.
    pub const fn all() -> &'static [Role] {
        &[
            Role::Coordinator,
            Role::Supervisor,
            Role::Manager,
            Role::Vendor,
            Role::FinanceOfficer,
            Role::ProcurementOfficer,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "COORDINATOR" => Ok(Role::Coordinator),
            "SUPERVISOR" => Ok(Role::Supervisor),
            "MANAGER" => Ok(Role::Manager),
            "VENDOR" => Ok(Role::Vendor),
            "FINANCEOFFICER" | "FINANCE OFFICER" => Ok(Role::FinanceOfficer),
            "PROCUREMENTOFFICER" | "PROCUREMENT OFFICER" => Ok(Role::ProcurementOfficer),
            _ => Err(ModelError::UnknownRole(s.to_string())),
        }
    }
}

/// Purchase request lifecycle status.
///
/// Monotone along Pending Approval -> Approved -> Fulfilled, or
/// Pending Approval -> Rejected. Rejected and Fulfilled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    PendingApproval,
    Approved,
    Rejected,
    Fulfilled,
}

impl RequestStatus {
    /// Canonical spelling as it appears in the seed data.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::PendingApproval => "Pending Approval",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Fulfilled => "Fulfilled",
        }
    }

    /// True once no further transition is permitted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Rejected | RequestStatus::Fulfilled)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "PENDING APPROVAL" | "PENDING" => Ok(RequestStatus::PendingApproval),
            "APPROVED" => Ok(RequestStatus::Approved),
            "REJECTED" => Ok(RequestStatus::Rejected),
            "FULFILLED" => Ok(RequestStatus::Fulfilled),
            _ => Err(ModelError::UnknownRequestStatus(s.to_string())),
        }
    }
}

/// Vendor registration status.
///
/// Pending is the only non-terminal state; Approved and Rejected are
/// terminal and reachable only through the procurement decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorStatus {
    Pending,
    Approved,
    Rejected,
}

impl VendorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Pending => "Pending",
            VendorStatus::Approved => "Approved",
            VendorStatus::Rejected => "Rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, VendorStatus::Pending)
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VendorStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(VendorStatus::Pending),
            "APPROVED" => Ok(VendorStatus::Approved),
            "REJECTED" => Ok(VendorStatus::Rejected),
            _ => Err(ModelError::UnknownVendorStatus(s.to_string())),
        }
    }
}

/// Purchase order status. Read-only in this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "PROCESSING" => Ok(OrderStatus::Processing),
            "COMPLETED" => Ok(OrderStatus::Completed),
            _ => Err(ModelError::UnknownOrderStatus(s.to_string())),
        }
    }
}

/// Invoice payment status. Read-only in this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(InvoiceStatus::Pending),
            "PAID" => Ok(InvoiceStatus::Paid),
            _ => Err(ModelError::UnknownInvoiceStatus(s.to_string())),
        }
    }
}

/// Request urgency level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "LOW" => Ok(Urgency::Low),
            "MEDIUM" => Ok(Urgency::Medium),
            "HIGH" => Ok(Urgency::High),
            _ => Err(ModelError::UnknownUrgency(s.to_string())),
        }
    }
}

/// Approve-or-reject action taken on a pending record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Decision {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "APPROVE" | "APPROVED" => Ok(Decision::Approve),
            "REJECT" | "REJECTED" => Ok(Decision::Reject),
            _ => Err(ModelError::UnknownDecision(s.to_string())),
        }
    }
}
