use portal_model::{PurchaseOrderId, VendorId};
use thiserror::Error;

/// Validation failures raised by the workflow engine.
///
/// Stale references (a decision against a record that no longer exists) are
/// not errors; they surface as [`crate::DecisionOutcome::NotFound`] no-ops.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(f64),
    #[error("purchase order {order} does not belong to vendor {vendor}")]
    ForeignOrder {
        order: PurchaseOrderId,
        vendor: VendorId,
    },
    #[error("acting identity has no vendor record")]
    NotAVendor,
}

pub type Result<T> = std::result::Result<T, EngineError>;
