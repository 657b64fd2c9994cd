use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown request status: {0}")]
    UnknownRequestStatus(String),
    #[error("unknown vendor status: {0}")]
    UnknownVendorStatus(String),
    #[error("unknown purchase order status: {0}")]
    UnknownOrderStatus(String),
    #[error("unknown invoice status: {0}")]
    UnknownInvoiceStatus(String),
    #[error("unknown urgency level: {0}")]
    UnknownUrgency(String),
    #[error("unknown decision: {0}")]
    UnknownDecision(String),
    #[error("invalid month window: {0}")]
    InvalidWindow(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
