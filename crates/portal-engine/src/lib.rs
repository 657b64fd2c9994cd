//! Domain store, workflow engine and visibility filter.
//!
//! Everything here is synchronous and in-memory: the store owns the record
//! set, the workflow functions are the only writers, and the visibility
//! filter is a pure read evaluated fresh on every call. No operation panics
//! past this crate's boundary; failures are explicit values.

pub mod error;
pub mod metrics;
pub mod store;
pub mod visibility;
pub mod workflow;

pub use error::{EngineError, Result};
pub use metrics::{RequestMetrics, VendorAccountSummary, VendorStatusSummary};
pub use store::DomainStore;
pub use visibility::{pending_requests, visible_requests};
pub use workflow::{
    DecisionOutcome, InvoiceAcknowledgement, InvoiceDraft, RequestDraft, VendorDraft,
    create_request, decide_request, decide_vendor, fulfill_request, register_vendor,
    submit_invoice,
};
