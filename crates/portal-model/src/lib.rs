pub mod entities;
pub mod enums;
pub mod error;
pub mod identity;
pub mod ids;
pub mod window;

pub use entities::{BudgetLine, Invoice, PurchaseOrder, Request, Staff, Vendor};
pub use enums::{
    Decision, InvoiceStatus, OrderStatus, RequestStatus, Role, Urgency, VendorStatus,
};
pub use error::{ModelError, Result};
pub use identity::{ActingIdentity, IdentityBacking};
pub use ids::{BudgetLineId, InvoiceId, PurchaseOrderId, RequestId, StaffId, VendorId};
pub use window::MonthWindow;
