//! Integer identifier newtypes.
//!
//! Every entity kind carries its own id type so a request id can never be
//! passed where a vendor id is expected. Ids are assigned by the domain
//! store at creation time and are unique within their kind.

use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifier of a staff member.
    StaffId
);
entity_id!(
    /// Identifier of a budget line.
    BudgetLineId
);
entity_id!(
    /// Identifier of a purchase request.
    RequestId
);
entity_id!(
    /// Identifier of a vendor.
    VendorId
);
entity_id!(
    /// Identifier of a purchase order.
    PurchaseOrderId
);
entity_id!(
    /// Identifier of an invoice.
    InvoiceId
);
