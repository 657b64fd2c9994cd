//! The acting identity: who is driving the session.

use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::ids::{StaffId, VendorId};

/// Record backing the acting identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityBacking {
    Staff(StaffId),
    Vendor(VendorId),
}

/// The Staff or Vendor record currently driving the session, plus its role
/// tag. Replaced wholesale on every role selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActingIdentity {
    pub name: String,
    pub department: String,
    pub role: Role,
    pub backing: IdentityBacking,
}

impl ActingIdentity {
    /// The staff record behind this identity, if staff-backed.
    pub fn staff_id(&self) -> Option<StaffId> {
        match self.backing {
            IdentityBacking::Staff(id) => Some(id),
            IdentityBacking::Vendor(_) => None,
        }
    }

    /// The vendor record behind this identity, if vendor-backed.
    pub fn vendor_id(&self) -> Option<VendorId> {
        match self.backing {
            IdentityBacking::Staff(_) => None,
            IdentityBacking::Vendor(id) => Some(id),
        }
    }
}
