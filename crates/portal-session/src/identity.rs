//! Role resolution.
//!
//! Maps a chosen role tag to the record that will act for the session.
//! Staff-backed roles pick the first matching staff member. The Vendor role
//! — and, deliberately, any staff role with no matching staff record —
//! resolves to an identity built from the first vendor, with the role tag
//! degraded to Vendor. The landing view still derives from the role that
//! was requested.

use tracing::{debug, warn};

use portal_engine::DomainStore;
use portal_model::{ActingIdentity, IdentityBacking, Role};

use crate::intent::IntentError;

/// Resolve `role` against the store's staff and vendor records.
///
/// Fails only when the store holds neither a matching staff member nor any
/// vendor to fall back to.
pub fn resolve_role(store: &DomainStore, role: Role) -> Result<ActingIdentity, IntentError> {
    if role.is_staff_backed()
        && let Some(staff) = store.staff_by_role(role)
    {
        debug!(role = %role, staff = %staff.id, "resolved staff identity");
        return Ok(ActingIdentity {
            name: staff.name.clone(),
            department: staff.department.clone(),
            role,
            backing: IdentityBacking::Staff(staff.id),
        });
    }

    match store.vendors().first() {
        Some(vendor) => {
            if role.is_staff_backed() {
                warn!(requested = %role, vendor = %vendor.id, "no staff for role, acting as vendor");
            }
            Ok(ActingIdentity {
                name: vendor.name.clone(),
                department: vendor.department.clone(),
                role: Role::Vendor,
                backing: IdentityBacking::Vendor(vendor.id),
            })
        }
        None => Err(IntentError::NoActorAvailable(role)),
    }
}
