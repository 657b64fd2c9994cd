//! Role-scoped request visibility.
//!
//! Pure reads over the store: no caching, no mutation. Both the acting
//! identity and the selected window can change between reads, so callers
//! re-evaluate on every query.

use portal_model::{ActingIdentity, MonthWindow, Request, RequestStatus, Role};

use crate::store::DomainStore;

/// Requests visible to `identity` inside `window`, in store order.
///
/// A request is visible when its created date falls in the window AND the
/// role-scoped predicate holds:
///
/// - Coordinator: own requests only
/// - Supervisor/Manager: same department
/// - Vendor: requests tied to one of the vendor's purchase orders
/// - Finance/Procurement officers: everything
pub fn visible_requests<'a>(
    store: &'a DomainStore,
    identity: &ActingIdentity,
    window: MonthWindow,
) -> Vec<&'a Request> {
    store
        .requests()
        .iter()
        .filter(|request| window.contains(request.created))
        .filter(|request| role_predicate(store, identity, request))
        .collect()
}

/// The Pending-Approval subset of the visible set. Drives the dashboard
/// notification list.
pub fn pending_requests<'a>(
    store: &'a DomainStore,
    identity: &ActingIdentity,
    window: MonthWindow,
) -> Vec<&'a Request> {
    visible_requests(store, identity, window)
        .into_iter()
        .filter(|request| request.status == RequestStatus::PendingApproval)
        .collect()
}

fn role_predicate(store: &DomainStore, identity: &ActingIdentity, request: &Request) -> bool {
    match identity.role {
        Role::Coordinator => identity.staff_id() == Some(request.requester),
        Role::Supervisor | Role::Manager => identity.department == request.department,
        Role::Vendor => match identity.vendor_id() {
            Some(vendor) => store
                .orders()
                .iter()
                .any(|order| order.vendor == vendor && order.request == request.id),
            None => false,
        },
        Role::FinanceOfficer | Role::ProcurementOfficer => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_model::{IdentityBacking, RequestId, StaffId, VendorId};

    fn window() -> MonthWindow {
        "2026-01".parse().expect("valid window")
    }

    fn staff_identity(role: Role, id: u32, department: &str) -> ActingIdentity {
        ActingIdentity {
            name: "tester".to_string(),
            department: department.to_string(),
            role,
            backing: IdentityBacking::Staff(StaffId::new(id)),
        }
    }

    #[test]
    fn coordinator_sees_only_own_requests() {
        let store = DomainStore::seeded();
        let own = staff_identity(Role::Coordinator, 1, "IT");
        let visible = visible_requests(&store, &own, window());
        assert_eq!(visible.len(), 4);

        let other = staff_identity(Role::Coordinator, 2, "IT");
        assert!(visible_requests(&store, &other, window()).is_empty());
    }

    #[test]
    fn supervisor_and_manager_scope_by_department() {
        let store = DomainStore::seeded();
        let supervisor = staff_identity(Role::Supervisor, 2, "IT");
        assert_eq!(visible_requests(&store, &supervisor, window()).len(), 4);

        let manager_elsewhere = staff_identity(Role::Manager, 3, "Finance");
        assert!(visible_requests(&store, &manager_elsewhere, window()).is_empty());
    }

    #[test]
    fn vendor_sees_requests_behind_its_orders() {
        let store = DomainStore::seeded();
        let vendor = ActingIdentity {
            name: "TechSolutions Inc".to_string(),
            department: "IT".to_string(),
            role: Role::Vendor,
            backing: IdentityBacking::Vendor(VendorId::new(1)),
        };
        let visible = visible_requests(&store, &vendor, window());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, RequestId::new(102));
    }

    #[test]
    fn officers_see_everything_in_window() {
        let store = DomainStore::seeded();
        for role in [Role::FinanceOfficer, Role::ProcurementOfficer] {
            let identity = staff_identity(role, 4, "Finance");
            assert_eq!(visible_requests(&store, &identity, window()).len(), 4);
        }
    }

    #[test]
    fn window_excludes_other_months() {
        let store = DomainStore::seeded();
        let identity = staff_identity(Role::FinanceOfficer, 4, "Finance");
        let other: MonthWindow = "2026-02".parse().expect("valid window");
        assert!(visible_requests(&store, &identity, other).is_empty());
    }

    #[test]
    fn order_is_store_order() {
        let store = DomainStore::seeded();
        let identity = staff_identity(Role::Coordinator, 1, "IT");
        let ids: Vec<u32> = visible_requests(&store, &identity, window())
            .iter()
            .map(|r| r.id.value())
            .collect();
        assert_eq!(ids, vec![101, 102, 103, 104]);
    }

    #[test]
    fn pending_subset() {
        let store = DomainStore::seeded();
        let identity = staff_identity(Role::Supervisor, 2, "IT");
        let pending = pending_requests(&store, &identity, window());
        let ids: Vec<u32> = pending.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![101, 104]);
    }
}
