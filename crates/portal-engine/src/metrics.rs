//! Derived dashboard counts.
//!
//! Metrics are recomputed from the visible set on every read; nothing here
//! is cached or stored.

use serde::{Deserialize, Serialize};

use portal_model::{
    Invoice, InvoiceStatus, PurchaseOrder, Request, RequestStatus, Vendor, VendorStatus,
};

/// Status breakdown of a set of requests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMetrics {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub fulfilled: usize,
    pub rejected: usize,
}

impl RequestMetrics {
    /// Count a visible request set, typically the output of
    /// [`crate::visible_requests`].
    pub fn from_requests<'a, I>(requests: I) -> Self
    where
        I: IntoIterator<Item = &'a Request>,
    {
        let mut metrics = Self::default();
        for request in requests {
            metrics.total += 1;
            match request.status {
                RequestStatus::PendingApproval => metrics.pending += 1,
                RequestStatus::Approved => metrics.approved += 1,
                RequestStatus::Fulfilled => metrics.fulfilled += 1,
                RequestStatus::Rejected => metrics.rejected += 1,
            }
        }
        metrics
    }
}

/// Vendor-facing dashboard counts: purchase orders and invoice states.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorAccountSummary {
    pub active_orders: usize,
    pub submitted_invoices: usize,
    pub paid_invoices: usize,
    pub pending_payment: usize,
}

impl VendorAccountSummary {
    pub fn from_records(orders: &[&PurchaseOrder], invoices: &[&Invoice]) -> Self {
        Self {
            active_orders: orders.len(),
            submitted_invoices: invoices.len(),
            paid_invoices: invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Paid)
                .count(),
            pending_payment: invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Pending)
                .count(),
        }
    }
}

/// Procurement-facing vendor status breakdown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorStatusSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl VendorStatusSummary {
    pub fn from_vendors<'a, I>(vendors: I) -> Self
    where
        I: IntoIterator<Item = &'a Vendor>,
    {
        let mut summary = Self::default();
        for vendor in vendors {
            summary.total += 1;
            match vendor.status {
                VendorStatus::Pending => summary.pending += 1,
                VendorStatus::Approved => summary.approved += 1,
                VendorStatus::Rejected => summary.rejected += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DomainStore;
    use portal_model::VendorId;

    #[test]
    fn request_metrics_from_seed() {
        let store = DomainStore::seeded();
        let metrics = RequestMetrics::from_requests(store.requests());
        assert_eq!(
            metrics,
            RequestMetrics {
                total: 4,
                pending: 2,
                approved: 1,
                fulfilled: 1,
                rejected: 0,
            }
        );
    }

    #[test]
    fn vendor_account_summary_from_seed() {
        let store = DomainStore::seeded();
        let vendor = VendorId::new(1);
        let orders = store.orders_for_vendor(vendor);
        let invoices = store.invoices_for_vendor(vendor);
        let summary = VendorAccountSummary::from_records(&orders, &invoices);
        assert_eq!(summary.active_orders, 1);
        assert_eq!(summary.submitted_invoices, 1);
        assert_eq!(summary.paid_invoices, 1);
        assert_eq!(summary.pending_payment, 0);
    }

    #[test]
    fn vendor_status_summary_from_seed() {
        let store = DomainStore::seeded();
        let summary = VendorStatusSummary::from_vendors(store.vendors());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.approved, 2);
        assert_eq!(summary.rejected, 0);
    }
}
