//! The domain store: exclusive owner of every entity collection.
//!
//! All collections are `Vec`-backed, so iteration order is insertion order —
//! the order the visibility filter is required to preserve. Cross-entity
//! lookups return `Option` and tolerate dangling references.
//!
//! The store exposes typed insert/lookup operations only; lifecycle
//! transitions (status changes) go through [`crate::workflow`], which is the
//! sole writer of entity state.

use chrono::NaiveDate;

use portal_model::{
    BudgetLine, BudgetLineId, Invoice, InvoiceId, InvoiceStatus, OrderStatus, PurchaseOrder,
    PurchaseOrderId, Request, RequestId, RequestStatus, Role, Staff, StaffId, Urgency, Vendor,
    VendorId, VendorStatus,
};

/// First id handed out for requests when the collection is empty. Keeps
/// runtime ids above the seeded 101-104 range.
const REQUEST_ID_FLOOR: u32 = 101;

/// In-memory record set for one portal session.
#[derive(Debug, Default, Clone)]
pub struct DomainStore {
    staff: Vec<Staff>,
    budget_lines: Vec<BudgetLine>,
    requests: Vec<Request>,
    vendors: Vec<Vendor>,
    orders: Vec<PurchaseOrder>,
    invoices: Vec<Invoice>,
}

impl DomainStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo record set: five staff members, four budget lines, four
    /// January-2026 IT requests, three vendors, two purchase orders and two
    /// invoices.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        store.insert_staff(Staff {
            id: StaffId::new(1),
            name: "John Coordinator".to_string(),
            department: "IT".to_string(),
            role: Role::Coordinator,
        });
        store.insert_staff(Staff {
            id: StaffId::new(2),
            name: "Sarah Supervisor".to_string(),
            department: "IT".to_string(),
            role: Role::Supervisor,
        });
        store.insert_staff(Staff {
            id: StaffId::new(3),
            name: "Michael Manager".to_string(),
            department: "IT".to_string(),
            role: Role::Manager,
        });
        store.insert_staff(Staff {
            id: StaffId::new(4),
            name: "Lisa Finance".to_string(),
            department: "Finance".to_string(),
            role: Role::FinanceOfficer,
        });
        store.insert_staff(Staff {
            id: StaffId::new(5),
            name: "David Procurement".to_string(),
            department: "Procurement".to_string(),
            role: Role::ProcurementOfficer,
        });

        store.insert_budget_line(BudgetLine {
            id: BudgetLineId::new(1),
            description: "Cloud Services".to_string(),
            department: "IT".to_string(),
            budget_amount: 15_000.0,
        });
        store.insert_budget_line(BudgetLine {
            id: BudgetLineId::new(2),
            description: "Software Licenses".to_string(),
            department: "IT".to_string(),
            budget_amount: 8_000.0,
        });
        store.insert_budget_line(BudgetLine {
            id: BudgetLineId::new(3),
            description: "Office Supplies".to_string(),
            department: "Admin".to_string(),
            budget_amount: 5_000.0,
        });
        store.insert_budget_line(BudgetLine {
            id: BudgetLineId::new(4),
            description: "Consulting Services".to_string(),
            department: "HR".to_string(),
            budget_amount: 20_000.0,
        });

        store.insert_request(seed_request(
            101,
            "Cloud Services",
            1200.0,
            RequestStatus::PendingApproval,
            Urgency::High,
            (2026, 1, 15),
        ));
        store.insert_request(seed_request(
            102,
            "Software Licenses",
            450.0,
            RequestStatus::Approved,
            Urgency::Medium,
            (2026, 1, 20),
        ));
        store.insert_request(seed_request(
            103,
            "Office Supplies",
            120.0,
            RequestStatus::Fulfilled,
            Urgency::Low,
            (2026, 1, 10),
        ));
        store.insert_request(seed_request(
            104,
            "Custom Development",
            3500.0,
            RequestStatus::PendingApproval,
            Urgency::High,
            (2026, 1, 25),
        ));

        store.insert_vendor(Vendor {
            id: VendorId::new(1),
            name: "TechSolutions Inc".to_string(),
            department: "IT".to_string(),
            status: VendorStatus::Approved,
        });
        store.insert_vendor(Vendor {
            id: VendorId::new(2),
            name: "OfficeSupplies Co".to_string(),
            department: "Admin".to_string(),
            status: VendorStatus::Pending,
        });
        store.insert_vendor(Vendor {
            id: VendorId::new(3),
            name: "CloudExperts Ltd".to_string(),
            department: "IT".to_string(),
            status: VendorStatus::Approved,
        });

        store.insert_order(PurchaseOrder {
            id: PurchaseOrderId::new(1),
            vendor: VendorId::new(1),
            request: RequestId::new(102),
            amount: 450.0,
            status: OrderStatus::Completed,
        });
        store.insert_order(PurchaseOrder {
            id: PurchaseOrderId::new(2),
            vendor: VendorId::new(3),
            request: RequestId::new(101),
            amount: 1200.0,
            status: OrderStatus::Processing,
        });

        store.insert_invoice(Invoice {
            id: InvoiceId::new(1),
            order: PurchaseOrderId::new(1),
            amount: 450.0,
            status: InvoiceStatus::Paid,
            uploaded: date(2026, 1, 22),
        });
        store.insert_invoice(Invoice {
            id: InvoiceId::new(2),
            order: PurchaseOrderId::new(2),
            amount: 1200.0,
            status: InvoiceStatus::Pending,
            uploaded: date(2026, 1, 28),
        });

        store
    }

    // ------------------------------------------------------------------
    // Collections, in insertion order
    // ------------------------------------------------------------------

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn budget_lines(&self) -> &[BudgetLine] {
        &self.budget_lines
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn orders(&self) -> &[PurchaseOrder] {
        &self.orders
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    // ------------------------------------------------------------------
    // Lookups — `None` for a dangling reference, never a panic
    // ------------------------------------------------------------------

    pub fn staff_member(&self, id: StaffId) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    /// First staff record carrying the given role.
    pub fn staff_by_role(&self, role: Role) -> Option<&Staff> {
        self.staff.iter().find(|s| s.role == role)
    }

    pub fn request(&self, id: RequestId) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn vendor(&self, id: VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    pub fn order(&self, id: PurchaseOrderId) -> Option<&PurchaseOrder> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn invoice(&self, id: InvoiceId) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id == id)
    }

    /// Budget lines available to a requester from `department`.
    pub fn budget_lines_for<'a>(&'a self, department: &str) -> Vec<&'a BudgetLine> {
        self.budget_lines
            .iter()
            .filter(|line| line.department == department)
            .collect()
    }

    /// Purchase orders issued to a vendor.
    pub fn orders_for_vendor(&self, vendor: VendorId) -> Vec<&PurchaseOrder> {
        self.orders.iter().filter(|o| o.vendor == vendor).collect()
    }

    /// Invoices raised against a vendor's purchase orders.
    pub fn invoices_for_vendor(&self, vendor: VendorId) -> Vec<&Invoice> {
        self.invoices
            .iter()
            .filter(|invoice| {
                self.orders
                    .iter()
                    .any(|o| o.id == invoice.order && o.vendor == vendor)
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Id allocation
    // ------------------------------------------------------------------

    /// Next request id: one past the current maximum, never below the
    /// seeded range.
    pub fn next_request_id(&self) -> RequestId {
        let next = self
            .requests
            .iter()
            .map(|r| r.id.value())
            .max()
            .map_or(REQUEST_ID_FLOOR, |max| max + 1);
        RequestId::new(next)
    }

    /// Next vendor id: one past the current maximum.
    pub fn next_vendor_id(&self) -> VendorId {
        let next = self
            .vendors
            .iter()
            .map(|v| v.id.value())
            .max()
            .map_or(1, |max| max + 1);
        VendorId::new(next)
    }

    // ------------------------------------------------------------------
    // Inserts
    // ------------------------------------------------------------------

    pub fn insert_staff(&mut self, staff: Staff) {
        self.staff.push(staff);
    }

    pub fn insert_budget_line(&mut self, line: BudgetLine) {
        self.budget_lines.push(line);
    }

    pub fn insert_request(&mut self, request: Request) {
        self.requests.push(request);
    }

    pub fn insert_vendor(&mut self, vendor: Vendor) {
        self.vendors.push(vendor);
    }

    pub fn insert_order(&mut self, order: PurchaseOrder) {
        self.orders.push(order);
    }

    pub fn insert_invoice(&mut self, invoice: Invoice) {
        self.invoices.push(invoice);
    }

    // ------------------------------------------------------------------
    // Mutable lookups, reserved for the workflow engine
    // ------------------------------------------------------------------

    pub(crate) fn request_mut(&mut self, id: RequestId) -> Option<&mut Request> {
        self.requests.iter_mut().find(|r| r.id == id)
    }

    pub(crate) fn vendor_mut(&mut self, id: VendorId) -> Option<&mut Vendor> {
        self.vendors.iter_mut().find(|v| v.id == id)
    }
}

fn seed_request(
    id: u32,
    product: &str,
    amount: f64,
    status: RequestStatus,
    urgency: Urgency,
    (year, month, day): (i32, u32, u32),
) -> Request {
    Request {
        id: RequestId::new(id),
        requester: StaffId::new(1),
        product_service: product.to_string(),
        approx_amount: amount,
        status,
        urgency,
        created: date(year, month, day),
        department: "IT".to_string(),
        reason: None,
        documents: vec![],
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed dates are compile-time constants; fall back to epoch rather than
    // panic if one is ever mistyped.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
