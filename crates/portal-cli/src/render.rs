//! Terminal rendering of portal screens.
//!
//! This is presentation only: everything printed here is read back from the
//! session's queries; nothing mutates state.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use portal_engine::DomainStore;
use portal_model::{
    Invoice, InvoiceStatus, OrderStatus, PurchaseOrder, Request, RequestStatus, Role, Urgency,
    Vendor, VendorStatus,
};
use portal_session::Session;

/// Print the current screen for whatever role is signed in.
pub fn print_dashboard(session: &Session) {
    let Some(identity) = session.identity() else {
        println!("No acting identity; showing the role selection screen.");
        print_roles();
        return;
    };

    println!();
    println!(
        "=== {} — {} ({}) — window {} ===",
        session.current_view(),
        identity.name,
        identity.department,
        session.window()
    );

    match identity.role {
        Role::Coordinator | Role::Supervisor | Role::Manager => {
            let metrics = session.metrics();
            println!(
                "Requests: {} total | {} pending | {} approved | {} fulfilled | {} rejected",
                metrics.total, metrics.pending, metrics.approved, metrics.fulfilled,
                metrics.rejected
            );
            println!("{}", request_table(session.store(), &session.visible_requests()));
        }
        Role::Vendor => {
            let summary = session.vendor_summary();
            println!(
                "Orders: {} active | Invoices: {} submitted, {} paid, {} pending payment",
                summary.active_orders,
                summary.submitted_invoices,
                summary.paid_invoices,
                summary.pending_payment
            );
            println!("{}", order_table(session.store(), &session.vendor_orders()));
            println!("{}", invoice_table(&session.vendor_invoices()));
        }
        Role::FinanceOfficer => {
            let metrics = session.metrics();
            println!(
                "Requests: {} total | {} pending | {} approved | {} fulfilled | {} rejected",
                metrics.total, metrics.pending, metrics.approved, metrics.fulfilled,
                metrics.rejected
            );
            println!("{}", request_table(session.store(), &session.visible_requests()));
            let pending: Vec<&Invoice> = session
                .store()
                .invoices()
                .iter()
                .filter(|i| i.status == InvoiceStatus::Pending)
                .collect();
            println!("Invoices pending verification:");
            println!("{}", invoice_table(&pending));
        }
        Role::ProcurementOfficer => {
            let summary = session.vendor_status_summary();
            println!(
                "Vendors: {} total | {} pending | {} approved | {} rejected",
                summary.total, summary.pending, summary.approved, summary.rejected
            );
            println!("{}", vendor_table(session.store().vendors()));
        }
    }
}

/// Print the role selection screen.
pub fn print_roles() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Landing view"),
        header_cell("Purpose"),
    ]);
    apply_table_style(&mut table);
    for role in Role::all() {
        table.add_row(vec![
            Cell::new(role.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(portal_session::View::Dashboard(*role).name()),
            Cell::new(role.description()),
        ]);
    }
    println!("{table}");
}

pub fn request_table(store: &DomainStore, requests: &[&Request]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Item"),
        header_cell("Requester"),
        header_cell("Amount"),
        header_cell("Status"),
        header_cell("Urgency"),
        header_cell("Date"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for request in requests {
        let requester = store
            .staff_member(request.requester)
            .map_or("-", |s| s.name.as_str());
        table.add_row(vec![
            Cell::new(format!("#{}", request.id)),
            Cell::new(&request.product_service),
            Cell::new(requester),
            Cell::new(format!("${:.2}", request.approx_amount)),
            request_status_cell(request.status),
            urgency_cell(request.urgency),
            Cell::new(request.created.to_string()),
        ]);
    }
    table
}

pub fn vendor_table(vendors: &[Vendor]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Vendor"),
        header_cell("Department"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for vendor in vendors {
        table.add_row(vec![
            Cell::new(vendor.id.to_string()),
            Cell::new(&vendor.name),
            Cell::new(&vendor.department),
            vendor_status_cell(vendor.status),
        ]);
    }
    table
}

pub fn order_table(store: &DomainStore, orders: &[&PurchaseOrder]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("PO"),
        header_cell("Request"),
        header_cell("Amount"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for order in orders {
        let item = store
            .request(order.request)
            .map_or("-", |r| r.product_service.as_str());
        table.add_row(vec![
            Cell::new(format!("PO-{}", order.id)),
            Cell::new(item),
            Cell::new(format!("${:.2}", order.amount)),
            order_status_cell(order.status),
        ]);
    }
    table
}

pub fn invoice_table(invoices: &[&Invoice]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Invoice"),
        header_cell("PO"),
        header_cell("Amount"),
        header_cell("Status"),
        header_cell("Uploaded"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for invoice in invoices {
        table.add_row(vec![
            Cell::new(format!("INV-{}", invoice.id)),
            Cell::new(format!("PO-{}", invoice.order)),
            Cell::new(format!("${:.2}", invoice.amount)),
            invoice_status_cell(invoice.status),
            Cell::new(invoice.uploaded.to_string()),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn request_status_cell(status: RequestStatus) -> Cell {
    let color = match status {
        RequestStatus::PendingApproval => Color::Yellow,
        RequestStatus::Approved => Color::Green,
        RequestStatus::Fulfilled => Color::Blue,
        RequestStatus::Rejected => Color::Red,
    };
    Cell::new(status.as_str()).fg(color)
}

fn vendor_status_cell(status: VendorStatus) -> Cell {
    let color = match status {
        VendorStatus::Pending => Color::Yellow,
        VendorStatus::Approved => Color::Green,
        VendorStatus::Rejected => Color::Red,
    };
    Cell::new(status.as_str()).fg(color)
}

fn order_status_cell(status: OrderStatus) -> Cell {
    let color = match status {
        OrderStatus::Processing => Color::Blue,
        OrderStatus::Completed => Color::Green,
    };
    Cell::new(status.as_str()).fg(color)
}

fn invoice_status_cell(status: InvoiceStatus) -> Cell {
    let color = match status {
        InvoiceStatus::Pending => Color::Yellow,
        InvoiceStatus::Paid => Color::Green,
    };
    Cell::new(status.as_str()).fg(color)
}

fn urgency_cell(urgency: Urgency) -> Cell {
    let color = match urgency {
        Urgency::Low => Color::Green,
        Urgency::Medium => Color::Yellow,
        Urgency::High => Color::Red,
    };
    Cell::new(urgency.as_str()).fg(color)
}
