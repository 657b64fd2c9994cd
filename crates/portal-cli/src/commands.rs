//! Command implementations.

use std::fs;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;

use portal_engine::{InvoiceDraft, RequestDraft, VendorDraft};
use portal_model::{Decision, PurchaseOrderId, Role, Urgency};
use portal_session::{Intent, Outcome, Session};

use crate::cli::{DashboardArgs, DemoArgs, ScriptArgs};
use crate::render;

/// Walk the seeded scenario through every role.
pub fn run_demo(args: &DemoArgs) -> Result<()> {
    let mut session = Session::seeded();
    if let Some(window) = args.window {
        session.apply(Intent::SetWindow { window })?;
    }

    // The coordinator raises a request.
    session.apply(Intent::SelectRole {
        role: Role::Coordinator,
    })?;
    render::print_dashboard(&session);
    session.apply(Intent::NewRecord)?;
    let outcome = session.apply(Intent::SubmitRequest {
        draft: RequestDraft {
            product_service: "Cloud Services".to_string(),
            approx_amount: 800.0,
            urgency: Urgency::High,
            reason: Some("Capacity for the Q1 onboarding wave".to_string()),
            ..RequestDraft::default()
        },
    })?;
    let Outcome::RequestCreated { id: new_request } = outcome else {
        bail!("request submission produced no record");
    };
    info!(request = %new_request, "demo: request raised");
    render::print_dashboard(&session);

    // The supervisor approves it from the review screen.
    session.apply(Intent::SelectRole {
        role: Role::Supervisor,
    })?;
    render::print_dashboard(&session);
    session.apply(Intent::OpenRequest { id: new_request })?;
    session.apply(Intent::DecideRequest {
        id: new_request,
        decision: Decision::Approve,
    })?;
    render::print_dashboard(&session);

    // Procurement registers and approves a vendor.
    session.apply(Intent::SelectRole {
        role: Role::ProcurementOfficer,
    })?;
    session.apply(Intent::NewRecord)?;
    let outcome = session.apply(Intent::RegisterVendor {
        draft: VendorDraft {
            name: "Acme Networking".to_string(),
            department: "IT".to_string(),
        },
    })?;
    let Outcome::VendorRegistered { id: new_vendor } = outcome else {
        bail!("vendor registration produced no record");
    };
    session.apply(Intent::DecideVendor {
        id: new_vendor,
        decision: Decision::Approve,
    })?;
    render::print_dashboard(&session);

    // The vendor reviews its orders and submits an invoice.
    session.apply(Intent::SelectRole { role: Role::Vendor })?;
    render::print_dashboard(&session);
    session.apply(Intent::NewRecord)?;
    session.apply(Intent::SubmitInvoice {
        draft: InvoiceDraft {
            order: PurchaseOrderId::new(1),
            amount: 450.0,
            document: "invoice_jan2026.pdf".to_string(),
            notes: None,
        },
    })?;
    render::print_dashboard(&session);

    session.apply(Intent::SignOut)?;
    println!();
    println!(
        "Demo complete: request #{new_request} approved, vendor {new_vendor} onboarded, \
         one invoice acknowledged."
    );
    Ok(())
}

/// One applied script step.
#[derive(Serialize)]
struct StepReport {
    index: usize,
    intent: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Apply a JSON intent script. Returns true if any step was rejected.
pub fn run_script(args: &ScriptArgs) -> Result<bool> {
    let text = fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let intents: Vec<Intent> = serde_json::from_str(&text)
        .with_context(|| format!("parsing script {}", args.script.display()))?;

    let mut session = Session::seeded();
    let mut steps = Vec::with_capacity(intents.len());
    for (index, intent) in intents.into_iter().enumerate() {
        let name = intent.name();
        match session.apply(intent) {
            Ok(outcome) => steps.push(StepReport {
                index,
                intent: name,
                ok: true,
                outcome: Some(outcome),
                error: None,
            }),
            Err(error) => steps.push(StepReport {
                index,
                intent: name,
                ok: false,
                outcome: None,
                error: Some(error.to_string()),
            }),
        }
    }

    let rejected = steps.iter().filter(|s| !s.ok).count();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        for step in &steps {
            match (&step.outcome, &step.error) {
                (Some(outcome), _) => {
                    println!("{:>3}. {:<16} ok: {}", step.index, step.intent, describe(outcome));
                }
                (None, Some(error)) => {
                    println!("{:>3}. {:<16} rejected: {error}", step.index, step.intent);
                }
                (None, None) => {}
            }
        }
        println!();
        println!(
            "{} steps applied, {} rejected; final view {}",
            steps.len(),
            rejected,
            session.current_view()
        );
        render::print_dashboard(&session);
    }
    Ok(rejected > 0)
}

/// Render a single role's dashboard over the seed data.
pub fn run_dashboard(args: &DashboardArgs) -> Result<()> {
    let mut session = Session::seeded();
    if let Some(window) = args.window {
        session.apply(Intent::SetWindow { window })?;
    }
    session.apply(Intent::SelectRole { role: args.role })?;
    render::print_dashboard(&session);
    Ok(())
}

/// List the role set and landing views.
pub fn run_roles() {
    render::print_roles();
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::SignedIn { role, view } => format!("signed in as {role}, landed on {view}"),
        Outcome::WindowChanged { window } => format!("window set to {window}"),
        Outcome::Navigated { view } => format!("moved to {view}"),
        Outcome::RequestCreated { id } => format!("request #{id} created"),
        Outcome::RequestDecided { id, result } => {
            format!("request #{id} decision: {result:?}")
        }
        Outcome::VendorRegistered { id } => format!("vendor {id} registered"),
        Outcome::VendorDecided { id, result } => format!("vendor {id} decision: {result:?}"),
        Outcome::InvoiceAccepted { ack: Some(ack) } => {
            format!("invoice for PO-{} accepted", ack.order)
        }
        Outcome::InvoiceAccepted { ack: None } => "invoice ignored: order gone".to_string(),
        Outcome::Ignored => "ignored stale reference".to_string(),
        Outcome::SignedOut => "signed out".to_string(),
    }
}
