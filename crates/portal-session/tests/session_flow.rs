//! End-to-end session flows over the seeded record set.

use portal_engine::{DecisionOutcome, RequestDraft, VendorDraft};
use portal_model::{Decision, MonthWindow, RequestId, RequestStatus, Role, VendorId, VendorStatus};
use portal_session::{Intent, IntentError, Outcome, Session, View};

fn select(session: &mut Session, role: Role) {
    session
        .apply(Intent::SelectRole { role })
        .expect("role selection");
}

#[test]
fn coordinator_round_trip_appends_one_request() {
    let mut session = Session::seeded();
    assert_eq!(session.current_view(), View::Initial);
    let before = session.store().requests().len();

    select(&mut session, Role::Coordinator);
    assert_eq!(session.current_view(), View::Dashboard(Role::Coordinator));

    session.apply(Intent::NewRecord).expect("open form");
    assert_eq!(session.current_view(), View::RequestForm);

    let draft = RequestDraft {
        product_service: "Cloud Services".to_string(),
        approx_amount: 800.0,
        ..RequestDraft::default()
    };
    let outcome = session
        .apply(Intent::SubmitRequest { draft })
        .expect("submit");
    assert!(matches!(outcome, Outcome::RequestCreated { id } if id == RequestId::new(105)));
    assert_eq!(session.current_view(), View::Dashboard(Role::Coordinator));
    assert_eq!(session.store().requests().len(), before + 1);
}

#[test]
fn coordinator_metrics_match_the_seed() {
    let mut session = Session::seeded();
    select(&mut session, Role::Coordinator);

    let metrics = session.metrics();
    assert_eq!(metrics.total, 4);
    assert_eq!(metrics.pending, 2);
    assert_eq!(metrics.approved, 1);
    assert_eq!(metrics.fulfilled, 1);
    assert_eq!(metrics.rejected, 0);
}

#[test]
fn vendor_sees_only_requests_behind_its_orders() {
    let mut session = Session::seeded();
    select(&mut session, Role::Vendor);
    assert_eq!(session.current_view(), View::Dashboard(Role::Vendor));

    let visible = session.visible_requests();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, RequestId::new(102));

    let summary = session.vendor_summary();
    assert_eq!(summary.active_orders, 1);
    assert_eq!(summary.submitted_invoices, 1);
}

#[test]
fn supervisor_decides_from_the_review_view() {
    let mut session = Session::seeded();
    select(&mut session, Role::Supervisor);

    let pending: Vec<RequestId> = session.pending_requests().iter().map(|r| r.id).collect();
    assert_eq!(pending, vec![RequestId::new(101), RequestId::new(104)]);

    session
        .apply(Intent::OpenRequest {
            id: RequestId::new(101),
        })
        .expect("open review");
    assert_eq!(
        session.current_view(),
        View::RequestDecision(RequestId::new(101))
    );

    let outcome = session
        .apply(Intent::DecideRequest {
            id: RequestId::new(101),
            decision: Decision::Approve,
        })
        .expect("decide");
    assert!(matches!(
        outcome,
        Outcome::RequestDecided {
            result: DecisionOutcome::Applied,
            ..
        }
    ));
    assert_eq!(session.current_view(), View::Dashboard(Role::Supervisor));
    assert_eq!(
        session
            .store()
            .request(RequestId::new(101))
            .expect("present")
            .status,
        RequestStatus::Approved
    );
}

#[test]
fn deciding_requires_the_review_view() {
    let mut session = Session::seeded();
    select(&mut session, Role::Supervisor);

    let err = session
        .apply(Intent::DecideRequest {
            id: RequestId::new(101),
            decision: Decision::Approve,
        })
        .expect_err("decision outside review view");
    assert!(matches!(err, IntentError::Unavailable { .. }));
    assert_eq!(
        session
            .store()
            .request(RequestId::new(101))
            .expect("present")
            .status,
        RequestStatus::PendingApproval
    );
}

#[test]
fn procurement_registers_and_decides_vendors() {
    let mut session = Session::seeded();
    select(&mut session, Role::ProcurementOfficer);

    session.apply(Intent::NewRecord).expect("open vendor form");
    assert_eq!(session.current_view(), View::NewVendorForm);

    let outcome = session
        .apply(Intent::RegisterVendor {
            draft: VendorDraft {
                name: "Acme".to_string(),
                department: "IT".to_string(),
            },
        })
        .expect("register");
    assert!(matches!(outcome, Outcome::VendorRegistered { id } if id == VendorId::new(4)));
    assert_eq!(
        session
            .store()
            .vendor(VendorId::new(4))
            .expect("inserted")
            .status,
        VendorStatus::Pending
    );

    // Approving a pending vendor happens straight from the dashboard.
    let outcome = session
        .apply(Intent::DecideVendor {
            id: VendorId::new(4),
            decision: Decision::Approve,
        })
        .expect("approve vendor");
    assert!(matches!(
        outcome,
        Outcome::VendorDecided {
            result: DecisionOutcome::Applied,
            ..
        }
    ));
}

#[test]
fn out_of_table_navigation_is_rejected() {
    let mut session = Session::seeded();
    select(&mut session, Role::Coordinator);

    let err = session
        .apply(Intent::Navigate {
            view: View::NewVendorForm,
        })
        .expect_err("foreign form");
    assert!(matches!(err, IntentError::Navigation { .. }));
    assert_eq!(session.current_view(), View::Dashboard(Role::Coordinator));

    let err = session
        .apply(Intent::Navigate {
            view: View::Dashboard(Role::Manager),
        })
        .expect_err("foreign dashboard");
    assert!(matches!(err, IntentError::Navigation { .. }));
}

#[test]
fn sign_out_clears_the_identity() {
    let mut session = Session::seeded();
    select(&mut session, Role::Manager);
    session.apply(Intent::SignOut).expect("sign out");

    assert_eq!(session.current_view(), View::Initial);
    assert!(session.identity().is_none());

    // Signed out, only the window scopes visibility.
    assert_eq!(session.visible_requests().len(), 4);

    let err = session.apply(Intent::SignOut).expect_err("already out");
    assert!(matches!(err, IntentError::NotSignedIn));
}

#[test]
fn window_change_rescopes_every_query() {
    let mut session = Session::seeded();
    select(&mut session, Role::Coordinator);

    let window: MonthWindow = "2026-02".parse().expect("valid window");
    session
        .apply(Intent::SetWindow { window })
        .expect("set window");
    assert_eq!(session.metrics().total, 0);
    assert!(session.visible_requests().is_empty());

    let back: MonthWindow = "2026-01".parse().expect("valid window");
    session.apply(Intent::SetWindow { window: back }).expect("set window");
    assert_eq!(session.metrics().total, 4);
}

#[test]
fn entering_a_form_resets_in_progress_fields() {
    let mut session = Session::seeded();
    select(&mut session, Role::Coordinator);

    session.apply(Intent::NewRecord).expect("open form");
    session.forms_mut().request.product_service = "half-typed".to_string();

    session.apply(Intent::Cancel).expect("cancel");
    assert_eq!(session.current_view(), View::Dashboard(Role::Coordinator));
    assert!(session.forms().request.product_service.is_empty());

    session.apply(Intent::NewRecord).expect("reopen form");
    assert!(session.forms().request.product_service.is_empty());
}

#[test]
fn validation_failure_keeps_the_form_open() {
    let mut session = Session::seeded();
    select(&mut session, Role::Coordinator);
    session.apply(Intent::NewRecord).expect("open form");

    let err = session
        .apply(Intent::SubmitRequest {
            draft: RequestDraft::default(),
        })
        .expect_err("empty draft");
    assert!(matches!(err, IntentError::Validation(_)));
    assert_eq!(session.current_view(), View::RequestForm);
    assert_eq!(session.store().requests().len(), 4);
}

#[test]
fn stale_row_click_is_ignored() {
    let mut session = Session::seeded();
    select(&mut session, Role::Supervisor);

    let outcome = session
        .apply(Intent::OpenRequest {
            id: RequestId::new(999),
        })
        .expect("stale reference is not an error");
    assert!(matches!(outcome, Outcome::Ignored));
    assert_eq!(session.current_view(), View::Dashboard(Role::Supervisor));
}

#[test]
fn budget_choices_follow_the_identity_department() {
    let mut session = Session::seeded();
    select(&mut session, Role::Coordinator);
    let choices = session.budget_choices();
    assert_eq!(choices.len(), 2);
    assert!(choices.iter().all(|line| line.department == "IT"));
}
