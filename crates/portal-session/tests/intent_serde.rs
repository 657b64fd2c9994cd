//! Wire-format contract for the intent script runner.

use portal_engine::RequestDraft;
use portal_model::{Decision, RequestId, Role};
use portal_session::Intent;

#[test]
fn select_role_wire_format() {
    let intent = Intent::SelectRole {
        role: Role::Coordinator,
    };
    let json = serde_json::to_string(&intent).expect("serialize");
    assert_eq!(json, r#"{"type":"select_role","role":"Coordinator"}"#);
}

#[test]
fn decide_request_wire_format() {
    let json = r#"{"type":"decide_request","id":101,"decision":"approve"}"#;
    let intent: Intent = serde_json::from_str(json).expect("deserialize");
    match intent {
        Intent::DecideRequest { id, decision } => {
            assert_eq!(id, RequestId::new(101));
            assert_eq!(decision, Decision::Approve);
        }
        other => panic!("unexpected intent: {other:?}"),
    }
}

#[test]
fn script_round_trips() {
    let script = vec![
        Intent::SelectRole {
            role: Role::Coordinator,
        },
        Intent::NewRecord,
        Intent::SubmitRequest {
            draft: RequestDraft {
                product_service: "Cloud Services".to_string(),
                approx_amount: 800.0,
                ..RequestDraft::default()
            },
        },
        Intent::SignOut,
    ];
    let json = serde_json::to_string_pretty(&script).expect("serialize script");
    let round: Vec<Intent> = serde_json::from_str(&json).expect("deserialize script");
    assert_eq!(round.len(), script.len());
    assert_eq!(round[1].name(), "new_record");
    assert_eq!(round[3].name(), "sign_out");
}

#[test]
fn defaults_fill_missing_draft_fields() {
    let json = r#"{"type":"submit_request","draft":{"product_service":"Office Supplies"}}"#;
    let intent: Intent = serde_json::from_str(json).expect("deserialize");
    match intent {
        Intent::SubmitRequest { draft } => {
            assert_eq!(draft.product_service, "Office Supplies");
            assert_eq!(draft.approx_amount, 0.0);
            assert!(draft.documents.is_empty());
        }
        other => panic!("unexpected intent: {other:?}"),
    }
}
