// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use relief_ledger::types::{EventId, Identity, TaskId};
use relief_ledger::{Ledger, LedgerError, LogRequest};
use relief_node::collaborators::{ReviewSink, SinkPolicy, TaskBoard};
use relief_node::service::LedgerService;
use relief_node::telemetry::{init_telemetry, render_metrics};

// The recorder is process-global, so this file holds a single test.
#[tokio::test]
async fn submit_records_admission_metrics() {
    init_telemetry("relief_node=warn");

    let svc = LedgerService::new(Ledger::new(Identity::from("coordinator")));
    let board = TaskBoard::new();
    board.post_task(TaskId(1), EventId(1), Vec::new());
    board.assign(TaskId(1), Identity::from("alice"));
    let sink = ReviewSink::default();
    let alice = Identity::from("alice");

    let ok = LogRequest::new(EventId(1), TaskId(1), 2, 0, 10);
    svc.submit(&alice, &ok, &board, &sink).await.unwrap();

    sink.set_policy(SinkPolicy::Unreachable);
    let rolled_back = LogRequest::new(EventId(1), TaskId(1), 2, 20, 30);
    assert_eq!(
        svc.submit(&alice, &rolled_back, &board, &sink).await,
        Err(LedgerError::IntegrationFailure)
    );

    sink.set_policy(SinkPolicy::AcceptAll);
    let bad_hours = LogRequest::new(EventId(1), TaskId(1), 0, 40, 50);
    assert_eq!(
        svc.submit(&alice, &bad_hours, &board, &sink).await,
        Err(LedgerError::InvalidHours)
    );

    let text = render_metrics();
    assert!(text.contains("relief_records_admitted_total 1"), "{text}");
    assert!(text.contains("relief_rollbacks_total 1"), "{text}");
    assert!(
        text.contains(r#"relief_records_rejected_total{reason="integration_failure"} 1"#),
        "{text}"
    );
    assert!(
        text.contains(r#"relief_records_rejected_total{reason="invalid_hours"} 1"#),
        "{text}"
    );
    assert!(text.contains("relief_submit_duration_seconds_count 3"), "{text}");
    assert!(text.contains("relief_node_up 1"), "{text}");
}
