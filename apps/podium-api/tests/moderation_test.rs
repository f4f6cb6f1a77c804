mod common;

use axum::http::StatusCode;

// ---------------------------------------------------------------------------
// POST /api/mod/approve
// ---------------------------------------------------------------------------

#[tokio::test]
async fn approve_sets_and_clears_the_flag() {
    let (server, _state) = common::test_app();
    let id = common::submit_question(&server, "alice", "Approve me").await;

    let resp = server
        .post("/api/mod/approve")
        .json(&serde_json::json!({ "id": id, "approved": true }))
        .await;
    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["question"]["approved"], true);

    let resp = server
        .post("/api/mod/approve")
        .json(&serde_json::json!({ "id": id, "approved": false }))
        .await;
    resp.assert_status_ok();
    let body: serde_json::Value = resp.json();
    assert_eq!(body["question"]["approved"], false);
}

#[tokio::test]
async fn approving_twice_is_idempotent() {
    let (server, _state) = common::test_app();
    let id = common::submit_question(&server, "alice", "Twice approved").await;

    for _ in 0..2 {
        let resp = server
            .post("/api/mod/approve")
            .json(&serde_json::json!({ "id": id, "approved": true }))
            .await;
        resp.assert_status_ok();
        let body: serde_json::Value = resp.json();
        assert_eq!(body["question"]["approved"], true);
        assert_eq!(body["question"]["votes"], 0);
    }
}

#[tokio::test]
async fn approve_unknown_question_is_404() {
    let (server, _state) = common::test_app();

    let resp = server
        .post("/api/mod/approve")
        .json(&serde_json::json!({ "id": "q_missing0", "approved": true }))
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn approve_with_missing_or_mistyped_fields_is_400() {
    let (server, _state) = common::test_app();
    let id = common::submit_question(&server, "alice", "Validate me").await;

    let resp = server
        .post("/api/mod/approve")
        .json(&serde_json::json!({ "id": id }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let resp = server
        .post("/api/mod/approve")
        .json(&serde_json::json!({ "approved": true }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let resp = server
        .post("/api/mod/approve")
        .json(&serde_json::json!({ "id": id, "approved": "yes" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
}
