mod common;

#[tokio::test]
async fn list_speakers_returns_configured_set() {
    let (server, _state) = common::test_app();

    let resp = server.get("/api/speakers").await;
    resp.assert_status_ok();

    let body: Vec<serde_json::Value> = resp.json();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["slug"], "alice");
    assert_eq!(body[0]["name"], "Alice Example");
    assert_eq!(body[1]["slug"], "bob");
}

#[tokio::test]
async fn health_reports_ok_and_session_count() {
    let (server, _state) = common::test_app();

    let resp = server.get("/health").await;
    resp.assert_status_ok();

    let body: serde_json::Value = resp.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["sessions"], 0);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (server, _state) = common::test_app();

    let resp = server.get("/api-docs/openapi.json").await;
    resp.assert_status_ok();

    let body: serde_json::Value = resp.json();
    assert!(body["paths"]["/api/questions"].is_object());
    assert!(body["paths"]["/api/mod/approve"].is_object());
}
