use std::sync::Arc;

use axum_test::TestServer;

use podium_api::config::Config;
use podium_api::gateway::fanout::QuestionBroadcast;
use podium_api::gateway::registry::SessionRegistry;
use podium_api::models::speaker::Speaker;
use podium_api::store::{MemoryStore, QuestionStore};
use podium_api::AppState;

/// Speakers every test state is seeded with.
pub fn test_speakers() -> Vec<Speaker> {
    vec![
        Speaker {
            slug: "alice".to_string(),
            name: "Alice Example".to_string(),
        },
        Speaker {
            slug: "bob".to_string(),
            name: "Bob Example".to_string(),
        },
    ]
}

/// Build a test AppState backed by the in-memory store.
pub fn test_state() -> AppState {
    test_state_with_store(Arc::new(MemoryStore::new()))
}

/// Build a test AppState around a pre-seeded store.
pub fn test_state_with_store(store: Arc<dyn QuestionStore>) -> AppState {
    let config = Config {
        questions_path: "unused".to_string(),
        speakers_path: "unused".to_string(),
        port: 0,
    };
    AppState {
        store,
        speakers: Arc::new(test_speakers()),
        config: Arc::new(config),
        broadcast: Arc::new(QuestionBroadcast::new()),
        sessions: Arc::new(SessionRegistry::new()),
    }
}

/// Build the full application router wired to a fresh test state.
pub fn test_app() -> (TestServer, AppState) {
    let state = test_state();
    let app = podium_api::routes::router().with_state(state.clone());
    (TestServer::new(app).unwrap(), state)
}

/// Submit a question over the API and return the stored record's id.
pub async fn submit_question(server: &TestServer, speaker: &str, text: &str) -> String {
    let resp = server
        .post("/api/questions")
        .json(&serde_json::json!({ "speaker": speaker, "text": text }))
        .await;
    resp.assert_status_ok();
    resp.json::<serde_json::Value>()["question"]["id"]
        .as_str()
        .expect("question id present")
        .to_string()
}
