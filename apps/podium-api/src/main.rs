use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podium_api::config::Config;
use podium_api::gateway::fanout::QuestionBroadcast;
use podium_api::gateway::registry::SessionRegistry;
use podium_api::models::speaker::Speaker;
use podium_api::store::{JsonFileStore, QuestionStore};
use podium_api::AppState;

#[tokio::main]
async fn main() {
    // Load .env file (silently skip if missing — env vars may be set externally)
    if dotenvy::dotenv().is_err() {
        let env_path = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
        let _ = dotenvy::from_path(env_path);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let port = config.port;

    let store = JsonFileStore::open(&config.questions_path)
        .await
        .expect("failed to open question store");
    let speakers = load_speakers(&config.speakers_path).await;

    tracing::info!(
        questions_path = %config.questions_path,
        speakers = speakers.len(),
        "podium-api configured"
    );

    let state = AppState {
        store: Arc::new(store) as Arc<dyn QuestionStore>,
        speakers: Arc::new(speakers),
        config: Arc::new(config),
        broadcast: Arc::new(QuestionBroadcast::new()),
        sessions: Arc::new(SessionRegistry::new()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(podium_api::routes::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "podium-api listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}

/// Load the static speaker list. A missing or unreadable file serves an
/// empty list.
async fn load_speakers(path: &str) -> Vec<Speaker> {
    match tokio::fs::read(path).await {
        Ok(raw) => serde_json::from_slice(&raw).unwrap_or_else(|err| {
            tracing::warn!(?err, %path, "speakers file is malformed");
            Vec::new()
        }),
        Err(err) => {
            tracing::warn!(?err, %path, "speakers file missing");
            Vec::new()
        }
    }
}
