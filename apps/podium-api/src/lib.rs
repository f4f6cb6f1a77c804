pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use config::Config;
use gateway::fanout::QuestionBroadcast;
use gateway::registry::SessionRegistry;
use models::speaker::Speaker;
use store::QuestionStore;

/// Shared application state available to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuestionStore>,
    pub speakers: Arc<Vec<Speaker>>,
    pub config: Arc<Config>,
    pub broadcast: Arc<QuestionBroadcast>,
    pub sessions: Arc<SessionRegistry>,
}
