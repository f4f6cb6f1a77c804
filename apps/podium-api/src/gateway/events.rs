//! Wire-format messages for the question gateway.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::session::Role;

/// Event names dispatched to clients.
pub struct EventName;

impl EventName {
    pub const QUESTION_NEW: &'static str = "question:new";
    pub const QUESTION_UPDATE: &'static str = "question:update";
    pub const QUESTION_DELETED: &'static str = "question:deleted";
}

/// The only client-initiated event name.
pub const CLIENT_JOIN: &str = "join";

/// A message sent from the server to the client over WebSocket.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayMessage {
    pub event: String,
    pub data: Value,
}

impl GatewayMessage {
    pub fn dispatch(event: &str, data: Value) -> Self {
        Self {
            event: event.to_string(),
            data,
        }
    }
}

/// A message received from the client over WebSocket.
#[derive(Debug, Deserialize)]
pub struct ClientMessage {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

/// Payload of a `join` declaration: which room to listen in.
#[derive(Debug, Deserialize)]
pub struct JoinPayload {
    pub role: Role,
    #[serde(default)]
    pub speaker: Option<String>,
}
