//! Broadcast hub for dispatching question events to connected sessions.
//!
//! Uses a single `tokio::sync::broadcast` channel. Each connected session
//! subscribes and filters events locally by room membership. This is
//! sufficient for the single-process architecture.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::broadcast;

use super::session::Room;

/// Capacity of the broadcast channel. Slow receivers that fall behind will
/// skip messages (RecvError::Lagged).
const BROADCAST_CAPACITY: usize = 4096;

/// A payload broadcast to all connected gateway sessions.
#[derive(Debug, Clone)]
pub struct BroadcastPayload {
    /// The rooms this event is addressed to.
    pub rooms: Vec<Room>,
    /// The dispatch event name (e.g. "question:new").
    pub event: String,
    /// Serialized event data.
    pub data: Value,
}

/// The global broadcast hub. Store in AppState.
pub struct QuestionBroadcast {
    sender: broadcast::Sender<Arc<BroadcastPayload>>,
}

impl QuestionBroadcast {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { sender }
    }

    /// Subscribe to the broadcast channel. Each gateway session should call
    /// this once to get its own receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<BroadcastPayload>> {
        self.sender.subscribe()
    }

    /// Dispatch an event to every room in `rooms`. Fire-and-forget:
    /// delivery to any individual session is best-effort.
    pub fn dispatch(&self, rooms: Vec<Room>, event: &str, data: Value) {
        // send() returns Err if there are no receivers — that's fine.
        let _ = self.sender.send(Arc::new(BroadcastPayload {
            rooms,
            event: event.to_string(),
            data,
        }));
    }
}
