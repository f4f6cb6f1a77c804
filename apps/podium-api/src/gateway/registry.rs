//! Live-session registry: which room, if any, each connection listens in.

use dashmap::DashMap;
use parking_lot::Mutex;

use super::session::Room;

/// Per-session membership state.
pub struct SessionEntry {
    pub session_id: String,
    pub room: Option<Room>,
}

/// Shared registry of all live gateway sessions.
///
/// Uses `DashMap` for shard-level concurrency and `parking_lot::Mutex` per
/// entry for non-poisoning, fast locking.
pub struct SessionRegistry {
    sessions: DashMap<String, Mutex<SessionEntry>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Register a connection with no room membership yet.
    pub fn register(&self, session_id: String) {
        let entry = SessionEntry {
            session_id: session_id.clone(),
            room: None,
        };
        self.sessions.insert(session_id, Mutex::new(entry));
    }

    /// Set the session's room, replacing any previous membership. A
    /// connection listens in at most one room; the last join wins.
    pub fn join(&self, session_id: &str, room: Room) {
        if let Some(entry) = self.sessions.get(session_id) {
            entry.lock().room = Some(room);
        }
    }

    /// The room the session currently listens in.
    pub fn membership(&self, session_id: &str) -> Option<Room> {
        let entry = self.sessions.get(session_id)?;
        let e = entry.lock();
        e.room.clone()
    }

    /// Drop the session, releasing its room membership.
    pub fn remove(&self, session_id: &str) {
        self.sessions.remove(session_id);
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Number of sessions currently listening in `room`.
    pub fn member_count(&self, room: &Room) -> usize {
        self.sessions
            .iter()
            .filter(|entry| entry.value().lock().room.as_ref() == Some(room))
            .count()
    }
}
