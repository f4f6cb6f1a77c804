//! Real-time question synchronization over WebSocket.

pub mod events;
pub mod fanout;
pub mod registry;
pub mod server;
pub mod session;
