//! WebSocket upgrade handler and per-connection event loop.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use crate::AppState;

use super::events::{ClientMessage, GatewayMessage, JoinPayload, CLIENT_JOIN};
use super::fanout::BroadcastPayload;
use super::registry::SessionRegistry;
use super::session::Room;

pub fn router() -> Router<AppState> {
    Router::new().route("/gateway", get(ws_upgrade))
}

async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_connection(socket, state))
}

async fn handle_connection(socket: WebSocket, state: AppState) {
    let session_id = podium_common::id::prefixed_id(podium_common::id::prefix::SESSION);
    state.sessions.register(session_id.clone());

    tracing::info!(
        session_id = %session_id,
        live = state.sessions.len(),
        "gateway session opened"
    );

    let broadcast_rx = state.broadcast.subscribe();
    run_session(&session_id, socket, broadcast_rx, &state.sessions).await;

    // Teardown releases the session's room membership.
    state.sessions.remove(&session_id);

    tracing::info!(
        session_id = %session_id,
        live = state.sessions.len(),
        "gateway session closed"
    );
}

/// Main session loop: apply join declarations from the client and forward
/// broadcasts addressed to the session's current room.
async fn run_session(
    session_id: &str,
    socket: WebSocket,
    mut broadcast_rx: broadcast::Receiver<Arc<BroadcastPayload>>,
    registry: &SessionRegistry,
) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Client sends us a message.
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let client_msg: ClientMessage = match serde_json::from_str(&text) {
                            Ok(m) => m,
                            Err(err) => {
                                tracing::debug!(?err, session_id = %session_id, "malformed client message ignored");
                                continue;
                            }
                        };
                        if client_msg.event == CLIENT_JOIN {
                            handle_join(session_id, client_msg, registry);
                        } else {
                            tracing::debug!(
                                event = %client_msg.event,
                                session_id = %session_id,
                                "unknown client event ignored"
                            );
                        }
                    }
                    Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => continue,
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(?err, session_id = %session_id, "ws read error");
                        break;
                    }
                    _ => continue,
                }
            }

            // Broadcast event from the fanout hub.
            result = broadcast_rx.recv() => {
                match result {
                    Ok(payload) => {
                        let member = registry
                            .membership(session_id)
                            .map_or(false, |room| payload.rooms.contains(&room));
                        if !member {
                            continue;
                        }

                        let msg = GatewayMessage::dispatch(&payload.event, payload.data.clone());
                        let json = serde_json::to_string(&msg).unwrap();
                        if ws_tx.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(
                            session_id = %session_id,
                            skipped = n,
                            "gateway session lagged behind broadcast"
                        );
                        // Continue — we just drop the missed events.
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        break;
                    }
                }
            }
        }
    }
}

/// Apply a join declaration. A later join replaces the previous room; a
/// guest or selected join without a speaker changes nothing.
fn handle_join(session_id: &str, msg: ClientMessage, registry: &SessionRegistry) {
    let payload: JoinPayload = match serde_json::from_value(msg.data) {
        Ok(p) => p,
        Err(err) => {
            tracing::debug!(?err, session_id = %session_id, "invalid join payload ignored");
            return;
        }
    };

    match Room::from_join(payload.role, payload.speaker.as_deref()) {
        Some(room) => {
            tracing::debug!(session_id = %session_id, room = %room.key(), "session joined room");
            registry.join(session_id, room);
        }
        None => {
            tracing::debug!(session_id = %session_id, "join without a speaker ignored");
        }
    }
}
