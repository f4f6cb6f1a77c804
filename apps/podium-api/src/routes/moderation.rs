//! Moderator actions.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{ApiError, ApiErrorBody};
use crate::gateway::events::EventName;
use crate::AppState;

use super::questions::{broadcast_question, QuestionResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/mod/approve", post(approve_question))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ApproveRequest {
    pub id: String,
    pub approved: bool,
}

#[utoipa::path(
    post,
    path = "/api/mod/approve",
    tag = "Moderation",
    request_body = ApproveRequest,
    responses(
        (status = 200, description = "Approval flag replaced; re-approving is idempotent", body = QuestionResponse),
        (status = 400, description = "Missing or mistyped fields", body = ApiErrorBody),
        (status = 404, description = "Unknown question", body = ApiErrorBody)
    )
)]
pub async fn approve_question(
    State(state): State<AppState>,
    body: Result<Json<ApproveRequest>, JsonRejection>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let Json(body) = body?;

    let question = state.store.set_approved(&body.id, body.approved).await?;
    broadcast_question(&state, EventName::QUESTION_UPDATE, &question);

    Ok(Json(QuestionResponse { ok: true, question }))
}
