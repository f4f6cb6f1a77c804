//! Question endpoints: listing, submission, voting, deletion.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ApiError, ApiErrorBody};
use crate::gateway::events::EventName;
use crate::gateway::session::Room;
use crate::models::question::Question;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/questions",
            get(list_questions).post(create_question),
        )
        .route("/api/questions/{id}/vote", post(vote_question))
        .route("/api/questions/{id}/unvote", post(unvote_question))
        .route("/api/questions/{id}", delete(delete_question))
}

/// Fan a question event out to the moderator room and both rooms scoped
/// to the question's speaker.
pub(crate) fn broadcast_question(state: &AppState, event: &str, question: &Question) {
    let data = serde_json::to_value(question).unwrap_or_default();
    state
        .broadcast
        .dispatch(Room::fanout_targets(&question.speaker), event, data);
}

// ---------------------------------------------------------------------------
// GET /api/questions?speaker=S
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuestionsParams {
    /// Speaker slug to list questions for.
    pub speaker: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/questions",
    tag = "Questions",
    params(ListQuestionsParams),
    responses(
        (status = 200, description = "Questions for the speaker, best-voted first", body = [Question]),
        (status = 400, description = "Missing speaker", body = ApiErrorBody)
    )
)]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<ListQuestionsParams>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let speaker = params
        .speaker
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("speaker query parameter is required"))?;

    let questions = state.store.list_by_speaker(speaker).await?;
    Ok(Json(questions))
}

// ---------------------------------------------------------------------------
// POST /api/questions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    pub speaker: String,
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionResponse {
    pub ok: bool,
    pub question: Question,
}

#[utoipa::path(
    post,
    path = "/api/questions",
    tag = "Questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question stored and broadcast", body = QuestionResponse),
        (status = 400, description = "Missing speaker or empty text", body = ApiErrorBody)
    )
)]
pub async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let Json(body) = body?;
    if body.speaker.trim().is_empty() {
        return Err(ApiError::bad_request("speaker is required"));
    }

    let question = state.store.create(&body.speaker, &body.text).await?;
    broadcast_question(&state, EventName::QUESTION_NEW, &question);

    Ok(Json(QuestionResponse { ok: true, question }))
}

// ---------------------------------------------------------------------------
// POST /api/questions/{id}/vote and /unvote
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/questions/{id}/vote",
    tag = "Questions",
    params(("id" = String, Path, description = "Question id")),
    responses(
        (status = 200, description = "Vote applied", body = QuestionResponse),
        (status = 404, description = "Unknown question", body = ApiErrorBody)
    )
)]
pub async fn vote_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state.store.increment_votes(&id, 1).await?;
    broadcast_question(&state, EventName::QUESTION_UPDATE, &question);

    Ok(Json(QuestionResponse { ok: true, question }))
}

#[utoipa::path(
    post,
    path = "/api/questions/{id}/unvote",
    tag = "Questions",
    params(("id" = String, Path, description = "Question id")),
    responses(
        (status = 200, description = "Vote retracted; votes never drop below zero", body = QuestionResponse),
        (status = 404, description = "Unknown question", body = ApiErrorBody)
    )
)]
pub async fn unvote_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state.store.increment_votes(&id, -1).await?;
    broadcast_question(&state, EventName::QUESTION_UPDATE, &question);

    Ok(Json(QuestionResponse { ok: true, question }))
}

// ---------------------------------------------------------------------------
// DELETE /api/questions/{id}
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    tag = "Questions",
    params(("id" = String, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question removed", body = DeleteResponse),
        (status = 404, description = "Unknown question", body = ApiErrorBody)
    )
)]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let removed = state.store.delete(&id).await?;
    state.broadcast.dispatch(
        Room::fanout_targets(&removed.speaker),
        EventName::QUESTION_DELETED,
        serde_json::json!({ "id": removed.id }),
    );

    Ok(Json(DeleteResponse { ok: true }))
}
