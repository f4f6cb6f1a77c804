pub mod health;
pub mod moderation;
pub mod questions;
pub mod speakers;

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(crate::gateway::server::router())
        .merge(speakers::router())
        .merge(questions::router())
        .merge(moderation::router())
        .route("/api-docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        speakers::list_speakers,
        questions::list_questions,
        questions::create_question,
        questions::vote_question,
        questions::unvote_question,
        questions::delete_question,
        moderation::approve_question,
    ),
    components(
        schemas(
            crate::error::ApiErrorBody,
            crate::error::ApiErrorDetail,
            crate::error::FieldError,
            crate::models::question::Question,
            crate::models::speaker::Speaker,
            questions::CreateQuestionRequest,
            questions::QuestionResponse,
            questions::DeleteResponse,
            moderation::ApproveRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check"),
        (name = "Speakers", description = "Speaker reference data"),
        (name = "Questions", description = "Audience questions and voting"),
        (name = "Moderation", description = "Moderator actions"),
    )
)]
pub struct ApiDoc;
