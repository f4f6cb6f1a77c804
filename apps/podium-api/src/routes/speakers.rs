//! Speaker reference data.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::models::speaker::Speaker;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/speakers", get(list_speakers))
}

#[utoipa::path(
    get,
    path = "/api/speakers",
    tag = "Speakers",
    responses((status = 200, description = "All configured speakers", body = [Speaker]))
)]
pub async fn list_speakers(State(state): State<AppState>) -> Json<Vec<Speaker>> {
    Json(state.speakers.as_ref().clone())
}
