//! Question persistence.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::{ApiError, FieldError};
use crate::models::question::Question;

/// Characters of question text kept before trimming.
pub const MAX_TEXT_LEN: usize = 500;

/// Abstraction over the persisted question list.
///
/// Backed by a JSON file in production and an in-memory list in tests.
/// Every mutating operation persists the full updated state before
/// returning, so a caller may broadcast the result once the call succeeds.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions for a speaker, ordered by votes descending, ties
    /// broken by newest first.
    async fn list_by_speaker(&self, speaker: &str) -> Result<Vec<Question>, ApiError>;

    /// Validate and store a new question. `text` is cut off at
    /// [`MAX_TEXT_LEN`] characters and trimmed; an empty result fails
    /// validation.
    async fn create(&self, speaker: &str, text: &str) -> Result<Question, ApiError>;

    /// Replace the approval flag. Idempotent.
    async fn set_approved(&self, id: &str, approved: bool) -> Result<Question, ApiError>;

    /// Apply a vote delta, clamping the result at zero. A decrement at
    /// zero votes succeeds and returns the unchanged record.
    async fn increment_votes(&self, id: &str, delta: i64) -> Result<Question, ApiError>;

    /// Remove a question, returning the removed record.
    async fn delete(&self, id: &str) -> Result<Question, ApiError>;
}

/// Cut off at [`MAX_TEXT_LEN`] characters, then trim.
pub(crate) fn normalize_text(text: &str) -> Result<String, ApiError> {
    let cut: String = text.chars().take(MAX_TEXT_LEN).collect();
    let trimmed = cut.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(vec![FieldError {
            field: "text".to_string(),
            message: "Question text is required".to_string(),
        }]));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn sort_for_listing(questions: &mut [Question]) {
    questions.sort_by(|a, b| {
        b.votes
            .cmp(&a.votes)
            .then(b.created_at.cmp(&a.created_at))
    });
}

/// Build a new question record with an id unique among `existing`.
pub(crate) fn fresh_question(existing: &[Question], speaker: &str, text: String) -> Question {
    let mut id = podium_common::id::prefixed_id(podium_common::id::prefix::QUESTION);
    while existing.iter().any(|q| q.id == id) {
        id = podium_common::id::prefixed_id(podium_common::id::prefix::QUESTION);
    }
    Question {
        id,
        speaker: speaker.to_string(),
        text,
        approved: false,
        votes: 0,
        created_at: chrono::Utc::now().timestamp_millis(),
    }
}

pub(crate) fn find_mut<'a>(
    questions: &'a mut [Question],
    id: &str,
) -> Result<&'a mut Question, ApiError> {
    questions
        .iter_mut()
        .find(|q| q.id == id)
        .ok_or_else(|| ApiError::not_found("Question not found"))
}
