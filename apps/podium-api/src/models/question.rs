use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A submitted audience question, carrying its vote count and moderator
/// approval state.
///
/// `speaker`, `text`, and `created_at` never change after creation;
/// `approved` and `votes` are mutated independently by moderator and
/// attendee actions. Records read from disk may predate a field, so
/// everything mutable defaults.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Opaque ID, `q_` plus eight random alphanumerics.
    pub id: String,
    /// Slug of the speaker this question targets.
    pub speaker: String,
    pub text: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub votes: i64,
    /// Creation time, epoch milliseconds.
    #[serde(default)]
    pub created_at: i64,
}
