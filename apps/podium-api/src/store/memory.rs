use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::question::Question;

use super::{find_mut, fresh_question, normalize_text, sort_for_listing, QuestionStore};

/// In-memory question list, used by tests.
pub struct MemoryStore {
    questions: Mutex<Vec<Question>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Start from a pre-built question list.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Mutex::new(questions),
        }
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_by_speaker(&self, speaker: &str) -> Result<Vec<Question>, ApiError> {
        let mut list: Vec<Question> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.speaker == speaker)
            .cloned()
            .collect();
        sort_for_listing(&mut list);
        Ok(list)
    }

    async fn create(&self, speaker: &str, text: &str) -> Result<Question, ApiError> {
        let text = normalize_text(text)?;
        let mut all = self.questions.lock().unwrap();
        let question = fresh_question(&all, speaker, text);
        all.push(question.clone());
        Ok(question)
    }

    async fn set_approved(&self, id: &str, approved: bool) -> Result<Question, ApiError> {
        let mut all = self.questions.lock().unwrap();
        let question = find_mut(&mut all, id)?;
        question.approved = approved;
        Ok(question.clone())
    }

    async fn increment_votes(&self, id: &str, delta: i64) -> Result<Question, ApiError> {
        let mut all = self.questions.lock().unwrap();
        let question = find_mut(&mut all, id)?;
        question.votes = (question.votes + delta).max(0);
        Ok(question.clone())
    }

    async fn delete(&self, id: &str) -> Result<Question, ApiError> {
        let mut all = self.questions.lock().unwrap();
        let idx = all
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| ApiError::not_found("Question not found"))?;
        Ok(all.remove(idx))
    }
}
