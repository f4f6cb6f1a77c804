use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::ApiError;
use crate::models::question::Question;

use super::{find_mut, fresh_question, normalize_text, sort_for_listing, QuestionStore};

/// File-backed question store: a single JSON array rewritten wholesale on
/// every mutation.
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles; mutations within this process
    /// cannot interleave.
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store at `path`, creating the parent directory if needed.
    /// The file itself is created lazily on the first mutation.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ApiError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Read and parse the question list. A missing or empty file is an
    /// empty list.
    async fn load(&self) -> Result<Vec<Question>, ApiError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Rewrite the full list through a temporary sibling path and an
    /// atomic rename, so existing state survives a crash mid-write.
    async fn persist(&self, questions: &[Question]) -> Result<(), ApiError> {
        let raw = serde_json::to_vec_pretty(questions)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for JsonFileStore {
    async fn list_by_speaker(&self, speaker: &str) -> Result<Vec<Question>, ApiError> {
        let mut list: Vec<Question> = self
            .load()
            .await?
            .into_iter()
            .filter(|q| q.speaker == speaker)
            .collect();
        sort_for_listing(&mut list);
        Ok(list)
    }

    async fn create(&self, speaker: &str, text: &str) -> Result<Question, ApiError> {
        let text = normalize_text(text)?;
        let _guard = self.lock.lock().await;
        let mut all = self.load().await?;
        let question = fresh_question(&all, speaker, text);
        all.push(question.clone());
        self.persist(&all).await?;
        Ok(question)
    }

    async fn set_approved(&self, id: &str, approved: bool) -> Result<Question, ApiError> {
        let _guard = self.lock.lock().await;
        let mut all = self.load().await?;
        let question = {
            let q = find_mut(&mut all, id)?;
            q.approved = approved;
            q.clone()
        };
        self.persist(&all).await?;
        Ok(question)
    }

    async fn increment_votes(&self, id: &str, delta: i64) -> Result<Question, ApiError> {
        let _guard = self.lock.lock().await;
        let mut all = self.load().await?;
        let question = {
            let q = find_mut(&mut all, id)?;
            q.votes = (q.votes + delta).max(0);
            q.clone()
        };
        self.persist(&all).await?;
        Ok(question)
    }

    async fn delete(&self, id: &str) -> Result<Question, ApiError> {
        let _guard = self.lock.lock().await;
        let mut all = self.load().await?;
        let idx = all
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| ApiError::not_found("Question not found"))?;
        let removed = all.remove(idx);
        self.persist(&all).await?;
        Ok(removed)
    }
}
