use async_trait::async_trait;
use serde::Serialize;

use super::domain::SubmissionId;
use super::domain::SubmissionRecord;
use super::scoring::RiskBand;

/// Storage abstraction so the service can be exercised without a database.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Append one submission row and return its assigned id.
    async fn insert(&self, record: SubmissionRecord) -> Result<SubmissionId, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// What the respondent gets back once a submission is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningReceipt {
    pub submission_id: SubmissionId,
    pub score: u16,
    pub band: RiskBand,
    pub result: &'static str,
    pub advice: &'static str,
    pub message: String,
}
