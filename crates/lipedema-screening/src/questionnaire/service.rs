use std::sync::Arc;

use tracing::{debug, info, warn};

use super::catalog::CatalogError;
use super::domain::{ScreeningSubmission, SubmissionRecord};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{RepositoryError, ScreeningReceipt, SubmissionRepository};
use super::scoring::{ScoreCard, ScoringEngine};

/// Service composing the intake guard, scoring engine, and repository.
pub struct ScreeningService<R> {
    guard: IntakeGuard,
    engine: ScoringEngine,
    repository: Arc<R>,
}

impl<R> ScreeningService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            guard: IntakeGuard::new(),
            engine: ScoringEngine::new(),
            repository,
        }
    }

    /// Score and classify answers without storing anything. A partial list
    /// scores the questions answered so far.
    pub fn assess<S: AsRef<str>>(&self, answers: &[S]) -> Result<ScoreCard, CatalogError> {
        self.engine.score(answers)
    }

    /// Validate, score, classify, and persist one submission.
    ///
    /// Nothing reaches the repository unless validation passes.
    pub async fn submit(
        &self,
        submission: ScreeningSubmission,
    ) -> Result<ScreeningReceipt, ScreeningServiceError> {
        let validated = match self.guard.validate(submission) {
            Ok(validated) => validated,
            Err(violation) => {
                debug!(%violation, "submission rejected at intake");
                return Err(violation.into());
            }
        };

        let card = self.engine.score(validated.answers.as_slice())?;
        let record = SubmissionRecord::new(validated.personal, card.total, card.band.label());

        let submission_id = match self.repository.insert(record).await {
            Ok(id) => id,
            Err(error) => {
                warn!(%error, "failed to store submission");
                return Err(error.into());
            }
        };

        info!(
            submission_id = submission_id.0,
            score = card.total,
            band = card.band.code(),
            "submission stored"
        );

        Ok(ScreeningReceipt {
            submission_id,
            score: card.total,
            band: card.band,
            result: card.band.label(),
            advice: card.band.advice(),
            message: card.result_text(),
        })
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Scoring(#[from] CatalogError),
    #[error("Erro ao salvar no banco de dados: {0}")]
    Persistence(#[from] RepositoryError),
}

impl ScreeningServiceError {
    /// True when the respondent can fix the problem by editing the form.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ScreeningServiceError::Intake(_) | ScreeningServiceError::Scoring(_)
        )
    }
}
