//! Lipedema questionnaire intake, scoring, and submission storage.
//!
//! A submission flows through the intake guard (required fields, email and
//! phone shape, answer lookup), the scoring engine (sum of option weights and
//! band classification), and finally a single insert through the repository.

pub mod catalog;
pub mod domain;
pub mod form;
pub mod intake;
pub mod postgres;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{AnswerOption, CatalogError, Question, QuestionView, QUESTION_COUNT};
pub use domain::{
    PersonalInfo, ScreeningSubmission, SubmissionId, SubmissionRecord, ValidatedSubmission,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use postgres::PostgresSubmissionRepository;
pub use repository::{RepositoryError, ScreeningReceipt, SubmissionRepository};
pub use router::screening_router;
pub use scoring::{RiskBand, ScoreCard, ScoreComponent, ScoringEngine};
pub use service::{ScreeningService, ScreeningServiceError};
