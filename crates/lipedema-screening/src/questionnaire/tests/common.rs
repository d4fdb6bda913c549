use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::questionnaire::catalog;
use crate::questionnaire::domain::{ScreeningSubmission, SubmissionId, SubmissionRecord};
use crate::questionnaire::repository::{RepositoryError, SubmissionRepository};
use crate::questionnaire::{screening_router, ScreeningService};

/// Option positions scoring 11 (moderate band).
pub(super) const MODERATE_POSITIONS: [usize; 9] = [1, 1, 1, 1, 1, 1, 1, 1, 1];
/// Option positions scoring 20 (every first option).
pub(super) const HIGHEST_POSITIONS: [usize; 9] = [0; 9];
/// Option positions scoring 0.
pub(super) const LOWEST_POSITIONS: [usize; 9] = [3, 3, 3, 3, 3, 3, 3, 3, 2];

pub(super) fn labels_at(positions: &[usize]) -> Vec<String> {
    positions
        .iter()
        .enumerate()
        .map(|(index, position)| {
            catalog::label_at(index, *position)
                .expect("fixture position exists")
                .to_string()
        })
        .collect()
}

pub(super) fn answers_at(positions: &[usize]) -> Vec<Option<String>> {
    labels_at(positions).into_iter().map(Some).collect()
}

pub(super) fn submission() -> ScreeningSubmission {
    ScreeningSubmission {
        full_name: "Maria Aparecida Souza".to_string(),
        email: "maria.souza@example.com.br".to_string(),
        age: "42".to_string(),
        weight_kg: "78.5".to_string(),
        profession: "Professora".to_string(),
        whatsapp: "11987654321".to_string(),
        answers: answers_at(&MODERATE_POSITIONS),
    }
}

pub(super) fn invalid_email_submission() -> ScreeningSubmission {
    let mut submission = submission();
    submission.email = "maria.souza@".to_string();
    submission
}

pub(super) fn invalid_phone_submission() -> ScreeningSubmission {
    let mut submission = submission();
    submission.whatsapp = "(11) 98765-4321".to_string();
    submission
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl MemoryRepository {
    pub(super) fn records(&self) -> Vec<SubmissionRecord> {
        self.records.lock().expect("repository mutex poisoned").clone()
    }
}

#[async_trait]
impl SubmissionRepository for MemoryRepository {
    async fn insert(&self, record: SubmissionRecord) -> Result<SubmissionId, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.push(record);
        Ok(SubmissionId(guard.len() as i64))
    }
}

pub(super) struct UnavailableRepository;

#[async_trait]
impl SubmissionRepository for UnavailableRepository {
    async fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionId, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (ScreeningService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ScreeningService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_repository(repository: Arc<MemoryRepository>) -> axum::Router {
    screening_router(Arc::new(ScreeningService::new(repository)))
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_str(&body).expect("json payload")
}

/// Encode `pairs` as an `application/x-www-form-urlencoded` body.
pub(super) fn form_body(pairs: &[(String, String)]) -> String {
    fn encode(raw: &str) -> String {
        raw.bytes()
            .map(|byte| match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'*' => {
                    (byte as char).to_string()
                }
                b' ' => "+".to_string(),
                other => format!("%{other:02X}"),
            })
            .collect()
    }

    pairs
        .iter()
        .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub(super) fn form_pairs(submission: &ScreeningSubmission) -> Vec<(String, String)> {
    use crate::questionnaire::form::{
        answer_field, FIELD_AGE, FIELD_EMAIL, FIELD_FULL_NAME, FIELD_PROFESSION, FIELD_WEIGHT,
        FIELD_WHATSAPP,
    };

    let mut pairs = vec![
        (FIELD_FULL_NAME.to_string(), submission.full_name.clone()),
        (FIELD_EMAIL.to_string(), submission.email.clone()),
        (FIELD_AGE.to_string(), submission.age.clone()),
        (FIELD_WEIGHT.to_string(), submission.weight_kg.clone()),
        (FIELD_PROFESSION.to_string(), submission.profession.clone()),
        (FIELD_WHATSAPP.to_string(), submission.whatsapp.clone()),
    ];
    for (index, answer) in submission.answers.iter().enumerate() {
        if let Some(answer) = answer {
            pairs.push((answer_field(index + 1), answer.clone()));
        }
    }
    pairs
}
