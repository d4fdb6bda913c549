use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    routing::post,
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog;
use super::domain::ScreeningSubmission;
use super::form::{render_page, submission_from_fields};
use super::repository::SubmissionRepository;
use super::scoring::ScoreCard;
use super::service::{ScreeningService, ScreeningServiceError};
use crate::error::AppError;

/// Router builder exposing the questionnaire page and JSON intake endpoints.
pub fn screening_router<R>(service: Arc<ScreeningService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route("/", get(form_page).post(form_submit_handler::<R>))
        .route("/api/v1/screenings", post(submit_handler::<R>))
        .route("/api/v1/assessments", post(assess_handler::<R>))
        .route("/api/v1/questionnaire", get(questionnaire_handler))
        .with_state(service)
}

fn error_status(error: &ScreeningServiceError) -> StatusCode {
    if error.is_user_error() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub(crate) async fn form_page() -> Html<String> {
    Html(render_page(&ScreeningSubmission::default(), None))
}

pub(crate) async fn form_submit_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let submission = submission_from_fields(fields);
    let previous = submission.clone();

    match service.submit(submission).await {
        Ok(receipt) => Html(render_page(&previous, Some(&receipt.message))).into_response(),
        Err(error) => {
            let page = render_page(&previous, Some(&error.to_string()));
            (error_status(&error), Html(page)).into_response()
        }
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    payload: Result<Json<ScreeningSubmission>, JsonRejection>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            let payload = json!({
                "error": rejection.body_text(),
            });
            return (rejection.status(), Json(payload)).into_response();
        }
    };

    match service.submit(submission).await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (error_status(&error), Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) answers: Vec<String>,
}

/// Running score for the answers given so far; nothing is stored.
pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<ScoreCard>, AppError>
where
    R: SubmissionRepository + 'static,
{
    let Json(request) = payload?;
    let card = service.assess(request.answers.as_slice())?;
    Ok(Json(card))
}

pub(crate) async fn questionnaire_handler() -> Json<serde_json::Value> {
    Json(json!({
        "questions": catalog::question_views(),
        "max_score": catalog::max_score(),
    }))
}
