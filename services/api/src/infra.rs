use lipedema_screening::config::AppConfig;
use lipedema_screening::error::AppError;
use lipedema_screening::questionnaire::PostgresSubmissionRepository;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Validate the database settings and open the shared pool.
pub(crate) async fn open_repository(
    config: &AppConfig,
) -> Result<PostgresSubmissionRepository, AppError> {
    config.database.validate()?;
    let repository = PostgresSubmissionRepository::connect(&config.database).await?;
    Ok(repository)
}
