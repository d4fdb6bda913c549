//! PostgreSQL implementation of [`SubmissionRepository`].

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use sqlx::Row;
use tracing::info;

use super::domain::{SubmissionId, SubmissionRecord};
use super::repository::{RepositoryError, SubmissionRepository};
use crate::config::{DatabaseConfig, SslMode};

pub const SUBMISSIONS_TABLE: &str = "dados_lipedema";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS dados_lipedema (
        id SERIAL PRIMARY KEY,
        nome_completo VARCHAR(255),
        email VARCHAR(255),
        idade INTEGER,
        peso FLOAT,
        profissao VARCHAR(255),
        whatsapp VARCHAR(20),
        pontuacao INTEGER,
        resultado VARCHAR(255)
    )
"#;

const INSERT_SUBMISSION: &str = r#"
    INSERT INTO dados_lipedema (
        nome_completo, email, idade, peso, profissao, whatsapp, pontuacao, resultado
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    RETURNING id
"#;

/// Submission store backed by a shared connection pool.
#[derive(Clone)]
pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool described by `config`. Fails if the first connection
    /// cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        let options = PgConnectOptions::from_str(&config.url)?.ssl_mode(match config.ssl_mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        });

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!(
            max_connections = config.max_connections,
            ssl_mode = config.ssl_mode.as_str(),
            "database pool ready"
        );
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the submissions table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        info!(table = SUBMISSIONS_TABLE, "submission schema ensured");
        Ok(())
    }
}

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn insert(&self, record: SubmissionRecord) -> Result<SubmissionId, RepositoryError> {
        let row = sqlx::query(INSERT_SUBMISSION)
            .bind(&record.full_name)
            .bind(&record.email)
            .bind(record.age)
            .bind(record.weight_kg)
            .bind(&record.profession)
            .bind(&record.whatsapp)
            .bind(record.score)
            .bind(&record.result)
            .fetch_one(&self.pool)
            .await?;

        let id: i32 = row.try_get("id")?;
        Ok(SubmissionId(i64::from(id)))
    }
}
