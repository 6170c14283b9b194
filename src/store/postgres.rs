use crate::config::Config;
use crate::error::{IntakeError, Result};
use crate::schema::{Enrollment, EnrollmentForm};
use crate::store::IntakeStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_postgres::{Config as PoolConfig, Pool, Runtime};
use tokio_postgres::NoTls;
use tracing::{debug, info};

/// Relational enrollment store backed by a pooled PostgreSQL connection.
///
/// The pool is bounded and waiters time out instead of queueing without
/// limit; a timed-out wait surfaces as 503 upstream.
pub struct EnrollmentStore {
    pool: Pool,
}

const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS enrollments (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        organization TEXT,
        job_title TEXT,
        course_title TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
";

const INSERT_SQL: &str = "
    INSERT INTO enrollments (name, email, phone, organization, job_title, course_title, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    RETURNING id
";

impl EnrollmentStore {
    pub fn new(config: &Config) -> Result<Self> {
        let pool = create_pool(
            &config.database_url(),
            config.pool_size,
            config.pool_wait_timeout,
        )?;
        Ok(Self { pool })
    }

    /// Create the enrollments table if it does not exist. Best-effort
    /// bootstrap: the caller logs a failure and keeps the process running.
    pub async fn ensure_table(&self) -> Result<()> {
        let client = self.pool.get().await?;
        client.batch_execute(CREATE_TABLE_SQL).await?;
        info!("Enrollments table created/verified");
        Ok(())
    }
}

#[async_trait]
impl IntakeStore for EnrollmentStore {
    type Form = EnrollmentForm;
    type Record = Enrollment;

    async fn create(&self, form: EnrollmentForm, created_at: DateTime<Utc>) -> Result<Enrollment> {
        let client = self.pool.get().await?;

        // Single parameterized insert, no transaction and no retry. The id
        // comes from the table's own sequence.
        let row = client
            .query_one(
                INSERT_SQL,
                &[
                    &form.name,
                    &form.email,
                    &form.phone,
                    &form.organization,
                    &form.job_title,
                    &form.course_title,
                    &created_at,
                ],
            )
            .await?;

        let id: i64 = row.get(0);
        debug!("Enrollment saved with id {}", id);

        Ok(Enrollment {
            id,
            name: form.name,
            email: form.email,
            phone: form.phone,
            organization: form.organization,
            job_title: form.job_title,
            course_title: form.course_title,
            created_at,
        })
    }

    async fn healthy(&self) -> bool {
        self.pool.get().await.is_ok()
    }
}

fn create_pool(database_url: &str, max_size: usize, wait_timeout: std::time::Duration) -> Result<Pool> {
    let mut cfg = PoolConfig::new();
    cfg.url = Some(database_url.to_string());

    cfg.pool = Some(deadpool_postgres::PoolConfig {
        max_size,
        timeouts: deadpool_postgres::Timeouts {
            wait: Some(wait_timeout),
            create: Some(wait_timeout),
            recycle: Some(wait_timeout),
        },
        ..Default::default()
    });

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .map_err(|e| IntakeError::Internal(format!("Failed to create pool: {}", e)))
}
