//! Where per-request snapshots come from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{Job, Posting};
use crate::search::JobRecord;

/// Supplies the active postings the search core runs over.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// All active postings, in storage order.
    async fn snapshot(&self) -> Result<Vec<Posting>, AppError>;

    /// One posting by id, active or not.
    async fn get(&self, id: i64) -> Result<Posting, AppError>;

    async fn ready(&self) -> bool {
        true
    }
}

pub struct PgJobSource {
    pool: PgPool,
}

impl PgJobSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobSource for PgJobSource {
    fn name(&self) -> &str {
        "postgres"
    }

    async fn snapshot(&self) -> Result<Vec<Posting>, AppError> {
        let jobs = Job::list_active(&self.pool).await?;
        Ok(jobs.into_iter().map(Posting::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Posting, AppError> {
        let id = i32::try_from(id).map_err(|_| AppError::NotFound(format!("Job {id} not found")))?;
        Ok(Job::get(&self.pool, id).await?.into())
    }

    async fn ready(&self) -> bool {
        let result: Result<(i32,), _> = sqlx::query_as("SELECT 1").fetch_one(&self.pool).await;
        result.is_ok()
    }
}

/// Postings read once from a JSON array file. Entries may be in either the
/// current or the legacy shape.
pub struct FileJobSource {
    path: PathBuf,
    postings: Arc<[Posting]>,
}

impl FileJobSource {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let raw = tokio::fs::read(&path).await?;
        let entries: Vec<Value> = serde_json::from_slice(&raw)?;
        let postings = entries
            .into_iter()
            .map(Posting::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(
            "Loaded {} postings from {}",
            postings.len(),
            path.display()
        );
        Ok(Self {
            path,
            postings: postings.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl JobSource for FileJobSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn snapshot(&self) -> Result<Vec<Posting>, AppError> {
        Ok(self
            .postings
            .iter()
            .filter(|p| p.is_active())
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Posting, AppError> {
        self.postings
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    }
}
