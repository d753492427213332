use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppError;
use crate::search::{JobRecord, SalaryShape};

pub const ACTIVE: &str = "active";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: i32,
    pub title: String,
    #[serde(alias = "company")]
    pub company_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "location")]
    pub city: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default, alias = "work_mode")]
    pub remote_option: Option<String>,
    #[serde(default)]
    pub salary_min: Option<i32>,
    #[serde(default)]
    pub salary_max: Option<i32>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    ACTIVE.to_string()
}

const SELECT_JOBS: &str = "SELECT j.id, j.title, e.company_name, j.description, j.city, j.job_type, j.remote_option, j.salary_min, j.salary_max, j.currency, j.status, j.featured, j.created_at FROM jobs j JOIN employers e ON e.id = j.employer_id";

impl Job {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case(ACTIVE)
    }

    /// Every active posting, oldest first. The search core does its own
    /// ordering; this only fixes a deterministic input order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Job>, AppError> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            "{SELECT_JOBS} WHERE j.status = $1 ORDER BY j.id"
        ))
        .bind(ACTIVE)
        .fetch_all(pool)
        .await?;
        Ok(jobs)
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<Job, AppError> {
        sqlx::query_as::<_, Job>(&format!("{SELECT_JOBS} WHERE j.id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    }
}

impl JobRecord for Job {
    fn id(&self) -> i64 {
        i64::from(self.id)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn company_name(&self) -> &str {
        &self.company_name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn location(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn job_type(&self) -> Option<&str> {
        self.job_type.as_deref()
    }

    fn work_mode(&self) -> Option<&str> {
        self.remote_option.as_deref()
    }

    fn salary(&self) -> SalaryShape {
        SalaryShape::Range {
            min: self.salary_min.map(i64::from),
            max: self.salary_max.map(i64::from),
        }
    }

    fn featured(&self) -> bool {
        self.featured
    }
}
