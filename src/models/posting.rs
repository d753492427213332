use serde::Serialize;
use serde_json::Value;

use crate::models::job::Job;
use crate::models::legacy_job::LegacyJob;
use crate::search::{JobRecord, SalaryShape, format_salary};

/// A stored posting in whichever shape it was written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Posting {
    Current(Job),
    Legacy(LegacyJob),
}

impl Posting {
    /// Objects with a scalar `salary` key are the legacy shape.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.get("salary").is_some() {
            Ok(Posting::Legacy(serde_json::from_value(value)?))
        } else {
            Ok(Posting::Current(serde_json::from_value(value)?))
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Posting::Current(job) => job.is_active(),
            Posting::Legacy(job) => job.is_active(),
        }
    }

    fn record(&self) -> &dyn JobRecord {
        match self {
            Posting::Current(job) => job,
            Posting::Legacy(job) => job,
        }
    }
}

impl From<Job> for Posting {
    fn from(job: Job) -> Self {
        Posting::Current(job)
    }
}

impl From<LegacyJob> for Posting {
    fn from(job: LegacyJob) -> Self {
        Posting::Legacy(job)
    }
}

impl JobRecord for Posting {
    fn id(&self) -> i64 {
        self.record().id()
    }

    fn title(&self) -> &str {
        self.record().title()
    }

    fn company_name(&self) -> &str {
        self.record().company_name()
    }

    fn description(&self) -> Option<&str> {
        self.record().description()
    }

    fn location(&self) -> Option<&str> {
        self.record().location()
    }

    fn job_type(&self) -> Option<&str> {
        self.record().job_type()
    }

    fn work_mode(&self) -> Option<&str> {
        self.record().work_mode()
    }

    fn salary(&self) -> SalaryShape {
        self.record().salary()
    }

    fn featured(&self) -> bool {
        self.record().featured()
    }
}

/// Shape-independent listing row for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobView {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub work_mode: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_display: String,
    pub negotiable: bool,
    pub featured: bool,
}

impl JobView {
    pub fn from_record<J: JobRecord + ?Sized>(job: &J) -> Self {
        let salary = job.salary();
        let (salary_min, salary_max) = match salary {
            SalaryShape::Range { min, max } => (min, max),
            SalaryShape::Single(amount) => (amount, amount),
        };
        Self {
            id: job.id(),
            title: job.title().to_string(),
            company_name: job.company_name().to_string(),
            location: job.location().map(str::to_string),
            job_type: job.job_type().map(str::to_string),
            work_mode: job.work_mode().map(str::to_string),
            salary_min,
            salary_max,
            salary_display: format_salary(&salary),
            negotiable: salary.is_negotiable(),
            featured: job.featured(),
        }
    }
}
