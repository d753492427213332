use serde::{Deserialize, Serialize};

use crate::models::job::ACTIVE;
use crate::search::{JobRecord, SalaryShape, parse_salary};

/// Posting from the first-generation schema: one free-text `salary` column
/// ("15 triệu", "10,000,000", "Thỏa thuận") and no work mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyJob {
    pub id: i32,
    pub title: String,
    #[serde(alias = "company_name")]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary: Option<RawSalary>,
    #[serde(default = "default_status")]
    pub status: String,
}

/// The `salary` column as stored: usually text, sometimes a bare number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSalary {
    Amount(i64),
    Text(String),
}

impl RawSalary {
    pub fn amount(&self) -> Option<i64> {
        match self {
            RawSalary::Amount(amount) => parse_salary(*amount),
            RawSalary::Text(text) => parse_salary(text),
        }
    }
}

fn default_status() -> String {
    ACTIVE.to_string()
}

impl LegacyJob {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case(ACTIVE)
    }
}

impl JobRecord for LegacyJob {
    fn id(&self) -> i64 {
        i64::from(self.id)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn company_name(&self) -> &str {
        &self.company
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn job_type(&self) -> Option<&str> {
        self.job_type.as_deref()
    }

    fn work_mode(&self) -> Option<&str> {
        None
    }

    fn salary(&self) -> SalaryShape {
        SalaryShape::Single(self.salary.as_ref().and_then(RawSalary::amount))
    }
}
