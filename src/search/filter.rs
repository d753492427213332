//! Pure match predicates over a [`JobRecord`].
//!
//! A record matches a [`Criteria`] only if every supplied criterion holds.
//! Criteria left empty always pass.

use serde::Serialize;

use crate::search::record::{JobRecord, SalaryShape};

/// Wildcard accepted for job type and work mode.
pub const ALL: &str = "all";

/// Normalized filter parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criteria {
    pub keyword: Option<String>,
    /// Exact, case-insensitive location names.
    pub locations: Vec<String>,
    pub job_type: Option<String>,
    pub work_modes: Vec<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    /// Whether the keyword may also hit the description text.
    #[serde(skip)]
    pub include_description: bool,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            keyword: None,
            locations: Vec::new(),
            job_type: None,
            work_modes: Vec::new(),
            min_salary: None,
            max_salary: None,
            include_description: true,
        }
    }
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        self.keyword.as_deref().is_none_or(|k| k.trim().is_empty())
            && self.locations.is_empty()
            && self.job_type.is_none()
            && self.work_modes.is_empty()
            && self.min_salary.is_none()
            && self.max_salary.is_none()
    }
}

pub fn matches<J: JobRecord + ?Sized>(record: &J, criteria: &Criteria) -> bool {
    keyword_matches(record, criteria.keyword.as_deref(), criteria.include_description)
        && location_matches(record.location(), &criteria.locations)
        && job_type_matches(record.job_type(), criteria.job_type.as_deref())
        && work_mode_matches(record.work_mode(), &criteria.work_modes)
        && salary_matches(record.salary(), criteria.min_salary, criteria.max_salary)
}

pub fn keyword_matches<J: JobRecord + ?Sized>(
    record: &J,
    keyword: Option<&str>,
    include_description: bool,
) -> bool {
    let Some(keyword) = keyword.map(str::to_lowercase).filter(|k| !k.is_empty()) else {
        return true;
    };
    record.title().to_lowercase().contains(&keyword)
        || record.company_name().to_lowercase().contains(&keyword)
        || (include_description
            && record
                .description()
                .is_some_and(|d| d.to_lowercase().contains(&keyword)))
}

pub fn location_matches(location: Option<&str>, wanted: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    location.is_some_and(|loc| contains_ignore_case(wanted, loc))
}

pub fn job_type_matches(job_type: Option<&str>, wanted: Option<&str>) -> bool {
    let Some(wanted) = wanted.map(str::trim).filter(|w| !w.is_empty()) else {
        return true;
    };
    if wanted.eq_ignore_ascii_case(ALL) {
        return true;
    }
    job_type.is_some_and(|jt| jt.trim().to_lowercase() == wanted.to_lowercase())
}

pub fn work_mode_matches(work_mode: Option<&str>, wanted: &[String]) -> bool {
    if wanted.is_empty() || wanted.iter().any(|w| w.trim().eq_ignore_ascii_case(ALL)) {
        return true;
    }
    work_mode.is_some_and(|mode| contains_ignore_case(wanted, mode))
}

/// Range-vs-range overlap when both bounds are given, a one-sided threshold
/// otherwise. Negotiable records never satisfy a concrete bound.
pub fn salary_matches(salary: SalaryShape, min: Option<i64>, max: Option<i64>) -> bool {
    let (lower, upper) = salary.bounds();
    match (min, max) {
        (None, None) => true,
        (Some(min), Some(max)) => match (lower, upper) {
            (Some(lower), Some(upper)) => upper >= min && lower <= max,
            _ => false,
        },
        (Some(min), None) => upper.is_some_and(|upper| upper >= min),
        (None, Some(max)) => lower.is_some_and(|lower| lower <= max),
    }
}

fn contains_ignore_case(set: &[String], value: &str) -> bool {
    let value = value.trim().to_lowercase();
    set.iter().any(|member| member.trim().to_lowercase() == value)
}
