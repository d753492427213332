use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::search::filter::{Criteria, matches};
use crate::search::paginate::paginate;
use crate::search::record::JobRecord;
use crate::search::salary::parse_salary;
use crate::search::sort::{MissingSalary, SortKey, sort_jobs};

const DEFAULT_PER_PAGE: NonZeroUsize = NonZeroUsize::new(10).expect("10 is non-zero");
const DEFAULT_MAX_PER_PAGE: NonZeroUsize = NonZeroUsize::new(100).expect("100 is non-zero");

/// Deployment-level knobs; never taken from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub per_page: NonZeroUsize,
    pub max_per_page: NonZeroUsize,
    pub keyword_in_description: bool,
    pub missing_salary: MissingSalary,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            max_per_page: DEFAULT_MAX_PER_PAGE,
            keyword_in_description: true,
            missing_salary: MissingSalary::Last,
        }
    }
}

/// Raw query parameters, exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub work_type: Option<String>,
    pub sort_by: Option<String>,
    pub min_salary: Option<String>,
    pub max_salary: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl SearchParams {
    /// Collect recognized keys from a flat query. Aliases share a slot and
    /// the first non-blank value wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = SearchParams::default();
        for (key, value) in pairs {
            let Some(slot) = params.slot(key.as_ref()) else {
                continue;
            };
            let value = value.into();
            if slot.is_none() && !value.trim().is_empty() {
                *slot = Some(value);
            }
        }
        params
    }

    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        let slot = match key {
            "keyword" => &mut self.keyword,
            "location" | "city" => &mut self.location,
            "job_type" => &mut self.job_type,
            "work_type" | "remote_option" => &mut self.work_type,
            "sort_by" => &mut self.sort_by,
            "min_salary" | "salary_min" => &mut self.min_salary,
            "max_salary" | "salary_max" => &mut self.max_salary,
            "page" => &mut self.page,
            "per_page" => &mut self.per_page,
            _ => return None,
        };
        Some(slot)
    }

    pub fn criteria(&self, options: &SearchOptions) -> Criteria {
        Criteria {
            keyword: non_blank(self.keyword.as_deref()).map(str::to_string),
            locations: split_set(self.location.as_deref()),
            job_type: non_blank(self.job_type.as_deref()).map(str::to_lowercase),
            work_modes: split_set(self.work_type.as_deref()),
            min_salary: parse_salary(self.min_salary.as_deref()),
            max_salary: parse_salary(self.max_salary.as_deref()),
            include_description: options.keyword_in_description,
        }
    }

    /// Requested page; anything unparsable or below 1 is page 1.
    pub fn resolved_page(&self) -> usize {
        non_blank(self.page.as_deref())
            .and_then(|p| p.parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .and_then(|p| usize::try_from(p).ok())
            .unwrap_or(1)
    }

    pub fn resolved_per_page(&self, options: &SearchOptions) -> NonZeroUsize {
        non_blank(self.per_page.as_deref())
            .and_then(|p| p.parse::<NonZeroUsize>().ok())
            .map_or(options.per_page, |p| p.min(options.max_per_page))
    }
}

/// Everything a results page needs to redraw its search form: the raw
/// strings as typed, plus what they were understood as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEcho {
    pub keyword: String,
    pub location: String,
    pub job_type: String,
    pub work_type: String,
    pub sort_by: String,
    pub min_salary: String,
    pub max_salary: String,
    pub locations: Vec<String>,
    pub work_modes: Vec<String>,
    pub min_salary_value: Option<i64>,
    pub max_salary_value: Option<i64>,
    pub sort: SortKey,
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a, J: ?Sized> {
    pub items: Vec<&'a J>,
    /// Matches across all pages.
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub params: SearchEcho,
}

impl<'a, J: JobRecord + ?Sized> SearchResult<'a, J> {
    /// `(featured, ordinary)`, each in page order.
    pub fn split_featured(&self) -> (Vec<&'a J>, Vec<&'a J>) {
        self.items.iter().copied().partition(|job| job.featured())
    }
}

/// Filter, sort and paginate one snapshot.
pub fn search<'a, J: JobRecord>(
    params: &SearchParams,
    records: &'a [J],
    options: &SearchOptions,
) -> SearchResult<'a, J> {
    let criteria = params.criteria(options);
    let sort = SortKey::parse(params.sort_by.as_deref());
    let page = params.resolved_page();
    let per_page = params.resolved_per_page(options);

    let matched: Vec<&J> = if criteria.is_empty() {
        records.iter().collect()
    } else {
        records.iter().filter(|r| matches(*r, &criteria)).collect()
    };
    let ordered = sort_jobs(&matched, sort, options.missing_salary);
    let sliced = paginate(&ordered, page, per_page);

    let echo = SearchEcho {
        keyword: params.keyword.clone().unwrap_or_default(),
        location: params.location.clone().unwrap_or_default(),
        job_type: params.job_type.clone().unwrap_or_default(),
        work_type: params.work_type.clone().unwrap_or_default(),
        sort_by: params.sort_by.clone().unwrap_or_default(),
        min_salary: params.min_salary.clone().unwrap_or_default(),
        max_salary: params.max_salary.clone().unwrap_or_default(),
        locations: criteria.locations,
        work_modes: criteria.work_modes,
        min_salary_value: criteria.min_salary,
        max_salary_value: criteria.max_salary,
        sort,
        page,
        per_page: per_page.get(),
    };

    SearchResult {
        items: sliced.items,
        total: sliced.total,
        total_pages: sliced.total_pages,
        current_page: page,
        params: echo,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `"Hanoi, ,hcmc,hanoi"` -> `["hanoi", "hcmc"]`.
fn split_set(raw: Option<&str>) -> Vec<String> {
    let mut set: Vec<String> = Vec::new();
    for member in raw.unwrap_or_default().split(',') {
        let member = member.trim().to_lowercase();
        if !member.is_empty() && !set.contains(&member) {
            set.push(member);
        }
    }
    set
}
