use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::search::record::JobRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    SalaryDesc,
    SalaryAsc,
    #[default]
    Newest,
}

impl SortKey {
    /// Unknown or missing keys fall back to [`SortKey::Newest`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("salary_desc") => SortKey::SalaryDesc,
            Some("salary_asc") => SortKey::SalaryAsc,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::SalaryDesc => "salary_desc",
            SortKey::SalaryAsc => "salary_asc",
            SortKey::Newest => "newest",
        }
    }
}

/// Where postings without a salary land when sorting by salary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSalary {
    /// After every posting with a salary, in either direction.
    #[default]
    Last,
    /// Compared as 0. Older listings did this, which puts negotiable jobs
    /// first under `salary_asc`.
    Zero,
}

impl FromStr for MissingSalary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(MissingSalary::Last),
            "zero" => Ok(MissingSalary::Zero),
            other => Err(format!("unknown missing-salary order '{other}' (expected last or zero)")),
        }
    }
}

impl fmt::Display for MissingSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MissingSalary::Last => "last",
            MissingSalary::Zero => "zero",
        })
    }
}

/// Stable sort into a new vector; equal keys keep their input order.
///
/// `salary_desc` ranks by each posting's upper bound, `salary_asc` by its
/// lower bound.
pub fn sort_jobs<'a, J: JobRecord + ?Sized>(
    records: &[&'a J],
    key: SortKey,
    missing: MissingSalary,
) -> Vec<&'a J> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Newest => sorted.sort_by(|a, b| b.id().cmp(&a.id())),
        SortKey::SalaryDesc => sorted.sort_by(|a, b| {
            by_salary(a.salary().upper(), b.salary().upper(), true, missing)
        }),
        SortKey::SalaryAsc => sorted.sort_by(|a, b| {
            by_salary(a.salary().lower(), b.salary().lower(), false, missing)
        }),
    }
    sorted
}

fn by_salary(
    a: Option<i64>,
    b: Option<i64>,
    descending: bool,
    missing: MissingSalary,
) -> Ordering {
    let (a, b) = match missing {
        MissingSalary::Last => (a, b),
        MissingSalary::Zero => (Some(a.unwrap_or(0)), Some(b.unwrap_or(0))),
    };
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::testing::{TestJob, posting};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn ids(jobs: &[&TestJob]) -> Vec<i64> {
        jobs.iter().map(|j| j.id()).collect()
    }

    fn salaried() -> Vec<TestJob> {
        vec![
            posting(1).salary(None).build(),
            posting(2).salary(Some(5_000_000)).build(),
            posting(3).salary(Some(10_000_000)).build(),
        ]
    }

    #[test]
    fn salary_desc_puts_negotiable_last() {
        let jobs = salaried();
        let refs: Vec<_> = jobs.iter().collect();
        let sorted = sort_jobs(&refs, SortKey::SalaryDesc, MissingSalary::Last);
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn salary_asc_puts_negotiable_last() {
        let jobs = salaried();
        let refs: Vec<_> = jobs.iter().collect();
        let sorted = sort_jobs(&refs, SortKey::SalaryAsc, MissingSalary::Last);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn zero_mode_ranks_negotiable_as_lowest() {
        let jobs = salaried();
        let refs: Vec<_> = jobs.iter().collect();
        let sorted = sort_jobs(&refs, SortKey::SalaryAsc, MissingSalary::Zero);
        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn ranges_sort_by_upper_desc_and_lower_asc() {
        let jobs = vec![
            posting(1).range(Some(5_000_000), Some(30_000_000)).build(),
            posting(2).range(Some(8_000_000), Some(12_000_000)).build(),
        ];
        let refs: Vec<_> = jobs.iter().collect();
        assert_eq!(
            ids(&sort_jobs(&refs, SortKey::SalaryDesc, MissingSalary::Last)),
            vec![1, 2]
        );
        assert_eq!(
            ids(&sort_jobs(&refs, SortKey::SalaryAsc, MissingSalary::Last)),
            vec![1, 2]
        );
    }

    #[test]
    fn newest_is_id_descending_and_default() {
        let jobs = salaried();
        let refs: Vec<_> = jobs.iter().collect();
        assert_eq!(SortKey::parse(Some("bogus")), SortKey::Newest);
        assert_eq!(SortKey::parse(None), SortKey::Newest);
        assert_eq!(SortKey::parse(Some(" SALARY_DESC ")), SortKey::SalaryDesc);
        let sorted = sort_jobs(&refs, SortKey::parse(None), MissingSalary::Last);
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn equal_salaries_keep_input_order() {
        let jobs = vec![
            posting(4).salary(Some(7)).build(),
            posting(9).salary(Some(7)).build(),
            posting(2).salary(Some(7)).build(),
        ];
        let refs: Vec<_> = jobs.iter().collect();
        let sorted = sort_jobs(&refs, SortKey::SalaryDesc, MissingSalary::Last);
        assert_eq!(ids(&sorted), vec![4, 9, 2]);
    }

    #[test]
    fn missing_salary_parses_from_config_strings() {
        assert_eq!("LAST".parse::<MissingSalary>(), Ok(MissingSalary::Last));
        assert_eq!("zero".parse::<MissingSalary>(), Ok(MissingSalary::Zero));
        assert!("first".parse::<MissingSalary>().is_err());
    }

    proptest! {
        #[test]
        fn salary_desc_is_ordered_with_absent_at_tail(
            salaries in prop::collection::vec(prop::option::of(0i64..50), 0..40)
        ) {
            let jobs: Vec<TestJob> = salaries
                .iter()
                .enumerate()
                .map(|(i, s)| posting(i as i64).salary(*s).build())
                .collect();
            let refs: Vec<_> = jobs.iter().collect();
            let sorted = sort_jobs(&refs, SortKey::SalaryDesc, MissingSalary::Last);

            prop_assert_eq!(sorted.len(), jobs.len());
            let keys: Vec<Option<i64>> = sorted.iter().map(|j| j.salary().upper()).collect();
            let first_absent = keys.iter().position(Option::is_none).unwrap_or(keys.len());
            prop_assert!(keys[first_absent..].iter().all(Option::is_none));
            for pair in keys[..first_absent].windows(2) {
                prop_assert!(pair[0] >= pair[1]);
            }
            for pair in sorted.windows(2) {
                if pair[0].salary().upper() == pair[1].salary().upper() {
                    prop_assert!(pair[0].id() < pair[1].id());
                }
            }
        }
    }
}
