/// How a posting stores its pay.
///
/// Current rows carry a `(salary_min, salary_max)` pair, older rows a single
/// amount. Either side of a range may be missing ("negotiable").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryShape {
    Range { min: Option<i64>, max: Option<i64> },
    Single(Option<i64>),
}

impl SalaryShape {
    /// Effective `(lower, upper)` bounds. A half-open range borrows its known
    /// side for the missing one; a single amount is both bounds.
    pub fn bounds(&self) -> (Option<i64>, Option<i64>) {
        match *self {
            SalaryShape::Range { min, max } => (min.or(max), max.or(min)),
            SalaryShape::Single(amount) => (amount, amount),
        }
    }

    pub fn lower(&self) -> Option<i64> {
        self.bounds().0
    }

    pub fn upper(&self) -> Option<i64> {
        self.bounds().1
    }

    pub fn is_negotiable(&self) -> bool {
        self.upper().is_none()
    }
}

/// Read-only view of a job posting, as the search core sees it.
///
/// Implemented once per storage shape so filtering and sorting never touch
/// the underlying representation.
pub trait JobRecord {
    /// Unique, monotonically assigned; higher is newer.
    fn id(&self) -> i64;
    fn title(&self) -> &str;
    fn company_name(&self) -> &str;
    fn description(&self) -> Option<&str> {
        None
    }
    fn location(&self) -> Option<&str>;
    fn job_type(&self) -> Option<&str>;
    fn work_mode(&self) -> Option<&str>;
    fn salary(&self) -> SalaryShape;
    /// "Hot" postings, shown in their own group.
    fn featured(&self) -> bool {
        false
    }
}

impl<T: JobRecord + ?Sized> JobRecord for &T {
    fn id(&self) -> i64 {
        (**self).id()
    }
    fn title(&self) -> &str {
        (**self).title()
    }
    fn company_name(&self) -> &str {
        (**self).company_name()
    }
    fn description(&self) -> Option<&str> {
        (**self).description()
    }
    fn location(&self) -> Option<&str> {
        (**self).location()
    }
    fn job_type(&self) -> Option<&str> {
        (**self).job_type()
    }
    fn work_mode(&self) -> Option<&str> {
        (**self).work_mode()
    }
    fn salary(&self) -> SalaryShape {
        (**self).salary()
    }
    fn featured(&self) -> bool {
        (**self).featured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_range_borrows_known_side() {
        let from_only = SalaryShape::Range {
            min: Some(10_000_000),
            max: None,
        };
        assert_eq!(from_only.bounds(), (Some(10_000_000), Some(10_000_000)));

        let up_to = SalaryShape::Range {
            min: None,
            max: Some(20_000_000),
        };
        assert_eq!(up_to.lower(), Some(20_000_000));
    }

    #[test]
    fn single_amount_is_both_bounds() {
        let shape = SalaryShape::Single(Some(15_000_000));
        assert_eq!(shape.bounds(), (Some(15_000_000), Some(15_000_000)));
        assert!(!shape.is_negotiable());
        assert!(SalaryShape::Single(None).is_negotiable());
        assert!(SalaryShape::Range { min: None, max: None }.is_negotiable());
    }
}
