use crate::search::record::{JobRecord, SalaryShape};

#[derive(Debug, Clone, PartialEq)]
pub struct TestJob {
    id: i64,
    title: String,
    company: String,
    description: Option<String>,
    location: Option<String>,
    job_type: Option<String>,
    work_mode: Option<String>,
    salary: SalaryShape,
    featured: bool,
}

impl JobRecord for TestJob {
    fn id(&self) -> i64 {
        self.id
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
        self.work_mode.as_deref()
    }
    fn salary(&self) -> SalaryShape {
        self.salary
    }
    fn featured(&self) -> bool {
        self.featured
    }
}

pub struct TestJobBuilder(TestJob);

pub fn posting(id: i64) -> TestJobBuilder {
    TestJobBuilder(TestJob {
        id,
        title: format!("Job {id}"),
        company: "Acme".to_string(),
        description: None,
        location: Some("Hanoi".to_string()),
        job_type: None,
        work_mode: None,
        salary: SalaryShape::Range {
            min: None,
            max: None,
        },
        featured: false,
    })
}

impl TestJobBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = title.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.0.company = company.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.0.location = Some(location.into());
        self
    }

    pub fn no_location(mut self) -> Self {
        self.0.location = None;
        self
    }

    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.0.job_type = Some(job_type.into());
        self
    }

    pub fn work_mode(mut self, work_mode: impl Into<String>) -> Self {
        self.0.work_mode = Some(work_mode.into());
        self
    }

    pub fn salary(mut self, amount: Option<i64>) -> Self {
        self.0.salary = SalaryShape::Single(amount);
        self
    }

    pub fn range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.0.salary = SalaryShape::Range { min, max };
        self
    }

    pub fn featured(mut self) -> Self {
        self.0.featured = true;
        self
    }

    pub fn build(self) -> TestJob {
        self.0
    }
}
