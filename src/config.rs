use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::search::{MissingSalary, SearchOptions};

#[derive(Parser, Debug, Clone)]
#[command(name = "jobportal", about = "Job portal search service")]
pub struct Config {
    /// Load postings from Postgres
    #[arg(
        long,
        env = "DATABASE_URL",
        conflicts_with = "jobs_file",
        required_unless_present = "jobs_file"
    )]
    pub database_url: Option<String>,

    /// Load postings from a JSON array file instead of a database
    #[arg(long, env = "JOBS_FILE")]
    pub jobs_file: Option<PathBuf>,

    /// Listen address
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Page size when the request does not ask for one
    #[arg(long, env = "PER_PAGE", default_value = "10")]
    pub per_page: NonZeroUsize,

    /// Upper limit for a requested page size
    #[arg(long, env = "MAX_PER_PAGE", default_value = "100")]
    pub max_per_page: NonZeroUsize,

    /// Match the keyword against descriptions as well as title and company
    #[arg(
        long,
        env = "KEYWORD_IN_DESCRIPTION",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub keyword_in_description: bool,

    /// Where negotiable salaries sort: "last" or "zero" (legacy)
    #[arg(long, env = "MISSING_SALARY", default_value = "last")]
    pub missing_salary: MissingSalary,
}

/// Where the service reads its postings from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    Postgres(String),
    File(PathBuf),
}

impl Config {
    pub fn snapshot_source(&self) -> anyhow::Result<SnapshotSource> {
        match (&self.database_url, &self.jobs_file) {
            (Some(url), None) => Ok(SnapshotSource::Postgres(url.clone())),
            (None, Some(path)) => Ok(SnapshotSource::File(path.clone())),
            (Some(_), Some(_)) => anyhow::bail!("Use either --database-url or --jobs-file, not both"),
            (None, None) => anyhow::bail!("One of --database-url or --jobs-file is required"),
        }
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            per_page: self.per_page.min(self.max_per_page),
            max_per_page: self.max_per_page,
            keyword_in_description: self.keyword_in_description,
            missing_salary: self.missing_salary,
        }
    }
}
