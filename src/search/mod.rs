//! In-memory job search: salary parsing, filtering, sorting, pagination.
//!
//! Everything here is synchronous and side-effect free. Callers hand in an
//! owned snapshot of postings per request.

pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod record;
pub mod salary;
pub mod sort;

#[cfg(test)]
pub(crate) mod testing;

pub use filter::{Criteria, matches};
pub use paginate::{Page, paginate};
pub use pipeline::{SearchEcho, SearchOptions, SearchParams, SearchResult, search};
pub use record::{JobRecord, SalaryShape};
pub use salary::{format_salary, parse_salary};
pub use sort::{MissingSalary, SortKey, sort_jobs};
