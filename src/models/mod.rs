pub mod job;
pub mod legacy_job;
pub mod posting;

pub use job::Job;
pub use legacy_job::{LegacyJob, RawSalary};
pub use posting::{JobView, Posting};
