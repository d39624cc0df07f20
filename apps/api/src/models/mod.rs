pub mod candidate;
pub mod job;

pub use candidate::{CandidateProfile, SalaryRange};
pub use job::JobPosting;
