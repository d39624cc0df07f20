use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::candidate::SalaryRange;

/// A job listing as supplied by the listing store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Same free-text format as `CandidateProfile::experience`.
    #[serde(default)]
    pub experience: String,
    pub location: String,
    #[serde(default)]
    pub is_remote: bool,
    pub salary_range: SalaryRange,
}
