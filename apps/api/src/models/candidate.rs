#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Annual salary band, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl SalaryRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// True when `other` sits entirely inside this range.
    pub fn contains(&self, other: &SalaryRange) -> bool {
        other.min >= self.min && other.max <= self.max
    }
}

/// A candidate's profile as supplied by the profile store. Read-only to matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free text with a leading year count, e.g. "5+ years".
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub preferred_location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_range_contains_inner_band() {
        let candidate = SalaryRange::new(100_000, 150_000);
        assert!(candidate.contains(&SalaryRange::new(110_000, 140_000)));
        assert!(candidate.contains(&SalaryRange::new(100_000, 150_000)));
    }

    #[test]
    fn test_salary_range_rejects_overhanging_band() {
        let candidate = SalaryRange::new(100_000, 150_000);
        assert!(!candidate.contains(&SalaryRange::new(90_000, 160_000)));
        assert!(!candidate.contains(&SalaryRange::new(110_000, 160_000)));
        assert!(!candidate.contains(&SalaryRange::new(90_000, 140_000)));
    }

    #[test]
    fn test_profile_optional_fields_default_to_none() {
        let json = r#"{
            "id": "6f1c2d3e-0000-4000-8000-000000000001",
            "name": "Sam",
            "skills": ["Rust"],
            "experience": "3 years"
        }"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert!(profile.preferred_location.is_none());
        assert!(profile.salary_range.is_none());
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
    }
}
