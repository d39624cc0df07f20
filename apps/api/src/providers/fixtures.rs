use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CandidateProfile, JobPosting};
use crate::providers::{CandidateProfileProvider, JobListingProvider};

const EMBEDDED_SEED: &str = include_str!("../../fixtures/seed.json");

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    candidates: Vec<CandidateProfile>,
    #[serde(default)]
    jobs: Vec<JobPosting>,
}

/// In-memory candidate and job store seeded from JSON. Immutable after load.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    candidates: Vec<CandidateProfile>,
    jobs: Vec<JobPosting>,
}

impl FixtureStore {
    /// Loads the seed at `path`, or the embedded seed when no path is given.
    /// Startup-only: errors carry file context for the operator.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let store = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Cannot read fixtures file {}", path.display()))?;
                Self::from_json(&raw)
                    .with_context(|| format!("Invalid fixtures file {}", path.display()))?
            }
            None => Self::from_json(EMBEDDED_SEED).context("Invalid embedded seed")?,
        };

        info!(
            "Fixture store loaded: {} candidates, {} jobs",
            store.candidates.len(),
            store.jobs.len()
        );
        Ok(store)
    }

    /// Parses seed content; bad JSON and duplicate ids are `AppError::Fixture`.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let seed: SeedFile = serde_json::from_str(raw)
            .map_err(|e| AppError::Fixture(format!("invalid seed JSON: {e}")))?;

        ensure_unique("candidate", seed.candidates.iter().map(|c| c.id))?;
        ensure_unique("job", seed.jobs.iter().map(|j| j.id))?;

        Ok(Self {
            candidates: seed.candidates,
            jobs: seed.jobs,
        })
    }
}

fn ensure_unique(kind: &str, ids: impl Iterator<Item = Uuid>) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::Fixture(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}

#[async_trait]
impl CandidateProfileProvider for FixtureStore {
    async fn get_candidate(&self, id: Uuid) -> Result<Option<CandidateProfile>, AppError> {
        Ok(self.candidates.iter().find(|c| c.id == id).cloned())
    }

    async fn list_candidates(&self) -> Result<Vec<CandidateProfile>, AppError> {
        Ok(self.candidates.clone())
    }
}

#[async_trait]
impl JobListingProvider for FixtureStore {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.jobs.clone())
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError> {
        Ok(self.jobs.iter().find(|j| j.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TINY_SEED: &str = r#"{
        "candidates": [
            {
                "id": "00000000-0000-4000-8000-0000000000c1",
                "name": "Riley",
                "skills": ["Go"],
                "experience": "2 years"
            }
        ],
        "jobs": [
            {
                "id": "00000000-0000-4000-8000-0000000000a1",
                "title": "Backend Engineer",
                "company": "Initech",
                "required_skills": ["Go", "Postgres"],
                "experience": "3 years",
                "location": "Remote",
                "is_remote": true,
                "salary_range": { "min": 90000, "max": 120000 }
            },
            {
                "id": "00000000-0000-4000-8000-0000000000a2",
                "title": "Platform Engineer",
                "company": "Initech",
                "location": "Denver, CO",
                "salary_range": { "min": 100000, "max": 130000 }
            }
        ]
    }"#;

    #[test]
    fn test_embedded_seed_loads() {
        let store = FixtureStore::load(None).unwrap();
        assert!(!store.candidates.is_empty());
        assert!(store.jobs.len() >= 10);
    }

    #[test]
    fn test_load_from_file_keeps_job_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TINY_SEED.as_bytes()).unwrap();

        let store = FixtureStore::load(Some(file.path())).unwrap();
        assert_eq!(store.jobs[0].title, "Backend Engineer");
        assert_eq!(store.jobs[1].title, "Platform Engineer");
        assert!(store.jobs[1].required_skills.is_empty());
        assert!(!store.jobs[1].is_remote);
    }

    #[test]
    fn test_missing_file_error_names_the_path() {
        let err = FixtureStore::load(Some(Path::new("/nonexistent/seed.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seed.json"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_bad_file_content_keeps_fixture_error_in_chain() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = FixtureStore::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Invalid fixtures file"));
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Fixture(_))
        ));
    }

    #[test]
    fn test_duplicate_job_ids_rejected() {
        let raw = r#"{
            "jobs": [
                {"id": "00000000-0000-4000-8000-0000000000a1", "title": "A", "company": "X",
                 "location": "Remote", "salary_range": {"min": 1, "max": 2}},
                {"id": "00000000-0000-4000-8000-0000000000a1", "title": "B", "company": "X",
                 "location": "Remote", "salary_range": {"min": 1, "max": 2}}
            ]
        }"#;
        let err = FixtureStore::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate job id"));
    }

    #[tokio::test]
    async fn test_lookup_by_id() {
        let store = FixtureStore::from_json(TINY_SEED).unwrap();
        let id = Uuid::parse_str("00000000-0000-4000-8000-0000000000c1").unwrap();

        let candidate = store.get_candidate(id).await.unwrap();
        assert_eq!(candidate.map(|c| c.name), Some("Riley".to_string()));
        assert!(store.get_job(id).await.unwrap().is_none());
    }
}
