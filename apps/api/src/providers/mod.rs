//! Read-only sources for candidate profiles and job listings.
//!
//! Matching never owns this data; it is handed a snapshot per request. The only
//! backend is the fixture-seeded in-memory store.

pub mod fixtures;
pub mod handlers;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CandidateProfile, JobPosting};

#[async_trait]
pub trait CandidateProfileProvider: Send + Sync {
    async fn get_candidate(&self, id: Uuid) -> Result<Option<CandidateProfile>, AppError>;

    async fn list_candidates(&self) -> Result<Vec<CandidateProfile>, AppError>;
}

#[async_trait]
pub trait JobListingProvider: Send + Sync {
    /// Jobs in listing order. Ranking ties fall back to this order.
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError>;

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError>;
}
