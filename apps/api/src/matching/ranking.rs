#![allow(dead_code)]

//! Ranking driver: scores a job collection against one candidate and keeps the
//! best matches.
//!
//! Filter (`overall_score > min_score`) → stable sort descending → cap at `top_n`.
//! Progress is reported after every scored job. The driver is stateless; callers
//! that must not re-run a finished ranking hold a `RankingSession`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::matching::scorer::{MatchResult, MatchScorer};
use crate::models::{CandidateProfile, JobPosting};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingOptions {
    /// Results must score strictly above this to be kept.
    pub min_score: u32,
    pub top_n: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            min_score: 30,
            top_n: 10,
        }
    }
}

/// Advisory progress for a UI indicator. `percent` never decreases within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankingProgress {
    pub processed: usize,
    pub total: usize,
    pub percent: u32,
}

impl RankingProgress {
    fn new(processed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            100
        } else {
            (processed * 100 / total) as u32
        };
        Self {
            processed,
            total,
            percent,
        }
    }
}

/// A candidate ranked against a single job, for the employer-side view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantMatch {
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub match_result: MatchResult,
}

/// Scores every job for `candidate` and returns the filtered, sorted, capped list.
pub fn rank_jobs<F>(
    scorer: &dyn MatchScorer,
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
    options: &RankingOptions,
    on_progress: F,
) -> Vec<MatchResult>
where
    F: FnMut(RankingProgress),
{
    let mut pass = RankingPass::new(scorer, candidate, jobs.len(), on_progress);
    for job in jobs {
        pass.step(job);
    }
    pass.finish(options)
}

/// Same as [`rank_jobs`], but waits `pace` after each job so a UI can animate
/// progress. `Duration::ZERO` never yields to the timer. Dropping the future
/// abandons the run.
pub async fn rank_jobs_paced<F>(
    scorer: &dyn MatchScorer,
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
    options: &RankingOptions,
    pace: Duration,
    on_progress: F,
) -> Vec<MatchResult>
where
    F: FnMut(RankingProgress),
{
    let mut pass = RankingPass::new(scorer, candidate, jobs.len(), on_progress);
    for job in jobs {
        pass.step(job);
        if !pace.is_zero() {
            tokio::time::sleep(pace).await;
        }
    }
    pass.finish(options)
}

/// One ranking run in progress: accumulates results and reports after each job.
struct RankingPass<'a, F> {
    scorer: &'a dyn MatchScorer,
    candidate: &'a CandidateProfile,
    total: usize,
    scored: Vec<MatchResult>,
    on_progress: F,
}

impl<'a, F> RankingPass<'a, F>
where
    F: FnMut(RankingProgress),
{
    /// An empty run is complete immediately and reports 100% once.
    fn new(
        scorer: &'a dyn MatchScorer,
        candidate: &'a CandidateProfile,
        total: usize,
        mut on_progress: F,
    ) -> Self {
        if total == 0 {
            on_progress(RankingProgress::new(0, 0));
        }
        Self {
            scorer,
            candidate,
            total,
            scored: Vec::with_capacity(total),
            on_progress,
        }
    }

    fn step(&mut self, job: &JobPosting) {
        let result = self.scorer.score(self.candidate, job);
        debug!(
            job_id = %job.id,
            overall = result.overall_score,
            skills = result.skills_score,
            experience = result.experience_score,
            location = result.location_score,
            "scored job"
        );
        self.scored.push(result);
        (self.on_progress)(RankingProgress::new(self.scored.len(), self.total));
    }

    fn finish(self, options: &RankingOptions) -> Vec<MatchResult> {
        let mut scored = self.scored;
        retain_sort_truncate(&mut scored, options, |r| r.overall_score);
        info!(
            "Ranked {} of {} jobs for candidate {}",
            scored.len(),
            self.total,
            self.candidate.id
        );
        scored
    }
}

/// Ranks candidates for one job with the same filter, order and cap.
pub fn rank_applicants(
    scorer: &dyn MatchScorer,
    job: &JobPosting,
    candidates: &[CandidateProfile],
    options: &RankingOptions,
) -> Vec<ApplicantMatch> {
    let mut applicants: Vec<ApplicantMatch> = candidates
        .iter()
        .map(|candidate| ApplicantMatch {
            candidate_id: candidate.id,
            candidate_name: candidate.name.clone(),
            match_result: scorer.score(candidate, job),
        })
        .collect();

    retain_sort_truncate(&mut applicants, options, |a| a.match_result.overall_score);

    info!(
        "Ranked {} of {} applicants for job {}",
        applicants.len(),
        candidates.len(),
        job.id
    );
    applicants
}

/// `sort_by` is stable, so equal scores keep their input order.
fn retain_sort_truncate<T>(
    items: &mut Vec<T>,
    options: &RankingOptions,
    score: impl Fn(&T) -> u32,
) {
    items.retain(|item| score(item) > options.min_score);
    items.sort_by(|a, b| score(b).cmp(&score(a)));
    items.truncate(options.top_n);
}

// ────────────────────────────────────────────────────────────────────────────
// Caller-side run-once tracking
// ────────────────────────────────────────────────────────────────────────────

/// Caller-side run-once guard for embedding the driver in a UI or job loop.
///
/// The HTTP handlers are stateless per request and do not hold one; callers that
/// re-render (and would otherwise re-rank) keep a session next to their view state.
#[derive(Debug, Default)]
pub struct RankingSession {
    has_completed: bool,
    results: Vec<MatchResult>,
}

impl RankingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_completed(&self) -> bool {
        self.has_completed
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// Runs the ranking once; later calls return the cached results and emit no progress.
    pub fn run<F>(
        &mut self,
        scorer: &dyn MatchScorer,
        candidate: &CandidateProfile,
        jobs: &[JobPosting],
        options: &RankingOptions,
        on_progress: F,
    ) -> &[MatchResult]
    where
        F: FnMut(RankingProgress),
    {
        if !self.has_completed {
            self.results = rank_jobs(scorer, candidate, jobs, options, on_progress);
            self.has_completed = true;
        }
        &self.results
    }

    pub fn reset(&mut self) {
        self.has_completed = false;
        self.results.clear();
    }
}
