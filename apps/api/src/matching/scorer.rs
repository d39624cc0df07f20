//! Match Scorer: weighted multi-factor similarity between one candidate and one job.
//!
//! Default: `WeightedMatchScorer` (pure, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>` so the ranking driver and handlers
//! never depend on a concrete backend.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::experience::parse_years;
use crate::matching::weights::{MatchWeights, GOOD_SKILLS_THRESHOLD, STRONG_SKILLS_THRESHOLD};
use crate::models::{CandidateProfile, JobPosting};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Score of one job against one candidate. Created per call, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: Uuid,
    pub overall_score: u32,    // 0 – 100
    pub skills_score: u32,     // 0 – 100
    pub experience_score: u32, // 0 – 100
    pub location_score: u32,   // 0 – 100
    /// Evaluation order: skills, experience, location, salary.
    pub reasons: Vec<String>,
}

impl MatchResult {
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.overall_score)
    }
}

/// Display band for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => MatchTier::Excellent,
            s if s >= 60 => MatchTier::Good,
            s if s > 30 => MatchTier::Fair,
            _ => MatchTier::Low,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap backends without touching
/// the ranking driver or the handlers.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchResult;

    /// Short label surfaced to callers for transparency.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer (default)
// ────────────────────────────────────────────────────────────────────────────

/// Weighted linear scorer.
///
/// Algorithm:
/// 1. skills (×0.40): share of required skills hit by a bidirectional,
///    case-insensitive substring match
/// 2. experience (×0.30): candidate years / required years, capped at 100
/// 3. location (×0.20): remote → 100; otherwise preferred-location substring → 100 or 0
/// 4. salary (+10 flat): job band inside the candidate's band
/// 5. overall = round(min(100, Σ contributions))
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    weights: MatchWeights,
}

impl WeightedMatchScorer {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
        compute_weighted_match(candidate, job, &self.weights)
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core weighted match algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_weighted_match(
    candidate: &CandidateProfile,
    job: &JobPosting,
    weights: &MatchWeights,
) -> MatchResult {
    let mut reasons = Vec::new();
    let mut total = 0.0_f64;

    // 1. Skills
    let skills_score = skill_coverage(&candidate.skills, &job.required_skills);
    total += skills_score as f64 * weights.skills;
    if skills_score > STRONG_SKILLS_THRESHOLD {
        reasons.push(format!("Strong skills match ({skills_score}%)"));
    } else if skills_score > GOOD_SKILLS_THRESHOLD {
        reasons.push(format!("Good skills alignment ({skills_score}%)"));
    }

    // 2. Experience
    let candidate_years = parse_years(&candidate.experience);
    let required_years = parse_years(&job.experience);
    let experience_score = experience_ratio(candidate_years, required_years);
    total += experience_score as f64 * weights.experience;
    if candidate_years >= required_years {
        reasons.push(format!(
            "Experience requirement met ({candidate_years}+years)"
        ));
    }

    // 3. Location
    let location_score = if job.is_remote {
        reasons.push("Remote work available".to_string());
        100
    } else {
        match preferred_location(candidate) {
            Some(preferred) if job.location.to_lowercase().contains(&preferred) => {
                reasons.push("Location preference match".to_string());
                100
            }
            _ => 0,
        }
    };
    total += location_score as f64 * weights.location;

    // 4. Salary (binary, no sub-score)
    if let Some(range) = &candidate.salary_range {
        if range.contains(&job.salary_range) {
            total += weights.salary_points;
            reasons.push("Salary range matches preferences".to_string());
        }
    }

    MatchResult {
        job_id: job.id,
        overall_score: total.clamp(0.0, 100.0).round() as u32,
        skills_score,
        experience_score,
        location_score,
        reasons,
    }
}

/// Percentage of the job's required skills covered by the candidate.
///
/// Both sides are lowercased and de-duplicated; blank skills are ignored. A
/// candidate skill counts once if it contains, or is contained by, any required skill.
fn skill_coverage(candidate_skills: &[String], required_skills: &[String]) -> u32 {
    let required = normalized_skill_set(required_skills);
    if required.is_empty() {
        return 0;
    }

    let matching = normalized_skill_set(candidate_skills)
        .iter()
        .filter(|skill| {
            required
                .iter()
                .any(|req| req.contains(skill.as_str()) || skill.contains(req.as_str()))
        })
        .count();

    let pct = (matching as f64 / required.len() as f64 * 100.0).round() as u32;
    pct.min(100)
}

fn normalized_skill_set(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// A job that states no years (or zero) is treated as fully met.
fn experience_ratio(candidate_years: u32, required_years: u32) -> u32 {
    if required_years == 0 {
        return 100;
    }
    let ratio = candidate_years as f64 / required_years as f64 * 100.0;
    ratio.min(100.0).round() as u32
}

fn preferred_location(candidate: &CandidateProfile) -> Option<String> {
    candidate
        .preferred_location
        .as_deref()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
