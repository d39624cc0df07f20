use serde::{Deserialize, Serialize};

/// Skills sub-score above which the "strong" reason is emitted.
pub const STRONG_SKILLS_THRESHOLD: u32 = 70;
/// Skills sub-score above which any skills reason is emitted.
pub const GOOD_SKILLS_THRESHOLD: u32 = 40;

/// Dimension weights for the overall match score.
///
/// Skills, experience and location multiply a 0–100 sub-score; salary is a flat
/// bonus awarded only on a full fit, so it carries points rather than a factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary_points: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.30,
            location: 0.20,
            salary_points: 10.0,
        }
    }
}

impl MatchWeights {
    /// Highest reachable total in points.
    pub fn sum(&self) -> f64 {
        (self.skills + self.experience + self.location) * 100.0 + self.salary_points
    }
}
