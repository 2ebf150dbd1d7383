//! Canonical scoring pipeline: normalization, category rules, and total
//! aggregation. Invoked from both the HTTP service and the CLI demo so the
//! rules exist exactly once.

mod aggregate;
mod normalizer;
mod rules;

pub use aggregate::ScoringProfile;

use super::domain::{AssessmentAnswers, Category, ScoreResult};

/// Stateless scorer binding a weighting profile to the category rules.
///
/// Construction normalizes the profile once so every score call works from
/// validated weights.
pub struct ScoringEngine {
    profile: ScoringProfile,
}

impl ScoringEngine {
    pub fn new(profile: ScoringProfile) -> Self {
        Self {
            profile: profile.normalized(),
        }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Scores a full set of answers. Pure and deterministic: identical
    /// answers and profile always reproduce the identical result.
    pub fn score(&self, answers: &AssessmentAnswers) -> ScoreResult {
        let business_idea = rules::score_category(Category::BusinessIdea, answers);
        let financials = rules::score_category(Category::Financials, answers);
        let team = rules::score_category(Category::Team, answers);
        let traction = rules::score_category(Category::Traction, answers);

        let total_score = self.profile.total_score(
            business_idea.score,
            financials.score,
            team.score,
            traction.score,
        );

        ScoreResult {
            business_idea,
            financials,
            team,
            traction,
            total_score,
        }
    }
}
