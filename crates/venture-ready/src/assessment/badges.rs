use serde::{Deserialize, Serialize};

use super::domain::{Answer, AssessmentAnswers, ScoreResult};

/// Qualitative badges derived from score thresholds and raw answers.
///
/// Each badge is earned by a single documented predicate so the catalog
/// stays auditable:
/// - `MvpReady`: prototype answered yes
/// - `RevenueGenerator`: revenue answered yes
/// - `TeamCommitted`: full-time team answered yes
/// - `InvestorReady`: total score >= 700
/// - `MarketValidated`: traction score >= 60
/// - `GrowthReady`: team score >= 70
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Badge {
    MvpReady,
    RevenueGenerator,
    TeamCommitted,
    InvestorReady,
    MarketValidated,
    GrowthReady,
}

impl Badge {
    pub const ALL: [Badge; 6] = [
        Badge::MvpReady,
        Badge::RevenueGenerator,
        Badge::TeamCommitted,
        Badge::InvestorReady,
        Badge::MarketValidated,
        Badge::GrowthReady,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Badge::MvpReady => "MVP Ready",
            Badge::RevenueGenerator => "Revenue Generator",
            Badge::TeamCommitted => "Team Committed",
            Badge::InvestorReady => "Investor Ready",
            Badge::MarketValidated => "Market Validated",
            Badge::GrowthReady => "Growth Ready",
        }
    }

    pub fn earned(self, result: &ScoreResult, answers: &AssessmentAnswers) -> bool {
        match self {
            Badge::MvpReady => answers.prototype == Answer::Yes,
            Badge::RevenueGenerator => answers.revenue == Answer::Yes,
            Badge::TeamCommitted => answers.full_time_team == Answer::Yes,
            Badge::InvestorReady => result.total_score >= 700,
            Badge::MarketValidated => result.traction.score >= 60,
            Badge::GrowthReady => result.team.score >= 70,
        }
    }
}

/// Evaluates the full catalog against one scored assessment.
pub fn earned_badges(result: &ScoreResult, answers: &AssessmentAnswers) -> Vec<Badge> {
    Badge::ALL
        .into_iter()
        .filter(|badge| badge.earned(result, answers))
        .collect()
}
