//! Founder assessment pipeline: answer intake, category scoring, total
//! aggregation, cluster banding, badges, and recommendations.
//!
//! The scoring rules live here exactly once and are invoked from every
//! context (HTTP service, CLI demo, tests) so the client/server duplication
//! of the legacy calculators cannot reappear.

pub mod badges;
pub mod clusters;
pub mod domain;
pub mod recommendations;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use badges::{earned_badges, Badge};
pub use clusters::{band_for, ClusterBand, CLUSTER_BANDS};
pub use domain::{
    Answer, AssessmentAnswers, AssessmentId, AssessmentSubmission, Category, CategoryScore,
    DocumentDescriptor, FounderId, InvestorBacking, MilestoneStage, MonthlyRecurringRevenue,
    ScoreResult, TeamSize,
};
pub use recommendations::{
    RecommendationEngine, RecommendationSet, DEFAULT_RECOMMENDATION_THRESHOLD,
    RECOMMENDATIONS_PER_CATEGORY,
};
pub use repository::{
    AssessmentRepository, NotifyError, ProfileRepository, RepositoryError, ScoreNotification,
    ScoreNotifier, ScoreRecord, ScoreView,
};
pub use router::assessment_router;
pub use scoring::{ScoringEngine, ScoringProfile};
pub use service::{AssessmentService, AssessmentServiceError};
