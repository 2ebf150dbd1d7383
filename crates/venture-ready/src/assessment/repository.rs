use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::badges::{earned_badges, Badge};
use super::clusters::band_for;
use super::domain::{
    AssessmentAnswers, AssessmentId, DocumentDescriptor, FounderId, ScoreResult,
};
use super::scoring::ScoringProfile;

/// Persisted record for one scored assessment: the raw answers, the derived
/// result, and the exact weights used to compute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub assessment_id: AssessmentId,
    pub founder_id: FounderId,
    pub answers: AssessmentAnswers,
    pub result: ScoreResult,
    pub weights: ScoringProfile,
    pub documents: Vec<DocumentDescriptor>,
    pub scored_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Flattened view combining the record with its band and badges for API
    /// responses.
    pub fn score_view(&self) -> ScoreView {
        let band = band_for(self.result.total_score);
        ScoreView {
            assessment_id: self.assessment_id.clone(),
            founder_id: self.founder_id.clone(),
            total_score: self.result.total_score,
            business_idea: self.result.business_idea.score,
            financials: self.result.financials.score,
            team: self.result.team.score,
            traction: self.result.traction.score,
            cluster: band.name,
            percentile: band.percentile,
            badges: earned_badges(&self.result, &self.answers)
                .into_iter()
                .map(Badge::label)
                .collect(),
            scored_at: self.scored_at,
        }
    }
}

/// Sanitized representation of a scored assessment for the API surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreView {
    pub assessment_id: AssessmentId,
    pub founder_id: FounderId,
    pub total_score: u16,
    pub business_idea: u8,
    pub financials: u8,
    pub team: u8,
    pub traction: u8,
    pub cluster: &'static str,
    pub percentile: u8,
    pub badges: Vec<&'static str>,
    pub scored_at: DateTime<Utc>,
}

/// Storage abstraction for scored assessments so the service module can be
/// exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<ScoreRecord>, RepositoryError>;
    fn for_founder(&self, founder: &FounderId) -> Result<Vec<ScoreRecord>, RepositoryError>;
}

/// Storage abstraction for the per-founder default weighting profile.
/// Upserts are last-writer-wins; concurrent edits by the same founder simply
/// overwrite.
pub trait ProfileRepository: Send + Sync {
    fn upsert(&self, founder: &FounderId, profile: ScoringProfile) -> Result<(), RepositoryError>;
    fn fetch(&self, founder: &FounderId) -> Result<Option<ScoringProfile>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound notification hook toward the CRM/email glue, which lives outside
/// this core.
pub trait ScoreNotifier: Send + Sync {
    fn notify(&self, notification: ScoreNotification) -> Result<(), NotifyError>;
}

/// Notification payload emitted after an assessment is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreNotification {
    pub template: String,
    pub assessment_id: AssessmentId,
    pub details: BTreeMap<String, String>,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
