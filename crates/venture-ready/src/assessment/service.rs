use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::clusters::band_for;
use super::domain::{AssessmentId, AssessmentSubmission, FounderId};
use super::recommendations::{RecommendationEngine, RecommendationSet};
use super::repository::{
    AssessmentRepository, ProfileRepository, RepositoryError, ScoreNotification, ScoreNotifier,
    ScoreRecord,
};
use super::scoring::{ScoringEngine, ScoringProfile};
use crate::generation::TextGenerator;

/// Service composing the scoring engine, repositories, notifier, and the
/// recommendation selector.
pub struct AssessmentService<R, P, N> {
    repository: Arc<R>,
    profiles: Arc<P>,
    notifier: Arc<N>,
    recommendations: RecommendationEngine,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("assess-{id:06}"))
}

impl<R, P, N> AssessmentService<R, P, N>
where
    R: AssessmentRepository + 'static,
    P: ProfileRepository + 'static,
    N: ScoreNotifier + 'static,
{
    pub fn new(
        repository: Arc<R>,
        profiles: Arc<P>,
        notifier: Arc<N>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            repository,
            profiles,
            notifier,
            recommendations: RecommendationEngine::new(generator),
        }
    }

    /// Score a submission with the founder's active profile and persist the
    /// result as a single atomic insert.
    ///
    /// A persistence failure surfaces as retryable and carries the computed
    /// result so the caller can re-attempt the write without re-scoring.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<ScoreRecord, AssessmentServiceError> {
        let profile = self.active_profile(&submission.founder_id)?;
        let engine = ScoringEngine::new(profile);
        let result = engine.score(&submission.answers);

        let record = ScoreRecord {
            assessment_id: next_assessment_id(),
            founder_id: submission.founder_id,
            answers: submission.answers,
            result,
            weights: *engine.profile(),
            documents: submission.documents,
            scored_at: Utc::now(),
        };

        let stored = match self.repository.insert(record.clone()) {
            Ok(stored) => stored,
            Err(RepositoryError::Conflict) => {
                return Err(AssessmentServiceError::Repository(RepositoryError::Conflict))
            }
            Err(source) => {
                // The computed record rides along so the caller can retry the
                // write without re-scoring.
                return Err(AssessmentServiceError::PersistFailed {
                    source,
                    record: Box::new(record),
                });
            }
        };

        self.publish_scored(&stored);
        Ok(stored)
    }

    /// Fetch a scored assessment for API responses.
    pub fn get(&self, id: &AssessmentId) -> Result<ScoreRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Improvement suggestions for a scored assessment. Falls back to the
    /// static table whenever the generator is absent or fails, so every
    /// category always receives three suggestions.
    pub async fn recommendations(
        &self,
        id: &AssessmentId,
    ) -> Result<RecommendationSet, AssessmentServiceError> {
        let record = self.get(id)?;
        Ok(self
            .recommendations
            .recommend(&record.result, &record.answers)
            .await)
    }

    /// Persist a founder's custom weighting profile, renormalizing the
    /// weights before the upsert. Returns the weights as stored.
    pub fn save_profile(
        &self,
        founder: &FounderId,
        profile: ScoringProfile,
    ) -> Result<ScoringProfile, AssessmentServiceError> {
        let normalized = profile.normalized();
        self.profiles.upsert(founder, normalized)?;
        Ok(normalized)
    }

    /// The profile scoring will use for this founder: their stored default,
    /// or the built-in weights.
    pub fn active_profile(
        &self,
        founder: &FounderId,
    ) -> Result<ScoringProfile, AssessmentServiceError> {
        Ok(self
            .profiles
            .fetch(founder)?
            .unwrap_or_default()
            .normalized())
    }

    fn publish_scored(&self, record: &ScoreRecord) {
        let band = band_for(record.result.total_score);
        let mut details = BTreeMap::new();
        details.insert(
            "total_score".to_string(),
            record.result.total_score.to_string(),
        );
        details.insert("cluster".to_string(), band.name.to_string());

        let notification = ScoreNotification {
            template: "assessment_scored".to_string(),
            assessment_id: record.assessment_id.clone(),
            details,
        };

        // CRM glue is best-effort; scoring must not fail because of it.
        if let Err(err) = self.notifier.notify(notification) {
            warn!(error = %err, assessment = %record.assessment_id.0, "score notification dropped");
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("score computed but not persisted (retryable): {source}")]
    PersistFailed {
        source: RepositoryError,
        record: Box<ScoreRecord>,
    },
}

impl AssessmentServiceError {
    /// True when the caller may safely retry the same submission.
    pub fn retryable(&self) -> bool {
        matches!(self, AssessmentServiceError::PersistFailed { .. })
    }
}
