use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;
use venture_ready::assessment::{
    AssessmentId, AssessmentRepository, FounderId, NotifyError, ProfileRepository,
    RepositoryError, ScoreNotification, ScoreNotifier, ScoreRecord, ScoringProfile,
};
use venture_ready::config::GenerationConfig;
use venture_ready::error::AppError;
use venture_ready::generation::{RemoteTextGenerator, TextGenerator};
use venture_ready::investor::{CacheError, ClassificationCache, ClassificationResult};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, ScoreRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_founder(&self, founder: &FounderId) -> Result<Vec<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.founder_id == founder)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    profiles: Arc<Mutex<HashMap<FounderId, ScoringProfile>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn upsert(&self, founder: &FounderId, profile: ScoringProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("profile mutex poisoned");
        guard.insert(founder.clone(), profile);
        Ok(())
    }

    fn fetch(&self, founder: &FounderId) -> Result<Option<ScoringProfile>, RepositoryError> {
        let guard = self.profiles.lock().expect("profile mutex poisoned");
        Ok(guard.get(founder).copied())
    }
}

/// Notifier standing in for the CRM bridge: records the event and logs it.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScoreNotifier {
    events: Arc<Mutex<Vec<ScoreNotification>>>,
}

impl ScoreNotifier for InMemoryScoreNotifier {
    fn notify(&self, notification: ScoreNotification) -> Result<(), NotifyError> {
        info!(
            template = %notification.template,
            assessment = %notification.assessment_id.0,
            "score notification dispatched"
        );
        let mut guard = self.events.lock().expect("notifier mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryScoreNotifier {
    pub(crate) fn events(&self) -> Vec<ScoreNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryClassificationCache {
    entries: Arc<Mutex<HashMap<String, ClassificationResult>>>,
}

impl ClassificationCache for InMemoryClassificationCache {
    fn get(&self, key: &str) -> Result<Option<ClassificationResult>, CacheError> {
        let guard = self.entries.lock().expect("cache mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn put(&self, key: &str, result: &ClassificationResult) -> Result<(), CacheError> {
        let mut guard = self.entries.lock().expect("cache mutex poisoned");
        guard.insert(key.to_string(), result.clone());
        Ok(())
    }
}

/// Build the shared text-generation adapter when the environment configures
/// one. Absence is not an error: the engines run on their rule tables.
pub(crate) fn build_generator(
    config: Option<&GenerationConfig>,
) -> Result<Option<Arc<dyn TextGenerator>>, AppError> {
    match config {
        Some(generation) => {
            let adapter = RemoteTextGenerator::new(generation.clone())?;
            info!(model = %generation.model, "text generation adapter configured");
            Ok(Some(Arc::new(adapter)))
        }
        None => Ok(None),
    }
}
