use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    Answer, AssessmentAnswers, AssessmentId, AssessmentSubmission, DocumentDescriptor, FounderId,
    InvestorBacking, MilestoneStage, MonthlyRecurringRevenue, TeamSize,
};
use crate::assessment::repository::{
    AssessmentRepository, NotifyError, ProfileRepository, RepositoryError, ScoreNotification,
    ScoreNotifier, ScoreRecord,
};
use crate::assessment::router::assessment_router;
use crate::assessment::scoring::ScoringProfile;
use crate::assessment::service::AssessmentService;
use crate::generation::{GenerationError, TextGenerator};

pub(super) fn maximal_answers() -> AssessmentAnswers {
    AssessmentAnswers {
        prototype: Answer::Yes,
        external_capital: Answer::Yes,
        revenue: Answer::Yes,
        full_time_team: Answer::Yes,
        term_sheets: Answer::Yes,
        cap_table: Answer::Yes,
        mrr: MonthlyRecurringRevenue::High,
        employees: TeamSize::Scaled,
        investors: InvestorBacking::LateStage,
        milestones: MilestoneStage::Exit,
        funding_goal: Some("5M series A".to_string()),
    }
}

pub(super) fn minimal_answers() -> AssessmentAnswers {
    AssessmentAnswers {
        prototype: Answer::No,
        external_capital: Answer::No,
        revenue: Answer::No,
        full_time_team: Answer::No,
        term_sheets: Answer::No,
        cap_table: Answer::No,
        mrr: MonthlyRecurringRevenue::None,
        employees: TeamSize::Founders,
        investors: InvestorBacking::None,
        milestones: MilestoneStage::Concept,
        funding_goal: None,
    }
}

/// The worked end-to-end example: strong answers with an unanswered
/// external-capital question.
pub(super) fn strong_answers() -> AssessmentAnswers {
    AssessmentAnswers {
        prototype: Answer::Yes,
        external_capital: Answer::Unknown,
        revenue: Answer::Yes,
        full_time_team: Answer::Yes,
        term_sheets: Answer::Yes,
        cap_table: Answer::Yes,
        mrr: MonthlyRecurringRevenue::High,
        employees: TeamSize::Growing,
        investors: InvestorBacking::Vc,
        milestones: MilestoneStage::Scale,
        funding_goal: Some("2M seed extension".to_string()),
    }
}

pub(super) fn submission(founder: &str, answers: AssessmentAnswers) -> AssessmentSubmission {
    AssessmentSubmission {
        founder_id: FounderId(founder.to_string()),
        answers,
        documents: vec![DocumentDescriptor {
            name: "Pitch deck".to_string(),
            storage_key: format!("uploads/{founder}/deck.pdf"),
        }],
    }
}

pub(super) type MemoryService =
    AssessmentService<MemoryAssessments, MemoryProfiles, MemoryNotifier>;

pub(super) fn build_service() -> (
    MemoryService,
    Arc<MemoryAssessments>,
    Arc<MemoryProfiles>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryAssessments::default());
    let profiles = Arc::new(MemoryProfiles::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = AssessmentService::new(
        repository.clone(),
        profiles.clone(),
        notifier.clone(),
        None,
    );
    (service, repository, profiles, notifier)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryAssessments {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, ScoreRecord>>>,
}

impl AssessmentRepository for MemoryAssessments {
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
pub(super) struct MemoryProfiles {
    profiles: Arc<Mutex<HashMap<FounderId, ScoringProfile>>>,
}

impl ProfileRepository for MemoryProfiles {
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

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<ScoreNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<ScoreNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl ScoreNotifier for MemoryNotifier {
    fn notify(&self, notification: ScoreNotification) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct UnavailableAssessments;

impl AssessmentRepository for UnavailableAssessments {
    fn insert(&self, _record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<ScoreRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_founder(&self, _founder: &FounderId) -> Result<Vec<ScoreRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Generator double that replays a canned completion, or fails when no
/// completion is scripted.
pub(super) struct ScriptedGenerator {
    completion: Option<String>,
}

impl ScriptedGenerator {
    pub(super) fn replying(completion: &str) -> Self {
        Self {
            completion: Some(completion.to_string()),
        }
    }

    pub(super) fn failing() -> Self {
        Self { completion: None }
    }
}

#[async_trait::async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.completion
            .clone()
            .ok_or(GenerationError::EmptyCompletion)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
