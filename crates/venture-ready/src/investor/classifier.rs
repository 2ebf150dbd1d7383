use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use super::cache::{cache_key, ClassificationCache};
use super::domain::{ClassificationResult, InvestorCategory, InvestorIntake};
use super::rules;
use crate::generation::{extract_json_object, GenerationError, TextGenerator};

/// Investor classification service: cache first, then the external model,
/// then the deterministic rule table.
///
/// External-service failures never reach the caller; the fallback silently
/// substitutes and the response is always a complete classification.
pub struct InvestorClassifier<C> {
    cache: Arc<C>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl<C> InvestorClassifier<C>
where
    C: ClassificationCache + 'static,
{
    pub fn new(cache: Arc<C>, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { cache, generator }
    }

    pub async fn classify(
        &self,
        intake: &InvestorIntake,
    ) -> Result<ClassificationResult, ClassifierError> {
        let key = cache_key(intake).map_err(|err| ClassifierError::Intake(err.to_string()))?;

        match self.cache.get(&key) {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(err) => debug!(error = %err, "classification cache read skipped"),
        }

        let result = match &self.generator {
            Some(generator) => match model_classification(generator.as_ref(), intake).await {
                Ok(result) => result,
                Err(err) => {
                    debug!(error = %err, "model classification unavailable, using rule table");
                    rules::classify(intake)
                }
            },
            None => rules::classify(intake),
        };

        if let Err(err) = self.cache.put(&key, &result) {
            debug!(error = %err, "classification cache write skipped");
        }

        Ok(result)
    }
}

/// Error surfaced to callers. Only input problems qualify; everything else
/// is recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("invalid investor intake: {0}")]
    Intake(String),
}

async fn model_classification(
    generator: &dyn TextGenerator,
    intake: &InvestorIntake,
) -> Result<ClassificationResult, GenerationError> {
    let description = serde_json::to_string(intake)
        .map_err(|err| GenerationError::Config(err.to_string()))?;

    let prompt = format!(
        "Classify this investor intake into exactly one of: Angel, VC, \
         Family Office, Institutional, Crowdfunding. Intake: {description}. \
         Reply with JSON {{\"category\": string, \"confidence\": number in \
         [0,1], \"explanation\": string}} and nothing else.",
    );

    let completion = generator.complete(&prompt).await?;
    let payload = extract_json_object(&completion).ok_or(GenerationError::EmptyCompletion)?;
    let parsed: ModelClassification =
        serde_json::from_str(payload).map_err(|_| GenerationError::EmptyCompletion)?;

    let category = InvestorCategory::from_label(&parsed.category)
        .ok_or(GenerationError::EmptyCompletion)?;

    Ok(ClassificationResult {
        category,
        confidence: parsed.confidence.clamp(0.0, 1.0),
        explanation: parsed.explanation,
    })
}

#[derive(Debug, Deserialize)]
struct ModelClassification {
    category: String,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    explanation: String,
}
