use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{AssessmentAnswers, Category, ScoreResult};
use crate::generation::{extract_json_object, GenerationError, TextGenerator};

/// Number of improvement suggestions guaranteed per category.
pub const RECOMMENDATIONS_PER_CATEGORY: usize = 3;

/// Categories scoring below this default are offered personalized
/// suggestions from the generation service.
pub const DEFAULT_RECOMMENDATION_THRESHOLD: u8 = 50;

/// Exactly three improvement suggestions for each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub business_idea: Vec<String>,
    pub financials: Vec<String>,
    pub team: Vec<String>,
    pub traction: Vec<String>,
}

impl RecommendationSet {
    /// The static table used whenever the generator is absent or fails. Full
    /// coverage is the invariant: no category ever ends up empty.
    pub fn fallback() -> Self {
        fn owned(items: [&str; RECOMMENDATIONS_PER_CATEGORY]) -> Vec<String> {
            items.into_iter().map(str::to_string).collect()
        }

        Self {
            business_idea: owned([
                "Ship a working prototype and put it in front of ten target users",
                "Write down the problem, the buyer, and why now in one page",
                "Define the next funded milestone and the evidence that proves it",
            ]),
            financials: owned([
                "Build an 18-month operating model with monthly burn and runway",
                "Clean up the cap table and document every outstanding commitment",
                "Track MRR, gross margin, and CAC in one shared dashboard",
            ]),
            team: owned([
                "Get the founding team full-time before raising institutional money",
                "Map the two hires that unblock the next milestone",
                "Set up an advisor bench covering your weakest functional area",
            ]),
            traction: owned([
                "Instrument activation and retention before spending on acquisition",
                "Convert pilot users into paying reference customers",
                "Document repeatable sales motion from first touch to close",
            ]),
        }
    }

    pub fn category(&self, category: Category) -> &[String] {
        match category {
            Category::BusinessIdea => &self.business_idea,
            Category::Financials => &self.financials,
            Category::Team => &self.team,
            Category::Traction => &self.traction,
        }
    }

    fn replace(&mut self, category: Category, items: Vec<String>) {
        match category {
            Category::BusinessIdea => self.business_idea = items,
            Category::Financials => self.financials = items,
            Category::Team => self.team = items,
            Category::Traction => self.traction = items,
        }
    }
}

/// Selector preferring generated suggestions for lagging categories, with
/// the static table guaranteeing coverage under every failure mode.
pub struct RecommendationEngine {
    generator: Option<Arc<dyn TextGenerator>>,
    threshold: u8,
}

impl RecommendationEngine {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            generator,
            threshold: DEFAULT_RECOMMENDATION_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Produces the final recommendation set for a scored assessment.
    ///
    /// The generator is consulted only for categories below the threshold;
    /// anything malformed or missing in its output leaves the fallback text
    /// in place for that category.
    pub async fn recommend(
        &self,
        result: &ScoreResult,
        answers: &AssessmentAnswers,
    ) -> RecommendationSet {
        let mut set = RecommendationSet::fallback();

        let lagging: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|category| result.category(*category).score < self.threshold)
            .collect();

        let Some(generator) = &self.generator else {
            return set;
        };
        if lagging.is_empty() {
            return set;
        }

        match self.generated(generator.as_ref(), result, answers, &lagging).await {
            Ok(generated) => {
                for category in lagging {
                    if let Some(items) = generated.valid_items(category) {
                        set.replace(category, items);
                    }
                }
            }
            Err(err) => {
                debug!(error = %err, "recommendation generation unavailable, keeping fallback text");
            }
        }

        set
    }

    async fn generated(
        &self,
        generator: &dyn TextGenerator,
        result: &ScoreResult,
        answers: &AssessmentAnswers,
        lagging: &[Category],
    ) -> Result<GeneratedRecommendations, GenerationError> {
        let prompt = build_prompt(result, answers, lagging)?;
        let completion = generator.complete(&prompt).await?;
        let payload = extract_json_object(&completion)
            .ok_or(GenerationError::EmptyCompletion)?;

        serde_json::from_str(payload)
            .map_err(|_| GenerationError::EmptyCompletion)
    }
}

fn build_prompt(
    result: &ScoreResult,
    answers: &AssessmentAnswers,
    lagging: &[Category],
) -> Result<String, GenerationError> {
    let scores = serde_json::to_string(result)
        .map_err(|err| GenerationError::Config(err.to_string()))?;
    let intake = serde_json::to_string(answers)
        .map_err(|err| GenerationError::Config(err.to_string()))?;
    let focus: Vec<&str> = lagging.iter().map(|category| category.label()).collect();

    Ok(format!(
        "You advise startup founders on investment readiness. Scores: {scores}. \
         Intake answers: {intake}. For each lagging category ({}) reply with JSON \
         {{\"businessIdea\": [3 strings], \"financials\": [3 strings], \
         \"team\": [3 strings], \"traction\": [3 strings]}} containing three \
         concrete improvement steps per category.",
        focus.join(", ")
    ))
}

/// Wire shape of the generator response; fields default so a partial reply
/// still personalizes the categories it does cover.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct GeneratedRecommendations {
    business_idea: Vec<String>,
    financials: Vec<String>,
    team: Vec<String>,
    traction: Vec<String>,
}

impl GeneratedRecommendations {
    fn valid_items(&self, category: Category) -> Option<Vec<String>> {
        let items = match category {
            Category::BusinessIdea => &self.business_idea,
            Category::Financials => &self.financials,
            Category::Team => &self.team,
            Category::Traction => &self.traction,
        };

        if items.len() == RECOMMENDATIONS_PER_CATEGORY
            && items.iter().all(|item| !item.trim().is_empty())
        {
            Some(items.clone())
        } else {
            None
        }
    }
}
