use std::sync::Arc;

use super::common::*;
use crate::assessment::domain::Category;
use crate::assessment::recommendations::{
    RecommendationEngine, RecommendationSet, RECOMMENDATIONS_PER_CATEGORY,
};
use crate::assessment::scoring::{ScoringEngine, ScoringProfile};

fn score(answers: &crate::assessment::domain::AssessmentAnswers) -> crate::assessment::domain::ScoreResult {
    ScoringEngine::new(ScoringProfile::default()).score(answers)
}

#[tokio::test]
async fn fallback_covers_every_category_without_a_generator() {
    let engine = RecommendationEngine::new(None);
    let answers = maximal_answers();

    let set = engine.recommend(&score(&answers), &answers).await;

    for category in Category::ALL {
        let items = set.category(category);
        assert_eq!(items.len(), RECOMMENDATIONS_PER_CATEGORY);
        assert!(items.iter().all(|item| !item.trim().is_empty()));
    }
}

#[tokio::test]
async fn generator_failure_keeps_the_fallback_table() {
    let engine = RecommendationEngine::new(Some(Arc::new(ScriptedGenerator::failing())));
    let answers = minimal_answers();

    let set = engine.recommend(&score(&answers), &answers).await;

    assert_eq!(set, RecommendationSet::fallback());
}

#[tokio::test]
async fn generated_suggestions_replace_only_lagging_categories() {
    let completion = serde_json::json!({
        "businessIdea": ["sharpen the wedge", "talk to users", "narrow the ICP"],
        "financials": ["build the model", "track burn", "close the books monthly"],
        "team": ["hire a CTO", "go full-time", "add an advisor"],
        "traction": ["run pilots", "measure retention", "raise prices"],
    })
    .to_string();

    let engine = RecommendationEngine::new(Some(Arc::new(ScriptedGenerator::replying(
        &completion,
    ))));
    let answers = minimal_answers();

    let set = engine.recommend(&score(&answers), &answers).await;

    // Every category lags on a minimal assessment, so all four are replaced.
    assert_eq!(set.category(Category::BusinessIdea)[0], "sharpen the wedge");
    assert_eq!(set.category(Category::Traction)[2], "raise prices");
}

#[tokio::test]
async fn healthy_categories_are_never_sent_for_generation() {
    let completion = serde_json::json!({
        "businessIdea": ["a", "b", "c"],
        "financials": ["d", "e", "f"],
        "team": ["g", "h", "i"],
        "traction": ["j", "k", "l"],
    })
    .to_string();

    let engine = RecommendationEngine::new(Some(Arc::new(ScriptedGenerator::replying(
        &completion,
    ))));
    let answers = maximal_answers();

    let set = engine.recommend(&score(&answers), &answers).await;

    // Nothing lags, so the canned completion is never consulted.
    assert_eq!(set, RecommendationSet::fallback());
}

#[tokio::test]
async fn short_or_empty_generated_lists_fall_back_per_category() {
    let completion = serde_json::json!({
        "businessIdea": ["only one idea"],
        "financials": ["d", "e", "f"],
        "team": ["", "h", "i"],
        "traction": ["j", "k", "l"],
    })
    .to_string();

    let engine = RecommendationEngine::new(Some(Arc::new(ScriptedGenerator::replying(
        &completion,
    ))));
    let answers = minimal_answers();

    let set = engine.recommend(&score(&answers), &answers).await;
    let fallback = RecommendationSet::fallback();

    // Invalid entries keep the static text; valid ones are personalized.
    assert_eq!(
        set.category(Category::BusinessIdea),
        fallback.category(Category::BusinessIdea)
    );
    assert_eq!(set.category(Category::Team), fallback.category(Category::Team));
    assert_eq!(set.category(Category::Financials), ["d", "e", "f"]);
    assert_eq!(set.category(Category::Traction), ["j", "k", "l"]);
}

#[tokio::test]
async fn threshold_controls_which_categories_lag() {
    let completion = serde_json::json!({
        "businessIdea": ["a", "b", "c"],
        "financials": ["d", "e", "f"],
        "team": ["g", "h", "i"],
        "traction": ["j", "k", "l"],
    })
    .to_string();

    let engine = RecommendationEngine::new(Some(Arc::new(ScriptedGenerator::replying(
        &completion,
    ))))
    .with_threshold(95);
    let answers = strong_answers();

    let set = engine.recommend(&score(&answers), &answers).await;

    // With a 95 threshold only traction (100) clears the bar; the other
    // three categories are personalized.
    assert_eq!(set.category(Category::BusinessIdea), ["a", "b", "c"]);
    assert_eq!(set.category(Category::Financials), ["d", "e", "f"]);
    assert_eq!(set.category(Category::Team), ["g", "h", "i"]);
    assert_eq!(
        set.category(Category::Traction),
        RecommendationSet::fallback().category(Category::Traction)
    );
}
