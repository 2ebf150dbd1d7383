use super::common::*;
use crate::assessment::badges::{earned_badges, Badge};
use crate::assessment::domain::Answer;
use crate::assessment::scoring::{ScoringEngine, ScoringProfile};

#[test]
fn strong_assessment_earns_the_full_catalog() {
    let answers = strong_answers();
    let result = ScoringEngine::new(ScoringProfile::default()).score(&answers);

    let badges = earned_badges(&result, &answers);

    assert_eq!(badges.len(), Badge::ALL.len());
    assert!(badges.contains(&Badge::InvestorReady));
}

#[test]
fn minimal_assessment_earns_nothing() {
    let answers = minimal_answers();
    let result = ScoringEngine::new(ScoringProfile::default()).score(&answers);

    assert!(earned_badges(&result, &answers).is_empty());
}

#[test]
fn answer_badges_track_raw_answers_not_scores() {
    let mut answers = minimal_answers();
    answers.prototype = Answer::Yes;
    let result = ScoringEngine::new(ScoringProfile::default()).score(&answers);

    let badges = earned_badges(&result, &answers);

    assert_eq!(badges, vec![Badge::MvpReady]);
}

#[test]
fn investor_ready_requires_the_700_threshold() {
    let answers = strong_answers();
    let mut result = ScoringEngine::new(ScoringProfile::default()).score(&answers);

    result.total_score = 699;
    assert!(!Badge::InvestorReady.earned(&result, &answers));

    result.total_score = 700;
    assert!(Badge::InvestorReady.earned(&result, &answers));
}

#[test]
fn badge_labels_match_the_published_catalog() {
    let labels: Vec<&str> = Badge::ALL.into_iter().map(Badge::label).collect();
    assert_eq!(
        labels,
        vec![
            "MVP Ready",
            "Revenue Generator",
            "Team Committed",
            "Investor Ready",
            "Market Validated",
            "Growth Ready",
        ]
    );
}
