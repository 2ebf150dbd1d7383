use super::super::domain::{
    Answer, AssessmentAnswers, Category, InvestorBacking, MilestoneStage, MonthlyRecurringRevenue,
    TeamSize,
};

/// Neutral contribution for a skipped question. Deliberately non-zero and
/// below the domain midpoint: an unanswered field must never score like an
/// explicit "no", and must not be rewarded like a midpoint guess either.
pub(crate) const UNKNOWN_CONTRIBUTION: f64 = 40.0;

/// One normalized input to a category score: a bounded value in [0, 100]
/// and the relative weight it carries inside the category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Signal {
    pub label: &'static str,
    pub weight: f64,
    pub value: f64,
}

/// Maps raw answers to the weighted signal list for one category.
///
/// Weights within each category sum to 1.0; the lowest value of every
/// ordinal table is 0 so an all-minimal submission scores 0 everywhere.
pub(crate) fn category_signals(category: Category, answers: &AssessmentAnswers) -> Vec<Signal> {
    match category {
        Category::BusinessIdea => vec![
            signal("working prototype", 0.6, answer_value(answers.prototype)),
            signal(
                "milestone progress",
                0.4,
                milestone_value(answers.milestones),
            ),
        ],
        Category::Financials => vec![
            signal(
                "external capital raised",
                0.35,
                answer_value(answers.external_capital),
            ),
            signal("maintained cap table", 0.25, answer_value(answers.cap_table)),
            signal("recurring revenue level", 0.2, mrr_value(answers.mrr)),
            signal("investor backing", 0.2, backing_value(answers.investors)),
        ],
        Category::Team => vec![
            signal(
                "full-time commitment",
                0.6,
                answer_value(answers.full_time_team),
            ),
            signal("team size", 0.4, team_size_value(answers.employees)),
        ],
        Category::Traction => vec![
            signal("term sheets received", 0.4, answer_value(answers.term_sheets)),
            signal("revenue generated", 0.3, answer_value(answers.revenue)),
            signal("recurring revenue level", 0.3, mrr_value(answers.mrr)),
        ],
    }
}

const fn signal(label: &'static str, weight: f64, value: f64) -> Signal {
    Signal {
        label,
        weight,
        value,
    }
}

pub(crate) const fn answer_value(answer: Answer) -> f64 {
    match answer {
        Answer::Yes => 100.0,
        Answer::No => 0.0,
        Answer::Unknown => UNKNOWN_CONTRIBUTION,
    }
}

pub(crate) const fn mrr_value(mrr: MonthlyRecurringRevenue) -> f64 {
    match mrr {
        MonthlyRecurringRevenue::None => 0.0,
        MonthlyRecurringRevenue::Low => 25.0,
        MonthlyRecurringRevenue::Medium => 60.0,
        MonthlyRecurringRevenue::High => 100.0,
        MonthlyRecurringRevenue::Unknown => UNKNOWN_CONTRIBUTION,
    }
}

pub(crate) const fn team_size_value(size: TeamSize) -> f64 {
    match size {
        TeamSize::Founders => 0.0,
        TeamSize::Early => 45.0,
        TeamSize::Growing => 75.0,
        TeamSize::Scaled => 100.0,
        TeamSize::Unknown => UNKNOWN_CONTRIBUTION,
    }
}

pub(crate) const fn backing_value(backing: InvestorBacking) -> f64 {
    match backing {
        InvestorBacking::None => 0.0,
        InvestorBacking::Angels => 50.0,
        InvestorBacking::Vc => 80.0,
        InvestorBacking::LateStage => 100.0,
        InvestorBacking::Unknown => UNKNOWN_CONTRIBUTION,
    }
}

pub(crate) const fn milestone_value(stage: MilestoneStage) -> f64 {
    match stage {
        MilestoneStage::Concept => 0.0,
        MilestoneStage::Launch => 40.0,
        MilestoneStage::Scale => 75.0,
        MilestoneStage::Exit => 100.0,
        MilestoneStage::Unknown => UNKNOWN_CONTRIBUTION,
    }
}
