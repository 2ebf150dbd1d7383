use super::super::domain::{AssessmentAnswers, Category, CategoryScore};
use super::normalizer::{self, Signal};

/// Computes one 0-100 category score from the weighted signal list.
///
/// The weighted sum is clamped before rounding half-up, so the numeric
/// contract holds for any signal values the normalizer can produce.
pub(crate) fn score_category(category: Category, answers: &AssessmentAnswers) -> CategoryScore {
    let signals = normalizer::category_signals(category, answers);
    let weighted: f64 = signals.iter().map(|s| s.weight * s.value).sum();
    let score = round_half_up(weighted.clamp(0.0, 100.0));

    CategoryScore {
        score,
        explanation: explain(category, score, &signals),
    }
}

fn round_half_up(value: f64) -> u8 {
    (value + 0.5).floor() as u8
}

/// Chooses a template explanation keyed by score tier and the strongest and
/// weakest signal labels. Cosmetic; not part of the numeric contract.
fn explain(category: Category, score: u8, signals: &[Signal]) -> String {
    let strongest = extreme_signal(signals, |a, b| a.value > b.value);
    let weakest = extreme_signal(signals, |a, b| a.value < b.value);

    match score {
        80.. => format!(
            "{} is investor-grade, anchored by {}",
            category.label(),
            strongest
        ),
        50..=79 => format!(
            "{} is developing: {} leads while {} lags",
            category.label(),
            strongest,
            weakest
        ),
        _ => format!(
            "{} needs attention, starting with {}",
            category.label(),
            weakest
        ),
    }
}

fn extreme_signal(signals: &[Signal], better: fn(&Signal, &Signal) -> bool) -> &'static str {
    let mut pick: Option<&Signal> = None;
    for signal in signals {
        match pick {
            Some(current) if !better(signal, current) => {}
            _ => pick = Some(signal),
        }
    }
    pick.map(|signal| signal.label).unwrap_or("overall progress")
}
