use super::domain::{
    CheckSize, ClassificationResult, DealFrequency, DealSource, InvestmentObjective,
    InvestmentStage, InvestorCategory, InvestorIntake,
};

/// Highest score the rule table can award one category; confidence divides
/// by this value.
const FULL_CONFIDENCE_SCORE: f64 = 50.0;

/// One triggered rule: the category it favors, its points, and the phrase
/// used in the explanation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RuleHit {
    pub category: InvestorCategory,
    pub points: u16,
    pub reason: &'static str,
}

/// Applies the fixed point table to one intake. Every rule accumulates
/// independently; nothing here short-circuits.
pub(crate) fn rule_hits(intake: &InvestorIntake) -> Vec<RuleHit> {
    let mut hits = Vec::new();
    let mut hit = |category, points, reason| {
        hits.push(RuleHit {
            category,
            points,
            reason,
        });
    };

    if intake.personal_capital {
        hit(InvestorCategory::Angel, 20, "invests personal capital");
    }
    if intake.structured_fund {
        hit(InvestorCategory::Vc, 20, "operates a structured fund");
    }
    if intake.esg_metrics {
        hit(InvestorCategory::Crowdfunding, 15, "tracks ESG metrics");
    }

    match intake.check_size {
        CheckSize::VeryHigh => hit(
            InvestorCategory::Institutional,
            25,
            "writes very large checks",
        ),
        CheckSize::Low | CheckSize::Medium => {
            hit(InvestorCategory::Angel, 10, "writes smaller checks")
        }
        CheckSize::High => {}
    }

    if matches!(intake.stage, InvestmentStage::PreSeed | InvestmentStage::Seed) {
        hit(InvestorCategory::Vc, 10, "focuses on early-stage deals");
    }
    if intake.deal_source == DealSource::Personal {
        hit(InvestorCategory::Angel, 10, "sources deals personally");
    }
    if intake.deal_source == DealSource::Public {
        hit(InvestorCategory::Crowdfunding, 10, "sources deals publicly");
    }
    if intake.frequency == DealFrequency::Portfolio {
        hit(InvestorCategory::Vc, 10, "deploys portfolio-style");
    }
    if intake.objective == InvestmentObjective::Strategic {
        hit(InvestorCategory::FamilyOffice, 10, "invests strategically");
    }
    if intake.objective == InvestmentObjective::Support {
        hit(InvestorCategory::Angel, 10, "motivated by founder support");
    }

    hits
}

/// Deterministic fallback classifier.
///
/// The category with the highest accumulated score wins; ties resolve to the
/// earlier variant in the fixed precedence (Angel first). The small-check
/// personal-capital override is applied after selection, never before.
pub(crate) fn classify(intake: &InvestorIntake) -> ClassificationResult {
    let hits = rule_hits(intake);

    let mut winner = InvestorCategory::Angel;
    let mut max_score: u16 = 0;
    for category in InvestorCategory::ALL {
        let score: u16 = hits
            .iter()
            .filter(|hit| hit.category == category)
            .map(|hit| hit.points)
            .sum();
        if score > max_score {
            winner = category;
            max_score = score;
        }
    }

    let small_check = matches!(intake.check_size, CheckSize::Low | CheckSize::Medium);
    if intake.personal_capital && small_check {
        winner = InvestorCategory::Angel;
    }

    let confidence = (f64::from(max_score) / FULL_CONFIDENCE_SCORE).min(1.0);
    let explanation = explain(winner, &hits);

    ClassificationResult {
        category: winner,
        confidence,
        explanation,
    }
}

fn explain(winner: InvestorCategory, hits: &[RuleHit]) -> String {
    let reasons: Vec<&str> = hits
        .iter()
        .filter(|hit| hit.category == winner)
        .map(|hit| hit.reason)
        .collect();

    if reasons.is_empty() {
        format!(
            "No strong signals in the intake; defaulting to the {} profile",
            winner.label()
        )
    } else {
        format!("Matches the {} profile: {}", winner.label(), reasons.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_intake() -> InvestorIntake {
        InvestorIntake {
            personal_capital: false,
            structured_fund: false,
            due_diligence: false,
            esg_metrics: false,
            check_size: CheckSize::High,
            stage: InvestmentStage::SeriesB,
            deal_source: DealSource::Funds,
            frequency: DealFrequency::Occasional,
            objective: InvestmentObjective::Returns,
        }
    }

    #[test]
    fn structured_fund_with_early_focus_classifies_as_vc() {
        let intake = InvestorIntake {
            structured_fund: true,
            stage: InvestmentStage::Seed,
            frequency: DealFrequency::Portfolio,
            ..base_intake()
        };

        let result = classify(&intake);
        assert_eq!(result.category, InvestorCategory::Vc);
        assert!((result.confidence - 0.8).abs() < 1e-9);
        assert!(result.explanation.contains("structured fund"));
    }

    #[test]
    fn very_large_checks_classify_as_institutional() {
        let intake = InvestorIntake {
            check_size: CheckSize::VeryHigh,
            ..base_intake()
        };

        let result = classify(&intake);
        assert_eq!(result.category, InvestorCategory::Institutional);
        assert!((result.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn esg_and_public_sourcing_classify_as_crowdfunding() {
        let intake = InvestorIntake {
            esg_metrics: true,
            deal_source: DealSource::Public,
            ..base_intake()
        };

        let result = classify(&intake);
        assert_eq!(result.category, InvestorCategory::Crowdfunding);
    }

    #[test]
    fn strategic_objective_classifies_as_family_office() {
        let intake = InvestorIntake {
            objective: InvestmentObjective::Strategic,
            ..base_intake()
        };

        let result = classify(&intake);
        assert_eq!(result.category, InvestorCategory::FamilyOffice);
    }

    #[test]
    fn small_check_personal_capital_overrides_higher_vc_score() {
        // VC accumulates 40 (fund + early stage + portfolio cadence) against
        // Angel's 30, but the explicit business rule still forces Angel.
        let intake = InvestorIntake {
            personal_capital: true,
            structured_fund: true,
            check_size: CheckSize::Low,
            stage: InvestmentStage::PreSeed,
            frequency: DealFrequency::Portfolio,
            ..base_intake()
        };

        let result = classify(&intake);
        assert_eq!(result.category, InvestorCategory::Angel);
        // Confidence still reflects the strongest accumulated score.
        assert!((result.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn empty_intake_defaults_to_angel_with_zero_confidence() {
        let result = classify(&base_intake());
        assert_eq!(result.category, InvestorCategory::Angel);
        assert_eq!(result.confidence, 0.0);
        assert!(result.explanation.contains("No strong signals"));
    }

    #[test]
    fn ties_resolve_by_category_precedence() {
        // Angel 20 vs VC 20: Angel is earlier in the precedence order.
        let intake = InvestorIntake {
            personal_capital: true,
            structured_fund: true,
            ..base_intake()
        };

        let result = classify(&intake);
        assert_eq!(result.category, InvestorCategory::Angel);
    }
}
