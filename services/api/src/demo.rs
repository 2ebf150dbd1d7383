use clap::Args;
use std::sync::Arc;
use venture_ready::assessment::{
    band_for, Answer, AssessmentAnswers, AssessmentService, AssessmentSubmission, Category,
    DocumentDescriptor, FounderId, InvestorBacking, MilestoneStage, MonthlyRecurringRevenue,
    TeamSize,
};
use venture_ready::error::AppError;
use venture_ready::investor::{
    CheckSize, DealFrequency, DealSource, InvestmentObjective, InvestmentStage, InvestorClassifier,
    InvestorIntake,
};

use crate::infra::{
    InMemoryAssessmentRepository, InMemoryClassificationCache, InMemoryProfileRepository,
    InMemoryScoreNotifier,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Founder identifier used for the demo submission
    #[arg(long, default_value = "founder-demo")]
    pub(crate) founder: String,
    /// Score an early-stage answer set instead of the growth-stage one
    #[arg(long)]
    pub(crate) early_stage: bool,
    /// Skip the investor classification portion of the demo
    #[arg(long)]
    pub(crate) skip_investor: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        founder,
        early_stage,
        skip_investor,
    } = args;

    println!("Investment readiness demo");

    let notifier = Arc::new(InMemoryScoreNotifier::default());
    let service = AssessmentService::new(
        Arc::new(InMemoryAssessmentRepository::default()),
        Arc::new(InMemoryProfileRepository::default()),
        notifier.clone(),
        None,
    );

    let answers = if early_stage {
        early_stage_answers()
    } else {
        growth_stage_answers()
    };
    let submission = AssessmentSubmission {
        founder_id: FounderId(founder.clone()),
        answers,
        documents: vec![DocumentDescriptor {
            name: "Pitch deck".to_string(),
            storage_key: format!("uploads/{founder}/deck.pdf"),
        }],
    };

    let record = match service.submit(submission) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    };

    println!(
        "- Scored assessment {} for {}",
        record.assessment_id.0, record.founder_id.0
    );
    println!("  Category scores:");
    for category in Category::ALL {
        let score = record.result.category(category);
        println!(
            "    - {}: {} ({})",
            category.label(),
            score.score,
            score.explanation
        );
    }

    let band = band_for(record.result.total_score);
    println!(
        "  Total score: {} -> {} (top {}% of assessed startups)",
        record.result.total_score,
        band.name,
        100 - band.percentile
    );
    println!(
        "  Band profile: {} | typical stage {} | {}",
        band.description, band.typical_stage, band.success_rate
    );

    let view = record.score_view();
    if view.badges.is_empty() {
        println!("  Badges: none earned yet");
    } else {
        println!("  Badges: {}", view.badges.join(", "));
    }

    let recommendations = match service.recommendations(&record.assessment_id).await {
        Ok(set) => set,
        Err(err) => {
            println!("  Recommendations unavailable: {err}");
            return Ok(());
        }
    };
    println!("  Recommended next steps:");
    for category in Category::ALL {
        println!("    {}:", category.label());
        for item in recommendations.category(category) {
            println!("      - {item}");
        }
    }

    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("  API score payload:\n{json}"),
        Err(err) => println!("  API score payload unavailable: {err}"),
    }

    let events = notifier.events();
    if events.is_empty() {
        println!("  Notifications: none dispatched");
    } else {
        println!("  Notifications:");
        for event in events {
            println!(
                "    - template={} -> {}",
                event.template, event.assessment_id.0
            );
        }
    }

    if skip_investor {
        return Ok(());
    }

    println!("\nInvestor classification demo");
    let classifier = InvestorClassifier::new(Arc::new(InMemoryClassificationCache::default()), None);
    for (label, intake) in [
        ("angel profile", angel_intake()),
        ("fund profile", fund_intake()),
    ] {
        match classifier.classify(&intake).await {
            Ok(result) => println!(
                "- {label}: {} (confidence {:.2}) | {}",
                result.category.label(),
                result.confidence,
                result.explanation
            ),
            Err(err) => println!("- {label}: classification rejected: {err}"),
        }
    }

    Ok(())
}

fn growth_stage_answers() -> AssessmentAnswers {
    AssessmentAnswers {
        prototype: Answer::Yes,
        external_capital: Answer::Yes,
        revenue: Answer::Yes,
        full_time_team: Answer::Yes,
        term_sheets: Answer::Yes,
        cap_table: Answer::Yes,
        mrr: MonthlyRecurringRevenue::Medium,
        employees: TeamSize::Early,
        investors: InvestorBacking::Angels,
        milestones: MilestoneStage::Launch,
        funding_goal: Some("1.5M seed round".to_string()),
    }
}

fn early_stage_answers() -> AssessmentAnswers {
    AssessmentAnswers {
        prototype: Answer::Yes,
        external_capital: Answer::No,
        revenue: Answer::No,
        full_time_team: Answer::No,
        term_sheets: Answer::No,
        cap_table: Answer::Unknown,
        mrr: MonthlyRecurringRevenue::None,
        employees: TeamSize::Founders,
        investors: InvestorBacking::None,
        milestones: MilestoneStage::Concept,
        funding_goal: None,
    }
}

fn angel_intake() -> InvestorIntake {
    InvestorIntake {
        personal_capital: true,
        check_size: CheckSize::Low,
        stage: InvestmentStage::PreSeed,
        deal_source: DealSource::Personal,
        frequency: DealFrequency::Occasional,
        objective: InvestmentObjective::Support,
        ..InvestorIntake::default()
    }
}

fn fund_intake() -> InvestorIntake {
    InvestorIntake {
        structured_fund: true,
        due_diligence: true,
        check_size: CheckSize::High,
        stage: InvestmentStage::Seed,
        deal_source: DealSource::Funds,
        frequency: DealFrequency::Portfolio,
        objective: InvestmentObjective::Returns,
        ..InvestorIntake::default()
    }
}
