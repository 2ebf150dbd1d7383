use serde::{Deserialize, Serialize};

/// Typical size of a single check the investor writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckSize {
    #[default]
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Company stage the investor concentrates on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentStage {
    #[default]
    PreSeed,
    Seed,
    SeriesB,
    #[serde(rename = "preIPO")]
    PreIpo,
}

/// Where the investor sources deals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DealSource {
    #[default]
    Personal,
    Platforms,
    Funds,
    Public,
}

/// How often the investor deploys capital.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DealFrequency {
    #[default]
    Occasional,
    Frequent,
    Quarterly,
    Portfolio,
}

/// What the investor is primarily after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentObjective {
    #[default]
    Support,
    Returns,
    Strategic,
    Impact,
}

/// Intake answers for the investor classification pipeline. Disjoint from
/// the founder assessment schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestorIntake {
    pub personal_capital: bool,
    pub structured_fund: bool,
    pub due_diligence: bool,
    pub esg_metrics: bool,
    pub check_size: CheckSize,
    pub stage: InvestmentStage,
    pub deal_source: DealSource,
    pub frequency: DealFrequency,
    pub objective: InvestmentObjective,
}

/// The five investor categories. The declaration order doubles as the
/// tie-break precedence: when rule scores tie, the earlier variant wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum InvestorCategory {
    Angel,
    Vc,
    FamilyOffice,
    Institutional,
    Crowdfunding,
}

impl InvestorCategory {
    pub const ALL: [InvestorCategory; 5] = [
        InvestorCategory::Angel,
        InvestorCategory::Vc,
        InvestorCategory::FamilyOffice,
        InvestorCategory::Institutional,
        InvestorCategory::Crowdfunding,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            InvestorCategory::Angel => "Angel",
            InvestorCategory::Vc => "VC",
            InvestorCategory::FamilyOffice => "Family Office",
            InvestorCategory::Institutional => "Institutional",
            InvestorCategory::Crowdfunding => "Crowdfunding",
        }
    }

    /// Lenient parse for model output: matches labels case-insensitively and
    /// tolerates surrounding prose like "a classic VC profile".
    pub fn from_label(text: &str) -> Option<Self> {
        let normalized = text.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "angel" => return Some(InvestorCategory::Angel),
            "vc" | "venture capital" => return Some(InvestorCategory::Vc),
            "family office" | "familyoffice" => return Some(InvestorCategory::FamilyOffice),
            "institutional" => return Some(InvestorCategory::Institutional),
            "crowdfunding" => return Some(InvestorCategory::Crowdfunding),
            _ => {}
        }

        Self::ALL
            .into_iter()
            .find(|category| normalized.contains(&category.label().to_ascii_lowercase()))
    }
}

/// Classification output: one category, a confidence in [0, 1], and a short
/// human-readable justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: InvestorCategory,
    pub confidence: f64,
    pub explanation: String,
}
