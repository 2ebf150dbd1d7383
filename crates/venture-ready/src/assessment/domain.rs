use serde::{Deserialize, Serialize};

/// Identifier wrapper for scored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Identity of the founder who owns a submission. Supplied by the auth layer
/// upstream; the scoring core trusts it as handed over and performs no
/// authorization of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FounderId(pub String);

/// Tri-state intake answer.
///
/// `Unknown` marks a question the founder skipped. It is scored as a neutral
/// value, distinct from an explicit "no", so partially completed assessments
/// are not penalized as hard as negative ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Answer {
    pub const fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Answer::Yes,
            Some(false) => Answer::No,
            None => Answer::Unknown,
        }
    }

    pub const fn as_flag(self) -> Option<bool> {
        match self {
            Answer::Yes => Some(true),
            Answer::No => Some(false),
            Answer::Unknown => None,
        }
    }
}

/// Serde shim so tri-state answers travel as `true`/`false`/`null` on the
/// wire, matching the intake forms.
pub(crate) mod tri_state {
    use super::Answer;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(answer: &Answer, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match answer.as_flag() {
            Some(flag) => serializer.serialize_bool(flag),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Answer, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<bool>::deserialize(deserializer).map(Answer::from_flag)
    }
}

/// Monthly recurring revenue bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthlyRecurringRevenue {
    None,
    Low,
    Medium,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Headcount bracket, labelled the way the intake form presents it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSize {
    #[serde(rename = "1-2")]
    Founders,
    #[serde(rename = "3-10")]
    Early,
    #[serde(rename = "11-50")]
    Growing,
    #[serde(rename = "50+")]
    Scaled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Existing investor base on the cap table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestorBacking {
    None,
    Angels,
    Vc,
    LateStage,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Furthest milestone the startup has reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStage {
    Concept,
    Launch,
    Scale,
    Exit,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Raw intake answers for one readiness assessment.
///
/// Every field is total over its wire domain: missing flags arrive as
/// `Unknown`, and out-of-domain enum strings deserialize to the `Unknown`
/// variant instead of failing the whole submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentAnswers {
    #[serde(with = "tri_state")]
    pub prototype: Answer,
    #[serde(with = "tri_state")]
    pub external_capital: Answer,
    #[serde(with = "tri_state")]
    pub revenue: Answer,
    #[serde(with = "tri_state")]
    pub full_time_team: Answer,
    #[serde(with = "tri_state")]
    pub term_sheets: Answer,
    #[serde(with = "tri_state")]
    pub cap_table: Answer,
    pub mrr: MonthlyRecurringRevenue,
    pub employees: TeamSize,
    pub investors: InvestorBacking,
    pub milestones: MilestoneStage,
    pub funding_goal: Option<String>,
}

/// The four readiness categories every assessment is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    BusinessIdea,
    Financials,
    Team,
    Traction,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::BusinessIdea,
        Category::Financials,
        Category::Team,
        Category::Traction,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::BusinessIdea => "business idea",
            Category::Financials => "financials",
            Category::Team => "team",
            Category::Traction => "traction",
        }
    }
}

/// One 0-100 category score plus the template explanation shown to founders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u8,
    pub explanation: String,
}

/// Derived score for one assessment; immutable once computed.
///
/// `total_score` is a deterministic function of the four category scores and
/// the weighting profile used at scoring time, so re-scoring identical
/// answers always reproduces the identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub business_idea: CategoryScore,
    pub financials: CategoryScore,
    pub team: CategoryScore,
    pub traction: CategoryScore,
    pub total_score: u16,
}

impl ScoreResult {
    pub fn category(&self, category: Category) -> &CategoryScore {
        match category {
            Category::BusinessIdea => &self.business_idea,
            Category::Financials => &self.financials,
            Category::Team => &self.team,
            Category::Traction => &self.traction,
        }
    }

    pub fn category_scores(&self) -> [(Category, u8); 4] {
        [
            (Category::BusinessIdea, self.business_idea.score),
            (Category::Financials, self.financials.score),
            (Category::Team, self.team.score),
            (Category::Traction, self.traction.score),
        ]
    }
}

/// Metadata for an uploaded pitch document. The scoring core records the
/// storage key for audit trails but never reads the object itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
    pub name: String,
    pub storage_key: String,
}

/// Intake payload for one founder assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    pub founder_id: FounderId,
    pub answers: AssessmentAnswers,
    #[serde(default)]
    pub documents: Vec<DocumentDescriptor>,
}
