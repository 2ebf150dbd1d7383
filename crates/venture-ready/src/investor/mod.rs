//! Investor classification pipeline, independent of the founder assessment
//! schema. A fixed rule table provides the deterministic baseline; the
//! external model, when configured, merely personalizes the output.

pub mod cache;
pub mod classifier;
pub mod domain;
pub mod router;

pub(crate) mod rules;

pub use cache::{cache_key, CacheError, ClassificationCache};
pub use classifier::{ClassifierError, InvestorClassifier};
pub use domain::{
    CheckSize, ClassificationResult, DealFrequency, DealSource, InvestmentObjective,
    InvestmentStage, InvestorCategory, InvestorIntake,
};
pub use router::investor_router;
