use sha2::{Digest, Sha256};

use super::domain::{ClassificationResult, InvestorIntake};

/// Cache of previous classifications keyed by intake content.
///
/// Strictly an optimization: a hit must be indistinguishable from a fresh
/// computation, which the deterministic fallback guarantees. Implementations
/// may drop entries at will.
pub trait ClassificationCache: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<ClassificationResult>, CacheError>;
    fn put(&self, key: &str, result: &ClassificationResult) -> Result<(), CacheError>;
}

/// Cache access error. Callers treat the cache as best-effort and never
/// propagate these.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("classification cache unavailable: {0}")]
    Unavailable(String),
}

/// SHA-256 over the canonical JSON encoding of the intake, so the key covers
/// the full input payload.
pub fn cache_key(intake: &InvestorIntake) -> Result<String, serde_json::Error> {
    let canonical = serde_json::to_vec(intake)?;
    let digest = Sha256::digest(&canonical);
    Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investor::domain::CheckSize;

    #[test]
    fn identical_intakes_share_a_key() {
        let a = InvestorIntake::default();
        let b = InvestorIntake::default();
        assert_eq!(cache_key(&a).unwrap(), cache_key(&b).unwrap());
    }

    #[test]
    fn differing_intakes_get_distinct_keys() {
        let a = InvestorIntake::default();
        let b = InvestorIntake {
            check_size: CheckSize::VeryHigh,
            ..InvestorIntake::default()
        };
        assert_ne!(cache_key(&a).unwrap(), cache_key(&b).unwrap());
    }
}
