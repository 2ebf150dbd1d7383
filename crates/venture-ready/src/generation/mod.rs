//! Boundary for the optional external text-generation service.
//!
//! Every AI-backed feature in the platform goes through [`TextGenerator`].
//! Callers treat the generator as an enhancement: any error from this module
//! is recovered locally by a deterministic fallback, never surfaced to the
//! end user.

mod remote;

pub use remote::RemoteTextGenerator;

use async_trait::async_trait;

/// Prompt-in, completion-out contract for the generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Request a completion for the given prompt. Implementations must bound
    /// the call with a timeout so callers are never left pending.
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation endpoint misconfigured: {0}")]
    Config(String),

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation service returned status {status}")]
    Api { status: u16, body: String },

    #[error("generation response carried no completion text")]
    EmptyCompletion,
}

/// Pulls the first JSON object out of a completion that may be wrapped in
/// prose or markdown fences.
pub(crate) fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    text.get(start..=end)
}
