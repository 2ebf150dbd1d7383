use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GenerationError, TextGenerator};
use crate::config::GenerationConfig;

/// Chat-completions adapter for any OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct RemoteTextGenerator {
    config: GenerationConfig,
    client: Client,
}

impl RemoteTextGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        if config.base_url.trim().is_empty() {
            return Err(GenerationError::Config("base url is empty".to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl TextGenerator for RemoteTextGenerator {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let payload = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
        };

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, body });
        }

        let parsed: ChatResponse = res.json().await?;
        let completion = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if completion.trim().is_empty() {
            return Err(GenerationError::EmptyCompletion);
        }

        Ok(completion)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
