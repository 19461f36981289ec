use std::time::Duration;

use tracing::debug;

use super::Completion;
use super::types::{CompletionRequest, CompletionResponse};
use crate::error::CompletionError;

/// Client for OpenAI-compatible `/chat/completions` endpoints
pub(crate) struct OpenAiClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    /// `timeout` of `None` leaves requests unbounded.
    pub(crate) fn new(base_url: &str, api_key: Option<String>, timeout: Option<Duration>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl Completion for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        debug!(
            endpoint = %self.endpoint(),
            model = %request.model,
            max_tokens = request.max_tokens,
            "sending completion request"
        );

        let response = self
            .agent
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {api_key}"))
            .send_json(request)?;

        let mut body = response.into_body();
        let parsed: CompletionResponse = serde_json::from_reader(body.as_reader())?;
        parsed.into_text().ok_or(CompletionError::EmptyResponse)
    }
}
