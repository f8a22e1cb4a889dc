use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;

    /// Whether credentials are available to make calls at all.
    fn is_configured(&self) -> bool {
        true
    }
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        debug!(
            "Generating content with {} parts and {} tools on {}",
            request.parts.len(),
            request.tools.len(),
            self.model
        );

        let body = WireRequest::from(&request);
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<WireErrorEnvelope>(&raw)
                .map(|envelope| envelope.error.message)
                .unwrap_or(raw);
            return Err(Error::llm(format!(
                "Gemini API error ({}): {}",
                status.as_u16(),
                message
            )));
        }

        let wire: WireResponse = response.json().await?;

        if let Some(reason) = wire
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return Err(Error::llm(format!("Prompt blocked: {}", reason)));
        }

        let candidate = wire
            .candidates
            .first()
            .ok_or_else(|| Error::llm("Model returned no text"))?;
        let text = candidate
            .text()
            .ok_or_else(|| Error::llm("Model returned no text"))?;

        debug!(
            "Received {} characters, finish reason {:?}",
            text.len(),
            candidate.finish_reason
        );

        Ok(GenerateContentResponse {
            text,
            finish_reason: candidate.finish_reason.clone(),
            usage: wire.usage_metadata,
        })
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
