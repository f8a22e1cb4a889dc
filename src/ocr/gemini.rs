use super::{ImageUpload, OcrEngine};
use crate::{
    Result,
    llm::{GenerateContentRequest, GenerativeClient},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

pub const EXTRACTION_PROMPT: &str =
    "Extract all readable text from this image. Do not add explanations.";

pub struct GeminiOcr {
    client: Arc<dyn GenerativeClient>,
}

impl GeminiOcr {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OcrEngine for GeminiOcr {
    async fn extract_text(&self, image: &ImageUpload) -> Result<String> {
        debug!(
            "Sending {} byte {} image to Gemini for OCR",
            image.bytes.len(),
            image.mime_type
        );

        let request = GenerateContentRequest::new()
            .with_text(EXTRACTION_PROMPT)
            .with_inline_data(image.mime_type, image.bytes.clone());

        let response = self.client.generate_content(request).await?;
        Ok(response.text.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "gemini"
    }

    fn needs_api_key(&self) -> bool {
        true
    }
}
