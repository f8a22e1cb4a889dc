//! Text extraction from uploaded images.
//!
//! Two engines:
//! - Gemini vision, sharing the generative client used for fact checks (default)
//! - Tesseract, run locally as a subprocess

mod gemini;
mod tesseract;

pub use gemini::GeminiOcr;
pub use tesseract::TesseractOcr;

use crate::{
    Error, Result,
    config::{OcrConfig, OcrEngineKind},
    llm::GenerativeClient,
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn extract_text(&self, image: &ImageUpload) -> Result<String>;

    fn name(&self) -> &'static str;

    /// Engines backed by the remote model cannot run without `GEMINI_API_KEY`.
    fn needs_api_key(&self) -> bool {
        false
    }
}

/// An uploaded image whose format has been recognised.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        let format = image::guess_format(&bytes)
            .map_err(|e| Error::ocr(format!("cannot identify image file: {}", e)))?;
        Ok(Self {
            mime_type: format.to_mime_type(),
            bytes,
        })
    }
}

/// Collapses every whitespace run to a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn build_engine(config: &OcrConfig, client: Arc<dyn GenerativeClient>) -> Arc<dyn OcrEngine> {
    match config.engine {
        OcrEngineKind::Gemini => Arc::new(GeminiOcr::new(client)),
        OcrEngineKind::Tesseract => Arc::new(TesseractOcr::new(
            config.tesseract_cmd.clone(),
            config.tesseract_lang.clone(),
        )),
    }
}
