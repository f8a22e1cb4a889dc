#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use veracity::{
    Error, Result,
    llm::{GenerateContentRequest, GenerateContentResponse, GenerativeClient},
    ocr::{ImageUpload, OcrEngine},
};

/// Mock generative client for testing
#[derive(Debug)]
pub struct MockGenerativeClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
    pub error: Option<String>,
    pub configured: bool,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
            configured: true,
        }
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(reply.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests.lock().unwrap().push(request);

        if !self.configured {
            return Err(Error::MissingApiKey);
        }
        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(GenerateContentResponse {
            text: responses.remove(0),
            finish_reason: Some("STOP".to_string()),
            usage: None,
        })
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

impl Default for MockGenerativeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock OCR engine recording every image it is handed
#[derive(Debug, Default)]
pub struct MockOcrEngine {
    pub text: String,
    pub error: Option<String>,
    pub needs_key: bool,
    pub calls: AtomicUsize,
    pub seen_mime_types: Mutex<Vec<String>>,
}

impl MockOcrEngine {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn needing_key(mut self) -> Self {
        self.needs_key = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OcrEngine for MockOcrEngine {
    async fn extract_text(&self, image: &ImageUpload) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_mime_types
            .lock()
            .unwrap()
            .push(image.mime_type.to_string());

        match &self.error {
            Some(error) => Err(Error::ocr(error.clone())),
            None => Ok(self.text.clone()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn needs_api_key(&self) -> bool {
        self.needs_key
    }
}
