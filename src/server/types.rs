use crate::factcheck::{Language, Verdict};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Only a JSON object is a valid chat body; serde would also take a sequence.
impl TryFrom<serde_json::Value> for ChatRequest {
    type Error = String;

    fn try_from(body: serde_json::Value) -> Result<Self, Self::Error> {
        if !body.is_object() {
            return Err("request body must be a JSON object".to_string());
        }
        serde_json::from_value(body).map_err(|e| e.to_string())
    }
}

impl ChatRequest {
    pub fn statement(&self) -> &str {
        self.message.as_deref().unwrap_or("").trim()
    }

    pub fn language(&self) -> Language {
        Language::resolve(self.language.as_deref().unwrap_or(Language::DEFAULT_CODE))
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

impl ChatResponse {
    pub fn message(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            verdict: None,
        }
    }

    pub fn from_model(reply: String) -> Self {
        Self {
            verdict: Verdict::from_reply(&reply),
            reply,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OcrResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
