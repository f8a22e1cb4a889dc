use super::{ImageUpload, OcrEngine, normalize_whitespace};
use crate::{Error, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::{io::AsyncWriteExt, process::Command};
use tracing::{debug, warn};

/// Runs `tesseract stdin stdout`, feeding the image over stdin.
pub struct TesseractOcr {
    command: String,
    lang: Option<String>,
}

impl TesseractOcr {
    pub fn new(command: impl Into<String>, lang: Option<String>) -> Self {
        Self {
            command: command.into(),
            lang,
        }
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec!["stdin".to_string(), "stdout".to_string()];
        if let Some(lang) = &self.lang {
            args.push("-l".to_string());
            args.push(lang.clone());
        }
        args
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn extract_text(&self, image: &ImageUpload) -> Result<String> {
        debug!("Running {} on {} byte image", self.command, image.bytes.len());

        let mut child = Command::new(&self.command)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::ocr(format!(
                    "Tesseract OCR engine not found at '{}'",
                    self.command
                )),
                _ => Error::ocr(format!("Failed to start Tesseract: {}", e)),
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::internal("Tesseract stdin was not captured"))?;
        let bytes = image.bytes.clone();
        let writer = tokio::spawn(async move {
            stdin.write_all(&bytes).await?;
            stdin.shutdown().await
        });

        let output = child.wait_with_output().await?;
        if let Ok(Err(e)) = writer.await {
            // Tesseract may close stdin early on a bad image; its exit status tells the story.
            warn!("Writing image to Tesseract failed: {}", e);
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ocr(format!(
                "Tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        Ok(normalize_whitespace(&raw))
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }
}
