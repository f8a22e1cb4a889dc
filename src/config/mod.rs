mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Loads `CONFIG_PATH` (default `config.yaml`) if present, then applies
/// environment overrides.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    load_from(explicit_path.as_deref(), |key| env::var(key).ok()).await
}

/// A missing file is only an error when its path was given explicitly.
pub async fn load_from<F>(explicit_path: Option<&str>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = explicit_path.unwrap_or("config.yaml");

    let mut config = match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => {
            debug!("Loading configuration from: {}", config_path);
            serde_yaml::from_str(&config_str)?
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && explicit_path.is_none() => {
            debug!("No {} found, using built-in defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    config.apply_env(lookup)?;
    Ok(config)
}

impl Config {
    /// Overlays environment variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty key counts as unset.
        if let Some(key) = lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.llm.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }
        if let Some(environment) = lookup("FLASK_ENV") {
            self.server.environment = environment;
        }
        if let Some(engine) = lookup("OCR_ENGINE") {
            self.ocr.engine = engine.parse().map_err(Error::Config)?;
        }
        if let Some(cmd) = lookup("TESSERACT_CMD") {
            self.ocr.tesseract_cmd = cmd;
        }
        Ok(())
    }
}
