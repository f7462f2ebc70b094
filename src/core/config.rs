//! Engine configuration
//!
//! Only the surroundings of the engine are configurable: the optional
//! inference service and the verse picker's seed. Scoring weights and
//! verdict thresholds are fixed constants in `analysis` and `verdict`.

use crate::core::error::{BaziError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default endpoint for the inference service (Gemini `generateContent`)
pub const DEFAULT_LLM_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Top-level configuration, usually read from a TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Settings for the optional LLM-backed inference service
    pub llm: LlmConfig,

    /// Fixed seed for verse selection
    ///
    /// When unset, verses are picked from an entropy-seeded generator.
    pub verse_seed: Option<u64>,
}

/// Settings for the LLM inference service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Try the service before the local engine
    pub enabled: bool,

    /// Endpoint URL; the wire format is detected from it
    pub api_url: String,

    /// Model name sent to Anthropic/OpenAI-style endpoints
    pub model: String,

    /// Name of the environment variable holding the API key
    ///
    /// The key itself never lives in the config file.
    pub api_key_env: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: DEFAULT_LLM_URL.into(),
            model: "gemini-1.5-flash".into(),
            api_key_env: "LLM_API_KEY".into(),
            timeout_secs: 20,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| BaziError::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_url.trim().is_empty() {
            return Err(BaziError::Config("llm.api_url must not be empty".into()));
        }

        if self.llm.api_key_env.trim().is_empty() {
            return Err(BaziError::Config("llm.api_key_env must not be empty".into()));
        }

        if !(1..=300).contains(&self.llm.timeout_secs) {
            return Err(BaziError::Config(format!(
                "llm.timeout_secs ({}) must be between 1 and 300",
                self.llm.timeout_secs
            )));
        }

        Ok(())
    }
}
