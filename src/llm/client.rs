//! Async LLM client for the optional inference service
//!
//! Model-agnostic HTTP client. Supports Gemini `generateContent`,
//! Anthropic Messages and OpenAI-compatible chat APIs (DeepSeek, etc).
//! Every failure maps to `ExternalService`; the caller decides whether
//! to fall back.

use crate::core::config::LlmConfig;
use crate::core::error::{BaziError, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A verdict, a verse and two sentences fit comfortably
const MAX_TOKENS: u32 = 1024;

/// API format type
#[derive(Debug, Clone, PartialEq)]
pub enum ApiFormat {
    Gemini,
    Anthropic,
    OpenAI,
}

/// Async LLM client for making API calls
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    api_format: ApiFormat,
}

impl LlmClient {
    /// Create a new LLM client with explicit configuration
    pub fn new(api_key: String, api_url: String, model: String, timeout: Duration) -> Result<Self> {
        let api_format = Self::detect_api_format(&api_url);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BaziError::ExternalService(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            api_url,
            model,
            api_format,
        })
    }

    /// Detect API format from URL
    fn detect_api_format(url: &str) -> ApiFormat {
        if url.contains("generativelanguage.googleapis.com") || url.contains(":generateContent") {
            ApiFormat::Gemini
        } else if url.contains("anthropic.com") {
            ApiFormat::Anthropic
        } else {
            // DeepSeek, OpenAI, and other compatible APIs use OpenAI format
            ApiFormat::OpenAI
        }
    }

    /// Create a client from the `[llm]` config section
    ///
    /// The key is read from the environment variable named in the config.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            BaziError::ExternalService(format!("{} not set", config.api_key_env))
        })?;
        Self::new(
            api_key,
            config.api_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Create a client from environment variables
    ///
    /// Required: LLM_API_KEY
    /// Optional: LLM_API_URL, LLM_MODEL (defaults from `LlmConfig`)
    pub fn from_env() -> Result<Self> {
        let mut config = LlmConfig::default();
        if let Ok(url) = std::env::var("LLM_API_URL") {
            config.api_url = url;
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            config.model = model;
        }
        Self::from_config(&config)
    }

    pub fn api_format(&self) -> &ApiFormat {
        &self.api_format
    }

    /// Send a completion request to the LLM
    ///
    /// # Arguments
    /// * `system` - System prompt providing context and instructions
    /// * `user` - User message/query to process
    ///
    /// # Returns
    /// The LLM's text response
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        tracing::debug!("LLM request to {} ({:?})", self.api_url, self.api_format);
        match self.api_format {
            ApiFormat::Gemini => self.complete_gemini(system, user).await,
            ApiFormat::Anthropic => self.complete_anthropic(system, user).await,
            ApiFormat::OpenAI => self.complete_openai(system, user).await,
        }
    }

    /// Send a prepared request and decode the JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| BaziError::ExternalService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(BaziError::ExternalService(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| BaziError::ExternalService(e.to_string()))
    }

    async fn complete_gemini(&self, system: &str, user: &str) -> Result<String> {
        // System and user text travel together as one user turn
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: format!("{}\n\n{}", system, user),
                }],
            }],
        };
        let request = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body);

        let completion: GeminiResponse = self.send(request).await?;
        completion
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| BaziError::ExternalService("Empty response".into()))
    }

    async fn complete_anthropic(&self, system: &str, user: &str) -> Result<String> {
        let body = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            system: system.into(),
            messages: vec![Message::user(user)],
        };
        let request = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body);

        let completion: AnthropicResponse = self.send(request).await?;
        completion
            .content
            .into_iter()
            .next()
            .map(|c| c.text)
            .ok_or_else(|| BaziError::ExternalService("Empty response".into()))
    }

    async fn complete_openai(&self, system: &str, user: &str) -> Result<String> {
        let body = OpenAIRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![
                Message {
                    role: "system".into(),
                    content: system.into(),
                },
                Message::user(user),
            ],
        };
        let request = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body);

        let completion: OpenAIResponse = self.send(request).await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| BaziError::ExternalService("Empty response".into()))
    }
}

// Gemini generateContent format
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

// Anthropic API format
#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

// OpenAI-compatible API format (DeepSeek, OpenAI, etc.)
#[derive(Serialize)]
struct OpenAIRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

// Shared
#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

impl Message {
    fn user(content: &str) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}
