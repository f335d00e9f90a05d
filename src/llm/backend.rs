//! LLM generation backends
//!
//! Two interchangeable backends behind one trait, selected at construction:
//! a local Ollama server and any OpenAI-compatible chat-completions API.
//! Both are single bounded requests; no streaming, no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{GuestDeskError, Result};

/// Default Ollama API endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Default Ollama model
pub const DEFAULT_OLLAMA_MODEL: &str = "qwen2.5:7b-instruct";

/// Default OpenAI-compatible endpoint
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

/// Default OpenAI-compatible model
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A text-generation capability. Implementations differ only in transport;
/// callers see a uniform question-in, answer-out contract.
#[async_trait]
pub trait GenerateBackend: Send + Sync {
    /// Generate a completion for a system prompt + user message pair.
    async fn generate(&self, system: &str, user: &str) -> Result<String>;

    /// Model identifier, for display.
    fn model(&self) -> &str;
}

/// Ollama-backed generation (POST /api/generate, non-streaming)
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    pub fn new(base_url: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GuestDeskError::Http)?;

        Ok(OllamaBackend {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl GenerateBackend for OllamaBackend {
    async fn generate(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let request = OllamaGenerateRequest {
            model: self.model.clone(),
            system: system.to_string(),
            prompt: user.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GuestDeskError::LlmApi(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GuestDeskError::LlmApi(format!("HTTP {}: {}", status, body)));
        }

        let parsed: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| GuestDeskError::LlmApi(format!("Failed to parse response: {}", e)))?;

        Ok(parsed.response.trim().to_string())
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// OpenAI-compatible generation (POST /v1/chat/completions)
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiBackend {
    /// Create a backend reading the API key from `OPENAI_API_KEY`.
    pub fn from_env(base_url: &str, model: &str) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            GuestDeskError::LlmUnavailable("OPENAI_API_KEY is not set".to_string())
        })?;
        Self::new(base_url, model, &api_key)
    }

    pub fn new(base_url: &str, model: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GuestDeskError::Http)?;

        Ok(OpenAiBackend {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl GenerateBackend for OpenAiBackend {
    async fn generate(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GuestDeskError::LlmApi(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GuestDeskError::LlmApi(format!("HTTP {}: {}", status, body)));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GuestDeskError::LlmApi(format!("Failed to parse response: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GuestDeskError::LlmApi("Empty choices in response".to_string()))?;

        Ok(content.trim().to_string())
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Clone, Serialize)]
struct OllamaGenerateRequest {
    model: String,
    system: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
