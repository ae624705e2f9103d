//! Google Gemini generation backend
//!
//! Calls the `generateContent` REST endpoint with a fixed programming-assistant
//! system instruction and returns the text of the first candidate.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    backend::{BackendFactory, GenerationBackend},
    protocol::error::BackendError,
    service::request::preview,
};

/// Default Gemini REST API base
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// System instruction sent with every question
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are an expert programming assistant, powered by Google Gemini.
Help developers with clear, concise and accurate explanations or code examples.
- Answer questions about programming languages (especially Python, Django and JavaScript), frameworks, concepts and algorithms.
- When asked to fix code, identify the problem and suggest a corrected version.
- When asked to explain code, break it down step by step.
- Prefer Python, Django or general pseudocode unless told otherwise.
- Keep explanations beginner-friendly but accurate.
- If you do not know the answer, say \"I'm sorry, I don't have enough information to answer that specific question.\"
- Never invent libraries or functions that do not exist.
- Format code snippets with triple backticks.";

/// Configuration for the Gemini backend
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// REST API base, without trailing `/models`
    pub api_base: String,

    /// API key; `None` or blank leaves the backend unconfigured
    pub api_key: Option<String>,

    /// Model name
    pub model: String,

    /// System instruction
    pub system_prompt: String,

    /// HTTP request timeout
    pub request_timeout: Duration,
}

impl GeminiConfig {
    /// Create a configuration with default endpoint, model and prompt
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Set the API base
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the HTTP request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl BackendFactory for GeminiConfig {
    fn build(&self) -> Result<Arc<dyn GenerationBackend>, BackendError> {
        Ok(Arc::new(GeminiBackend::new(self.clone())?))
    }
}

/// Gemini backend using reqwest
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiBackend {
    /// Create a new Gemini backend
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Unconfigured`] if the API key is missing or blank,
    /// or if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, BackendError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| BackendError::Unconfigured("Gemini API key is not set".into()))?
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                BackendError::Unconfigured(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, text: &str) -> Result<String, BackendError> {
        debug!(
            model = %self.config.model,
            "Sending request to Gemini API: '{}'",
            preview(text)
        );

        let body = GenerateContentRequest::new(&self.config.system_prompt, text);
        let response = self
            .client
            .post(self.generate_content_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        if !status.is_success() {
            return Err(BackendError::Unreachable(format!(
                "HTTP {}: {}",
                status.as_u16(),
                raw
            )));
        }

        let answer = parse_generate_content_response(&raw)?;
        info!("Received response from Gemini API: '{}'", preview(&answer));
        Ok(answer)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(system_prompt: &'a str, text: &'a str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![TextPart { text: system_prompt }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![TextPart { text }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn parse_generate_content_response(raw: &str) -> Result<String, BackendError> {
    let parsed: GenerateContentResponse = serde_json::from_str(raw)
        .map_err(|e| BackendError::Unreachable(format!("invalid Gemini response: {}", e)))?;

    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::Unreachable("response contained no candidates".into()))?;

    let texts: Vec<String> = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if texts.is_empty() {
        return Err(BackendError::Unreachable(
            "first candidate contained no text".into(),
        ));
    }

    Ok(texts.concat())
}
