// src/llm/gemini.rs

use crate::config::Config;
use crate::error::{Result, WellnessError};
use crate::llm::{LlmClient, compose_prompt};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Blocking client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.api_base, config.model
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LlmClient for GeminiClient {
    fn call(&self, instruction: &str, user_message: &str) -> Result<String> {
        let prompt = compose_prompt(instruction, user_message);
        debug!(model = %self.model, prompt_chars = prompt.len(), "sending generateContent");

        let payload = GenerateContentRequest::from_prompt(prompt);
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(WellnessError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed.into_text()?;
        debug!(response_chars = text.len(), "received generateContent");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize, Debug)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![Part { text: Some(prompt) }],
            }],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The narrow slice of the response we depend on: candidate text, or why there is none.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated and trimmed.
    pub fn into_text(self) -> Result<String> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => Err(WellnessError::Blocked(reason)),
                None => Err(WellnessError::EmptyResponse),
            };
        };

        let parts: Vec<String> = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if parts.is_empty() {
            return Err(WellnessError::EmptyResponse);
        }

        Ok(parts.concat().trim().to_string())
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_string(),
    }
}
