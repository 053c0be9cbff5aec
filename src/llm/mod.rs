// src/llm/mod.rs

use crate::error::Result;

pub mod gemini;
pub mod scripted;

pub use gemini::GeminiClient;
pub use scripted::ScriptedClient;

/// A single text-generation call: instruction plus user message in, trimmed text out.
pub trait LlmClient: Send + Sync {
    fn call(&self, instruction: &str, user_message: &str) -> Result<String>;

    fn model_name(&self) -> &str;
}

/// Joins an agent instruction and the user payload into one prompt.
pub fn compose_prompt(instruction: &str, user_message: &str) -> String {
    format!("{instruction}\n\nUser message: {user_message}")
}
