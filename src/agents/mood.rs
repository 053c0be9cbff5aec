// src/agents/mood.rs

use crate::agents::Agent;
use crate::error::Result;
use crate::llm::LlmClient;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};

/// Label used when the model's answer holds no usable word.
pub const FALLBACK_MOOD: &str = "unknown";

const MOOD_INSTRUCTION: &str = "You are a Mood Analyzer Agent. \
Read the user's message and return ONLY one or two words \
that describe their emotional state. Examples: \
'stressed', 'sad', 'anxious', 'overwhelmed', 'tired', 'okay', 'happy', \
'excited', 'confused'.\n\
Do not give sentences, only the mood label.";

static EDGE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\p{L}\p{N}]+|[^\p{L}\p{N}]+$").expect("edge punctuation pattern is valid")
});

pub struct MoodAnalyzer {
    llm: Arc<dyn LlmClient>,
}

impl MoodAnalyzer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub fn instruction(&self) -> &'static str {
        MOOD_INSTRUCTION
    }

    pub fn analyze(&self, user_message: &str) -> Result<String> {
        let raw = self.llm.call(MOOD_INSTRUCTION, user_message)?;
        let mood = normalize_mood(&raw);
        if mood == FALLBACK_MOOD {
            warn!(raw = %raw, "mood response had no usable label");
        } else {
            debug!(raw = %raw, mood = %mood, "mood label normalized");
        }
        Ok(mood)
    }
}

impl Agent for MoodAnalyzer {
    fn name(&self) -> &str {
        "mood_analyzer"
    }

    fn description(&self) -> &str {
        "Labels the user's emotional state in a single lower-case word."
    }
}

/// First word of `raw` that survives edge-punctuation stripping, lower-cased.
pub fn normalize_mood(raw: &str) -> String {
    raw.split_whitespace()
        .map(|token| EDGE_PUNCTUATION.replace_all(token, ""))
        .find(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .unwrap_or_else(|| FALLBACK_MOOD.to_string())
}
