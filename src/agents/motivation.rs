// src/agents/motivation.rs

use crate::agents::Agent;
use crate::error::Result;
use crate::llm::LlmClient;
use std::sync::Arc;
use tracing::debug;

pub const AFFIRMATION_PREFIX: &str = "Affirmation: ";

/// Short encouragement plus an affirmation. Sees only the mood, never the message.
pub struct Motivator {
    llm: Arc<dyn LlmClient>,
}

impl Motivator {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub fn instruction(&self, mood: &str) -> String {
        format!(
            "You are a Motivation Agent. Based on the user's mood, share a short encouraging message and one positive affirmation.
Mood: {mood}

Format:
- 2–3 sentences of encouragement.
- Then on a new line, start with '{AFFIRMATION_PREFIX}' and give one sentence."
        )
    }

    pub fn encourage(&self, mood: &str) -> Result<String> {
        let payload = format!("The user is feeling {mood}.");
        let text = self.llm.call(&self.instruction(mood), &payload)?;
        debug!(
            mood,
            has_affirmation = text.contains(AFFIRMATION_PREFIX.trim_end()),
            "motivation received"
        );
        Ok(text)
    }
}

impl Agent for Motivator {
    fn name(&self) -> &str {
        "motivator"
    }

    fn description(&self) -> &str {
        "Writes a brief encouragement followed by a one-line affirmation."
    }
}
