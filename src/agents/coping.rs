// src/agents/coping.rs

use crate::agents::Agent;
use crate::error::Result;
use crate::llm::LlmClient;
use std::sync::Arc;
use tracing::debug;

/// Suggests a handful of safe, practical activities for the detected mood.
///
/// Crisis handling lives only in the instruction text: the model is asked to
/// point the user toward a trusted adult or professional. Nothing here scans
/// the message itself.
pub struct CopingStrategist {
    llm: Arc<dyn LlmClient>,
}

impl CopingStrategist {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub fn instruction(&self, mood: &str) -> String {
        format!(
            "You are a Coping Strategy Agent helping a young student with mental wellness.
User mood: {mood}

Goals:
- Suggest 3–5 short, practical, safe activities.
- Focus on simple things like breathing exercises, journaling, short walk, mindfulness, talking to a friend, etc.
- Use warm, encouraging tone.
- Avoid giving medical or clinical advice. If the message sounds like severe depression, self-harm, or crisis, gently encourage them to reach out to a trusted adult or professional.
"
        )
    }

    pub fn suggest(&self, user_message: &str, mood: &str) -> Result<String> {
        let text = self.llm.call(&self.instruction(mood), user_message)?;
        debug!(mood, chars = text.len(), "coping suggestions received");
        Ok(text)
    }
}

impl Agent for CopingStrategist {
    fn name(&self) -> &str {
        "coping_strategist"
    }

    fn description(&self) -> &str {
        "Suggests 3-5 short, practical coping activities for the user's mood."
    }
}
