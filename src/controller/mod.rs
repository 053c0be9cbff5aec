// src/controller/mod.rs

pub mod reply;

pub use reply::{DISCLAIMER, Reply};

use crate::agents::{Agent, CopingStrategist, MoodAnalyzer, Motivator};
use crate::error::Result;
use crate::llm::LlmClient;
use crate::memory::{DEFAULT_TREND_WINDOW, InMemoryLog, Memory};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs one turn: mood, record, coping, motivation, compose.
///
/// Owns the session's mood log. Any agent failure aborts the turn with no
/// partial reply.
pub struct Controller {
    mood: MoodAnalyzer,
    coping: CopingStrategist,
    motivation: Motivator,
    memory: InMemoryLog,
}

impl Controller {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            mood: MoodAnalyzer::new(llm.clone()),
            coping: CopingStrategist::new(llm.clone()),
            motivation: Motivator::new(llm),
            memory: InMemoryLog::new(),
        }
    }

    pub fn memory(&self) -> &InMemoryLog {
        &self.memory
    }

    pub fn handle(&mut self, user_message: &str) -> Result<String> {
        Ok(self.handle_turn(user_message)?.render())
    }

    /// Same as [`Controller::handle`] but returns the unrendered parts.
    pub fn handle_turn(&mut self, user_message: &str) -> Result<Reply> {
        debug!(agent = self.mood.name(), "turn started");
        let mood = self.mood.analyze(user_message)?;
        self.memory.record(&mood, user_message);

        debug!(agent = self.coping.name(), mood = %mood);
        let coping = self.coping.suggest(user_message, &mood)?;

        debug!(agent = self.motivation.name(), mood = %mood);
        let motivation = self.motivation.encourage(&mood)?;

        let trend = self.memory.recent(DEFAULT_TREND_WINDOW);
        info!(mood = %mood, entries = self.memory.len(), trend_len = trend.len(), "turn complete");

        Ok(Reply {
            mood,
            coping,
            motivation,
            trend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ScriptedClient;

    fn scripted(turns: &[(&str, &str, &str)]) -> Arc<ScriptedClient> {
        let client = ScriptedClient::new();
        for (mood, coping, motivation) in turns {
            client.push_text(*mood);
            client.push_text(*coping);
            client.push_text(*motivation);
        }
        Arc::new(client)
    }

    #[test]
    fn first_turn_calls_agents_in_order_without_trend() {
        let client = scripted(&[("Sad and down", "- Breathe", "Hang in there.")]);
        let mut controller = Controller::new(client.clone());

        let reply = controller.handle("I feel like nothing is going right").unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls[0].instruction.contains("Mood Analyzer Agent"));
        assert!(calls[1].instruction.contains("Coping Strategy Agent"));
        assert!(calls[2].instruction.contains("Motivation Agent"));
        assert_eq!(calls[0].user_message, "I feel like nothing is going right");
        assert_eq!(calls[1].user_message, "I feel like nothing is going right");
        assert_eq!(calls[2].user_message, "The user is feeling sad.");

        assert!(reply.contains("**sad**"));
        assert!(reply.contains("- Breathe"));
        assert!(reply.contains("Hang in there."));
        assert!(!reply.contains("Recent mood trend"));
        assert!(reply.ends_with(DISCLAIMER));
        assert_eq!(controller.memory().len(), 1);
    }

    #[test]
    fn second_turn_shows_both_moods_in_order() {
        let client = scripted(&[("Sad", "a", "b"), ("Hopeful", "c", "d")]);
        let mut controller = Controller::new(client);

        controller.handle("first").unwrap();
        let reply = controller.handle_turn("second").unwrap();

        assert_eq!(reply.trend, vec!["sad", "hopeful"]);
        assert!(
            reply
                .render()
                .contains("Recent mood trend (last 2 messages): sad, hopeful")
        );
    }

    #[test]
    fn trend_is_capped_at_five_most_recent() {
        let moods = ["one", "two", "three", "four", "five", "six"];
        let turns: Vec<(&str, &str, &str)> = moods.iter().map(|m| (*m, "c", "m")).collect();
        let mut controller = Controller::new(scripted(&turns));

        let mut last = None;
        for _ in &moods {
            last = Some(controller.handle_turn("msg").unwrap());
        }

        assert_eq!(controller.memory().len(), 6);
        assert_eq!(last.unwrap().trend, vec!["two", "three", "four", "five", "six"]);
    }

    #[test]
    fn mood_failure_records_nothing() {
        let client = Arc::new(ScriptedClient::new());
        client.push_failure(503, "unavailable");
        let mut controller = Controller::new(client.clone());

        assert!(controller.handle("hi").is_err());
        assert!(controller.memory().is_empty());
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn coping_failure_aborts_turn_after_recording_mood() {
        let client = Arc::new(ScriptedClient::with_replies(["worried"]));
        client.push_failure(429, "quota");
        let mut controller = Controller::new(client.clone());

        assert!(controller.handle("hi").is_err());
        assert_eq!(controller.memory().len(), 1);
        assert_eq!(client.call_count(), 2);
    }

    #[test]
    fn empty_mood_response_uses_fallback_label() {
        let client = scripted(&[("", "c", "m")]);
        let mut controller = Controller::new(client);

        let reply = controller.handle_turn("...").unwrap();

        assert_eq!(reply.mood, crate::agents::FALLBACK_MOOD);
        assert_eq!(controller.memory().entries()[0].mood(), "unknown");
    }
}
