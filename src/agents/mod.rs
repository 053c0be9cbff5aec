// src/agents/mod.rs

pub mod coping;
pub mod mood;
pub mod motivation;

pub use coping::CopingStrategist;
pub use mood::{FALLBACK_MOOD, MoodAnalyzer, normalize_mood};
pub use motivation::Motivator;

/// Trait shared by the prompt agents the controller sequences.
pub trait Agent {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}
