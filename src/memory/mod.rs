// src/memory/mod.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// How many recent moods the trend line looks back over.
pub const DEFAULT_TREND_WINDOW: usize = 5;

/// One recorded turn. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryEntry {
    timestamp: DateTime<Utc>,
    mood: String,
    message: String,
}

impl MemoryEntry {
    fn new(mood: &str, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            mood: mood.to_string(),
            message: message.to_string(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Append-only record of detected moods.
pub trait Memory {
    fn record(&mut self, mood: &str, message: &str) -> &MemoryEntry;

    /// Mood labels of the last `n` entries, oldest first.
    fn recent(&self, n: usize) -> Vec<String>;

    fn entries(&self) -> &[MemoryEntry];

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Process-lifetime log; nothing is persisted or evicted.
#[derive(Default, Debug)]
pub struct InMemoryLog {
    entries: Vec<MemoryEntry>,
}

impl InMemoryLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl Memory for InMemoryLog {
    fn record(&mut self, mood: &str, message: &str) -> &MemoryEntry {
        self.entries.push(MemoryEntry::new(mood, message));
        &self.entries[self.entries.len() - 1]
    }

    fn recent(&self, n: usize) -> Vec<String> {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..]
            .iter()
            .map(|entry| entry.mood.clone())
            .collect()
    }

    fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }
}
