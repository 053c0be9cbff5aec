// src/llm/scripted.rs

use crate::error::{Result, WellnessError};
use crate::llm::LlmClient;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One prompt the client received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub instruction: String,
    pub user_message: String,
}

enum Scripted {
    Text(String),
    Failure { status: u16, message: String },
}

/// Offline client that answers from a queue and records every call.
///
/// Used to drive agents, the controller, and whole sessions without a network.
/// An exhausted queue answers with [`WellnessError::EmptyResponse`].
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let client = Self::new();
        for reply in replies {
            client.push_text(reply);
        }
        client
    }

    pub fn push_text(&self, text: impl Into<String>) {
        self.lock_replies().push_back(Scripted::Text(text.into()));
    }

    pub fn push_failure(&self, status: u16, message: impl Into<String>) {
        self.lock_replies().push_back(Scripted::Failure {
            status,
            message: message.into(),
        });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<Scripted>> {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LlmClient for ScriptedClient {
    fn call(&self, instruction: &str, user_message: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                instruction: instruction.to_string(),
                user_message: user_message.to_string(),
            });

        match self.lock_replies().pop_front() {
            Some(Scripted::Text(text)) => Ok(text.trim().to_string()),
            Some(Scripted::Failure { status, message }) => {
                Err(WellnessError::Api { status, message })
            }
            None => Err(WellnessError::EmptyResponse),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
