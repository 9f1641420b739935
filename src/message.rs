use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::trace::TraceSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,      // Caller's query
    Assistant, // LLM thoughts, actions, answers, recovery notes
    System,    // Tool observations
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        };
        f.write_str(s)
    }
}

/// One role-tagged entry in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("conversation log is empty")]
pub struct EmptyLogError;

/// Append-only, chronologically ordered conversation history.
///
/// One log belongs to exactly one `execute` call; `append` is the only
/// mutator. Every role, including system observations, is kept in memory and
/// included in `render()`, so the LLM always sees past tool results.
pub struct ConversationLog {
    messages: Vec<Message>,
    trace: Option<Box<dyn TraceSink>>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            trace: None,
        }
    }

    /// A log that mirrors every appended message to the given trace sink.
    pub fn with_trace(sink: Box<dyn TraceSink>) -> Self {
        Self {
            messages: Vec::new(),
            trace: Some(sink),
        }
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        let message = Message {
            role,
            content: content.into(),
        };
        if let Some(sink) = self.trace.as_mut() {
            // Best-effort: the trace never aborts the loop.
            if let Err(e) = sink.record(&message.role.to_string(), &message.content) {
                warn!(error = %e, "failed to write trace line");
            }
        }
        self.messages.push(message);
    }

    /// The exact history text fed into the next prompt.
    pub fn render(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.role, m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn last(&self) -> Result<&Message, EmptyLogError> {
        self.messages.last().ok_or(EmptyLogError)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConversationLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationLog")
            .field("messages", &self.messages)
            .field("traced", &self.trace.is_some())
            .finish()
    }
}
