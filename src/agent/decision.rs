//! Classifies raw LLM output into a typed decision.
//!
//! The parser tolerates formatting noise (code fences, a stray `json`
//! language tag) because LLM output is unreliable, but it is strict about the
//! two recognized top-level shapes: an `action` object or an `answer` value.
//! Anything ambiguous is `Invalid`, never guessed.

use std::fmt;

use serde_json::{Map, Value};
use tracing::warn;

use crate::tools::name::ToolName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCause {
    JsonDecode,
    UnknownTool,
    MissingKey,
}

impl fmt::Display for InvalidCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvalidCause::JsonDecode => "json decode error",
            InvalidCause::UnknownTool => "unknown tool name",
            InvalidCause::MissingKey => "missing action or answer key",
        };
        f.write_str(s)
    }
}

/// The parsed interpretation of one LLM response. Produced fresh each
/// iteration; never persisted beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    UseTool {
        name: ToolName,
        input: String,
        reason: String,
    },
    FinalAnswer {
        text: String,
    },
    Invalid {
        raw: String,
        cause: InvalidCause,
    },
}

/// Parse one raw LLM response. `fallback_input` is the original user query,
/// used when an action carries no `input` field.
pub fn parse(raw: &str, fallback_input: &str) -> Decision {
    let mut cleaned = raw.trim().trim_matches('`').trim();
    // Models often tag the fenced block with a `json` language marker.
    if let Some(rest) = cleaned.strip_prefix("json") {
        cleaned = rest.trim();
    }

    let object: Map<String, Value> = match serde_json::from_str(cleaned) {
        Ok(object) => object,
        Err(e) => {
            warn!(error = %e, "LLM response is not a JSON object");
            return Decision::Invalid {
                raw: raw.to_string(),
                cause: InvalidCause::JsonDecode,
            };
        }
    };

    if let Some(action) = object.get("action") {
        let name_raw = action
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let Some(name) = ToolName::parse(name_raw) else {
            warn!(name = name_raw, "LLM requested an unknown tool");
            return Decision::Invalid {
                raw: raw.to_string(),
                cause: InvalidCause::UnknownTool,
            };
        };
        let input = action
            .get("input")
            .and_then(Value::as_str)
            .unwrap_or(fallback_input)
            .to_string();
        let reason = action
            .get("reason")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Decision::UseTool {
            name,
            input,
            reason,
        }
    } else if let Some(answer) = object.get("answer") {
        let text = match answer {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Decision::FinalAnswer { text }
    } else {
        Decision::Invalid {
            raw: raw.to_string(),
            cause: InvalidCause::MissingKey,
        }
    }
}
