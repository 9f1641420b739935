use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default Gemini model, matching the reference agent.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Default iteration budget for one `execute` call.
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

/// Runtime configuration for building a default agent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model id passed to the LLM backend.
    pub model: String,
    /// Iteration budget per `execute` call.
    pub max_iterations: usize,
    /// API key for the Gemini backend.
    pub gemini_api_key: Option<String>,
    /// API key for the SerpAPI-backed search tools. Those tools report a
    /// configuration error when invoked without a key; the agent still runs.
    pub serp_api_key: Option<String>,
    /// Optional path for the append-only trace file.
    pub trace_path: Option<PathBuf>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            gemini_api_key: None,
            serp_api_key: None,
            trace_path: None,
        }
    }
}

impl AgentConfig {
    /// Read configuration from the process environment.
    ///
    /// Recognized variables: `REACT_MODEL`, `REACT_MAX_ITERATIONS`,
    /// `GEMINI_API_KEY`, `SERP_API_KEY`, `REACT_TRACE_FILE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(model) = env::var("REACT_MODEL") {
            config.model = model;
        }
        if let Ok(raw) = env::var("REACT_MAX_ITERATIONS") {
            config.max_iterations = raw.parse().map_err(|_| {
                ConfigError::InvalidConfig(format!("REACT_MAX_ITERATIONS: {raw:?}"))
            })?;
        }
        config.gemini_api_key = env::var("GEMINI_API_KEY").ok();
        config.serp_api_key = env::var("SERP_API_KEY").ok();
        config.trace_path = env::var("REACT_TRACE_FILE").ok().map(PathBuf::from);
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::MissingConfig(format!("{}: {e}", path.as_ref().display())))?;
        toml::from_str(&raw).map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_model_and_budget() {
        let config = AgentConfig::default();
        assert_eq!(config.model, "gemini-2.0-flash-exp");
        assert_eq!(config.max_iterations, 5);
        assert!(config.serp_api_key.is_none());
    }

    #[test]
    fn parses_toml() {
        let raw = r#"
            model = "gemini-1.5-pro"
            max_iterations = 8
            serp_api_key = "k"
        "#;
        let config: AgentConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.max_iterations, 8);
        assert_eq!(config.serp_api_key.as_deref(), Some("k"));
        // unspecified fields fall back to defaults
        assert!(config.trace_path.is_none());
    }
}
