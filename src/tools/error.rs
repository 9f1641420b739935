#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool name: {0}")]
    UnknownName(String),

    #[error("Tool execution error in '{name}': {reason}")]
    ExecutionError { name: String, reason: String },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
