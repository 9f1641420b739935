use ollama_rs::error::OllamaError;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Ollama error: {0}")]
    Ollama(#[from] OllamaError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model returned no candidates")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
