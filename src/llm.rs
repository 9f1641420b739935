pub mod error;
pub mod gemini;
pub mod ollama;
pub mod traits;

pub use traits::Llm;

/// Result type for LLM operations.
pub type LlmResult<T> = std::result::Result<T, error::LlmError>;
