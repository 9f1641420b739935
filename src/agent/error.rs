use crate::llm::error::LlmError;
use crate::message::EmptyLogError;

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("prompt template is missing the {0} placeholder")]
    Template(&'static str),

    #[error(transparent)]
    EmptyLog(#[from] EmptyLogError),
}
