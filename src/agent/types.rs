use std::sync::Arc;

use crate::agent::prompt::PromptBuilder;
use crate::llm::traits::Llm;
use crate::tools::registry::ToolRegistry;

/// Where the loop is within one `execute` call. `Done` and
/// `FailedMaxIterations` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Thinking,
    Deciding,
    Acting,
    Done,
    FailedMaxIterations,
}

/// ReAct agent: an LLM plus a read-only tool registry and an iteration
/// budget. Holds no per-call state; each `execute` call builds its own
/// conversation log and counter, so one agent can serve concurrent calls.
pub struct Agent {
    /// A short, human-friendly name for the agent instance.
    pub name: String,

    /// The LLM used to generate each thought/decision.
    pub llm: Arc<dyn Llm>,

    /// Registered tools the agent may dispatch to by name.
    pub tools: ToolRegistry,

    /// Renders the per-turn prompt.
    pub prompt: PromptBuilder,

    /// Maximum number of think-steps per `execute` call.
    pub max_iterations: usize,
}
