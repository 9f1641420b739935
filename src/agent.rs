//! The ReAct loop: think, decide, act, repeat.
//!
//! The reference behavior is a think/decide/act cycle expressed through
//! mutual recursion; here it is an explicit loop so the call stack stays flat
//! no matter how many turns the budget allows. The loop invariant is
//! guard-before-work: each turn increments the iteration counter before doing
//! anything, and checks the budget as its first action, so any sequence of
//! LLM responses terminates within `max_iterations + 1` turns.

use std::sync::Arc;

use tracing::debug;

pub mod decision;
pub mod error;
pub mod prompt;
pub mod types;

use crate::config::{AgentConfig, ConfigError, DEFAULT_MAX_ITERATIONS};
use crate::llm::gemini::Gemini;
use crate::llm::traits::Llm;
use crate::message::{ConversationLog, Role};
use crate::tools::catalog;
use crate::tools::name::ToolName;
use crate::tools::registry::ToolRegistry;
use crate::tools::traits::Tool;
use crate::trace::{FileTrace, TraceSink};
use decision::{Decision, InvalidCause};
use error::AgentError;
use prompt::PromptBuilder;
pub use types::{Agent, State};

/// What one decision step tells the loop to do next.
enum Step {
    Continue,
    Finished(State),
}

impl Agent {
    /// Create a new Agent with the provided name and LLM. Tools start empty,
    /// the prompt is the embedded ReAct template.
    pub fn new(name: impl Into<String>, llm: Arc<dyn Llm>, max_iterations: Option<usize>) -> Self {
        Self {
            name: name.into(),
            llm,
            tools: ToolRegistry::new(),
            prompt: PromptBuilder::default(),
            max_iterations: max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
        }
    }

    /// Replace the prompt builder (for a custom template).
    pub fn with_prompt(mut self, prompt: PromptBuilder) -> Self {
        self.prompt = prompt;
        self
    }

    /// Register a tool under its own name. Replaces any existing tool with
    /// the same name. Returns &mut Self for chaining.
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) -> &mut Self {
        self.tools.register(tool);
        self
    }

    /// Change the iteration budget for subsequent `execute` calls.
    pub fn change_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }

    /// Run the loop for one query and return the content of the last logged
    /// message: either the "Final Answer:" text or the budget-exhausted
    /// summary. LLM failures are fatal and propagate; tool failures are not.
    pub async fn execute(&self, query: &str) -> Result<String, AgentError> {
        self.run_loop(query, ConversationLog::new()).await
    }

    /// Like `execute`, but mirrors every logged message to a trace sink.
    pub async fn execute_traced(
        &self,
        query: &str,
        sink: Box<dyn TraceSink>,
    ) -> Result<String, AgentError> {
        self.run_loop(query, ConversationLog::with_trace(sink)).await
    }

    async fn run_loop(&self, query: &str, mut log: ConversationLog) -> Result<String, AgentError> {
        log.append(Role::User, query);
        let tool_names = self.tools.names();
        let mut current: usize = 0;

        loop {
            // Guard before work: the increment and check come before anything
            // else in the turn.
            current += 1;
            if current > self.max_iterations {
                debug!(state = ?State::FailedMaxIterations, iteration = current);
                let summary = format!(
                    "I'm sorry, but I couldn't find a satisfactory answer within \
                     the allowed number of iterations. Here is what I gathered so far:\n{}",
                    log.render()
                );
                log.append(Role::Assistant, summary);
                break;
            }

            debug!(state = ?State::Thinking, iteration = current, max = self.max_iterations);
            let prompt = self.prompt.build(query, &log.render(), &tool_names);
            let raw = self.llm.generate(&prompt).await?;
            log.append(Role::Assistant, format!("Thought: {raw}"));

            debug!(state = ?State::Deciding);
            match self.decide(&raw, query, &mut log).await {
                Step::Continue => {}
                Step::Finished(state) => {
                    debug!(state = ?state);
                    break;
                }
            }
        }

        Ok(log.last()?.content.clone())
    }

    /// Classify one LLM response and carry out its consequences. Every
    /// non-final branch returns `Continue`, which costs an iteration on the
    /// next turn; retries are bounded by the same budget.
    async fn decide(&self, raw: &str, query: &str, log: &mut ConversationLog) -> Step {
        match decision::parse(raw, query) {
            Decision::UseTool {
                name: ToolName::None,
                ..
            } => {
                log.append(Role::Assistant, "No action needed. Let me think further.");
                Step::Continue
            }
            Decision::UseTool { name, input, .. } => {
                log.append(Role::Assistant, format!("Action: Using {name} tool"));
                self.act(name, &input, log).await;
                Step::Continue
            }
            Decision::FinalAnswer { text } => {
                log.append(Role::Assistant, format!("Final Answer: {text}"));
                Step::Finished(State::Done)
            }
            Decision::Invalid {
                cause: InvalidCause::JsonDecode,
                ..
            } => {
                log.append(
                    Role::Assistant,
                    "I encountered an error in processing. Let me try again.",
                );
                Step::Continue
            }
            Decision::Invalid { cause, .. } => {
                debug!(%cause, "recoverable decision error");
                log.append(
                    Role::Assistant,
                    "I encountered an unexpected error. Let me try a different approach.",
                );
                Step::Continue
            }
        }
    }

    async fn act(&self, name: ToolName, input: &str, log: &mut ConversationLog) {
        debug!(state = ?State::Acting, tool = %name);
        // The registry absorbs every failure into the observation text, so
        // the LLM sees it and may retry differently next turn.
        let observation = self.tools.invoke(name, input).await;
        log.append(Role::System, format!("Observation from {name}: {observation}"));
    }
}

/// Instantiate a Gemini-backed agent with the full fixed tool set.
pub fn build_agent(config: &AgentConfig) -> Result<Agent, ConfigError> {
    let api_key = config
        .gemini_api_key
        .clone()
        .ok_or_else(|| ConfigError::MissingConfig("GEMINI_API_KEY".to_string()))?;
    let llm: Arc<dyn Llm> = Arc::new(Gemini::new(api_key).with_model(config.model.clone()));
    let mut agent = Agent::new("react", llm, Some(config.max_iterations));
    agent.tools = catalog::default_registry(config);
    Ok(agent)
}

/// Public entry point: configure from the environment, build the default
/// agent, run one query.
pub async fn run(query: &str) -> crate::Result<String> {
    let config = AgentConfig::from_env()?;
    let agent = build_agent(&config)?;
    let answer = match &config.trace_path {
        Some(path) => {
            let sink = FileTrace::create(path)?;
            agent.execute_traced(query, Box::new(sink)).await?
        }
        None => agent.execute(query).await?,
    };
    Ok(answer)
}
