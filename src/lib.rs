//! mini-react: a minimal ReAct (reason + act) agent loop.
//!
//! The agent repeatedly asks an LLM to either pick a named tool or produce a
//! final answer, folds each tool observation back into the conversation, and
//! stops on a final answer or when the iteration budget runs out.

pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod message;
pub mod tools;
pub mod trace;

pub use agent::{Agent, run};
pub use error::{Error, Result};

/// Install a plain `fmt` subscriber for consumers that don't configure their own.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();
}
