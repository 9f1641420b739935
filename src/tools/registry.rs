use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{error, info, warn};

use super::name::ToolName;
use super::traits::Tool;

/// The outcome of one tool invocation, as folded into the conversation.
///
/// Never carries a live error: failures are stringified at the registry
/// boundary so the LLM can reason about them on the next turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    Output(String),
    NotFound(ToolName),
    Failed(String),
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observation::Output(text) => f.write_str(text),
            Observation::NotFound(name) => write!(f, "tool {name} not found"),
            Observation::Failed(reason) => f.write_str(reason),
        }
    }
}

/// String-keyed dispatch table for tool capabilities. Built once at startup
/// and treated as read-only afterwards, so it can be shared across calls.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<ToolName, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name. Replaces any existing tool with
    /// the same name (last registration wins). Returns &mut Self for chaining.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> &mut Self {
        self.tools.insert(tool.name(), tool);
        self
    }

    pub fn get(&self, name: ToolName) -> Option<Arc<dyn Tool>> {
        self.tools.get(&name).cloned()
    }

    /// Wire-form names of every registered tool, sorted so prompts are
    /// deterministic.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tools.keys().map(|n| n.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke a tool by name. Never panics and never propagates: an
    /// unregistered name and a failing tool both come back as Observations
    /// for the conversation.
    pub async fn invoke(&self, name: ToolName, query: &str) -> Observation {
        let Some(tool) = self.tools.get(&name) else {
            warn!(tool = %name, "dispatch to unregistered tool");
            return Observation::NotFound(name);
        };
        info!(tool = %name, query, "invoking tool");
        match tool.call(query).await {
            Ok(output) => Observation::Output(output),
            Err(e) => {
                error!(tool = %name, error = %e, "tool execution failed");
                Observation::Failed(e.to_string())
            }
        }
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::error::ToolError;

    struct StaticTool {
        name: ToolName,
        output: &'static str,
    }

    #[async_trait::async_trait]
    impl Tool for StaticTool {
        fn name(&self) -> ToolName {
            self.name
        }
        fn description(&self) -> &str {
            "static test tool"
        }
        async fn call(&self, _query: &str) -> Result<String, ToolError> {
            Ok(self.output.to_string())
        }
    }

    struct FailingTool;

    #[async_trait::async_trait]
    impl Tool for FailingTool {
        fn name(&self) -> ToolName {
            ToolName::CatFact
        }
        fn description(&self) -> &str {
            "always fails"
        }
        async fn call(&self, _query: &str) -> Result<String, ToolError> {
            Err(ToolError::ExecutionError {
                name: "CAT_FACT".to_string(),
                reason: "boom".to_string(),
            })
        }
    }

    #[test]
    fn invoke_on_unregistered_name_is_not_fatal() {
        let registry = ToolRegistry::new();
        let observation = tokio_test::block_on(registry.invoke(ToolName::Lyrics, "x"));
        assert_eq!(observation, Observation::NotFound(ToolName::Lyrics));
        assert!(observation.to_string().contains("not found"));
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(StaticTool {
            name: ToolName::CatFact,
            output: "first",
        }));
        registry.register(Arc::new(StaticTool {
            name: ToolName::CatFact,
            output: "second",
        }));
        assert_eq!(registry.len(), 1);
        let observation = tokio_test::block_on(registry.invoke(ToolName::CatFact, "x"));
        assert_eq!(observation, Observation::Output("second".to_string()));
    }

    #[test]
    fn tool_errors_become_observations() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(FailingTool));
        let observation = tokio_test::block_on(registry.invoke(ToolName::CatFact, "x"));
        match observation {
            Observation::Failed(reason) => assert!(reason.contains("boom")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(StaticTool {
            name: ToolName::Lyrics,
            output: "",
        }));
        registry.register(Arc::new(StaticTool {
            name: ToolName::CatFact,
            output: "",
        }));
        assert_eq!(registry.names(), vec!["CAT_FACT", "LYRICS"]);
    }
}
