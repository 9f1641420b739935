use super::error::ToolError;
use super::name::ToolName;

/// A named capability the agent can dispatch to: text query in, text out.
/// Concrete tools typically wrap one outbound HTTP GET to a public API.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> ToolName;
    fn description(&self) -> &str;
    async fn call(&self, query: &str) -> Result<String, ToolError>;
}
