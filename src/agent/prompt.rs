use super::error::AgentError;

/// The fixed ReAct prompt shipped with the crate.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/react.txt");

const PLACEHOLDERS: [&str; 3] = ["{query}", "{history}", "{tools}"];

/// Renders the next LLM prompt from the fixed template, the running query,
/// the conversation history, and the available tool names.
///
/// The template is validated once at construction; `build` is a pure function
/// of its inputs.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    template: String,
}

impl PromptBuilder {
    pub fn new(template: impl Into<String>) -> Result<Self, AgentError> {
        let template = template.into();
        for placeholder in PLACEHOLDERS {
            if !template.contains(placeholder) {
                return Err(AgentError::Template(placeholder));
            }
        }
        Ok(Self { template })
    }

    pub fn build(&self, query: &str, history: &str, tool_names: &[&str]) -> String {
        self.template
            .replace("{tools}", &tool_names.join(", "))
            .replace("{history}", history)
            .replace("{query}", query)
    }
}

impl Default for PromptBuilder {
    // The embedded template carries all placeholders; a unit test guards it.
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}
