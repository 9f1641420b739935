use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::llm::{LlmResult, traits::Llm};

/// Default model name used when no model is specified.
/// Adjust this to match the model name you have installed in your local Ollama.
pub const DEFAULT_MODEL: &str = "llama3.2";

pub use ollama_rs::{
    Ollama as OllamaClient, error::OllamaError, generation::completion::request::GenerationRequest,
    models::ModelOptions,
};

/// Local-model backend via an Ollama server. Uses the plain completion
/// endpoint; the ReAct prompt carries the full conversation, so no chat
/// history is kept on the Ollama side.
#[derive(Debug, Clone)]
pub struct Ollama {
    pub(crate) client: Arc<OllamaClient>,
    pub(crate) model: String,
    pub(crate) options: Option<ModelOptions>,
}

impl Ollama {
    pub fn new(client: Arc<OllamaClient>) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            options: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_options(mut self, options: ModelOptions) -> Self {
        self.options = Some(options);
        self
    }
}

impl Default for Ollama {
    fn default() -> Self {
        let client = Arc::new(OllamaClient::default());
        Ollama::new(client)
    }
}

impl Llm for Ollama {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, LlmResult<String>> {
        async move {
            let mut request = GenerationRequest::new(self.model.clone(), prompt.to_string());
            if let Some(options) = self.options.clone() {
                request = request.options(options);
            }
            let response = self.client.generate(request).await?;
            Ok(response.response)
        }
        .boxed()
    }
}
