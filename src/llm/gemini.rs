use std::time::Instant;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::llm::{LlmResult, error::LlmError, traits::Llm};

/// Default model name used when no model is specified.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini backend over the Generative Language REST API
/// (`models/{model}:generateContent`).
#[derive(Debug, Clone)]
pub struct Gemini {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL, mainly for tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

impl Llm for Gemini {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, LlmResult<String>> {
        async move {
            info!(model = %self.model, "generating content");
            let started = Instant::now();
            let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
            let body = json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            });
            let response = self
                .client
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .json(&body)
                .send()
                .await?
                .error_for_status()?;
            let parsed: GenerateContentResponse = response.json().await?;
            let text = parsed
                .candidates
                .into_iter()
                .next()
                .and_then(|c| c.content.parts.into_iter().next())
                .map(|p| p.text)
                .ok_or(LlmError::EmptyResponse)?;
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "content generated"
            );
            Ok(text)
        }
        .boxed()
    }
}
