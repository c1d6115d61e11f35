use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::errors::{AppError, AppResult};

/// One chat completion call.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    /// Ask the provider for a JSON object response.
    pub json_response: bool,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system: system.into(),
            prompt: prompt.into(),
            temperature: 0.7,
            json_response: false,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_json_response(mut self) -> Self {
        self.json_response = true;
        self
    }
}

/// Text completion backend used for generation, critique and translation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String>;
}

pub struct OpenAiModelClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiModelClient {
    pub fn new(api_key: &SecretString, base_url: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(base_url);
        Self {
            client: Client::with_config(config),
        }
    }
}

fn request_body(request: &CompletionRequest) -> Value {
    let mut body = json!({
        "model": request.model,
        "temperature": request.temperature,
        "messages": [
            { "role": "system", "content": request.system },
            { "role": "user", "content": request.prompt },
        ],
    });
    if request.json_response {
        body["response_format"] = json!({ "type": "json_object" });
    }
    body
}

/// First choice's message content of a chat completion response.
fn message_content(response: &Value) -> Option<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        log::debug!(
            "Requesting completion from {} (prompt length {})",
            request.model,
            request.prompt.len()
        );

        let response: Value = self.client.chat().create_byot(request_body(&request)).await?;

        message_content(&response).ok_or_else(|| {
            AppError::UpstreamError(format!("Model {} returned no message content", request.model))
        })
    }
}
