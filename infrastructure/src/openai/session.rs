//! Chat session against an OpenAI-compatible endpoint
//!
//! One session holds a model and its instruction text. Every request
//! sends the instructions as the system message and the context as the
//! user message; the wire API is stateless, which matches the engine's
//! fresh-session-per-invocation rule.

use crate::openai::gateway::GatewaySettings;
use async_trait::async_trait;
use roundtable_application::{GatewayError, ReasoningSession};
use roundtable_domain::{Model, OutputShape};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

pub struct OpenAiSession {
    client: reqwest::Client,
    settings: GatewaySettings,
    model: Model,
    instructions: String,
}

impl OpenAiSession {
    pub(crate) fn new(
        client: reqwest::Client,
        settings: GatewaySettings,
        model: Model,
        instructions: String,
    ) -> Self {
        Self {
            client,
            settings,
            model,
            instructions,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    fn build_request<'a>(&'a self, context: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: self.model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.instructions,
                },
                ChatMessage {
                    role: "user",
                    content: context,
                },
            ],
            response_format: self.settings.json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        }
    }
}

#[async_trait]
impl ReasoningSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn request(&self, context: &str, shape: OutputShape) -> Result<String, GatewayError> {
        let body = self.build_request(context);

        debug!(
            model = %self.model,
            shape = %shape,
            context_bytes = context.len(),
            "Requesting chat completion"
        );

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.settings.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else if e.is_connect() {
                GatewayError::ConnectionError(e.to_string())
            } else {
                GatewayError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::ModelNotAvailable(self.model.to_string()));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status, detail
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Malformed response body: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::RequestFailed("No content in response".to_string()))
    }
}
