//! Reasoning gateway over an OpenAI-compatible endpoint

use crate::openai::session::OpenAiSession;
use async_trait::async_trait;
use roundtable_application::{GatewayError, ReasoningGateway, ReasoningSession};
use roundtable_domain::Model;
use std::time::Duration;
use tracing::info;

/// Runtime settings for the HTTP gateway
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Endpoint base URL, without the trailing `/chat/completions`
    pub base_url: String,
    /// Bearer token; absent for endpoints that need none
    pub api_key: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Ask the endpoint for strict JSON replies
    pub json_mode: bool,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            timeout: Duration::from_secs(120),
            json_mode: true,
        }
    }
}

/// Reasoning gateway implementation for OpenAI-compatible endpoints
pub struct OpenAiGateway {
    client: reqwest::Client,
    settings: GatewaySettings,
}

impl OpenAiGateway {
    /// Create a new gateway with a shared HTTP client
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!("Reasoning gateway initialized for {}", settings.base_url);

        Ok(Self { client, settings })
    }
}

#[async_trait]
impl ReasoningGateway for OpenAiGateway {
    async fn open_session(
        &self,
        model: &Model,
        instructions: &str,
    ) -> Result<Box<dyn ReasoningSession>, GatewayError> {
        Ok(Box::new(OpenAiSession::new(
            self.client.clone(),
            self.settings.clone(),
            model.clone(),
            instructions.to_string(),
        )))
    }
}
