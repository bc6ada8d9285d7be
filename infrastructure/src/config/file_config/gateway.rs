//! Gateway endpoint configuration from TOML (`[gateway]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use crate::openai::GatewaySettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gateway endpoint configuration
///
/// Any OpenAI-compatible chat-completions endpoint works, so local
/// inference servers and proxies can stand in for the hosted API.
///
/// # Example
///
/// ```toml
/// [gateway]
/// base_url = "https://api.openai.com/v1"
/// api_key_env = "OPENAI_API_KEY"
/// timeout_secs = 120
/// json_mode = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Endpoint base URL
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Inline API key; takes precedence over the environment variable
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Ask the endpoint for strict JSON replies
    pub json_mode: bool,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            timeout_secs: 120,
            json_mode: true,
        }
    }
}

impl FileGatewayConfig {
    /// Build the runtime gateway settings, collecting issues.
    ///
    /// The API key comes from the inline value first, then the named
    /// environment variable. No key against the hosted endpoint is a
    /// warning; local servers often need none.
    pub fn to_settings(&self) -> (GatewaySettings, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidGateway {
                    field: "base_url".to_string(),
                },
                "gateway.base_url: cannot be empty",
            ));
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidGateway {
                    field: "timeout_secs".to_string(),
                },
                "gateway.timeout_secs: must be at least 1",
            ));
        }

        let api_key = self
            .api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() && self.base_url.contains("api.openai.com") {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingApiKey,
                format!(
                    "gateway: no API key found; set {} or gateway.api_key",
                    self.api_key_env
                ),
            ));
        }

        let settings = GatewaySettings {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
            json_mode: self.json_mode,
        };
        (settings, issues)
    }
}
