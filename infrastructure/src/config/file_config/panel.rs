//! Panel run configuration from TOML (`[panel]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use roundtable_application::{FailurePolicy, PanelPolicy};
use serde::{Deserialize, Serialize};

/// Panel run configuration
///
/// # Example
///
/// ```toml
/// [panel]
/// shape_retries = 1                # extra attempts after a malformed reply
/// on_partial_failure = "degrade"   # or "abort"
/// critique = true                  # run the critique stage
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePanelConfig {
    /// Extra attempts granted after a malformed reply
    pub shape_retries: Option<u32>,
    /// Partial-failure handling: "degrade" or "abort"
    pub on_partial_failure: Option<String>,
    /// Whether the critique stage runs
    pub critique: bool,
}

impl Default for FilePanelConfig {
    fn default() -> Self {
        Self {
            shape_retries: None,
            on_partial_failure: None,
            critique: true,
        }
    }
}

impl FilePanelConfig {
    /// Build the run policy, collecting issues for unparseable values.
    ///
    /// Unknown policy names fall back to the default so a typo degrades
    /// the config instead of killing it.
    pub fn to_policy(&self) -> (PanelPolicy, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut policy = PanelPolicy::default();

        if let Some(retries) = self.shape_retries {
            policy.shape_retries = retries;
        }

        if let Some(raw) = &self.on_partial_failure {
            match raw.parse::<FailurePolicy>() {
                Ok(parsed) => policy.on_partial_failure = parsed,
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "panel.on_partial_failure".to_string(),
                        value: raw.clone(),
                    },
                    format!(
                        "panel.on_partial_failure: unknown value '{}', falling back to '{}'",
                        raw,
                        policy.on_partial_failure.as_str()
                    ),
                )),
            }
        }

        (policy, issues)
    }
}
