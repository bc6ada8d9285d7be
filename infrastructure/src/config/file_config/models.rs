//! Identity-based model configuration from TOML (`[models]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use roundtable_domain::Model;
use serde::{Deserialize, Serialize};

/// Identity-based model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// planner = "claude-opus-4.5"      # Role selection and weighting
/// integrator = "claude-opus-4.5"   # Final integration
/// default = "gpt-5.2"              # Experts without a [roles.*] override
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for the planner identity
    pub planner: Option<String>,
    /// Model for the integrator identity
    pub integrator: Option<String>,
    /// Fallback model for expert roles
    pub default: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
    ) -> (Option<Model>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        match value {
            None => (None, issues),
            Some(s) if s.trim().is_empty() => {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                ));
                (None, issues)
            }
            Some(s) => {
                // Model::from_str is infallible; unknown names become Custom(...)
                let model: Model = s.parse().unwrap();
                (Some(model), issues)
            }
        }
    }

    /// Parse planner model string into Model enum
    pub fn parse_planner(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("planner", self.planner.as_ref())
    }

    /// Parse integrator model string into Model enum
    pub fn parse_integrator(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("integrator", self.integrator.as_ref())
    }

    /// Parse the expert fallback model string into Model enum
    pub fn parse_default(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("default", self.default.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_config_defaults() {
        let config = FileModelsConfig::default();
        assert!(config.planner.is_none());
        assert!(config.integrator.is_none());
        assert!(config.default.is_none());
    }

    #[test]
    fn test_models_config_deserialize() {
        let toml_str = r#"
[models]
planner = "claude-opus-4.5"
integrator = "claude-opus-4.5"
default = "gpt-5.2"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.parse_planner().0, Some(Model::ClaudeOpus45));
        assert_eq!(config.models.parse_integrator().0, Some(Model::ClaudeOpus45));
        assert_eq!(config.models.parse_default().0, Some(Model::Gpt52));
    }

    #[test]
    fn test_unknown_model_becomes_custom() {
        let config = FileModelsConfig {
            default: Some("my-local-llm".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.parse_default().0,
            Some(Model::Custom("my-local-llm".to_string()))
        );
    }

    #[test]
    fn test_empty_model_name_is_an_issue() {
        let config = FileModelsConfig {
            planner: Some("  ".to_string()),
            ..Default::default()
        };
        let (model, issues) = config.parse_planner();
        assert!(model.is_none());
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::EmptyModelName { field } if field == "planner"
        )));
    }
}
