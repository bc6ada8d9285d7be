//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gateway;
mod models;
mod output;
mod panel;
mod roles;
mod transcript;

pub use gateway::FileGatewayConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use panel::FilePanelConfig;
pub use roles::FileRoleConfig;
pub use transcript::FileTranscriptConfig;

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use roundtable_application::RoleRegistry;
use roundtable_domain::{Model, Role, instructions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Panel run settings
    pub panel: FilePanelConfig,
    /// Identity-based model selection
    pub models: FileModelsConfig,
    /// Per-role overrides and custom roles
    pub roles: BTreeMap<String, FileRoleConfig>,
    /// Reasoning gateway endpoint
    pub gateway: FileGatewayConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript recording
    pub transcript: FileTranscriptConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It covers
    /// the panel policy, the gateway settings, and every model and role
    /// binding the registry would be built from.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.panel.to_policy().1);
        issues.extend(self.gateway.to_settings().1);
        issues.extend(self.to_registry().1);
        issues
    }

    /// Build the role registry this configuration describes.
    ///
    /// The roster is the built-in roles plus every custom `[roles.*]`
    /// section, in name order. Built-in sections override model or
    /// instruction text without changing the roster.
    pub fn to_registry(&self) -> (RoleRegistry, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (default_model, default_issues) = self.models.parse_default();
        issues.extend(default_issues);
        let default_model = default_model.unwrap_or_default();

        let (planner, planner_issues) = self.models.parse_planner();
        issues.extend(planner_issues);
        let planner = planner.unwrap_or_else(|| default_model.clone());

        let (integrator, integrator_issues) = self.models.parse_integrator();
        issues.extend(integrator_issues);
        let integrator = integrator.unwrap_or_else(|| default_model.clone());

        let builtin = Role::builtin();
        let mut experts: Vec<(Role, Model, String)> = Vec::new();
        for role in &builtin {
            let overrides = self.roles.get(role.as_str());
            let (model, text) = expert_binding(role, overrides, &default_model, &mut issues);
            experts.push((role.clone(), model, text));
        }
        for (name, overrides) in &self.roles {
            if name.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyRoleName,
                    "roles: role name cannot be empty",
                ));
                continue;
            }
            let role = Role::from_name(name);
            if builtin.contains(&role) {
                continue;
            }
            let (model, text) = expert_binding(&role, Some(overrides), &default_model, &mut issues);
            experts.push((role, model, text));
        }

        (RoleRegistry::new(planner, integrator, experts), issues)
    }
}

fn expert_binding(
    role: &Role,
    overrides: Option<&FileRoleConfig>,
    default_model: &Model,
    issues: &mut Vec<ConfigIssue>,
) -> (Model, String) {
    let model = match overrides.and_then(|o| o.model.as_deref()) {
        Some(s) if s.trim().is_empty() => {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: format!("roles.{}.model", role),
                },
                format!("roles.{}.model: model name cannot be empty", role),
            ));
            default_model.clone()
        }
        Some(s) => s.parse().unwrap(),
        None => default_model.clone(),
    };

    let text = match overrides.and_then(|o| o.instructions.as_deref()) {
        Some(s) if s.trim().is_empty() => {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::BlankInstructions {
                    role: role.to_string(),
                },
                format!("roles.{}.instructions: blank, using the built-in text", role),
            ));
            instructions::expert(role)
        }
        Some(s) => s.to_string(),
        None => instructions::expert(role),
    };

    (model, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_application::FailurePolicy;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[panel]
shape_retries = 2
on_partial_failure = "abort"

[models]
planner = "claude-opus-4.5"
integrator = "claude-opus-4.5"
default = "gpt-5.2"

[roles.accounting]
model = "claude-sonnet-4.5"

[roles.forensics]
instructions = "You are a forensic accounting expert."

[gateway]
base_url = "http://localhost:8080/v1"

[transcript]
enabled = true
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.panel.shape_retries, Some(2));
        assert_eq!(config.models.planner.as_deref(), Some("claude-opus-4.5"));
        assert_eq!(config.roles.len(), 2);
        assert!(config.transcript.enabled);

        let (policy, _) = config.panel.to_policy();
        assert_eq!(policy.on_partial_failure, FailurePolicy::Abort);
    }

    #[test]
    fn test_default_config_has_no_fatal_issues() {
        // the default config may warn (e.g. about a missing API key,
        // depending on the environment) but must never refuse to run
        let config = FileConfig::default();
        assert!(config.validate().iter().all(|i| !i.is_fatal()));
    }

    #[test]
    fn test_registry_uses_default_model_for_unset_identities() {
        let toml_str = r#"
[models]
default = "gpt-5.2"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (registry, issues) = config.to_registry();
        assert!(issues.is_empty());
        assert_eq!(registry.planner().model, Model::Gpt52);
        assert_eq!(registry.integrator().model, Model::Gpt52);
        assert_eq!(
            registry.resolve(&Role::Industry).unwrap().model,
            Model::Gpt52
        );
    }

    #[test]
    fn test_registry_keeps_builtin_roster_with_overrides() {
        let toml_str = r#"
[roles.accounting]
model = "claude-sonnet-4.5"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (registry, issues) = config.to_registry();
        assert!(issues.is_empty());
        // overriding one role leaves the rest of the roster in place
        assert_eq!(registry.roster().len(), 3);
        assert_eq!(
            registry.resolve(&Role::Accounting).unwrap().model,
            Model::ClaudeSonnet45
        );
        assert!(registry.resolve(&Role::Risk).is_ok());
    }

    #[test]
    fn test_registry_adds_custom_roles_to_roster() {
        let toml_str = r#"
[roles.forensics]
instructions = "You are a forensic accounting expert."

[roles.legal]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (registry, issues) = config.to_registry();
        assert!(issues.is_empty());
        assert_eq!(registry.roster().len(), 5);

        let forensics = registry
            .resolve(&Role::Custom("forensics".to_string()))
            .unwrap();
        assert!(forensics.instructions.starts_with("You are a forensic"));
        // a custom role without text gets generated instructions
        assert!(registry.resolve(&Role::Custom("legal".to_string())).is_ok());
    }

    #[test]
    fn test_blank_instructions_fall_back_with_warning() {
        let toml_str = r#"
[roles.risk]
instructions = "   "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (registry, issues) = config.to_registry();
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::BlankInstructions { role } if role == "risk"
        )));
        let risk = registry.resolve(&Role::Risk).unwrap();
        assert!(!risk.instructions.trim().is_empty());
    }
}
