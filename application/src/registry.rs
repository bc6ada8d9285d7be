//! Role registry
//!
//! Static mapping from panel identities (planner, integrator, experts) to
//! capability endpoints. Built once at startup and read-only afterwards,
//! so concurrent stages can resolve against it freely.

use roundtable_domain::{Model, OutputShape, Role, instructions};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while resolving panel identities
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("No endpoint bound for role '{0}'")]
    UnboundRole(Role),
}

/// One capability endpoint: a model plus the full instruction text sent
/// with every invocation (role instructions followed by the reply schema)
#[derive(Debug, Clone)]
pub struct RoleBinding {
    pub model: Model,
    pub instructions: String,
}

impl RoleBinding {
    pub fn new(model: Model, instructions: impl Into<String>) -> Self {
        Self {
            model,
            instructions: instructions.into(),
        }
    }
}

/// The panel's identity table
///
/// Expert instructions are supplied per role; planner instructions are
/// derived here so they always advertise the final roster.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    planner: RoleBinding,
    integrator: RoleBinding,
    experts: HashMap<Role, RoleBinding>,
    roster: Vec<Role>,
}

impl RoleRegistry {
    /// Assemble a registry from explicit bindings
    ///
    /// `experts` lists each role with its model and role instruction text,
    /// in roster order. The reply schema for each endpoint is appended
    /// here, once, so callers never repeat it.
    pub fn new(
        planner_model: Model,
        integrator_model: Model,
        experts: Vec<(Role, Model, String)>,
    ) -> Self {
        let roster: Vec<Role> = experts.iter().map(|(role, _, _)| role.clone()).collect();

        let planner = RoleBinding::new(
            planner_model,
            with_schema(&instructions::planner(&roster), OutputShape::Plan),
        );
        let integrator = RoleBinding::new(
            integrator_model,
            with_schema(instructions::integrator(), OutputShape::Final),
        );
        let experts = experts
            .into_iter()
            .map(|(role, model, text)| {
                let binding = RoleBinding::new(model, with_schema(&text, OutputShape::Worker));
                (role, binding)
            })
            .collect();

        Self {
            planner,
            integrator,
            experts,
            roster,
        }
    }

    /// Registry over the built-in roles with every identity on one model
    pub fn builtin(model: Model) -> Self {
        let experts = Role::builtin()
            .into_iter()
            .map(|role| {
                let text = instructions::expert(&role);
                (role, model.clone(), text)
            })
            .collect();
        Self::new(model.clone(), model, experts)
    }

    pub fn planner(&self) -> &RoleBinding {
        &self.planner
    }

    pub fn integrator(&self) -> &RoleBinding {
        &self.integrator
    }

    /// Roles with expert bindings, in registration order
    pub fn roster(&self) -> &[Role] {
        &self.roster
    }

    /// Resolve one expert role to its endpoint
    pub fn resolve(&self, role: &Role) -> Result<&RoleBinding, RegistryError> {
        self.experts
            .get(role)
            .ok_or_else(|| RegistryError::UnboundRole(role.clone()))
    }

    /// Resolve a whole plan's roles up front
    ///
    /// Any unbound role fails the set before a single expert invocation.
    pub fn resolve_all(&self, roles: &[Role]) -> Result<Vec<(Role, &RoleBinding)>, RegistryError> {
        roles
            .iter()
            .map(|role| Ok((role.clone(), self.resolve(role)?)))
            .collect()
    }
}

fn with_schema(text: &str, shape: OutputShape) -> String {
    format!("{}\n\n{}", text, shape.schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_binds_all_builtin_roles() {
        let registry = RoleRegistry::builtin(Model::Gpt52);

        assert_eq!(registry.roster().len(), 3);
        for role in Role::builtin() {
            let binding = registry.resolve(&role).unwrap();
            assert_eq!(binding.model, Model::Gpt52);
        }
    }

    #[test]
    fn test_unknown_role_is_unbound() {
        let registry = RoleRegistry::builtin(Model::Gpt52);
        let role = Role::Custom("forensics".to_string());

        let err = registry.resolve(&role).unwrap_err();
        assert_eq!(err, RegistryError::UnboundRole(role));
    }

    #[test]
    fn test_resolve_all_fails_on_first_unbound_role() {
        let registry = RoleRegistry::builtin(Model::Gpt52);
        let roles = vec![Role::Accounting, Role::Custom("forensics".to_string())];

        assert!(registry.resolve_all(&roles).is_err());
    }

    #[test]
    fn test_planner_instructions_advertise_roster() {
        let registry = RoleRegistry::builtin(Model::Gpt52);

        let text = &registry.planner().instructions;
        assert!(text.contains("accounting"));
        assert!(text.contains("industry"));
        assert!(text.contains("risk"));
    }

    #[test]
    fn test_bindings_carry_reply_schemas() {
        let registry = RoleRegistry::builtin(Model::Gpt52);

        assert!(registry.planner().instructions.contains("required_roles"));
        assert!(registry.integrator().instructions.contains("integrated_analysis"));
        let expert = registry.resolve(&Role::Risk).unwrap();
        assert!(expert.instructions.contains("reasoning"));
    }

    #[test]
    fn test_explicit_bindings_keep_their_models() {
        let registry = RoleRegistry::new(
            Model::ClaudeOpus45,
            Model::Gpt52,
            vec![(
                Role::Custom("tax".to_string()),
                Model::ClaudeHaiku45,
                "You are a tax specialist.".to_string(),
            )],
        );

        assert_eq!(registry.planner().model, Model::ClaudeOpus45);
        assert_eq!(registry.integrator().model, Model::Gpt52);
        let tax = registry.resolve(&Role::Custom("tax".to_string())).unwrap();
        assert_eq!(tax.model, Model::ClaudeHaiku45);
        assert!(tax.instructions.starts_with("You are a tax specialist."));
    }
}
