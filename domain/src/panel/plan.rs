//! Plan-stage output

use crate::core::error::DomainError;
use crate::core::role::Role;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Outcome of the planning stage (Value Object)
///
/// Carries the planner's reading of the task, the roles it convened in
/// priority order, and one non-negative importance weight per role.
/// Weights need not sum to one; consumers normalize. Immutable once
/// built.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResult {
    task_analysis: String,
    required_roles: Vec<Role>,
    weights: HashMap<Role, f64>,
}

impl PlanResult {
    /// Build a plan, enforcing its invariants: no duplicate roles, and a
    /// finite non-negative weight for every required role. Weight entries
    /// for roles the plan does not require are dropped.
    pub fn try_new(
        task_analysis: impl Into<String>,
        required_roles: Vec<Role>,
        weights: HashMap<Role, f64>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for role in &required_roles {
            if !seen.insert(role.clone()) {
                return Err(DomainError::DuplicateRole(role.clone()));
            }
            match weights.get(role) {
                None => return Err(DomainError::MissingWeight(role.clone())),
                Some(w) if !w.is_finite() || *w < 0.0 => {
                    return Err(DomainError::InvalidWeight {
                        role: role.clone(),
                        weight: *w,
                    });
                }
                Some(_) => {}
            }
        }

        let weights = weights
            .into_iter()
            .filter(|(role, _)| seen.contains(role))
            .collect();

        Ok(Self {
            task_analysis: task_analysis.into(),
            required_roles,
            weights,
        })
    }

    pub fn task_analysis(&self) -> &str {
        &self.task_analysis
    }

    /// Convened roles in the planner's priority order
    pub fn required_roles(&self) -> &[Role] {
        &self.required_roles
    }

    /// A plan that convenes nobody is legal; the run still integrates
    pub fn is_empty(&self) -> bool {
        self.required_roles.is_empty()
    }

    /// Weight assigned to a role, zero if the plan never convened it
    pub fn weight_of(&self, role: &Role) -> f64 {
        self.weights.get(role).copied().unwrap_or(0.0)
    }

    /// Roles with their weights, in plan order
    pub fn weighted_roles(&self) -> impl Iterator<Item = (&Role, f64)> {
        self.required_roles
            .iter()
            .map(|role| (role, self.weight_of(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(entries: &[(Role, f64)]) -> HashMap<Role, f64> {
        entries.iter().cloned().collect()
    }

    #[test]
    fn test_valid_plan() {
        let plan = PlanResult::try_new(
            "needs numbers and sector context",
            vec![Role::Accounting, Role::Industry],
            weights(&[(Role::Accounting, 0.7), (Role::Industry, 0.3)]),
        )
        .unwrap();
        assert_eq!(plan.required_roles().len(), 2);
        assert_eq!(plan.weight_of(&Role::Accounting), 0.7);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let result = PlanResult::try_new(
            "dup",
            vec![Role::Risk, Role::Risk],
            weights(&[(Role::Risk, 1.0)]),
        );
        assert!(matches!(result, Err(DomainError::DuplicateRole(_))));
    }

    #[test]
    fn test_missing_weight_rejected() {
        let result = PlanResult::try_new("missing", vec![Role::Risk], HashMap::new());
        assert!(matches!(result, Err(DomainError::MissingWeight(_))));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = PlanResult::try_new(
            "negative",
            vec![Role::Risk],
            weights(&[(Role::Risk, -0.2)]),
        );
        assert!(matches!(result, Err(DomainError::InvalidWeight { .. })));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let result = PlanResult::try_new(
            "nan",
            vec![Role::Risk],
            weights(&[(Role::Risk, f64::NAN)]),
        );
        assert!(matches!(result, Err(DomainError::InvalidWeight { .. })));
    }

    #[test]
    fn test_extra_weights_dropped() {
        let plan = PlanResult::try_new(
            "extra",
            vec![Role::Accounting],
            weights(&[(Role::Accounting, 1.0), (Role::Risk, 0.5)]),
        )
        .unwrap();
        assert_eq!(plan.weight_of(&Role::Risk), 0.0);
    }

    #[test]
    fn test_weighted_roles_keep_plan_order() {
        let plan = PlanResult::try_new(
            "order",
            vec![Role::Industry, Role::Accounting],
            weights(&[(Role::Accounting, 0.2), (Role::Industry, 0.8)]),
        )
        .unwrap();
        let ordered: Vec<_> = plan.weighted_roles().collect();
        assert_eq!(ordered[0], (&Role::Industry, 0.8));
        assert_eq!(ordered[1], (&Role::Accounting, 0.2));
    }

    #[test]
    fn test_empty_plan_is_legal() {
        let plan = PlanResult::try_new("nothing to convene", vec![], HashMap::new()).unwrap();
        assert!(plan.is_empty());
    }
}
