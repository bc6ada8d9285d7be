//! Weighted influence ranking for integration
//!
//! The arbiter resolves conflicts by weight modulated by confidence. The
//! deterministic half of that contract is computed here and embedded in
//! the integration context, so the dominance ordering is auditable
//! rather than left entirely to the capability.

use crate::core::role::Role;
use crate::panel::plan::PlanResult;
use crate::panel::worker::WorkerOutput;
use serde::Serialize;

/// One role's standing going into integration
#[derive(Debug, Clone, Serialize)]
pub struct RoleInfluence {
    pub role: Role,
    /// Plan weight, normalized over the roles that actually participated
    pub weight: f64,
    /// The confidence the role itself reported
    pub confidence: f64,
    /// `weight * confidence`: the dominance ordering for conflicts
    pub influence: f64,
}

/// Rank participating roles by normalized weight times reported confidence.
///
/// Normalization runs over the surviving outputs only, so a degraded
/// panel redistributes the dropped role's weight. Ordering is descending
/// by influence; ties keep plan order. All-zero weights rank everyone at
/// zero influence.
pub fn rank_influence(plan: &PlanResult, outputs: &[WorkerOutput]) -> Vec<RoleInfluence> {
    let total: f64 = outputs.iter().map(|o| plan.weight_of(&o.role)).sum();

    let mut ranked: Vec<RoleInfluence> = outputs
        .iter()
        .map(|output| {
            let raw = plan.weight_of(&output.role);
            let weight = if total > 0.0 { raw / total } else { 0.0 };
            let confidence = output.thought.confidence.value();
            RoleInfluence {
                role: output.role.clone(),
                weight,
                confidence,
                influence: weight * confidence,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.influence
            .partial_cmp(&a.influence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::confidence::Confidence;
    use crate::panel::worker::Thought;
    use std::collections::HashMap;

    fn output(role: Role, confidence: f64) -> WorkerOutput {
        WorkerOutput::new(
            role,
            Thought::new(
                "reasoning",
                "conclusion",
                Confidence::try_new(confidence).unwrap(),
            ),
        )
    }

    fn plan(entries: &[(Role, f64)]) -> PlanResult {
        let roles: Vec<Role> = entries.iter().map(|(r, _)| r.clone()).collect();
        let weights: HashMap<Role, f64> = entries.iter().cloned().collect();
        PlanResult::try_new("analysis", roles, weights).unwrap()
    }

    #[test]
    fn test_heavier_confident_role_dominates() {
        let plan = plan(&[(Role::Accounting, 0.7), (Role::Industry, 0.3)]);
        let outputs = vec![output(Role::Accounting, 0.9), output(Role::Industry, 0.4)];

        let ranked = rank_influence(&plan, &outputs);
        assert_eq!(ranked[0].role, Role::Accounting);
        assert!((ranked[0].influence - 0.63).abs() < 1e-9);
        assert!((ranked[1].influence - 0.12).abs() < 1e-9);
    }

    #[test]
    fn test_weights_are_normalized() {
        let plan = plan(&[(Role::Accounting, 2.0), (Role::Industry, 6.0)]);
        let outputs = vec![output(Role::Accounting, 1.0), output(Role::Industry, 1.0)];

        let ranked = rank_influence(&plan, &outputs);
        assert_eq!(ranked[0].role, Role::Industry);
        assert!((ranked[0].weight - 0.75).abs() < 1e-9);
        assert!((ranked[1].weight - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_degraded_panel_renormalizes() {
        let plan = plan(&[(Role::Accounting, 0.5), (Role::Industry, 0.5)]);
        // Industry dropped out; accounting carries the full weight
        let outputs = vec![output(Role::Accounting, 0.6)];

        let ranked = rank_influence(&plan, &outputs);
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].weight - 1.0).abs() < 1e-9);
        assert!((ranked[0].influence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_weights() {
        let plan = plan(&[(Role::Accounting, 0.0), (Role::Risk, 0.0)]);
        let outputs = vec![output(Role::Accounting, 0.9), output(Role::Risk, 0.8)];

        let ranked = rank_influence(&plan, &outputs);
        assert!(ranked.iter().all(|r| r.influence == 0.0));
        // Ties keep plan order
        assert_eq!(ranked[0].role, Role::Accounting);
    }

    #[test]
    fn test_empty_outputs() {
        let plan = plan(&[]);
        assert!(rank_influence(&plan, &[]).is_empty());
    }
}
