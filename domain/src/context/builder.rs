//! Stage context assembly
//!
//! Every invocation in a stage reads from a context rendered here.
//! Rendering is pure: the same inputs produce the same bytes, so any
//! stage can be replayed or audited without engine state. Nothing
//! here may read clocks, counters, or randomness.

use crate::core::role::Role;
use crate::panel::influence::RoleInfluence;
use crate::panel::plan::PlanResult;
use crate::panel::worker::WorkerOutput;

/// Renders the shared context for each stage
pub struct ContextBuilder;

impl ContextBuilder {
    /// Plan-stage context: the task description alone
    pub fn plan(task: &str) -> String {
        task.to_string()
    }

    /// Analyze-stage context, identical for every convened worker
    pub fn analyze(task: &str, plan: &PlanResult) -> String {
        format!(
            "TASK: {}\n\nPLANNER'S ANALYSIS: {}\n\nProvide your analysis of this task from your area of expertise.",
            task,
            plan.task_analysis()
        )
    }

    /// Critique-stage context for one reviewer: every analyze-stage
    /// output (the reviewer's own included) plus a directive naming the
    /// reviewer. The analysis block is shared; only the directive varies.
    pub fn critique(task: &str, analyses: &[WorkerOutput], reviewer: &Role) -> String {
        let mut context = format!("TASK: {}\n\n", task);
        for output in analyses {
            context.push_str(&Self::analysis_block(output));
        }
        context.push_str(&format!(
            "You are the {} expert. Review the analyses above, including your own. \
             Identify weaknesses, blind spots, and errors in your peers' reasoning, \
             then restate your own position and issue critiques, each with its own confidence.",
            reviewer.display_name()
        ));
        context
    }

    /// Integration context: plan, weights, influence ranking, and every
    /// surviving worker output with its critiques
    pub fn integrate(
        task: &str,
        plan: &PlanResult,
        outputs: &[WorkerOutput],
        influence: &[RoleInfluence],
    ) -> String {
        let mut context = format!(
            "TASK: {}\n\nPLANNER'S ANALYSIS: {}\n\n",
            task,
            plan.task_analysis()
        );

        context.push_str("ROLE WEIGHTS:\n");
        for (role, weight) in plan.weighted_roles() {
            context.push_str(&format!("- {}: {:.2}\n", role, weight));
        }
        context.push('\n');

        if !influence.is_empty() {
            context.push_str("WEIGHTED STANDING (normalized weight x reported confidence):\n");
            for entry in influence {
                context.push_str(&format!(
                    "- {}: weight {:.2}, confidence {:.2}, influence {:.2}\n",
                    entry.role, entry.weight, entry.confidence, entry.influence
                ));
            }
            context.push('\n');
        }

        for output in outputs {
            context.push_str(&Self::analysis_block(output));
            if !output.critiques.is_empty() {
                context.push_str(&format!(
                    "Critiques issued by the {} expert:\n",
                    output.role.display_name()
                ));
                for critique in &output.critiques {
                    context.push_str(&format!(
                        "- To {}: {}\n",
                        critique.target_role.display_name(),
                        critique.feedback
                    ));
                    if let Some(correction) = &critique.suggested_correction {
                        context.push_str(&format!("  Suggested correction: {}\n", correction));
                    }
                    context.push_str(&format!("  Confidence: {}\n", critique.confidence));
                }
                context.push('\n');
            }
        }

        context.push_str(
            "Integrate the expert positions above into a single analysis, honoring the \
             weights and attributing every critique to the role it targets.",
        );
        context
    }

    fn analysis_block(output: &WorkerOutput) -> String {
        format!(
            "--- {} EXPERT ANALYSIS ---\nReasoning: {}\nConclusion: {}\nConfidence: {}\n\n",
            output.role.display_name(),
            output.thought.reasoning,
            output.thought.conclusion,
            output.thought.confidence,
        )
    }
}
