//! Complete run artifact

use crate::core::role::Role;
use crate::panel::plan::PlanResult;
use crate::panel::stage::Stage;
use crate::panel::verdict::FinalResult;
use crate::panel::worker::WorkerOutput;
use serde::Serialize;

/// Failure of a single role within an expert stage
///
/// Recorded whenever the run degrades instead of aborting, so a partial
/// panel is always visible in the report.
#[derive(Debug, Clone, Serialize)]
pub struct RoleFailure {
    pub stage: Stage,
    pub role: Role,
    pub reason: String,
}

impl RoleFailure {
    pub fn new(stage: Stage, role: Role, reason: impl Into<String>) -> Self {
        Self {
            stage,
            role,
            reason: reason.into(),
        }
    }
}

/// Complete record of a panel run
///
/// Carries every stage's outputs alongside the final result, for
/// rendering, auditing, and the JSON output mode.
#[derive(Debug, Clone, Serialize)]
pub struct PanelReport {
    /// The task as submitted
    pub task: String,
    /// Plan-stage outcome
    pub plan: PlanResult,
    /// Analyze-stage outputs, in plan order
    pub analyses: Vec<WorkerOutput>,
    /// Critique-stage outputs, in plan order; empty when critique was skipped
    pub reviews: Vec<WorkerOutput>,
    /// Roles that dropped out of a degraded run
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<RoleFailure>,
    /// The integrated verdict
    pub final_result: FinalResult,
}

impl PanelReport {
    pub fn new(
        task: impl Into<String>,
        plan: PlanResult,
        analyses: Vec<WorkerOutput>,
        reviews: Vec<WorkerOutput>,
        failures: Vec<RoleFailure>,
        final_result: FinalResult,
    ) -> Self {
        Self {
            task: task.into(),
            plan,
            analyses,
            reviews,
            failures,
            final_result,
        }
    }

    /// The worker outputs integration actually consumed: the critique
    /// round where it ran, the analyses otherwise
    pub fn integration_inputs(&self) -> &[WorkerOutput] {
        if self.reviews.is_empty() {
            &self.analyses
        } else {
            &self.reviews
        }
    }

    /// Whether any role dropped out along the way
    pub fn degraded(&self) -> bool {
        !self.failures.is_empty()
    }
}
