//! Run Panel use case
//!
//! Drives the full pipeline for one task: plan, fan the plan's roles out
//! through analyze and critique, then integrate. Stages are hard
//! barriers; data moves between them only through rendered context.

use crate::config::{FailurePolicy, PanelPolicy};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::reasoning::ReasoningGateway;
use crate::ports::transcript::{NoTranscript, TranscriptEvent, TranscriptLogger};
use crate::registry::{RegistryError, RoleBinding, RoleRegistry};
use crate::use_cases::executor::{self, InvocationError, StageOutcome};
use roundtable_domain::{
    ContextBuilder, OutputShape, PanelReport, PlanResult, Role, RoleFailure, Stage, Task,
    WorkerOutput, parse_final_response, parse_plan_response, rank_influence,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during a panel run
#[derive(Error, Debug)]
pub enum RunPanelError {
    #[error("Planning failed: {0}")]
    PlanningFailed(InvocationError),

    #[error("{0}")]
    UnboundRole(#[from] RegistryError),

    #[error("{stage} stage failed for: {}", failed_roles(failures))]
    StageFailed {
        stage: Stage,
        failures: Vec<RoleFailure>,
    },

    #[error("Integration failed: {0}")]
    IntegrationFailed(InvocationError),

    #[error("Run cancelled")]
    Cancelled,
}

fn failed_roles(failures: &[RoleFailure]) -> String {
    failures
        .iter()
        .map(|f| f.role.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Input for the RunPanel use case
#[derive(Debug, Clone)]
pub struct RunPanelInput {
    /// The task to put before the panel
    pub task: Task,
    /// Run control (retries, partial-failure handling)
    pub policy: PanelPolicy,
    /// Whether to run the critique stage
    pub enable_critique: bool,
}

impl RunPanelInput {
    pub fn new(task: impl Into<Task>) -> Self {
        Self {
            task: task.into(),
            policy: PanelPolicy::default(),
            enable_critique: true,
        }
    }

    pub fn with_policy(mut self, policy: PanelPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn without_critique(mut self) -> Self {
        self.enable_critique = false;
        self
    }
}

/// Use case for running a full panel over one task
pub struct RunPanelUseCase<G: ReasoningGateway + 'static> {
    gateway: Arc<G>,
    registry: RoleRegistry,
    transcript: Arc<dyn TranscriptLogger>,
    cancellation: Option<CancellationToken>,
}

impl<G: ReasoningGateway + 'static> RunPanelUseCase<G> {
    pub fn new(gateway: Arc<G>, registry: RoleRegistry) -> Self {
        Self {
            gateway,
            registry,
            transcript: Arc::new(NoTranscript),
            cancellation: None,
        }
    }

    pub fn with_transcript(mut self, transcript: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = transcript;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Execute the panel without progress reporting
    pub async fn execute(&self, input: RunPanelInput) -> Result<PanelReport, RunPanelError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the panel with progress notifications
    pub async fn execute_with_progress(
        &self,
        input: RunPanelInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<PanelReport, RunPanelError> {
        self.check_cancelled()?;
        let task = input.task.description().to_string();
        info!("Starting panel run");

        // Stage 1: Plan. A failed plan fails the run before any expert
        // is invoked.
        let plan = self.run_plan(&task, &input, progress).await?;
        self.check_cancelled()?;

        // Resolve the whole roster up front; one unbound role aborts the
        // run with zero expert invocations
        let roster: Vec<(Role, RoleBinding)> = self
            .registry
            .resolve_all(plan.required_roles())?
            .into_iter()
            .map(|(role, binding)| (role, binding.clone()))
            .collect();
        info!("Plan convened {} role(s)", roster.len());

        // Stage 2: Analyze. Every worker sees the same context.
        let analyze_context = ContextBuilder::analyze(&task, &plan);
        let analyze = executor::run_expert_stage(
            &self.gateway,
            Stage::Analyze,
            &roster,
            |_| analyze_context.clone(),
            input.policy.shape_retries,
            self.cancellation.as_ref(),
            progress,
        )
        .await
        .map_err(|_| RunPanelError::Cancelled)?;
        self.log_stage(Stage::Analyze, &analyze);
        self.enforce_policy(
            Stage::Analyze,
            &analyze,
            roster.len(),
            input.policy.on_partial_failure,
        )?;

        let mut failures = analyze.failures;
        let analyses = analyze.outputs;

        // Stage 3: Critique. Only roles that produced an analysis review.
        let surviving: Vec<(Role, RoleBinding)> = roster
            .iter()
            .filter(|(role, _)| analyses.iter().any(|o| &o.role == role))
            .cloned()
            .collect();

        let reviews = if input.enable_critique {
            let critique = executor::run_expert_stage(
                &self.gateway,
                Stage::Critique,
                &surviving,
                |role| ContextBuilder::critique(&task, &analyses, role),
                input.policy.shape_retries,
                self.cancellation.as_ref(),
                progress,
            )
            .await
            .map_err(|_| RunPanelError::Cancelled)?;
            self.log_stage(Stage::Critique, &critique);
            self.enforce_policy(
                Stage::Critique,
                &critique,
                surviving.len(),
                input.policy.on_partial_failure,
            )?;
            failures.extend(critique.failures);
            critique.outputs
        } else {
            debug!("Critique stage disabled for this run");
            Vec::new()
        };
        self.check_cancelled()?;

        // Stage 4: Integrate over the critique round where it ran, the
        // analyses otherwise
        let integration_inputs: &[WorkerOutput] = if reviews.is_empty() {
            &analyses
        } else {
            &reviews
        };
        let influence = rank_influence(&plan, integration_inputs);
        let context = ContextBuilder::integrate(&task, &plan, integration_inputs, &influence);

        info!("Stage 4: Integration");
        progress.on_stage_start(&Stage::Integrate, 1);
        let final_result = executor::invoke(
            &*self.gateway,
            self.registry.integrator(),
            &context,
            OutputShape::Final,
            input.policy.shape_retries,
            parse_final_response,
        )
        .await
        .map_err(RunPanelError::IntegrationFailed)?;
        progress.on_role_complete(&Stage::Integrate, "integrator", true);
        progress.on_stage_complete(&Stage::Integrate);

        self.transcript.log(TranscriptEvent::new(
            "final_result",
            json!({
                "confidence": final_result.confidence.value(),
                "key_insights": &final_result.key_insights,
                "dissenting": final_result.has_dissent(),
            }),
        ));

        info!("Panel run complete");
        Ok(PanelReport::new(
            task,
            plan,
            analyses,
            reviews,
            failures,
            final_result,
        ))
    }

    async fn run_plan(
        &self,
        task: &str,
        input: &RunPanelInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<PlanResult, RunPanelError> {
        info!("Stage 1: Planning");
        progress.on_stage_start(&Stage::Plan, 1);

        let context = ContextBuilder::plan(task);
        let plan = executor::invoke(
            &*self.gateway,
            self.registry.planner(),
            &context,
            OutputShape::Plan,
            input.policy.shape_retries,
            parse_plan_response,
        )
        .await
        .map_err(RunPanelError::PlanningFailed)?;

        progress.on_role_complete(&Stage::Plan, "planner", true);
        progress.on_stage_complete(&Stage::Plan);

        self.transcript.log(TranscriptEvent::new(
            "plan_result",
            json!({
                "task_analysis": plan.task_analysis(),
                "required_roles": plan
                    .required_roles()
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>(),
                "weights": plan
                    .weighted_roles()
                    .map(|(role, weight)| json!({"role": role.as_str(), "weight": weight}))
                    .collect::<Vec<_>>(),
            }),
        ));

        Ok(plan)
    }

    /// Apply the partial-failure policy after an expert stage.
    ///
    /// A stage that lost every role aborts the run regardless of policy;
    /// there is nothing left to integrate.
    fn enforce_policy(
        &self,
        stage: Stage,
        outcome: &StageOutcome,
        roster_len: usize,
        policy: FailurePolicy,
    ) -> Result<(), RunPanelError> {
        if outcome.failures.is_empty() {
            return Ok(());
        }
        let all_lost = outcome.outputs.is_empty() && roster_len > 0;
        if policy == FailurePolicy::Abort || all_lost {
            return Err(RunPanelError::StageFailed {
                stage,
                failures: outcome.failures.clone(),
            });
        }
        warn!(
            "The {} stage lost {} of {} role(s); continuing degraded",
            stage.as_str(),
            outcome.failures.len(),
            roster_len
        );
        Ok(())
    }

    fn log_stage(&self, stage: Stage, outcome: &StageOutcome) {
        for output in &outcome.outputs {
            self.transcript.log(TranscriptEvent::new(
                "worker_output",
                json!({
                    "stage": stage.as_str(),
                    "role": output.role.as_str(),
                    "conclusion": &output.thought.conclusion,
                    "confidence": output.thought.confidence.value(),
                    "critiques": output.critiques.len(),
                }),
            ));
        }
        for failure in &outcome.failures {
            self.transcript.log(TranscriptEvent::new(
                "role_failure",
                json!({
                    "stage": failure.stage.as_str(),
                    "role": failure.role.as_str(),
                    "reason": &failure.reason,
                }),
            ));
        }
    }

    fn check_cancelled(&self) -> Result<(), RunPanelError> {
        if self.cancellation.as_ref().is_some_and(|t| t.is_cancelled()) {
            return Err(RunPanelError::Cancelled);
        }
        Ok(())
    }
}
