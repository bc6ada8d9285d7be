//! Stage execution
//!
//! Single invocations with bounded shape retry, and expert-stage fan-out
//! with a hard barrier. Results are reassembled in roster order so
//! completion order never leaks into any output.

use crate::ports::progress::ProgressNotifier;
use crate::ports::reasoning::{GatewayError, ReasoningGateway};
use crate::registry::RoleBinding;
use roundtable_domain::{
    OutputShape, Role, RoleFailure, ShapeError, Stage, WorkerOutput, parse_worker_response,
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Why a single invocation failed after all attempts
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Reply failed shape validation after {attempts} attempt(s): {last}")]
    MalformedReply { attempts: u32, last: ShapeError },
}

/// Raised when the run's cancellation token fires mid-stage
#[derive(Error, Debug)]
#[error("stage cancelled")]
pub(crate) struct Cancelled;

/// Outputs and failures of one expert stage, both in roster order
pub(crate) struct StageOutcome {
    pub outputs: Vec<WorkerOutput>,
    pub failures: Vec<RoleFailure>,
}

/// One invocation: open a session, request, parse.
///
/// A reply that fails shape validation consumes a retry attempt; gateway
/// errors fail immediately and are never retried.
pub(crate) async fn invoke<T, F>(
    gateway: &dyn ReasoningGateway,
    binding: &RoleBinding,
    context: &str,
    shape: OutputShape,
    shape_retries: u32,
    parse: F,
) -> Result<T, InvocationError>
where
    F: Fn(&str) -> Result<T, ShapeError>,
{
    let session = gateway
        .open_session(&binding.model, &binding.instructions)
        .await?;

    let attempts = shape_retries + 1;
    let mut last = None;
    for attempt in 1..=attempts {
        let reply = session.request(context, shape).await?;
        match parse(&reply) {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!(
                    "Attempt {}/{} produced a malformed {} reply: {}",
                    attempt, attempts, shape, e
                );
                last = Some(e);
            }
        }
    }

    Err(InvocationError::MalformedReply {
        attempts,
        last: last.unwrap_or(ShapeError::NotJson),
    })
}

/// Run one expert stage across the roster.
///
/// Spawns one task per role, waits for every task to settle (the stage
/// barrier), and reorders results to roster order. A fired cancellation
/// token aborts all outstanding tasks.
pub(crate) async fn run_expert_stage<G: ReasoningGateway + 'static>(
    gateway: &Arc<G>,
    stage: Stage,
    roster: &[(Role, RoleBinding)],
    context_for: impl Fn(&Role) -> String,
    shape_retries: u32,
    cancellation: Option<&CancellationToken>,
    progress: &dyn ProgressNotifier,
) -> Result<StageOutcome, Cancelled> {
    progress.on_stage_start(&stage, roster.len());

    let mut join_set = JoinSet::new();
    for (role, binding) in roster {
        let gateway = Arc::clone(gateway);
        let role = role.clone();
        let binding = binding.clone();
        let context = context_for(&role);

        join_set.spawn(async move {
            let result = invoke(
                &*gateway,
                &binding,
                &context,
                OutputShape::Worker,
                shape_retries,
                |reply| parse_worker_response(&role, reply),
            )
            .await;
            (role, result)
        });
    }

    let mut settled: HashMap<Role, Result<WorkerOutput, InvocationError>> = HashMap::new();

    loop {
        let joined = if let Some(token) = cancellation {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    join_set.abort_all();
                    return Err(Cancelled);
                }
                joined = join_set.join_next() => joined,
            }
        } else {
            join_set.join_next().await
        };

        let Some(joined) = joined else {
            break;
        };

        match joined {
            Ok((role, Ok(output))) => {
                debug!("Role {} completed the {} stage", role, stage.as_str());
                progress.on_role_complete(&stage, role.as_str(), true);
                settled.insert(role, Ok(output));
            }
            Ok((role, Err(e))) => {
                warn!("Role {} failed the {} stage: {}", role, stage.as_str(), e);
                progress.on_role_complete(&stage, role.as_str(), false);
                settled.insert(role, Err(e));
            }
            Err(e) => {
                warn!("Stage task join error: {}", e);
            }
        }
    }

    // Reassemble in roster order; completion order must not leak out
    let mut outputs = Vec::new();
    let mut failures = Vec::new();
    for (role, _) in roster {
        match settled.remove(role) {
            Some(Ok(output)) => outputs.push(output),
            Some(Err(e)) => failures.push(RoleFailure::new(stage, role.clone(), e.to_string())),
            None => failures.push(RoleFailure::new(
                stage,
                role.clone(),
                "task ended before producing a result",
            )),
        }
    }

    progress.on_stage_complete(&stage);
    Ok(StageOutcome { outputs, failures })
}
