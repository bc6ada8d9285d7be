//! Progress notification port
//!
//! Defines the interface for reporting progress during a panel run.

use roundtable_domain::Stage;

/// Callback for progress updates during a panel run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain console, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts, with the number of invocations it holds
    fn on_stage_start(&self, stage: &Stage, total_tasks: usize);

    /// Called when one role finishes within a stage
    fn on_role_complete(&self, stage: &Stage, role: &str, success: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: &Stage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: &Stage, _total_tasks: usize) {}
    fn on_role_complete(&self, _stage: &Stage, _role: &str, _success: bool) {}
    fn on_stage_complete(&self, _stage: &Stage) {}
}
