//! Panel run policies — use case control knobs.
//!
//! [`PanelPolicy`] groups the static parameters that control a run in
//! [`RunPanelUseCase`](crate::use_cases::run_panel::RunPanelUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do when some, but not all, roles of an expert stage fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Continue with the surviving roles and record the losses
    #[default]
    Degrade,
    /// Fail the run on the first incomplete stage
    Abort,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Degrade => "degrade",
            FailurePolicy::Abort => "abort",
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "degrade" => Ok(FailurePolicy::Degrade),
            "abort" => Ok(FailurePolicy::Abort),
            other => Err(format!("unknown failure policy '{}'", other)),
        }
    }
}

/// Run control parameters.
///
/// Controls retry limits and partial-failure handling. Used by
/// RunPanelUseCase for every stage of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelPolicy {
    /// Extra attempts granted to an invocation whose reply fails shape
    /// validation. Gateway errors are never retried.
    pub shape_retries: u32,
    /// Partial-failure handling for the expert stages.
    pub on_partial_failure: FailurePolicy,
}

impl Default for PanelPolicy {
    fn default() -> Self {
        Self {
            shape_retries: 1,
            on_partial_failure: FailurePolicy::Degrade,
        }
    }
}

impl PanelPolicy {
    // ==================== Builder Methods ====================

    pub fn with_shape_retries(mut self, retries: u32) -> Self {
        self.shape_retries = retries;
        self
    }

    pub fn with_partial_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_partial_failure = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let policy = PanelPolicy::default();
        assert_eq!(policy.shape_retries, 1);
        assert_eq!(policy.on_partial_failure, FailurePolicy::Degrade);
    }

    #[test]
    fn test_builder() {
        let policy = PanelPolicy::default()
            .with_shape_retries(3)
            .with_partial_failure(FailurePolicy::Abort);

        assert_eq!(policy.shape_retries, 3);
        assert_eq!(policy.on_partial_failure, FailurePolicy::Abort);
    }

    #[test]
    fn test_failure_policy_from_str() {
        assert_eq!("degrade".parse::<FailurePolicy>(), Ok(FailurePolicy::Degrade));
        assert_eq!("Abort".parse::<FailurePolicy>(), Ok(FailurePolicy::Abort));
        assert!("retry".parse::<FailurePolicy>().is_err());
    }
}
