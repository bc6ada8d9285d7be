//! Pipeline stages of a panel run

use serde::{Deserialize, Serialize};

/// Stage of a panel run
///
/// Stages execute strictly in order; concurrency exists only inside the
/// two expert stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// One planner reads the task and convenes weighted roles
    Plan,
    /// Every convened role analyzes the task in parallel
    Analyze,
    /// Every role reviews the full set of analyses in parallel
    Critique,
    /// One arbiter reconciles the panel into a single result
    Integrate,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Plan => "plan",
            Stage::Analyze => "analyze",
            Stage::Critique => "critique",
            Stage::Integrate => "integrate",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Plan => "Planning",
            Stage::Analyze => "Analysis",
            Stage::Critique => "Critique",
            Stage::Integrate => "Integration",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
