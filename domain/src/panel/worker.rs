//! Worker output value objects - what one expert produced in one stage

use crate::core::role::Role;
use crate::panel::confidence::Confidence;
use serde::{Deserialize, Serialize};

/// A worker's reasoned position on the task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thought {
    /// Step-by-step reasoning behind the conclusion
    pub reasoning: String,
    /// The position the worker takes
    pub conclusion: String,
    /// How sure the worker is of its own conclusion
    pub confidence: Confidence,
}

impl Thought {
    pub fn new(
        reasoning: impl Into<String>,
        conclusion: impl Into<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            reasoning: reasoning.into(),
            conclusion: conclusion.into(),
            confidence,
        }
    }
}

/// Feedback one worker directs at another worker's analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Critique {
    /// The role whose analysis this critique addresses
    pub target_role: Role,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_correction: Option<String>,
    pub confidence: Confidence,
}

impl Critique {
    pub fn new(target_role: Role, feedback: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            target_role,
            feedback: feedback.into(),
            suggested_correction: None,
            confidence,
        }
    }

    pub fn with_correction(mut self, correction: impl Into<String>) -> Self {
        self.suggested_correction = Some(correction.into());
        self
    }
}

/// Everything one worker produced in a single expert stage
///
/// The critique stage emits a fresh set of these; where both exist, the
/// critique-stage set supersedes the analyze-stage set downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerOutput {
    pub role: Role,
    pub thought: Thought,
    #[serde(default)]
    pub critiques: Vec<Critique>,
}

impl WorkerOutput {
    pub fn new(role: Role, thought: Thought) -> Self {
        Self {
            role,
            thought,
            critiques: Vec::new(),
        }
    }

    pub fn with_critiques(mut self, critiques: Vec<Critique>) -> Self {
        self.critiques = critiques;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confident(value: f64) -> Confidence {
        Confidence::try_new(value).unwrap()
    }

    #[test]
    fn test_worker_output_starts_without_critiques() {
        let output = WorkerOutput::new(
            Role::Accounting,
            Thought::new("margins are thin", "revenue is overstated", confident(0.8)),
        );
        assert!(output.critiques.is_empty());
    }

    #[test]
    fn test_critique_builder() {
        let critique = Critique::new(Role::Industry, "ignores the downturn", confident(0.6))
            .with_correction("factor in sector contraction");
        assert_eq!(critique.target_role, Role::Industry);
        assert_eq!(
            critique.suggested_correction.as_deref(),
            Some("factor in sector contraction")
        );
    }

    #[test]
    fn test_missing_critiques_default_on_deserialize() {
        let json = r#"{
            "role": "risk",
            "thought": {"reasoning": "r", "conclusion": "c", "confidence": 0.5}
        }"#;
        let output: WorkerOutput = serde_json::from_str(json).unwrap();
        assert!(output.critiques.is_empty());
    }
}
