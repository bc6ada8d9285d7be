//! Response shapes at the reasoning boundary
//!
//! Every invocation names the JSON shape its reply must satisfy. Parsing
//! and validation live in [`parse`]; a reply that does not satisfy its
//! shape is a [`ShapeError`], never silently repaired.

pub mod parse;

pub use parse::{extract_json, parse_final_response, parse_plan_response, parse_worker_response};

use thiserror::Error;

/// The JSON shape a reasoning reply must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// Planner reply: task analysis, required roles, weights
    Plan,
    /// Expert reply: thought plus optional critiques
    Worker,
    /// Arbiter reply: the integrated verdict
    Final,
}

impl OutputShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputShape::Plan => "plan",
            OutputShape::Worker => "worker",
            OutputShape::Final => "final",
        }
    }

    /// Schema block appended to the role instructions of every endpoint
    /// answering in this shape
    pub fn schema(&self) -> &'static str {
        match self {
            OutputShape::Plan => PLAN_SCHEMA,
            OutputShape::Worker => WORKER_SCHEMA,
            OutputShape::Final => FINAL_SCHEMA,
        }
    }
}

impl std::fmt::Display for OutputShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const PLAN_SCHEMA: &str = r#"Respond with a single JSON object:
{
  "task_analysis": "your reading of what the task requires",
  "required_roles": ["role", ...],
  "weights": {"role": 0.5, ...}
}
Order required_roles from most to least central and include one non-negative weight per required role. No text outside the JSON."#;

const WORKER_SCHEMA: &str = r#"Respond with a single JSON object:
{
  "reasoning": "your step-by-step reasoning",
  "conclusion": "your position",
  "confidence": 0.0 to 1.0,
  "critiques": [
    {
      "target_role": "role the feedback addresses",
      "feedback": "what is wrong or missing",
      "suggested_correction": "optional concrete fix",
      "confidence": 0.0 to 1.0
    }
  ]
}
Leave "critiques" empty unless you were asked to review your peers. No text outside the JSON."#;

const FINAL_SCHEMA: &str = r#"Respond with a single JSON object:
{
  "integrated_analysis": "the reconciled analysis",
  "confidence": 0.0 to 1.0,
  "key_insights": ["insight", ...],
  "dissenting_opinions": ["unresolved disagreement", ...]
}
Omit "dissenting_opinions" only when every disagreement was resolved. No text outside the JSON."#;

/// Reply rejected for not satisfying its required shape
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("reply is not valid JSON")]
    NotJson,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("field '{field}' has confidence {value} outside [0.0, 1.0]")]
    ConfidenceOutOfRange { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_fields() {
        assert!(OutputShape::Plan.schema().contains("required_roles"));
        assert!(OutputShape::Worker.schema().contains("critiques"));
        assert!(OutputShape::Final.schema().contains("dissenting_opinions"));
    }
}
