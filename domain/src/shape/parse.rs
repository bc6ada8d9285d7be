//! Shape parsing from reasoning replies
//!
//! Replies arrive as free text. Extraction accepts a ```json fenced
//! block, the whole reply as JSON, or the outermost brace-delimited
//! window, in that order. Field validation is strict: anything the
//! shape requires and the reply lacks is an error for the caller to
//! retry or surface.

use std::collections::HashMap;

use serde_json::Value;

use crate::core::error::DomainError;
use crate::core::role::Role;
use crate::panel::confidence::Confidence;
use crate::panel::plan::PlanResult;
use crate::panel::verdict::FinalResult;
use crate::panel::worker::{Critique, Thought, WorkerOutput};
use crate::shape::ShapeError;

/// Pull a JSON object out of a reply
pub fn extract_json(reply: &str) -> Result<Value, ShapeError> {
    // Look for ```json ... ``` blocks
    let mut in_block = false;
    let mut block = String::new();

    for line in reply.lines() {
        if line.trim() == "```json" {
            in_block = true;
            block.clear();
        } else if in_block && line.trim() == "```" {
            in_block = false;
            if let Ok(value) = serde_json::from_str::<Value>(&block) {
                return Ok(value);
            }
        } else if in_block {
            block.push_str(line);
            block.push('\n');
        }
    }

    // Try the entire reply as JSON
    if let Ok(value) = serde_json::from_str::<Value>(reply) {
        return Ok(value);
    }

    // Fall back to the outermost brace window
    if let (Some(start), Some(end)) = (reply.find('{'), reply.rfind('}'))
        && start < end
        && let Ok(value) = serde_json::from_str::<Value>(&reply[start..=end])
    {
        return Ok(value);
    }

    Err(ShapeError::NotJson)
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ShapeError {
    ShapeError::InvalidField {
        field,
        reason: reason.into(),
    }
}

fn require_str<'a>(json: &'a Value, field: &'static str) -> Result<&'a str, ShapeError> {
    let value = json.get(field).ok_or(ShapeError::MissingField(field))?;
    value
        .as_str()
        .ok_or_else(|| invalid(field, "expected a string"))
}

fn require_confidence(json: &Value, field: &'static str) -> Result<Confidence, ShapeError> {
    let value = json.get(field).ok_or(ShapeError::MissingField(field))?;
    let number = value
        .as_f64()
        .ok_or_else(|| invalid(field, "expected a number"))?;
    Confidence::try_new(number).map_err(|_| ShapeError::ConfidenceOutOfRange {
        field,
        value: number,
    })
}

/// Parse a planner reply into a [`PlanResult`]
pub fn parse_plan_response(reply: &str) -> Result<PlanResult, ShapeError> {
    let json = extract_json(reply)?;
    let task_analysis = require_str(&json, "task_analysis")?;

    let roles_json = json
        .get("required_roles")
        .ok_or(ShapeError::MissingField("required_roles"))?
        .as_array()
        .ok_or_else(|| invalid("required_roles", "expected an array"))?;

    let mut required_roles = Vec::with_capacity(roles_json.len());
    for entry in roles_json {
        let name = entry
            .as_str()
            .ok_or_else(|| invalid("required_roles", "expected role names"))?;
        if name.trim().is_empty() {
            return Err(invalid("required_roles", "empty role name"));
        }
        required_roles.push(Role::from_name(name));
    }

    let weights_json = json
        .get("weights")
        .ok_or(ShapeError::MissingField("weights"))?
        .as_object()
        .ok_or_else(|| invalid("weights", "expected an object"))?;

    let mut weights = HashMap::new();
    for (name, value) in weights_json {
        let weight = value
            .as_f64()
            .ok_or_else(|| invalid("weights", format!("weight for '{}' is not a number", name)))?;
        weights.insert(Role::from_name(name), weight);
    }

    PlanResult::try_new(task_analysis, required_roles, weights).map_err(|e| match e {
        DomainError::DuplicateRole(role) => {
            invalid("required_roles", format!("duplicate role '{}'", role))
        }
        DomainError::MissingWeight(role) => {
            invalid("weights", format!("no weight for role '{}'", role))
        }
        DomainError::InvalidWeight { role, weight } => invalid(
            "weights",
            format!("weight {} for role '{}' must be non-negative and finite", weight, role),
        ),
        other => invalid("weights", other.to_string()),
    })
}

/// Parse an expert reply into a [`WorkerOutput`]
///
/// The worker's identity comes from the caller, never from the reply.
pub fn parse_worker_response(role: &Role, reply: &str) -> Result<WorkerOutput, ShapeError> {
    let json = extract_json(reply)?;

    let thought = Thought::new(
        require_str(&json, "reasoning")?,
        require_str(&json, "conclusion")?,
        require_confidence(&json, "confidence")?,
    );

    let mut critiques = Vec::new();
    if let Some(raw) = json.get("critiques")
        && !raw.is_null()
    {
        let entries = raw
            .as_array()
            .ok_or_else(|| invalid("critiques", "expected an array"))?;
        for entry in entries {
            let target = require_str(entry, "target_role")?;
            let feedback = require_str(entry, "feedback")?;
            let confidence = require_confidence(entry, "confidence")?;

            let mut critique = Critique::new(Role::from_name(target), feedback, confidence);
            if let Some(correction) = entry.get("suggested_correction").and_then(|v| v.as_str())
                && !correction.trim().is_empty()
            {
                critique = critique.with_correction(correction);
            }
            critiques.push(critique);
        }
    }

    Ok(WorkerOutput::new(role.clone(), thought).with_critiques(critiques))
}

/// Parse an arbiter reply into a [`FinalResult`]
pub fn parse_final_response(reply: &str) -> Result<FinalResult, ShapeError> {
    let json = extract_json(reply)?;
    let integrated = require_str(&json, "integrated_analysis")?;
    let confidence = require_confidence(&json, "confidence")?;

    let mut insights = Vec::new();
    if let Some(raw) = json.get("key_insights")
        && !raw.is_null()
    {
        let entries = raw
            .as_array()
            .ok_or_else(|| invalid("key_insights", "expected an array"))?;
        for entry in entries {
            let insight = entry
                .as_str()
                .ok_or_else(|| invalid("key_insights", "expected strings"))?;
            if insight.trim().is_empty() {
                return Err(invalid("key_insights", "empty insight"));
            }
            insights.push(insight.to_string());
        }
    }

    let mut result = FinalResult::new(integrated, confidence).with_key_insights(insights);

    if let Some(raw) = json.get("dissenting_opinions")
        && !raw.is_null()
    {
        let entries = raw
            .as_array()
            .ok_or_else(|| invalid("dissenting_opinions", "expected an array"))?;
        let dissents: Vec<String> = entries
            .iter()
            .filter_map(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect();
        if !dissents.is_empty() {
            result = result.with_dissenting_opinions(dissents);
        }
    }

    Ok(result)
}
