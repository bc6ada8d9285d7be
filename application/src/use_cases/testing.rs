//! Scripted gateway for exercising the pipeline without a live capability.

use crate::ports::reasoning::{GatewayError, ReasoningGateway, ReasoningSession};
use async_trait::async_trait;
use roundtable_domain::{Model, OutputShape};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
enum ScriptedReply {
    Ok(String),
    OkAfter(Duration, String),
    Fail(String),
}

#[derive(Clone)]
pub(crate) struct RecordedCall {
    pub model: String,
    pub shape: &'static str,
    pub context: String,
    pub instructions: String,
}

struct ScriptInner {
    replies: Mutex<HashMap<(String, &'static str), Vec<ScriptedReply>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

/// Gateway whose replies are scripted per (model, shape) pair.
///
/// Scripted replies are consumed in order; the last one repeats forever,
/// so a single entry scripts a constant answer. Every request is recorded
/// with its context and instructions for later assertions.
pub(crate) struct ScriptedGateway {
    inner: Arc<ScriptInner>,
}

impl ScriptedGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Arc::new(ScriptInner {
                replies: Mutex::new(HashMap::new()),
                calls: Mutex::new(Vec::new()),
            }),
        })
    }

    fn push(&self, model: &str, shape: OutputShape, reply: ScriptedReply) {
        self.inner
            .replies
            .lock()
            .unwrap()
            .entry((model.to_string(), shape.as_str()))
            .or_default()
            .push(reply);
    }

    pub fn script(&self, model: &str, shape: OutputShape, reply: impl Into<String>) {
        self.push(model, shape, ScriptedReply::Ok(reply.into()));
    }

    pub fn script_delayed(
        &self,
        model: &str,
        shape: OutputShape,
        delay: Duration,
        reply: impl Into<String>,
    ) {
        self.push(model, shape, ScriptedReply::OkAfter(delay, reply.into()));
    }

    pub fn script_failure(&self, model: &str, shape: OutputShape, message: impl Into<String>) {
        self.push(model, shape, ScriptedReply::Fail(message.into()));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn total_requests(&self) -> usize {
        self.inner.calls.lock().unwrap().len()
    }

    pub fn requests_for(&self, model: &str, shape: OutputShape) -> usize {
        self.inner
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.model == model && c.shape == shape.as_str())
            .count()
    }

    pub fn requests_with_shape(&self, shape: OutputShape) -> usize {
        self.inner
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.shape == shape.as_str())
            .count()
    }

    pub fn contexts_for(&self, model: &str, shape: OutputShape) -> Vec<String> {
        self.inner
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.model == model && c.shape == shape.as_str())
            .map(|c| c.context.clone())
            .collect()
    }
}

struct ScriptedSession {
    model: Model,
    instructions: String,
    inner: Arc<ScriptInner>,
}

#[async_trait]
impl ReasoningGateway for ScriptedGateway {
    async fn open_session(
        &self,
        model: &Model,
        instructions: &str,
    ) -> Result<Box<dyn ReasoningSession>, GatewayError> {
        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            instructions: instructions.to_string(),
            inner: Arc::clone(&self.inner),
        }))
    }
}

#[async_trait]
impl ReasoningSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn request(&self, context: &str, shape: OutputShape) -> Result<String, GatewayError> {
        self.inner.calls.lock().unwrap().push(RecordedCall {
            model: self.model.as_str().to_string(),
            shape: shape.as_str(),
            context: context.to_string(),
            instructions: self.instructions.clone(),
        });

        let reply = {
            let mut replies = self.inner.replies.lock().unwrap();
            let queue = replies.get_mut(&(self.model.as_str().to_string(), shape.as_str()));
            match queue {
                Some(queue) if queue.len() > 1 => queue.remove(0),
                Some(queue) if queue.len() == 1 => queue[0].clone(),
                _ => ScriptedReply::Fail(format!(
                    "no scripted {} reply for {}",
                    shape.as_str(),
                    self.model
                )),
            }
        };

        match reply {
            ScriptedReply::Ok(text) => Ok(text),
            ScriptedReply::OkAfter(delay, text) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            ScriptedReply::Fail(message) => Err(GatewayError::RequestFailed(message)),
        }
    }
}

pub(crate) fn plan_reply(analysis: &str, roles: &[(&str, f64)]) -> String {
    let names: Vec<&str> = roles.iter().map(|(name, _)| *name).collect();
    let weights: serde_json::Map<String, serde_json::Value> = roles
        .iter()
        .map(|(name, weight)| (name.to_string(), json!(weight)))
        .collect();
    json!({
        "task_analysis": analysis,
        "required_roles": names,
        "weights": weights,
    })
    .to_string()
}

pub(crate) fn worker_reply(conclusion: &str, confidence: f64) -> String {
    json!({
        "reasoning": format!("thinking through: {}", conclusion),
        "conclusion": conclusion,
        "confidence": confidence,
    })
    .to_string()
}

pub(crate) fn worker_reply_with_critique(
    conclusion: &str,
    confidence: f64,
    target: &str,
    feedback: &str,
) -> String {
    json!({
        "reasoning": format!("thinking through: {}", conclusion),
        "conclusion": conclusion,
        "confidence": confidence,
        "critiques": [{
            "target_role": target,
            "feedback": feedback,
            "confidence": 0.8,
        }],
    })
    .to_string()
}

pub(crate) fn final_reply(analysis: &str, confidence: f64) -> String {
    json!({
        "integrated_analysis": analysis,
        "confidence": confidence,
        "key_insights": ["insight one"],
    })
    .to_string()
}

pub(crate) fn final_reply_with_dissent(analysis: &str, confidence: f64, dissent: &str) -> String {
    json!({
        "integrated_analysis": analysis,
        "confidence": confidence,
        "key_insights": ["insight one"],
        "dissenting_opinions": [dissent],
    })
    .to_string()
}
