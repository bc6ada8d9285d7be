//! Reasoning gateway port
//!
//! Defines the interface to the external reasoning capability. One
//! invocation sends role instructions, a context snapshot, and a required
//! output shape; one raw reply comes back. The engine never sees inside.

use async_trait::async_trait;
use roundtable_domain::{Model, OutputShape};
use thiserror::Error;

/// Errors that can occur at the reasoning boundary
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to the reasoning capability
///
/// This port is the application layer's only view of the capability.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ReasoningGateway: Send + Sync {
    /// Open a session bound to a model and its role instructions
    async fn open_session(
        &self,
        model: &Model,
        instructions: &str,
    ) -> Result<Box<dyn ReasoningSession>, GatewayError>;
}

/// An active reasoning session
///
/// A fresh session is opened per invocation. Stages share data only
/// through rendered context, never through session state.
#[async_trait]
pub trait ReasoningSession: Send + Sync {
    /// The model this session speaks to
    fn model(&self) -> &Model;

    /// Send a context snapshot and get the raw reply
    async fn request(&self, context: &str, shape: OutputShape) -> Result<String, GatewayError>;
}
