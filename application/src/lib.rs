//! Application layer for roundtable
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod registry;
pub mod use_cases;

// Re-export commonly used types
pub use config::{FailurePolicy, PanelPolicy};
pub use ports::{
    progress::{NoProgress, ProgressNotifier},
    reasoning::{GatewayError, ReasoningGateway, ReasoningSession},
    transcript::{NoTranscript, TranscriptEvent, TranscriptLogger},
};
pub use registry::{RegistryError, RoleBinding, RoleRegistry};
pub use use_cases::executor::InvocationError;
pub use use_cases::run_panel::{RunPanelError, RunPanelInput, RunPanelUseCase};
