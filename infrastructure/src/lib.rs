//! Infrastructure layer for roundtable
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileGatewayConfig, FileModelsConfig,
    FileOutputConfig, FilePanelConfig, FileRoleConfig, FileTranscriptConfig, Severity,
};
pub use logging::JsonlTranscriptLogger;
pub use openai::{GatewaySettings, OpenAiGateway, OpenAiSession};
