//! Transcript configuration from TOML (`[transcript]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Transcript recording configuration
///
/// # Example
///
/// ```toml
/// [transcript]
/// enabled = true
/// path = "runs/panel.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// Whether to record a JSONL transcript of each run
    pub enabled: bool,
    /// Where to write it; defaults to ./roundtable-transcript.jsonl
    pub path: Option<String>,
}

impl FileTranscriptConfig {
    pub fn resolved_path(&self) -> PathBuf {
        match &self.path {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => PathBuf::from("roundtable-transcript.jsonl"),
        }
    }
}
