//! Per-role overrides from TOML (`[roles.<name>]` sections)

use serde::{Deserialize, Serialize};

/// One role's overrides
///
/// Sections for the built-in roles override their model or instruction
/// text; sections with new names add custom roles to the roster.
///
/// # Example
///
/// ```toml
/// [roles.accounting]
/// model = "claude-sonnet-4.5"
///
/// [roles.forensics]
/// instructions = "You are a forensic accounting expert. Trace fund flows and flag irregularities."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoleConfig {
    /// Model override; falls back to `models.default`
    pub model: Option<String>,
    /// Instruction text override; falls back to the built-in text for
    /// known roles, or generated text for custom ones
    pub instructions: Option<String>,
}
