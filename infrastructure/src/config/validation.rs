//! Structured configuration issues.
//!
//! Loading never hard-fails on a bad value; validation collects issues
//! with severities so the CLI can print them and decide whether to run.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model field holds an empty string.
    EmptyModelName { field: String },
    /// A `[roles.<name>]` section has a blank name.
    EmptyRoleName,
    /// A value does not parse as any variant of its enum.
    InvalidEnumValue { field: String, value: String },
    /// Instruction text is present but blank.
    BlankInstructions { role: String },
    /// The gateway endpoint is unusable as given.
    InvalidGateway { field: String },
    /// An official endpoint is configured without a credential.
    MissingApiKey,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }
}
