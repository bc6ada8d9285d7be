//! Task value object

use serde::{Deserialize, Serialize};

/// A task submitted to the panel (Value Object)
///
/// The free-form description every stage works from. Immutable for the
/// duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
}

impl Task {
    /// Create a new task
    ///
    /// # Panics
    /// Panics if the description is empty or only whitespace
    pub fn new(description: impl Into<String>) -> Self {
        let description = description.into();
        assert!(!description.trim().is_empty(), "Task cannot be empty");
        Self { description }
    }

    /// Try to create a new task, returning None if invalid
    pub fn try_new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            None
        } else {
            Some(Self { description })
        }
    }

    /// Get the task description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Consume and return the inner description
    pub fn into_description(self) -> String {
        self.description
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl From<&str> for Task {
    fn from(s: &str) -> Self {
        Task::new(s)
    }
}

impl From<String> for Task {
    fn from(s: String) -> Self {
        Task::new(s)
    }
}
