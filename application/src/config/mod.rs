//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`PanelPolicy`] — run control (shape retries, partial-failure handling)
//! - [`FailurePolicy`] — what to do when part of an expert stage fails

pub mod panel_policy;

pub use panel_policy::{FailurePolicy, PanelPolicy};
