//! Shared-context assembly for each stage
//!
//! - [`builder::ContextBuilder`] — pure, deterministic stage context rendering
//! - [`instructions`] — static instruction text per endpoint

pub mod builder;
pub mod instructions;

pub use builder::ContextBuilder;
