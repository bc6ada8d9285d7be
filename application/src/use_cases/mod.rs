//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod executor;
pub mod run_panel;

#[cfg(test)]
pub(crate) mod testing;
