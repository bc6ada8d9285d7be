//! Core domain concepts shared across all subdomains.
//!
//! - [`role::Role`] — expertise identities a panel convenes
//! - [`model::Model`] — reasoning endpoints that embody roles
//! - [`task::Task`] — a validated task submitted to the panel
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod role;
pub mod task;
