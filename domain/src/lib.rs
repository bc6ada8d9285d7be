//! Domain layer for roundtable
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Panel
//!
//! A roundtable run convenes a panel of reasoning workers around one task:
//!
//! - **Plan**: a planner reads the task and convenes weighted expert roles
//! - **Analyze**: every convened role analyzes the task in parallel
//! - **Critique**: every role reviews the full set of analyses, its own included
//! - **Integrate**: an arbiter reconciles the panel into a single result
//!
//! ## Weights and confidence
//!
//! The plan weights each role; every worker reports a confidence. Conflicts
//! between conclusions resolve by weight modulated by confidence, with the
//! deterministic part of that ordering computed in [`panel::influence`].

pub mod context;
pub mod core;
pub mod panel;
pub mod shape;

// Re-export commonly used types
pub use context::{ContextBuilder, instructions};
pub use core::{error::DomainError, model::Model, role::Role, task::Task};
pub use panel::{
    confidence::Confidence,
    influence::{RoleInfluence, rank_influence},
    plan::PlanResult,
    report::{PanelReport, RoleFailure},
    stage::Stage,
    verdict::FinalResult,
    worker::{Critique, Thought, WorkerOutput},
};
pub use shape::{
    OutputShape, ShapeError, extract_json, parse_final_response, parse_plan_response,
    parse_worker_response,
};
