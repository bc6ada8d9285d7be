//! Panel subdomain - the collaborative run and its artifacts
//!
//! A panel run moves through the stages in [`stage::Stage`] and leaves a
//! [`report::PanelReport`] behind. Everything here is an immutable value
//! produced by one stage and consumed by the next.

pub mod confidence;
pub mod influence;
pub mod plan;
pub mod report;
pub mod stage;
pub mod verdict;
pub mod worker;
