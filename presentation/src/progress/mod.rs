//! Progress reporting during panel runs

pub mod reporter;
