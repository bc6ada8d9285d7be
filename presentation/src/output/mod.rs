//! Report rendering for the console

pub mod console;
pub mod formatter;
