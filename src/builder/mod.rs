//! Builder API for ergonomic chart construction.
//!
//! This module provides a fluent chart builder and the `context_struct!`
//! macro for declaring typed contexts with minimal boilerplate.

pub mod chart;
pub mod error;
pub mod macros;

pub use chart::StateChartBuilder;
pub use error::BuildError;
