//! Build errors for state chart construction and loading.

use thiserror::Error;

/// Errors that can occur when building or loading a state chart.
///
/// Only chart construction can fail. A built chart always yields a
/// working machine, however it is shaped.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("Initial context not specified. Call .context(value) before .build()")]
    MissingContext,

    #[error("Failed to parse state chart: {0}")]
    Json(#[from] serde_json::Error),
}
