use std::path::PathBuf;
use thiserror::Error;

/// The main result type for waypoint-core operations.
pub type WaypointResult<T> = Result<T, WaypointError>;

/// Enum representing possible errors within the waypoint-core library.
#[derive(Error, Debug)]
pub enum WaypointError {
    #[error("Path is empty, cannot extrapolate")]
    EmptyPath,

    #[error("Cannot compute the mean of an empty set of vectors")]
    EmptyInput,

    #[error("Invalid strategy parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error accessing path {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WaypointError {
    /// Returns true for failures caused by the caller's request (bad path, bad
    /// strategy name) as opposed to startup-time configuration problems.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            WaypointError::EmptyPath
                | WaypointError::EmptyInput
                | WaypointError::UnknownStrategy(_)
                | WaypointError::DimensionMismatch { .. }
        )
    }
}

impl From<serde_json::Error> for WaypointError {
    fn from(err: serde_json::Error) -> Self {
        WaypointError::Configuration(format!("JSON error: {}", err))
    }
}
