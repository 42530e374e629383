use tracing::debug;

use super::Extrapolate;
use crate::algebra::validate_path;
use crate::error::{WaypointError, WaypointResult};
use crate::vector::Embedding;

/// Returns the current position unchanged. Baseline for the other strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastStrategy;

impl Extrapolate for LastStrategy {
    fn name(&self) -> &'static str {
        "last"
    }

    fn extrapolate(&self, path: &[Embedding]) -> WaypointResult<Embedding> {
        let dim = validate_path(path)?;
        debug!(strategy = self.name(), path_len = path.len(), dim, "Extrapolating");
        path.last().cloned().ok_or(WaypointError::EmptyPath)
    }
}
