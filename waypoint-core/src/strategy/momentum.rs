use ndarray::Array1;
use tracing::debug;

use super::Extrapolate;
use crate::algebra::{add, normalize, scale, subtract, validate_path};
use crate::config::MomentumConfig;
use crate::error::{WaypointError, WaypointResult};
use crate::vector::Embedding;

/// Continues the path along an exponential moving average of its step
/// velocities.
///
/// The EMA carries both heading (direction) and exploration speed
/// (magnitude). It is added to the current position and the sum is projected
/// back onto the unit hypersphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumStrategy {
    config: MomentumConfig,
}

impl MomentumStrategy {
    /// Fails with `InvalidParameter` unless `0 < config.alpha < 1`.
    pub fn new(config: MomentumConfig) -> WaypointResult<Self> {
        config.validate()?;
        Ok(MomentumStrategy { config })
    }

    pub fn alpha(&self) -> f32 {
        self.config.alpha
    }

    /// Recency-weighted average of the per-step velocities
    /// `path[i] - path[i-1]`, seeded with the first velocity.
    ///
    /// Returns `Ok(None)` for a single-point path (no velocity signal).
    pub fn velocity_ema(&self, path: &[Embedding]) -> WaypointResult<Option<Array1<f32>>> {
        validate_path(path)?;
        let alpha = self.config.alpha;
        let mut ema: Option<Array1<f32>> = None;
        for step in path.windows(2) {
            let velocity = subtract(step[1].view(), step[0].view())?;
            ema = Some(match ema {
                None => velocity,
                Some(prev) => add(
                    scale(velocity.view(), alpha).view(),
                    scale(prev.view(), 1.0 - alpha).view(),
                )?,
            });
        }
        Ok(ema)
    }
}

impl Default for MomentumStrategy {
    fn default() -> Self {
        MomentumStrategy {
            config: MomentumConfig::default(),
        }
    }
}

impl Extrapolate for MomentumStrategy {
    fn name(&self) -> &'static str {
        "momentum"
    }

    fn extrapolate(&self, path: &[Embedding]) -> WaypointResult<Embedding> {
        let dim = validate_path(path)?;
        debug!(strategy = self.name(), alpha = self.config.alpha, path_len = path.len(), dim, "Extrapolating");

        let current = path.last().ok_or(WaypointError::EmptyPath)?;
        match self.velocity_ema(path)? {
            None => Ok(current.clone()),
            Some(ema) => {
                let target = add(current.view(), ema.view())?;
                Ok(normalize(target.view()).into())
            }
        }
    }
}
