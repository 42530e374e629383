//! Principal-axis extrapolation.
//!
//! The path is centered on its centroid and the direction of maximum variance
//! (the "long axis" of the exploration) is estimated by power iteration over
//! the implicit covariance operator. The recency-weighted position of the
//! most recent points along that axis is then pushed further out by
//! `extrapolation_factor`.

use ndarray::Array1;
use tracing::{debug, warn};

use super::Extrapolate;
use crate::algebra::{add, dot, mean, normalize, scale, subtract, validate_path, zero};
use crate::config::PcaConfig;
use crate::error::{WaypointError, WaypointResult};
use crate::vector::Embedding;

/// Hard cap on power-iteration rounds. There is no convergence tolerance:
/// a fixed count keeps the output reproducible bit for bit.
pub const POWER_ITERATIONS: usize = 50;

/// Paths shorter than this fall back to the normalized centroid.
pub const MIN_POINTS_FOR_AXIS: usize = 3;

/// Intermediate results of the principal-axis analysis of a path.
#[derive(Debug, Clone, PartialEq)]
pub struct PrincipalAxis {
    pub centroid: Array1<f32>,
    /// Unit direction of maximum variance, or the zero vector in the degenerate case.
    pub axis: Array1<f32>,
    /// Recency-weighted mean coordinate of the windowed points along `axis`.
    pub projection: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PcaStrategy {
    config: PcaConfig,
}

impl PcaStrategy {
    /// Fails with `InvalidParameter` when `projection_window < 1` or
    /// `decay_factor` is outside (0, 1).
    pub fn new(config: PcaConfig) -> WaypointResult<Self> {
        config.validate()?;
        Ok(PcaStrategy { config })
    }

    pub fn config(&self) -> PcaConfig {
        self.config
    }

    /// Runs the centroid / principal axis / weighted projection pipeline.
    ///
    /// Returns `Ok(None)` for paths with fewer than `MIN_POINTS_FOR_AXIS` points.
    pub fn analyze(&self, path: &[Embedding]) -> WaypointResult<Option<PrincipalAxis>> {
        validate_path(path)?;
        if path.len() < MIN_POINTS_FOR_AXIS {
            return Ok(None);
        }

        let centroid = mean(path.iter().map(|p| p.view()))?;
        let centered = path
            .iter()
            .map(|p| subtract(p.view(), centroid.view()))
            .collect::<WaypointResult<Vec<_>>>()?;

        let axis = principal_axis(&centered)?;
        let projection = self.weighted_projection(&centered, &axis)?;

        Ok(Some(PrincipalAxis {
            centroid,
            axis,
            projection,
        }))
    }

    /// Normalized weighted mean of `dot(x, axis)` over the last
    /// `min(projection_window, n)` centered points. The most recent point has
    /// weight 1, the one before it `decay_factor`, then `decay_factor^2`, ...
    fn weighted_projection(&self, centered: &[Array1<f32>], axis: &Array1<f32>) -> WaypointResult<f32> {
        let window = self.config.projection_window.min(centered.len());
        let mut weighted_sum = 0.0f32;
        let mut total_weight = 0.0f32;
        let mut weight = 1.0f32;
        for x in centered.iter().rev().take(window) {
            weighted_sum += weight * dot(x.view(), axis.view())?;
            total_weight += weight;
            weight *= self.config.decay_factor;
        }
        Ok(weighted_sum / total_weight)
    }
}

impl Default for PcaStrategy {
    fn default() -> Self {
        PcaStrategy {
            config: PcaConfig::default(),
        }
    }
}

impl Extrapolate for PcaStrategy {
    fn name(&self) -> &'static str {
        "pca"
    }

    fn extrapolate(&self, path: &[Embedding]) -> WaypointResult<Embedding> {
        let dim = validate_path(path)?;
        debug!(
            strategy = self.name(),
            extrapolation_factor = self.config.extrapolation_factor,
            projection_window = self.config.projection_window,
            decay_factor = self.config.decay_factor,
            path_len = path.len(),
            dim,
            "Extrapolating"
        );

        match self.analyze(path)? {
            None => {
                let center = mean(path.iter().map(|p| p.view()))?;
                Ok(normalize(center.view()).into())
            }
            Some(PrincipalAxis { centroid, axis, projection }) => {
                let offset = scale(axis.view(), projection * self.config.extrapolation_factor);
                let target = add(centroid.view(), offset.view())?;
                Ok(normalize(target.view()).into())
            }
        }
    }
}

/// Dominant eigenvector of the covariance of `centered`, by power iteration.
///
/// Starts from the normalized first point and applies
/// `Cv = sum_i dot(x_i, v) * x_i` (the covariance matrix is never built),
/// renormalizing after each of the `POWER_ITERATIONS` rounds. Sums run in
/// input order.
///
/// If the first centered point is the zero vector the iteration stays at zero
/// and so does the returned axis. That case is logged, not corrected.
pub fn principal_axis(centered: &[Array1<f32>]) -> WaypointResult<Array1<f32>> {
    let Some(first) = centered.first() else {
        return Err(WaypointError::EmptyInput);
    };
    let dim = first.len();
    let mut v = normalize(first.view());
    if v.iter().all(|&x| x == 0.0) {
        warn!(points = centered.len(), dim, "Power iteration seed is the zero vector; principal axis will be zero");
    }

    for _ in 0..POWER_ITERATIONS {
        let mut cv = zero(dim);
        for x in centered {
            let coefficient = dot(x.view(), v.view())?;
            cv.scaled_add(coefficient, x);
        }
        v = normalize(cv.view());
    }
    Ok(v)
}
