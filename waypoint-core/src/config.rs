use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{WaypointError, WaypointResult};
use crate::strategy::StrategyKind;

/// Parameters for the momentum (EMA) strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumConfig {
    /// EMA smoothing factor in (0, 1). Higher values weight the most recent step more heavily.
    pub alpha: f32,
}

impl MomentumConfig {
    pub fn new(alpha: f32) -> Self {
        MomentumConfig { alpha }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> WaypointResult<()> {
        check_open_unit_interval("alpha", self.alpha)
    }
}

impl Default for MomentumConfig {
    fn default() -> Self {
        MomentumConfig { alpha: 0.6 }
    }
}

/// Parameters for the principal-axis (PCA) strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PcaConfig {
    /// Multiplier applied to the weighted projection. >1 overshoots, <1 undershoots, negative reverses.
    pub extrapolation_factor: f32,
    /// Number of most recent points used for the weighted projection. At least 1.
    pub projection_window: usize,
    /// Per-step recency decay in (0, 1).
    pub decay_factor: f32,
}

impl PcaConfig {
    pub fn new(extrapolation_factor: f32, projection_window: usize, decay_factor: f32) -> Self {
        PcaConfig {
            extrapolation_factor,
            projection_window,
            decay_factor,
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> WaypointResult<()> {
        if !self.extrapolation_factor.is_finite() {
            return Err(WaypointError::InvalidParameter(format!(
                "extrapolation_factor must be finite, got {}",
                self.extrapolation_factor
            )));
        }
        if self.projection_window < 1 {
            return Err(WaypointError::InvalidParameter(
                "projection_window must be at least 1".to_string(),
            ));
        }
        check_open_unit_interval("decay_factor", self.decay_factor)
    }
}

impl Default for PcaConfig {
    fn default() -> Self {
        PcaConfig {
            extrapolation_factor: 1.5,
            projection_window: 15,
            decay_factor: 0.8,
        }
    }
}

/// Construction table for the strategy registry.
///
/// Every field has a default, so a JSON document only needs the keys it overrides:
///
/// ```json
/// { "default_strategy": "momentum", "momentum": { "alpha": 0.7 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Strategy used when the caller expresses no preference.
    pub default_strategy: StrategyKind,
    pub momentum: MomentumConfig,
    pub pca: PcaConfig,
}

impl RegistryConfig {
    /// Validates every strategy's parameters.
    pub fn validate(&self) -> WaypointResult<()> {
        self.momentum.validate()?;
        self.pca.validate()
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> WaypointResult<Self> {
        let config: RegistryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_path(path: &Path) -> WaypointResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| WaypointError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&contents).map_err(|e| match e {
            WaypointError::Configuration(msg) => {
                WaypointError::Configuration(format!("{:?}: {}", path, msg))
            }
            other => other,
        })
    }
}

// Sensible default values
impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            default_strategy: StrategyKind::Pca,
            momentum: MomentumConfig::default(),
            pca: PcaConfig::default(),
        }
    }
}

fn check_open_unit_interval(name: &str, value: f32) -> WaypointResult<()> {
    // NaN fails both comparisons and is rejected here too.
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(WaypointError::InvalidParameter(format!(
            "{} must be in (0, 1), got {}",
            name, value
        )))
    }
}
