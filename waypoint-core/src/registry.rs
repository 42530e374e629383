//! Named lookup of the configured strategies.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RegistryConfig;
use crate::error::WaypointResult;
use crate::strategy::{Extrapolate, Strategy, StrategyKind};
use crate::vector::Embedding;

/// Result of a registry call. `strategy` is the name of the strategy that
/// actually ran, so responses built from it are self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extrapolation {
    pub strategy: StrategyKind,
    pub vector: Embedding,
}

/// Immutable strategy table, built once at startup.
///
/// Holds one instance of every `StrategyKind`, indexed in `StrategyKind::ALL`
/// order, plus the default used when the caller names none.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: Vec<Strategy>,
    default: StrategyKind,
}

impl StrategyRegistry {
    /// Builds every strategy from `config`. Invalid parameters surface here as
    /// `InvalidParameter` and should abort startup.
    pub fn new(config: RegistryConfig) -> WaypointResult<Self> {
        config.validate()?;
        let strategies = StrategyKind::ALL
            .into_iter()
            .map(|kind| Strategy::build(kind, &config))
            .collect::<WaypointResult<Vec<_>>>()?;
        let registry = StrategyRegistry {
            strategies,
            default: config.default_strategy,
        };

        info!(
            default = %registry.default,
            alpha = config.momentum.alpha,
            extrapolation_factor = config.pca.extrapolation_factor,
            projection_window = config.pca.projection_window,
            decay_factor = config.pca.decay_factor,
            "Strategy registry built"
        );
        Ok(registry)
    }

    /// Registry built from the hard-coded parameter table
    /// (momentum alpha 0.6, pca (1.5, 15, 0.8), default "pca").
    pub fn with_defaults() -> Self {
        StrategyRegistry {
            strategies: StrategyKind::ALL.into_iter().map(Strategy::with_defaults).collect(),
            default: RegistryConfig::default().default_strategy,
        }
    }

    /// Looks up a strategy by its registered name.
    pub fn get(&self, name: &str) -> WaypointResult<&Strategy> {
        let kind: StrategyKind = name.parse()?;
        Ok(self.by_kind(kind))
    }

    pub fn by_kind(&self, kind: StrategyKind) -> &Strategy {
        // Both constructors fill the table in `StrategyKind::ALL` order.
        &self.strategies[kind.index()]
    }

    pub fn contains(&self, name: &str) -> bool {
        name.parse::<StrategyKind>().is_ok()
    }

    /// Registered names, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn default_name(&self) -> &'static str {
        self.default.as_str()
    }

    pub fn default_strategy(&self) -> &Strategy {
        self.by_kind(self.default)
    }

    /// Named strategy, or the default when `name` is `None`.
    pub fn resolve(&self, name: Option<&str>) -> WaypointResult<&Strategy> {
        match name {
            Some(name) => self.get(name),
            None => Ok(self.default_strategy()),
        }
    }

    /// Extrapolates `path` with the named strategy (or the default) and
    /// reports which strategy produced the vector.
    pub fn extrapolate(&self, name: Option<&str>, path: &[Embedding]) -> WaypointResult<Extrapolation> {
        let strategy = self.resolve(name)?;
        debug!(requested = ?name, strategy = strategy.name(), path_len = path.len(), "Dispatching extrapolation");
        let vector = strategy.extrapolate(path)?;
        Ok(Extrapolation {
            strategy: strategy.kind(),
            vector,
        })
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
