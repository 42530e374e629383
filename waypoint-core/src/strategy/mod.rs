//! Path extrapolation strategies.
//!
//! A strategy turns a chronological path of embeddings (oldest first, current
//! position last) into a single query vector. Strategies are immutable after
//! construction and can be shared freely across threads.

pub mod centroid;
pub mod last;
pub mod momentum;
pub mod pca;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::RegistryConfig;
use crate::error::{WaypointError, WaypointResult};
use crate::vector::Embedding;

pub use centroid::CentroidStrategy;
pub use last::LastStrategy;
pub use momentum::MomentumStrategy;
pub use pca::{PcaStrategy, PrincipalAxis};

/// Trait to encapsulate extrapolation logic.
pub trait Extrapolate: Send + Sync + fmt::Debug {
    /// Stable name, used as the registry key and echoed back to callers.
    fn name(&self) -> &'static str;

    /// Computes the target embedding for `path`.
    /// Fails with `WaypointError::EmptyPath` when `path` is empty.
    fn extrapolate(&self, path: &[Embedding]) -> WaypointResult<Embedding>;
}

/// The closed set of strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Last,
    Momentum,
    Centroid,
    Pca,
}

impl StrategyKind {
    /// Every kind, in registry declaration order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Last,
        StrategyKind::Momentum,
        StrategyKind::Centroid,
        StrategyKind::Pca,
    ];

    /// Position in `ALL`.
    pub fn index(&self) -> usize {
        match self {
            StrategyKind::Last => 0,
            StrategyKind::Momentum => 1,
            StrategyKind::Centroid => 2,
            StrategyKind::Pca => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Last => "last",
            StrategyKind::Momentum => "momentum",
            StrategyKind::Centroid => "centroid",
            StrategyKind::Pca => "pca",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = WaypointError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| WaypointError::UnknownStrategy(name.to_string()))
    }
}

/// A constructed strategy. Dispatch is an exhaustive match over the variants.
#[derive(Debug, Clone)]
pub enum Strategy {
    Last(LastStrategy),
    Momentum(MomentumStrategy),
    Centroid(CentroidStrategy),
    Pca(PcaStrategy),
}

impl Strategy {
    /// Constructs the strategy for `kind` from its entry in the parameter table.
    pub fn build(kind: StrategyKind, config: &RegistryConfig) -> WaypointResult<Self> {
        Ok(match kind {
            StrategyKind::Last => Strategy::Last(LastStrategy),
            StrategyKind::Momentum => Strategy::Momentum(MomentumStrategy::new(config.momentum)?),
            StrategyKind::Centroid => Strategy::Centroid(CentroidStrategy),
            StrategyKind::Pca => Strategy::Pca(PcaStrategy::new(config.pca)?),
        })
    }

    /// Constructs the strategy for `kind` with its default parameters.
    pub fn with_defaults(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Last => Strategy::Last(LastStrategy),
            StrategyKind::Momentum => Strategy::Momentum(MomentumStrategy::default()),
            StrategyKind::Centroid => Strategy::Centroid(CentroidStrategy),
            StrategyKind::Pca => Strategy::Pca(PcaStrategy::default()),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Last(_) => StrategyKind::Last,
            Strategy::Momentum(_) => StrategyKind::Momentum,
            Strategy::Centroid(_) => StrategyKind::Centroid,
            Strategy::Pca(_) => StrategyKind::Pca,
        }
    }
}

impl Extrapolate for Strategy {
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn extrapolate(&self, path: &[Embedding]) -> WaypointResult<Embedding> {
        match self {
            Strategy::Last(s) => s.extrapolate(path),
            Strategy::Momentum(s) => s.extrapolate(path),
            Strategy::Centroid(s) => s.extrapolate(path),
            Strategy::Pca(s) => s.extrapolate(path),
        }
    }
}
