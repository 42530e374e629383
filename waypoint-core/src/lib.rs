pub mod algebra;
pub mod config;
pub mod error;
pub mod registry;
pub mod strategy;
pub mod vector;

// Re-export key types/traits for easier use
pub use config::{MomentumConfig, PcaConfig, RegistryConfig};
pub use error::{WaypointError, WaypointResult};
pub use registry::{Extrapolation, StrategyRegistry};
pub use strategy::{Extrapolate, Strategy, StrategyKind};
pub use vector::Embedding;
