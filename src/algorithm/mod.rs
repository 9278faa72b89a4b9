/// Main collapse driver and random tile selection
pub mod executor;
/// Domain narrowing against collapsed neighbors
pub mod propagation;
/// Most-constrained cell selection
pub mod selection;

pub use executor::{CollapseConfig, DriverState, WaveCollapse};
