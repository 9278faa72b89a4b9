//! Wave function collapse algorithm for terrain tile map generation
//!
//! The system narrows per-cell candidate domains under adjacency constraints,
//! repeatedly collapsing the most constrained cell with a uniformly random
//! admissible tile until the map completes or a contradiction surfaces.

#![forbid(unsafe_code)]

/// Core algorithm implementation including propagation, selection, and the collapse driver
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Spatial grid management and tile domain utilities
pub mod spatial;

pub use io::error::{GenerationError, Result};
