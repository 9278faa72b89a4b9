//! Spatial data structures for tile maps
//!
//! This module contains spatial-related functionality including:
//! - Grid state management and cell access
//! - Tile kinds, candidate domains, and adjacency rules

/// Grid state management and cell access
pub mod grid;
/// Tile kinds, candidate domains, and adjacency rules
pub mod tiles;

pub use grid::{Cell, Grid};
pub use tiles::{AdjacencyRules, TileDomain, TileKind};
