//! Input/output operations and error handling
//!
//! This module contains the user-facing surface of the generator:
//! - Command-line parsing and run orchestration
//! - Error types shared across the crate
//! - Progress display, text rendering, and PNG export

/// Command-line parsing and run orchestration
pub mod cli;
/// Generation constants and runtime configuration defaults
pub mod configuration;
/// Error types for map generation operations
pub mod error;
/// Progress display for collapse runs
pub mod progress;
/// Text and PNG rendering for generated maps
pub mod render;

pub use error::{GenerationError, Result};
