//! Error types for map generation operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// A cell was left with no admissible tile kinds
    ///
    /// Raised during propagation when the constraints imposed by collapsed
    /// neighbors eliminate every remaining candidate. The run cannot recover
    /// without backtracking, so generation stops here.
    Contradiction {
        /// Grid position of the emptied cell as `[x, y]`
        position: [usize; 2],
        /// Iteration on which the contradiction surfaced
        iteration: usize,
    },

    /// The iteration cap was reached with work still remaining
    Stalled {
        /// Cap that was exceeded
        iteration_cap: usize,
        /// Number of cells still uncollapsed when the run stopped
        uncollapsed: usize,
    },

    /// A random choice was requested from an empty domain
    ///
    /// Indicates a caller bypassed propagation, which reports empty domains
    /// as contradictions before any choice is made.
    EmptyDomainChoice,

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the generated map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction {
                position,
                iteration,
            } => {
                write!(
                    f,
                    "Contradiction at ({}, {}) on iteration {iteration}: every tile kind was eliminated",
                    position[0], position[1]
                )
            }
            Self::Stalled {
                iteration_cap,
                uncollapsed,
            } => {
                write!(
                    f,
                    "Stalled at iteration cap {iteration_cap} with {uncollapsed} cells uncollapsed"
                )
            }
            Self::EmptyDomainChoice => {
                write!(f, "Cannot choose a tile from an empty domain")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
