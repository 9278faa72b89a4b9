//! Generation constants and runtime configuration defaults

// Default map dimensions when none are requested
/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 10;
/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Glyph rendered for cells that never collapsed
pub const UNRESOLVED_GLYPH: char = '.';

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
