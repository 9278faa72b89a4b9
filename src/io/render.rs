//! Text and PNG rendering for generated maps

use crate::io::configuration::UNRESOLVED_GLYPH;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileKind;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Render the grid as text, one glyph per cell and one line per row
///
/// Collapsed cells show their kind's glyph. Cells that never collapsed show
/// [`UNRESOLVED_GLYPH`], so partial maps from failed runs stay readable.
pub fn render_as_text(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() + 1));

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let glyph = grid
                .cell([x, y])
                .and_then(|cell| cell.resolved)
                .map_or(UNRESOLVED_GLYPH, TileKind::glyph);
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

/// Export the grid as a PNG image, one pixel per cell
///
/// Collapsed cells are painted with their kind's color and cells that never
/// collapsed stay transparent. Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> crate::io::error::Result<()> {
    use crate::io::error::GenerationError;

    let mut img = ImageBuffer::new(grid.width() as u32, grid.height() as u32);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let color = grid
                .cell([x, y])
                .and_then(|cell| cell.resolved)
                .map_or(Rgba([0, 0, 0, 0]), |kind| Rgba(kind.color()));
            img.put_pixel(x as u32, y as u32, color);
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
