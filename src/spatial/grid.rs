//! Grid state for rectangular tile maps
//!
//! Cells pair a candidate domain with an optional resolved kind. Mutation is
//! mediated through [`Grid::set_domain`] and [`Grid::commit`] so resolved
//! kinds always agree with their domains.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::{TileDomain, TileKind};

/// Orthogonal neighbor offsets in scan order: left, right, up, down
const NEIGHBOR_OFFSETS: [[isize; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// A single map cell
#[derive(Clone, Debug)]
pub struct Cell {
    /// Tile kinds this cell may still become
    pub domain: TileDomain,
    /// Final tile kind once the cell has collapsed
    pub resolved: Option<TileKind>,
}

impl Cell {
    /// Whether this cell has collapsed to a single kind
    pub const fn is_collapsed(&self) -> bool {
        self.resolved.is_some()
    }
}

/// Rectangular grid of cells addressed as `[x, y]`
///
/// `x` runs along the width and `y` along the height, with `[0, 0]` in the
/// top-left corner. Storage is row-major, so scans visit `[0, 0]`, `[1, 0]`,
/// and onward a row at a time.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid with every cell open to every tile kind
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameter` error if either dimension is zero or
    /// exceeds [`MAX_GRID_DIMENSION`].
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_domain(width, height, &TileDomain::all())
    }

    /// Create a grid with every cell restricted to `domain`
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameter` error if either dimension is zero,
    /// exceeds [`MAX_GRID_DIMENSION`], or `domain` contains no tile kinds.
    pub fn with_domain(width: usize, height: usize, domain: &TileDomain) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        if domain.is_empty() {
            return Err(invalid_parameter(
                "domain",
                domain,
                &"initial domain must contain at least one tile kind",
            ));
        }

        let cell = Cell {
            domain: domain.clone(),
            resolved: None,
        };
        Ok(Self {
            cells: Array2::from_elem((height, width), cell),
        })
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Borrow the cell at `position`, if in bounds
    pub fn cell(&self, position: [usize; 2]) -> Option<&Cell> {
        self.cells.get((position[1], position[0]))
    }

    /// All positions in row-major scan order
    pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        let width = self.width();
        (0..self.height()).flat_map(move |y| (0..width).map(move |x| [x, y]))
    }

    /// Iterate positions and cells in row-major scan order
    pub fn indexed_cells(&self) -> impl Iterator<Item = ([usize; 2], &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((y, x), cell)| ([x, y], cell))
    }

    /// Iterate the in-bounds orthogonal neighbors of `position`
    pub fn neighbors(&self, position: [usize; 2]) -> impl Iterator<Item = ([usize; 2], &Cell)> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |offset| {
            let x = position[0].checked_add_signed(offset[0])?;
            let y = position[1].checked_add_signed(offset[1])?;
            self.cell([x, y]).map(|cell| ([x, y], cell))
        })
    }

    /// Replace the candidate domain at `position`
    ///
    /// Out-of-bounds positions are ignored. The resolved kind, if any, is
    /// left untouched.
    pub fn set_domain(&mut self, position: [usize; 2], domain: TileDomain) {
        if let Some(cell) = self.cells.get_mut((position[1], position[0])) {
            cell.domain = domain;
        }
    }

    /// Collapse the cell at `position` to a single kind
    ///
    /// The domain is rewritten to contain exactly `kind` so domain counts
    /// stay consistent with resolution. Out-of-bounds positions are ignored.
    pub fn commit(&mut self, position: [usize; 2], kind: TileKind) {
        if let Some(cell) = self.cells.get_mut((position[1], position[0])) {
            let mut domain = TileDomain::new();
            domain.insert(kind);
            cell.domain = domain;
            cell.resolved = Some(kind);
        }
    }

    /// Number of cells that have collapsed
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }

    /// Number of cells still awaiting collapse
    pub fn uncollapsed_count(&self) -> usize {
        self.cells.len() - self.collapsed_count()
    }

    /// Whether every cell has collapsed
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
