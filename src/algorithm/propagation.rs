use crate::{
    spatial::grid::Grid,
    spatial::tiles::{AdjacencyRules, TileKind},
};

/// Result of narrowing a single cell against its collapsed neighbors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NarrowOutcome {
    /// The domain kept every candidate it had
    Unchanged,
    /// The domain lost at least one candidate but keeps two or more
    Narrowed,
    /// The domain shrank to a single kind and the cell collapsed to it
    AutoCollapsed(TileKind),
    /// Every candidate was eliminated
    Contradiction,
}

/// Tally of one full narrowing pass over the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Cells whose domain shrank without collapsing
    pub cells_narrowed: usize,
    /// Cells that collapsed because a single candidate remained
    pub auto_collapsed: usize,
    /// Position of the first emptied domain, if any
    pub contradiction: Option<[usize; 2]>,
}

impl SweepReport {
    /// Whether the pass changed any cell at all
    pub const fn changed_anything(&self) -> bool {
        self.cells_narrowed > 0 || self.auto_collapsed > 0 || self.contradiction.is_some()
    }
}

/// Narrow the domain at `position` against its collapsed neighbors
///
/// Survivors are the candidates permitted next to every collapsed orthogonal
/// neighbor. A domain reduced to one kind collapses the cell immediately; a
/// domain reduced to none is recorded as empty and reported as a
/// contradiction. Collapsed cells and out-of-bounds positions are left
/// untouched.
pub fn narrow(grid: &mut Grid, rules: &AdjacencyRules, position: [usize; 2]) -> NarrowOutcome {
    let Some(cell) = grid.cell(position) else {
        return NarrowOutcome::Unchanged;
    };
    if cell.is_collapsed() {
        return NarrowOutcome::Unchanged;
    }

    let before = cell.domain.count();
    let mut survivors = cell.domain.clone();
    for (_, neighbor) in grid.neighbors(position) {
        if let Some(kind) = neighbor.resolved {
            survivors.intersect_with(rules.permitted(kind));
        }
    }

    if survivors.is_empty() {
        grid.set_domain(position, survivors);
        return NarrowOutcome::Contradiction;
    }
    if let Some(kind) = survivors.sole() {
        grid.commit(position, kind);
        return NarrowOutcome::AutoCollapsed(kind);
    }

    let after = survivors.count();
    grid.set_domain(position, survivors);
    if after < before {
        NarrowOutcome::Narrowed
    } else {
        NarrowOutcome::Unchanged
    }
}

/// Run one narrowing pass over every cell in row-major scan order
///
/// Cells collapsed earlier in the pass constrain the cells visited after
/// them, so a single pass can cascade auto-collapses across the grid. The
/// pass stops at the first contradiction, leaving later cells untouched.
pub fn sweep(grid: &mut Grid, rules: &AdjacencyRules) -> SweepReport {
    let width = grid.width();
    let height = grid.height();
    let mut report = SweepReport::default();

    for y in 0..height {
        for x in 0..width {
            match narrow(grid, rules, [x, y]) {
                NarrowOutcome::Unchanged => {}
                NarrowOutcome::Narrowed => report.cells_narrowed += 1,
                NarrowOutcome::AutoCollapsed(_) => report.auto_collapsed += 1,
                NarrowOutcome::Contradiction => {
                    report.contradiction = Some([x, y]);
                    return report;
                }
            }
        }
    }

    report
}
