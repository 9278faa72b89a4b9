use crate::spatial::grid::Grid;

/// Find the uncollapsed cell with the smallest candidate domain
///
/// Scans in row-major order and keeps the first cell seen at the smallest
/// size, so ties resolve deterministically toward the top-left. Returns
/// `None` once every cell has collapsed.
pub fn select_most_constrained(grid: &Grid) -> Option<[usize; 2]> {
    let mut best: Option<([usize; 2], usize)> = None;

    for (position, cell) in grid.indexed_cells() {
        if cell.is_collapsed() {
            continue;
        }
        let size = cell.domain.count();
        if best.is_none_or(|(_, smallest)| size < smallest) {
            best = Some((position, size));
        }
    }

    best.map(|(position, _)| position)
}
