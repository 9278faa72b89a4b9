//! Tests for grid construction, addressing, and cell state transitions

#[cfg(test)]
mod tests {
    use collapsetile::GenerationError;
    use collapsetile::spatial::grid::Grid;
    use collapsetile::spatial::tiles::{TileDomain, TileKind};

    // Tests construction validates both dimensions
    // Verified by skipping the zero check for height
    #[test]
    fn test_new_rejects_zero_dimensions() {
        let width_error = Grid::new(0, 5).unwrap_err();
        match width_error {
            GenerationError::InvalidParameter { parameter, value, .. } => {
                assert_eq!(parameter, "width");
                assert_eq!(value, "0");
            }
            other => unreachable!("Expected InvalidParameter, got {other}"),
        }

        let height_error = Grid::new(5, 0).unwrap_err();
        match height_error {
            GenerationError::InvalidParameter { parameter, .. } => {
                assert_eq!(parameter, "height");
            }
            other => unreachable!("Expected InvalidParameter, got {other}"),
        }
    }

    // Tests construction rejects dimensions above the safety limit
    // Verified by removing the upper bound check
    #[test]
    fn test_new_rejects_oversized_dimensions() {
        use collapsetile::io::configuration::MAX_GRID_DIMENSION;

        assert!(Grid::new(MAX_GRID_DIMENSION, 1).is_ok());

        let error = Grid::new(MAX_GRID_DIMENSION + 1, 1).unwrap_err();
        assert!(matches!(
            error,
            GenerationError::InvalidParameter { parameter: "width", .. }
        ));
    }

    // Tests a fresh grid opens every cell to every kind
    // Verified by seeding cells with empty domains
    #[test]
    fn test_new_grid_is_fully_open() {
        let grid = Grid::new(3, 2).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.collapsed_count(), 0);
        assert_eq!(grid.uncollapsed_count(), 6);
        assert!(!grid.is_fully_collapsed());

        for position in grid.positions() {
            let cell = grid.cell(position).unwrap();
            assert_eq!(cell.domain.count(), TileKind::COUNT);
            assert_eq!(cell.resolved, None);
            assert!(!cell.is_collapsed());
        }
    }

    // Tests restricted construction seeds the given domain everywhere
    // Verified by seeding only the first cell
    #[test]
    fn test_with_domain_seeds_every_cell() {
        let mut domain = TileDomain::new();
        domain.insert(TileKind::Water);
        domain.insert(TileKind::Sand);

        let grid = Grid::with_domain(4, 3, &domain).unwrap();

        for position in grid.positions() {
            let cell = grid.cell(position).unwrap();
            assert_eq!(cell.domain, domain, "Cell at {position:?} has the wrong domain");
            assert!(!cell.is_collapsed());
        }
    }

    // Tests restricted construction rejects an empty domain
    // Verified by allowing grids no cell could ever resolve on
    #[test]
    fn test_with_domain_rejects_empty_domain() {
        let error = Grid::with_domain(2, 2, &TileDomain::new()).unwrap_err();

        assert!(matches!(
            error,
            GenerationError::InvalidParameter { parameter: "domain", .. }
        ));
    }

    // Tests cell access distinguishes in-bounds from out-of-bounds
    // Verified by transposing x and y in the lookup
    #[test]
    fn test_cell_bounds() {
        let grid = Grid::new(3, 2).unwrap();

        assert!(grid.cell([0, 0]).is_some());
        assert!(grid.cell([2, 1]).is_some());
        assert!(grid.cell([2, 0]).is_some(), "x runs along the width");
        assert!(grid.cell([3, 0]).is_none());
        assert!(grid.cell([0, 2]).is_none());
        assert!(grid.cell([3, 2]).is_none());
    }

    // Tests position iteration follows row-major scan order
    // Verified by iterating columns before rows
    #[test]
    fn test_positions_row_major_order() {
        let grid = Grid::new(2, 2).unwrap();

        let scanned: Vec<[usize; 2]> = grid.positions().collect();
        assert_eq!(scanned, vec![[0, 0], [1, 0], [0, 1], [1, 1]]);
    }

    // Tests indexed iteration pairs each position with its cell
    // Verified by offsetting the reported positions by one
    #[test]
    fn test_indexed_cells_match_positions() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.commit([2, 1], TileKind::Sand);

        let indexed: Vec<[usize; 2]> = grid.indexed_cells().map(|(position, _)| position).collect();
        let scanned: Vec<[usize; 2]> = grid.positions().collect();
        assert_eq!(indexed, scanned, "Both iterators must agree on scan order");

        let resolved: Vec<Option<TileKind>> = grid
            .indexed_cells()
            .map(|(_, cell)| cell.resolved)
            .collect();
        assert_eq!(resolved.iter().flatten().count(), 1);
        assert_eq!(resolved.last().copied().flatten(), Some(TileKind::Sand));
    }

    // Tests neighbor iteration clips at corners, edges, and nowhere inside
    // Verified by allowing offsets to wrap past zero
    #[test]
    fn test_neighbors_clipped_at_boundaries() {
        let grid = Grid::new(3, 3).unwrap();

        let corner: Vec<[usize; 2]> = grid.neighbors([0, 0]).map(|(position, _)| position).collect();
        assert_eq!(corner, vec![[1, 0], [0, 1]]);

        let edge: Vec<[usize; 2]> = grid.neighbors([1, 0]).map(|(position, _)| position).collect();
        assert_eq!(edge.len(), 3);

        let interior: Vec<[usize; 2]> = grid.neighbors([1, 1]).map(|(position, _)| position).collect();
        assert_eq!(interior, vec![[0, 1], [2, 1], [1, 0], [1, 2]]);

        let lonely = Grid::new(1, 1).unwrap();
        assert_eq!(lonely.neighbors([0, 0]).count(), 0);
    }

    // Tests domain replacement leaves resolution untouched
    // Verified by clearing the resolved kind on set_domain
    #[test]
    fn test_set_domain_preserves_resolution() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.commit([0, 0], TileKind::Grass);

        let mut narrowed = TileDomain::new();
        narrowed.insert(TileKind::Water);
        grid.set_domain([0, 0], narrowed.clone());
        grid.set_domain([1, 0], narrowed.clone());

        let committed = grid.cell([0, 0]).unwrap();
        assert_eq!(committed.resolved, Some(TileKind::Grass));
        assert_eq!(committed.domain, narrowed);

        let open = grid.cell([1, 0]).unwrap();
        assert_eq!(open.resolved, None);
        assert_eq!(open.domain, narrowed);

        grid.set_domain([9, 9], narrowed);
    }

    // Tests committing collapses the cell and rewrites its domain
    // Verified by leaving the old domain in place on commit
    #[test]
    fn test_commit_collapses_cell() {
        let mut grid = Grid::new(2, 2).unwrap();

        grid.commit([1, 1], TileKind::Mountain);

        let cell = grid.cell([1, 1]).unwrap();
        assert!(cell.is_collapsed());
        assert_eq!(cell.resolved, Some(TileKind::Mountain));
        assert_eq!(cell.domain.sole(), Some(TileKind::Mountain));
        assert_eq!(cell.domain.count(), 1);

        assert_eq!(grid.collapsed_count(), 1);
        assert_eq!(grid.uncollapsed_count(), 3);

        grid.commit([9, 9], TileKind::Grass);
        assert_eq!(grid.collapsed_count(), 1, "Out-of-bounds commit must be ignored");
    }

    // Tests full collapse is reached exactly when every cell commits
    // Verified by reporting completion one commit early
    #[test]
    fn test_full_collapse_accounting() {
        let mut grid = Grid::new(2, 2).unwrap();
        let positions: Vec<[usize; 2]> = grid.positions().collect();

        for (count, position) in positions.iter().enumerate() {
            assert!(!grid.is_fully_collapsed());
            assert_eq!(grid.collapsed_count(), count);
            grid.commit(*position, TileKind::Grass);
        }

        assert!(grid.is_fully_collapsed());
        assert_eq!(grid.collapsed_count(), 4);
        assert_eq!(grid.uncollapsed_count(), 0);
    }
}
