use crate::{
    algorithm::propagation::{NarrowOutcome, narrow, sweep},
    algorithm::selection::select_most_constrained,
    spatial::grid::Grid,
    spatial::tiles::{AdjacencyRules, TileDomain, TileKind},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible collapse choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose uniformly among the kinds present in `domain`
    ///
    /// # Errors
    ///
    /// Returns an `EmptyDomainChoice` error if `domain` contains no kinds.
    pub fn uniform_choice(
        &mut self,
        domain: &TileDomain,
    ) -> crate::io::error::Result<TileKind> {
        let candidates = domain.to_vec();
        if candidates.is_empty() {
            return Err(crate::io::error::GenerationError::EmptyDomainChoice);
        }

        let index = self.rng.random_range(0..candidates.len());
        candidates
            .get(index)
            .copied()
            .ok_or(crate::io::error::GenerationError::EmptyDomainChoice)
    }
}

/// Tuning knobs for a collapse run
#[derive(Clone, Copy, Debug, Default)]
pub struct CollapseConfig {
    /// Maximum number of iterations before the run is declared stalled
    ///
    /// Defaults to the grid's cell count, which suffices for any run that
    /// collapses at least one cell per iteration.
    pub iteration_cap: Option<usize>,
}

/// Lifecycle of a collapse run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Cells remain open and no failure has occurred
    Running,
    /// Every cell has collapsed
    Done,
    /// A contradiction, stall, or bad choice ended the run early
    Failed,
}

/// Driver walking a grid from full uncertainty to a complete tile map
///
/// Each iteration runs one narrowing pass over the whole grid, then
/// force-collapses the most constrained open cell with a uniformly random
/// admissible kind. Auto-collapses cascade inside the narrowing pass itself,
/// so forced choices only spend randomness where genuine ambiguity remains.
pub struct WaveCollapse {
    /// Grid being collapsed
    grid: Grid,
    /// Adjacency table consulted by every narrowing pass
    rules: AdjacencyRules,
    /// Source of collapse randomness
    selector: RandomSelector,
    /// Lifecycle state of the run
    state: DriverState,
    /// Iterations started so far
    iteration: usize,
    /// Cap enforced before each forced collapse
    iteration_cap: usize,
}

impl WaveCollapse {
    /// Create a driver with the default iteration cap
    pub fn new(grid: Grid, rules: AdjacencyRules, seed: u64) -> Self {
        Self::with_config(grid, rules, seed, CollapseConfig::default())
    }

    /// Create a driver with explicit tuning
    pub fn with_config(
        grid: Grid,
        rules: AdjacencyRules,
        seed: u64,
        config: CollapseConfig,
    ) -> Self {
        let iteration_cap = config.iteration_cap.unwrap_or_else(|| grid.cell_count());
        Self {
            grid,
            rules,
            selector: RandomSelector::new(seed),
            state: DriverState::Running,
            iteration: 0,
            iteration_cap,
        }
    }

    /// Access the grid in its current state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Lifecycle state of the run
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// Number of iterations started so far
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Cap on iterations before the run is declared stalled
    pub const fn iteration_cap(&self) -> usize {
        self.iteration_cap
    }

    /// Consume the driver and return the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Run a single iteration of the algorithm
    ///
    /// Returns `Ok(true)` while open cells remain and `Ok(false)` once the
    /// grid is complete. One iteration is one narrowing pass plus at most
    /// one collapse of the most constrained cell.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The narrowing pass empties some cell's domain (`Contradiction`)
    /// - The iteration cap is reached while cells remain open (`Stalled`)
    pub fn run_iteration(&mut self) -> crate::io::error::Result<bool> {
        if self.state == DriverState::Done {
            return Ok(false);
        }
        self.iteration += 1;

        // Phase 1: narrow every cell against its collapsed neighbors
        let report = sweep(&mut self.grid, &self.rules);
        if let Some(position) = report.contradiction {
            self.state = DriverState::Failed;
            return Err(crate::io::error::GenerationError::Contradiction {
                position,
                iteration: self.iteration,
            });
        }

        // Phase 2: pick the most constrained cell still open
        let Some(position) = select_most_constrained(&self.grid) else {
            self.state = DriverState::Done;
            return Ok(false);
        };

        // Phase 3: a forced collapse is imminent, so enforce the cap now
        if self.iteration > self.iteration_cap {
            self.state = DriverState::Failed;
            return Err(crate::io::error::GenerationError::Stalled {
                iteration_cap: self.iteration_cap,
                uncollapsed: self.grid.uncollapsed_count(),
            });
        }

        // Phase 4: re-narrow the chosen cell so the draw sees constraints
        // from neighbors that collapsed later in this pass
        match narrow(&mut self.grid, &self.rules, position) {
            NarrowOutcome::Contradiction => {
                self.state = DriverState::Failed;
                return Err(crate::io::error::GenerationError::Contradiction {
                    position,
                    iteration: self.iteration,
                });
            }
            NarrowOutcome::AutoCollapsed(_) => return Ok(true),
            NarrowOutcome::Unchanged | NarrowOutcome::Narrowed => {}
        }

        // Phase 5: collapse it with a uniformly random admissible kind
        let domain = self
            .grid
            .cell(position)
            .map(|cell| cell.domain.clone())
            .unwrap_or_default();
        let kind = match self.selector.uniform_choice(&domain) {
            Ok(kind) => kind,
            Err(error) => {
                self.state = DriverState::Failed;
                return Err(error);
            }
        };
        self.grid.commit(position, kind);

        Ok(true)
    }

    /// Run iterations until the grid completes or the run fails
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`Self::run_iteration`].
    pub fn run(&mut self) -> crate::io::error::Result<()> {
        while self.run_iteration()? {}
        Ok(())
    }
}
