//! Command-line interface for generating terrain tile maps

use crate::algorithm::executor::{CollapseConfig, WaveCollapse};
use crate::io::configuration::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::render::{export_grid_as_png, render_as_text};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::AdjacencyRules;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "collapsetile")]
#[command(
    author,
    version,
    about = "Generate terrain tile maps by wave function collapse"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum iterations before declaring the run stalled
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Write the generated map as a PNG to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress and seed output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates a single generation run with progress tracking
pub struct GenerationRun {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl GenerationRun {
    /// Create a new run from CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.width * cli.height));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate a map according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation fails, generation hits a
    /// contradiction or stalls, or PNG export fails
    // Allow print for the rendered map and seed on stdout
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        let grid = Grid::new(self.cli.width, self.cli.height)?;
        let rules = AdjacencyRules::terrain();
        let seed = self.cli.seed.unwrap_or_else(rand::random);
        let config = CollapseConfig {
            iteration_cap: self.cli.iterations,
        };

        let mut driver = WaveCollapse::with_config(grid, rules, seed, config);

        loop {
            match driver.run_iteration() {
                Ok(true) => {
                    if let Some(ref pm) = self.progress_manager {
                        pm.update(driver.grid().collapsed_count(), driver.iteration());
                    }
                }
                Ok(false) => break,
                Err(error) => {
                    if let Some(ref pm) = self.progress_manager {
                        pm.abandon();
                    }
                    return Err(error);
                }
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish("map complete");
        }

        print!("{}", render_as_text(driver.grid()));
        if self.cli.should_show_progress() {
            println!("Seed: {seed}");
        }

        if let Some(ref output) = self.cli.output {
            export_grid_as_png(driver.grid(), output)?;
        }

        Ok(())
    }
}
