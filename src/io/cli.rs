//! Command-line interface for generating, inspecting and playing saved puzzles

use crate::algorithm::generator::GeneratorConfig;
use crate::game::puzzle::Puzzle;
use crate::io::configuration::{
    BATCH_FILE_PREFIX, DEFAULT_BLOCK_FRACTION, DEFAULT_COLS, DEFAULT_ROWS, SAVE_FILE_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::logging::level_for;
use crate::io::persistence::PuzzleStore;
use crate::io::progress::ProgressManager;
use crate::spatial::grid::CellKey;
use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, info};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pipemaze")]
#[command(author, version, about = "Generate and play rotating pipe-tile puzzles")]
/// Command-line arguments for the puzzle tool
pub struct Cli {
    /// Increase log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress and informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Generate one puzzle file, or a directory of puzzles with --count
    Generate(GenerateArgs),
    /// Show the state of a saved puzzle
    Status {
        /// Save file to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Turn a tile of a saved puzzle and save it back
    Rotate {
        /// Save file to update
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Row of the tile, 0 at the top
        row: usize,
        /// Column of the tile, 0 at the left
        col: usize,
        /// Number of quarter turns to apply
        #[arg(short, long, default_value_t = 1)]
        times: u8,
    },
}

/// Board parameters for the generate command
#[derive(Args)]
pub struct GenerateArgs {
    /// Output file, or output directory when --count is above 1
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Share of cells turned into obstacles
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_FRACTION)]
    pub block_fraction: f64,

    /// Random seed for reproducible boards
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of boards to generate (seeds increase by one per board)
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,
}

impl GenerateArgs {
    /// Generator configuration for the board at `index` within the batch
    pub const fn config_for(&self, index: usize) -> GeneratorConfig {
        GeneratorConfig {
            rows: self.rows,
            cols: self.cols,
            block_fraction: self.block_fraction,
            seed: match self.seed {
                Some(seed) => Some(seed.wrapping_add(index as u64)),
                None => None,
            },
        }
    }

    /// Save path for the board at `index` within the batch
    pub fn path_for(&self, index: usize) -> PathBuf {
        if self.count <= 1 {
            self.output.clone()
        } else {
            self.output
                .join(format!("{BATCH_FILE_PREFIX}_{index}.{SAVE_FILE_EXTENSION}"))
        }
    }
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        level_for(self.verbose, self.quiet)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if generation parameters are invalid, a save file
    /// cannot be read or written, or a move addresses a cell off the board
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Command::Generate(args) => self.generate(args),
            Command::Status { file } => self.status(file),
            Command::Rotate {
                file,
                row,
                col,
                times,
            } => self.rotate(file, CellKey::new(*row, *col), *times),
        }
    }

    fn generate(&self, args: &GenerateArgs) -> Result<()> {
        if args.count == 0 {
            return Err(invalid_parameter(
                "count",
                &args.count,
                &"at least one board must be generated",
            ));
        }

        let mut progress = if self.should_show_progress() && args.count > 1 {
            ProgressManager::new(args.count)
        } else {
            ProgressManager::hidden(args.count)
        };

        for index in 0..args.count {
            let puzzle = Puzzle::generate(args.config_for(index))?;
            let path = args.path_for(index);
            PuzzleStore::new(&path).save(&puzzle)?;

            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            progress.complete_board(&name, puzzle.is_solved());

            if args.count == 1 {
                self.report(&path, &puzzle);
            }
        }

        progress.finish();
        info!(
            "Wrote {} of {} boards ({} solved on creation)",
            progress.completed(),
            progress.total(),
            progress.solved_on_creation()
        );
        Ok(())
    }

    fn status(&self, file: &Path) -> Result<()> {
        let puzzle = Self::load(file)?;
        self.report(file, &puzzle);
        Ok(())
    }

    fn rotate(&self, file: &Path, key: CellKey, times: u8) -> Result<()> {
        let mut puzzle = Self::load(file)?;

        for _ in 0..times {
            if !puzzle.rotate(key)? {
                info!("Cell {key} is locked and cannot be turned");
                break;
            }
        }

        PuzzleStore::new(file).save(&puzzle)?;
        self.report(file, &puzzle);
        Ok(())
    }

    fn load(file: &Path) -> Result<Puzzle> {
        PuzzleStore::new(file)
            .load()?
            .map(|saved| saved.into_puzzle())
            .ok_or_else(|| {
                invalid_parameter(
                    "file",
                    &file.display(),
                    &"no readable puzzle found (missing or corrupt save)",
                )
            })
    }

    // Allow print for the user-facing summary
    #[allow(clippy::print_stdout)]
    fn report(&self, file: &Path, puzzle: &Puzzle) {
        if self.quiet {
            return;
        }

        let grid = puzzle.grid();
        println!(
            "{}: {}x{} board, {} moves, {}/{} cells reachable, {}",
            file.display(),
            grid.rows(),
            grid.cols(),
            puzzle.moves(),
            puzzle.reachable().len(),
            grid.cell_count(),
            if puzzle.is_solved() {
                format!("solved in {} cells", puzzle.solved_path().len())
            } else {
                "unsolved".to_string()
            }
        );
    }
}
