//! JSON save files for puzzle sessions
//!
//! A save file wraps the row-major tile grid with the seed, block fraction and
//! move count. Loading never coerces bad data: a file that fails to parse, has
//! an unknown version or holds an invalid grid is reported as absent so the
//! caller can start a fresh board instead.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::algorithm::generator::GeneratorConfig;
use crate::game::puzzle::Puzzle;
use crate::io::configuration::SAVE_FORMAT_VERSION;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::grid::Grid;

/// Persisted form of a puzzle session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavedPuzzle {
    /// Save format version
    pub version: u32,
    /// Seed the board was generated from, when known
    pub seed: Option<u64>,
    /// Obstacle share used for new boards
    pub block_fraction: f64,
    /// Accepted moves so far
    pub moves: u32,
    /// Board tiles, row-major
    pub grid: Grid,
}

impl SavedPuzzle {
    /// Capture a session
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self {
            version: SAVE_FORMAT_VERSION,
            seed: puzzle.seed(),
            block_fraction: puzzle.config().block_fraction,
            moves: puzzle.moves(),
            grid: puzzle.grid().clone(),
        }
    }

    /// Rebuild a playable session
    pub fn into_puzzle(self) -> Puzzle {
        let config = GeneratorConfig {
            block_fraction: self.block_fraction,
            ..GeneratorConfig::default()
        };
        Puzzle::from_grid(self.grid, config, self.seed, self.moves)
    }
}

/// Encode a grid as nested row-major JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn grid_to_json(grid: &Grid) -> Result<String> {
    Ok(serde_json::to_string(grid)?)
}

/// Decode a grid, treating malformed data as absent
pub fn grid_from_json(json: &str) -> Option<Grid> {
    serde_json::from_str(json)
        .inspect_err(|error| warn!("Rejecting stored grid: {error}"))
        .ok()
}

/// Save file location for one puzzle session
#[derive(Debug, Clone)]
pub struct PuzzleStore {
    path: PathBuf,
}

impl PuzzleStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the save file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the session, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or the file cannot be written
    pub fn save(&self, puzzle: &Puzzle) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PuzzleError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&SavedPuzzle::from_puzzle(puzzle)).map_err(
            |source| PuzzleError::Serialization {
                path: self.path.clone(),
                source,
            },
        )?;

        fs::write(&self.path, json).map_err(|source| PuzzleError::FileSystem {
            path: self.path.clone(),
            operation: "write",
            source,
        })?;

        debug!("Saved puzzle to {}", self.path.display());
        Ok(())
    }

    /// Read the session back
    ///
    /// Returns `Ok(None)` when the file does not exist or holds corrupt data.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read
    pub fn load(&self) -> Result<Option<SavedPuzzle>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) if error.kind() == ErrorKind::InvalidData => {
                warn!("Ignoring unreadable save {}: {error}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(PuzzleError::FileSystem {
                    path: self.path.clone(),
                    operation: "read",
                    source,
                });
            }
        };

        let saved: SavedPuzzle = match serde_json::from_str(&contents) {
            Ok(saved) => saved,
            Err(error) => {
                warn!("Ignoring corrupt save {}: {error}", self.path.display());
                return Ok(None);
            }
        };

        if saved.version != SAVE_FORMAT_VERSION {
            warn!(
                "Ignoring save {} with version {} (expected {SAVE_FORMAT_VERSION})",
                self.path.display(),
                saved.version
            );
            return Ok(None);
        }

        Ok(Some(saved))
    }
}
