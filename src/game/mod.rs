//! Play session state

/// Owned puzzle session with cached analysis
pub mod puzzle;

pub use puzzle::Puzzle;
