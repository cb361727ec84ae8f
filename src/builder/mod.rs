//! Builder API for configured puzzles.
//!
//! The free functions in [`crate::core`] accept any disk count. A
//! [`Puzzle`] built here additionally enforces a disk-count ceiling and
//! distinct peg labels, reporting every violation at once.

pub mod error;
pub mod puzzle;

pub use error::{BuildError, InvalidPuzzle};
pub use puzzle::{Puzzle, PuzzleBuilder, DEFAULT_MAX_DISKS};
