//! Build errors for puzzle configuration.

use thiserror::Error;

/// A single problem found while building a puzzle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Disk count {requested} exceeds the ceiling of {max}. Call .max_disks(n) or .unbounded() to raise it")]
    TooManyDisks { requested: i64, max: u32 },

    #[error("The {first} and {second} pegs share the label '{label}'. Peg labels must be distinct")]
    DuplicatePeg {
        first: &'static str,
        second: &'static str,
        label: String,
    },
}

/// Every problem found while building a puzzle, in check order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid puzzle: {}", .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct InvalidPuzzle {
    pub errors: Vec<BuildError>,
}
