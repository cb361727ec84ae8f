//! Move replay errors.

use super::peg::Peg;
use super::towers::Disk;
use thiserror::Error;

/// Violations detected while replaying a move sequence.
///
/// Every variant carries the 1-based index of the offending move.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Move {index}: unknown peg label in {from}->{to}")]
    UnknownPeg {
        index: usize,
        from: String,
        to: String,
    },

    #[error("Move {index}: cannot take a disk from empty peg {peg}")]
    EmptySource { index: usize, peg: Peg },

    #[error("Move {index}: cannot put larger disk {disk} on smaller disk {top} at peg {peg}")]
    IllegalPlacement {
        index: usize,
        disk: Disk,
        top: Disk,
        peg: Peg,
    },
}

impl MoveError {
    /// The 1-based index of the move that failed.
    pub fn index(&self) -> usize {
        match self {
            Self::UnknownPeg { index, .. }
            | Self::EmptySource { index, .. }
            | Self::IllegalPlacement { index, .. } => *index,
        }
    }
}
