//! The `Move` value and its text notation.

use super::peg::{Peg, PegLabel};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Directive to move the top disk of `from` onto `to`.
///
/// Moves never name a disk; which disk moves is implied by the peg state
/// at the point the move is replayed.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Move, Peg};
///
/// let mv = Move::new(Peg::A, Peg::C);
/// assert_eq!(mv.to_string(), "A->C");
///
/// let from_tuple: Move<&str> = ("A", "C").into();
/// assert_eq!(from_tuple.from, "A");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move<L = Peg> {
    /// Peg the disk is taken from
    pub from: L,
    /// Peg the disk is placed on
    pub to: L,
}

impl<L> Move<L> {
    pub fn new(from: L, to: L) -> Self {
        Self { from, to }
    }
}

impl<L> From<(L, L)> for Move<L> {
    fn from((from, to): (L, L)) -> Self {
        Self::new(from, to)
    }
}

impl<L: PegLabel> fmt::Display for Move<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from.label(), self.to.label())
    }
}

/// Error parsing a move from text notation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseMoveError {
    #[error("Empty move")]
    Empty,

    #[error("Malformed move '{input}': expected FROM->TO, FROM-TO, 'FROM TO' or two letters")]
    Malformed { input: String },

    #[error("Line {line}: {error}")]
    Line {
        line: usize,
        error: Box<ParseMoveError>,
    },
}

/// Parse a move list written one move per line.
///
/// A line may also hold several moves separated by `,` or `;`. Blank
/// lines and anything after `#` are ignored.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{parse_moves, Move};
///
/// let moves = parse_moves("A->B\nA->C  # largest disk\nB C, \n").unwrap();
/// assert_eq!(moves.len(), 3);
/// assert_eq!(moves[2], Move::new("B".to_string(), "C".to_string()));
/// ```
pub fn parse_moves(text: &str) -> Result<Vec<Move<String>>, ParseMoveError> {
    let mut moves = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default();
        for token in content.split([',', ';']) {
            if token.trim().is_empty() {
                continue;
            }
            let mv = token.parse::<Move<String>>().map_err(|error| ParseMoveError::Line {
                line: i + 1,
                error: Box::new(error),
            })?;
            moves.push(mv);
        }
    }

    Ok(moves)
}

/// Parses `A->C`, `A-C`, `A C` and the compact two-letter form `AC`.
///
/// Labels are kept as written; unknown labels are the validator's concern.
impl FromStr for Move<String> {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseMoveError::Empty);
        }

        let malformed = || ParseMoveError::Malformed {
            input: input.to_string(),
        };

        let (from, to) = if let Some((from, to)) = input.split_once("->") {
            (from.trim(), to.trim())
        } else if let Some((from, to)) = input.split_once('-') {
            (from.trim(), to.trim())
        } else if let Some((from, to)) = input.split_once(char::is_whitespace) {
            (from.trim(), to.trim())
        } else {
            let mut chars = input.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(from), Some(to), None) => {
                    return Ok(Move::new(from.to_string(), to.to_string()));
                }
                _ => return Err(malformed()),
            }
        };

        if from.is_empty()
            || to.is_empty()
            || from.contains(char::is_whitespace)
            || to.contains(char::is_whitespace)
        {
            return Err(malformed());
        }

        Ok(Move::new(from.to_string(), to.to_string()))
    }
}
