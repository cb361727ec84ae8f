//! Hanoi: a pure functional Tower of Hanoi core
//!
//! The crate generates the optimal move sequence for the classic
//! three-peg puzzle and checks arbitrary move sequences against the rules.
//! Both are pure functions with no shared state.
//!
//! # Core Concepts
//!
//! - **Moves**: `Move { from, to }` values over any [`PegLabel`]
//! - **Generation**: [`generate`] (eager, recursive) and [`Moves`] (lazy, explicit stack)
//! - **Validation**: [`validate`] replays moves over [`Towers`] and reports the first violation
//! - **Puzzles**: [`builder::PuzzleBuilder`] adds a disk-count ceiling and label checks
//!
//! # Example
//!
//! ```rust
//! use hanoi::{canonical, check, validate, Move, MoveError, Peg};
//!
//! let moves = canonical(3);
//! assert_eq!(moves.len(), 7);
//! assert!(validate(3, &moves).is_ok());
//!
//! // Disk 2 cannot go on top of disk 1.
//! let illegal = [Move::new("A", "C"), Move::new("A", "C")];
//! let err = validate(2, &illegal).unwrap_err();
//! assert_eq!(
//!     err,
//!     MoveError::IllegalPlacement { index: 2, disk: 2, top: 1, peg: Peg::C }
//! );
//!
//! let (ok, detail) = check(2, &illegal).into_parts();
//! assert!(!ok);
//! assert!(detail.unwrap().contains("Move 2"));
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, InvalidPuzzle, Puzzle, PuzzleBuilder};
pub use self::core::{
    canonical, check, generate, move_count, parse_moves, validate, Disk, Move, MoveError, Moves,
    ParseMoveError, Peg, PegLabel, Towers, Verdict,
};
