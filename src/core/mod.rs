//! Core Tower of Hanoi types and logic.
//!
//! This module contains the pure functional core:
//! - Optimal move generation, eager and lazy
//! - Peg state simulation
//! - Fail-fast move sequence validation
//!
//! Nothing here holds global state. Every call builds its own result or
//! peg stacks, so all functions are safe to call from any thread.

mod error;
mod generate;
mod moves;
mod peg;
mod towers;
mod validate;

pub use error::MoveError;
pub use generate::{canonical, generate, move_count, Moves};
pub use moves::{parse_moves, Move, ParseMoveError};
pub use peg::{Peg, PegLabel};
pub use towers::{Disk, Towers};
pub use validate::{check, validate, Verdict};
