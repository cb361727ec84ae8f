//! Fluent builder for puzzles with a disk-count ceiling.

use crate::builder::error::{BuildError, InvalidPuzzle};
use crate::core::{generate, move_count, Move, Moves, Peg, PegLabel};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default ceiling on the disk count: about a million moves.
pub const DEFAULT_MAX_DISKS: u32 = 20;

/// Builder for [`Puzzle`] values.
///
/// Starts from zero disks on the canonical pegs (`A` to `C` via `B`) with
/// the [`DEFAULT_MAX_DISKS`] ceiling.
///
/// # Example
///
/// ```rust
/// use hanoi::builder::{BuildError, PuzzleBuilder};
///
/// let puzzle = PuzzleBuilder::new().disks(3).build().unwrap();
/// assert_eq!(puzzle.move_count(), 7);
///
/// let err = PuzzleBuilder::new()
///     .disks(30)
///     .pegs("A", "A", "B")
///     .build()
///     .unwrap_err();
/// assert_eq!(err.errors.len(), 2);
/// assert!(err
///     .errors
///     .iter()
///     .any(|e| matches!(e, BuildError::TooManyDisks { requested: 30, .. })));
/// ```
#[derive(Clone, Debug)]
pub struct PuzzleBuilder<L: PegLabel = Peg> {
    disks: i64,
    source: L,
    target: L,
    auxiliary: L,
    max_disks: Option<u32>,
}

impl PuzzleBuilder<Peg> {
    pub fn new() -> Self {
        Self {
            disks: 0,
            source: Peg::A,
            target: Peg::C,
            auxiliary: Peg::B,
            max_disks: Some(DEFAULT_MAX_DISKS),
        }
    }
}

impl Default for PuzzleBuilder<Peg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: PegLabel> PuzzleBuilder<L> {
    /// Set the disk count. Zero or negative counts build an empty puzzle.
    pub fn disks(mut self, disks: i64) -> Self {
        self.disks = disks;
        self
    }

    /// Use custom peg labels.
    pub fn pegs<M: PegLabel>(self, source: M, target: M, auxiliary: M) -> PuzzleBuilder<M> {
        PuzzleBuilder {
            disks: self.disks,
            source,
            target,
            auxiliary,
            max_disks: self.max_disks,
        }
    }

    /// Set the disk-count ceiling.
    pub fn max_disks(mut self, max: u32) -> Self {
        self.max_disks = Some(max);
        self
    }

    /// Remove the disk-count ceiling.
    pub fn unbounded(mut self) -> Self {
        self.max_disks = None;
        self
    }

    /// Run every configuration check, accumulating ALL violations.
    pub fn check(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        if let Some(max) = self.max_disks {
            let check = if self.disks > i64::from(max) {
                Validation::fail(BuildError::TooManyDisks {
                    requested: self.disks,
                    max,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        let pairs = [
            ("source", &self.source, "target", &self.target),
            ("source", &self.source, "auxiliary", &self.auxiliary),
            ("target", &self.target, "auxiliary", &self.auxiliary),
        ];
        for (first, a, second, b) in pairs {
            let check = if a.label() == b.label() {
                Validation::fail(BuildError::DuplicatePeg {
                    first,
                    second,
                    label: a.label().to_string(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the puzzle, or report every configuration problem.
    pub fn build(self) -> Result<Puzzle<L>, InvalidPuzzle> {
        match self.check() {
            Validation::Success(_) => {
                tracing::debug!(
                    disks = self.disks,
                    source = self.source.label(),
                    target = self.target.label(),
                    "built puzzle"
                );
                Ok(Puzzle {
                    disks: self.disks,
                    source: self.source,
                    target: self.target,
                    auxiliary: self.auxiliary,
                })
            }
            Validation::Failure(errors) => {
                let errors: Vec<BuildError> = errors.iter().cloned().collect();
                tracing::debug!(problems = errors.len(), "rejected puzzle configuration");
                Err(InvalidPuzzle { errors })
            }
        }
    }
}

/// A validated puzzle: a disk count within the ceiling and three distinct pegs.
#[derive(Clone, Debug, PartialEq)]
pub struct Puzzle<L: PegLabel = Peg> {
    disks: i64,
    source: L,
    target: L,
    auxiliary: L,
}

impl<L: PegLabel> Puzzle<L> {
    pub fn disks(&self) -> i64 {
        self.disks
    }

    pub fn source(&self) -> &L {
        &self.source
    }

    pub fn target(&self) -> &L {
        &self.target
    }

    pub fn auxiliary(&self) -> &L {
        &self.auxiliary
    }

    /// Length of the optimal solution.
    pub fn move_count(&self) -> u128 {
        move_count(self.disks)
    }

    /// The full optimal solution.
    pub fn solve(&self) -> Vec<Move<L>> {
        generate(
            self.disks,
            self.source.clone(),
            self.target.clone(),
            self.auxiliary.clone(),
        )
    }

    /// The optimal solution as a lazy iterator.
    pub fn iter(&self) -> Moves<L> {
        Moves::new(
            self.disks,
            self.source.clone(),
            self.target.clone(),
            self.auxiliary.clone(),
        )
    }
}
