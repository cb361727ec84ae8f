//! Optimal move generation.
//!
//! Moving `n` disks from `source` to `target` is done by moving the top
//! `n - 1` disks onto `auxiliary`, moving the largest disk directly, then
//! moving the `n - 1` disks from `auxiliary` onto `target`. The result is
//! the unique shortest solution, `2^n - 1` moves long.

use super::moves::Move;
use super::peg::{Peg, PegLabel};

const PREALLOCATE_LIMIT: usize = 1 << 20;

/// Number of moves in the optimal solution for `disks` disks.
///
/// Zero for `disks <= 0`. Saturates at `u128::MAX` from 128 disks upward.
pub fn move_count(disks: i64) -> u128 {
    match disks {
        d if d <= 0 => 0,
        d if d >= 128 => u128::MAX,
        d => (1u128 << d) - 1,
    }
}

/// Generate the optimal move sequence for `disks` disks.
///
/// This is a total function: zero or negative disk counts produce an empty
/// sequence. Recursion depth equals `disks`; use [`Moves`] to stream very
/// large solutions instead of materializing them.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{generate, Move};
///
/// let moves = generate(2, "A", "C", "B");
/// assert_eq!(
///     moves,
///     vec![Move::new("A", "B"), Move::new("A", "C"), Move::new("B", "C")]
/// );
/// assert!(generate(0, "A", "C", "B").is_empty());
/// ```
pub fn generate<L: PegLabel>(disks: i64, source: L, target: L, auxiliary: L) -> Vec<Move<L>> {
    let capacity = usize::try_from(move_count(disks)).map_or(0, |n| n.min(PREALLOCATE_LIMIT));
    let mut moves = Vec::with_capacity(capacity);
    solve_into(disks, &source, &target, &auxiliary, &mut moves);

    tracing::debug!(disks, moves = moves.len(), "generated move sequence");
    moves
}

/// Generate the optimal sequence from `A` to `C` using `B` as the spare peg.
pub fn canonical(disks: i64) -> Vec<Move> {
    generate(disks, Peg::A, Peg::C, Peg::B)
}

fn solve_into<L: PegLabel>(
    disks: i64,
    source: &L,
    target: &L,
    auxiliary: &L,
    out: &mut Vec<Move<L>>,
) {
    if disks <= 0 {
        return;
    }
    solve_into(disks - 1, source, auxiliary, target, out);
    out.push(Move::new(source.clone(), target.clone()));
    solve_into(disks - 1, auxiliary, target, source, out);
}

enum Frame<L> {
    Solve {
        disks: i64,
        source: L,
        target: L,
        auxiliary: L,
    },
    Emit(Move<L>),
}

/// Lazy, explicit-stack version of [`generate`].
///
/// Yields the same sequence without recursion and without holding the
/// whole solution in memory; the work stack never exceeds `2n + 1` frames.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{canonical, Moves, Peg};
///
/// let lazy: Vec<_> = Moves::new(4, Peg::A, Peg::C, Peg::B).collect();
/// assert_eq!(lazy, canonical(4));
/// ```
pub struct Moves<L: PegLabel> {
    stack: Vec<Frame<L>>,
    remaining: u128,
}

impl<L: PegLabel> Moves<L> {
    pub fn new(disks: i64, source: L, target: L, auxiliary: L) -> Self {
        let mut stack = Vec::new();
        if disks > 0 {
            stack.push(Frame::Solve {
                disks,
                source,
                target,
                auxiliary,
            });
        }
        Self {
            stack,
            remaining: move_count(disks),
        }
    }

    /// Moves not yet yielded, saturating like [`move_count`].
    pub fn remaining(&self) -> u128 {
        self.remaining
    }
}

impl<L: PegLabel> Iterator for Moves<L> {
    type Item = Move<L>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(mv) => {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(mv);
                }
                Frame::Solve {
                    disks,
                    source,
                    target,
                    auxiliary,
                } => {
                    if disks == 1 {
                        self.remaining = self.remaining.saturating_sub(1);
                        return Some(Move::new(source, target));
                    }
                    // Pushed in reverse so the left subproblem runs first.
                    self.stack.push(Frame::Solve {
                        disks: disks - 1,
                        source: auxiliary.clone(),
                        target: target.clone(),
                        auxiliary: source.clone(),
                    });
                    self.stack
                        .push(Frame::Emit(Move::new(source.clone(), target.clone())));
                    self.stack.push(Frame::Solve {
                        disks: disks - 1,
                        source,
                        target: auxiliary,
                        auxiliary: target,
                    });
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_disks_produce_nothing() {
        assert!(canonical(0).is_empty());
        assert!(canonical(-1).is_empty());
        assert!(canonical(i64::MIN).is_empty());
        assert_eq!(Moves::new(-5, Peg::A, Peg::C, Peg::B).count(), 0);
    }

    #[test]
    fn single_disk_moves_straight_to_target() {
        assert_eq!(generate(1, "A", "C", "B"), vec![Move::new("A", "C")]);
    }

    #[test]
    fn three_disks_match_known_solution() {
        let expected: Vec<Move> = [
            (Peg::A, Peg::C),
            (Peg::A, Peg::B),
            (Peg::C, Peg::B),
            (Peg::A, Peg::C),
            (Peg::B, Peg::A),
            (Peg::B, Peg::C),
            (Peg::A, Peg::C),
        ]
        .into_iter()
        .map(Move::from)
        .collect();
        assert_eq!(canonical(3), expected);
    }

    #[test]
    fn custom_labels_are_respected() {
        let moves = generate(2, "src".to_string(), "dst".to_string(), "tmp".to_string());
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[1], Move::new("src".to_string(), "dst".to_string()));
        assert!(moves
            .iter()
            .all(|m| ["src", "dst", "tmp"].contains(&m.from.as_str())));
    }

    #[test]
    fn move_count_matches_formula() {
        assert_eq!(move_count(-3), 0);
        assert_eq!(move_count(0), 0);
        assert_eq!(move_count(1), 1);
        assert_eq!(move_count(10), 1023);
        assert_eq!(move_count(127), u128::MAX >> 1);
        assert_eq!(move_count(128), u128::MAX);
        assert_eq!(move_count(i64::MAX), u128::MAX);
    }

    #[test]
    fn generated_length_matches_move_count() {
        for n in 0..=10 {
            assert_eq!(canonical(n).len() as u128, move_count(n));
        }
    }

    #[test]
    fn lazy_iterator_matches_recursive_generator() {
        for n in 0..=8 {
            let lazy: Vec<Move> = Moves::new(n, Peg::A, Peg::C, Peg::B).collect();
            assert_eq!(lazy, canonical(n));
        }
    }

    #[test]
    fn lazy_iterator_tracks_remaining() {
        let mut moves = Moves::new(3, Peg::A, Peg::C, Peg::B);
        assert_eq!(moves.size_hint(), (7, Some(7)));
        moves.next();
        moves.next();
        assert_eq!(moves.remaining(), 5);
        assert_eq!(moves.size_hint(), (5, Some(5)));
        assert_eq!(moves.count(), 5);
    }

    #[test]
    fn lazy_iterator_handles_huge_counts_without_materializing() {
        let mut moves = Moves::new(200, Peg::A, Peg::C, Peg::B);
        assert_eq!(moves.size_hint(), (usize::MAX, None));
        let first = moves.next();
        // Even disk counts start by moving to the spare peg.
        assert_eq!(first, Some(Move::new(Peg::A, Peg::B)));
    }

    #[test]
    fn generate_is_deterministic() {
        assert_eq!(canonical(6), canonical(6));
    }
}
