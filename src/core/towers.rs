//! Peg state simulation.
//!
//! `Towers` holds one stack of disk sizes per peg and applies moves one at
//! a time, rejecting any move that would break the puzzle's rules.

use super::error::MoveError;
use super::moves::Move;
use super::peg::{Peg, PegLabel};
use serde::{Deserialize, Serialize};

/// Disk size. `1` is the smallest disk.
pub type Disk = usize;

/// The three peg stacks, each ordered bottom to top.
///
/// The largest disks on `A` that no move has touched yet are kept as a
/// count, not materialized, so a replay only allocates for disks that
/// actually move. A rejected move leaves the towers exactly as they were,
/// so the state can be inspected after a failure.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Move, Peg, Towers};
///
/// let mut towers = Towers::new(2);
/// assert_eq!(towers.peg(Peg::A).collect::<Vec<_>>(), vec![2, 1]);
///
/// towers.apply(1, &Move::new(Peg::A, Peg::B)).unwrap();
/// assert_eq!(towers.top(Peg::B), Some(1));
///
/// // Disk 2 may not go on top of disk 1.
/// assert!(towers.apply(2, &Move::new(Peg::A, Peg::B)).is_err());
/// assert_eq!(towers.peg(Peg::A).collect::<Vec<_>>(), vec![2]);
///
/// // Huge puzzles cost nothing until disks move.
/// let towers = Towers::new(usize::MAX);
/// assert_eq!(towers.top(Peg::A), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Towers {
    disks: usize,
    /// Untouched disks at the bottom of `A`: sizes `disks - base + 1 ..= disks`.
    base: usize,
    pegs: [Vec<Disk>; 3],
}

impl Towers {
    /// All `disks` stacked on `A`, largest at the bottom. `B` and `C` start empty.
    pub fn new(disks: usize) -> Self {
        Self {
            disks,
            base: disks,
            pegs: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Apply the move at 1-based position `index`, returning the disk moved.
    pub fn apply<L: PegLabel>(&mut self, index: usize, mv: &Move<L>) -> Result<Disk, MoveError> {
        let (Some(from), Some(to)) = (
            Peg::from_label(mv.from.label()),
            Peg::from_label(mv.to.label()),
        ) else {
            return Err(MoveError::UnknownPeg {
                index,
                from: mv.from.label().to_string(),
                to: mv.to.label().to_string(),
            });
        };

        let disk = self
            .top(from)
            .ok_or(MoveError::EmptySource { index, peg: from })?;

        // Moving a disk back onto its own peg is a no-op.
        if from != to {
            if let Some(top) = self.top(to) {
                if top < disk {
                    return Err(MoveError::IllegalPlacement {
                        index,
                        disk,
                        top,
                        peg: to,
                    });
                }
            }
            self.take(from);
            self.put(to, disk);
        }

        Ok(disk)
    }

    fn base_top(&self) -> Option<Disk> {
        (self.base > 0).then(|| self.disks.saturating_sub(self.base) + 1)
    }

    fn take(&mut self, peg: Peg) {
        if self.pegs[peg.index()].pop().is_none() && peg == Peg::A {
            self.base -= 1;
        }
    }

    fn put(&mut self, peg: Peg, disk: Disk) {
        let stack = &mut self.pegs[peg.index()];
        // Keep one representation per state: a disk returning directly onto
        // the untouched base rejoins it.
        if peg == Peg::A
            && stack.is_empty()
            && self.base < self.disks
            && disk == self.disks - self.base
        {
            self.base += 1;
        } else {
            stack.push(disk);
        }
    }

    /// Disks on `peg`, bottom to top.
    pub fn peg(&self, peg: Peg) -> impl DoubleEndedIterator<Item = Disk> + '_ {
        let base = match peg {
            Peg::A => self.disks.saturating_sub(self.base)..self.disks,
            _ => 0..0,
        };
        base.rev()
            .map(|d| d + 1)
            .chain(self.pegs[peg.index()].iter().copied())
    }

    /// Number of disks on `peg`.
    pub fn height(&self, peg: Peg) -> usize {
        let stack = self.pegs[peg.index()].len();
        if peg == Peg::A {
            stack + self.base
        } else {
            stack
        }
    }

    /// The disk on top of `peg`, if any.
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        match self.pegs[peg.index()].last() {
            Some(&disk) => Some(disk),
            None if peg == Peg::A => self.base_top(),
            None => None,
        }
    }

    pub fn disk_count(&self) -> usize {
        self.disks
    }

    /// True when every disk sits on `peg`.
    pub fn is_solved(&self, peg: Peg) -> bool {
        self.height(peg) == self.disks
    }

    /// True when every stack is strictly decreasing from bottom to top.
    pub fn is_legal(&self) -> bool {
        let stacks_decrease = self
            .pegs
            .iter()
            .all(|stack| stack.windows(2).all(|pair| pair[0] > pair[1]));
        let above_base = match (self.base_top(), self.pegs[Peg::A.index()].first()) {
            (Some(base), Some(&bottom)) => bottom < base,
            _ => true,
        };
        self.base <= self.disks && stacks_decrease && above_base
    }
}
