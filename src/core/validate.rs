//! Move sequence validation.
//!
//! Replays a sequence against a fresh [`Towers`] with every disk on `A` and
//! reports the first rule violation.

use super::error::MoveError;
use super::moves::Move;
use super::peg::PegLabel;
use super::towers::Towers;
use serde::{Deserialize, Serialize};

/// Check that `moves` is legal for `disks` disks starting on peg `A`.
///
/// Fails fast: the first violation ends the replay. Only the labels `A`,
/// `B` and `C` are recognised.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{canonical, validate, Move, MoveError, Peg};
///
/// assert!(validate(3, &canonical(3)).is_ok());
///
/// let err = validate(1, &[Move::new("B", "C")]).unwrap_err();
/// assert_eq!(err, MoveError::EmptySource { index: 1, peg: Peg::B });
/// ```
pub fn validate<L: PegLabel>(disks: usize, moves: &[Move<L>]) -> Result<(), MoveError> {
    let mut towers = Towers::new(disks);

    for (i, mv) in moves.iter().enumerate() {
        let index = i + 1;
        match towers.apply(index, mv) {
            Ok(disk) => tracing::trace!(index, disk, %mv, "replayed move"),
            Err(error) => {
                tracing::debug!(disks, %error, "move sequence rejected");
                return Err(error);
            }
        }
    }

    tracing::debug!(disks, moves = moves.len(), "move sequence accepted");
    Ok(())
}

/// Validate and report the outcome as a [`Verdict`].
pub fn check<L: PegLabel>(disks: usize, moves: &[Move<L>]) -> Verdict {
    validate(disks, moves).into()
}

/// Outcome of a validation in `(ok, detail)` form.
///
/// `detail` is `None` exactly when `ok` is true. Deserializing a verdict
/// that breaks this fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVerdict")]
pub struct Verdict {
    pub ok: bool,
    pub detail: Option<String>,
}

#[derive(Deserialize)]
struct RawVerdict {
    ok: bool,
    detail: Option<String>,
}

impl TryFrom<RawVerdict> for Verdict {
    type Error = String;

    fn try_from(raw: RawVerdict) -> Result<Self, Self::Error> {
        match (raw.ok, raw.detail) {
            (true, Some(detail)) => Err(format!("Passing verdict carries detail '{detail}'")),
            (false, None) => Err("Failing verdict is missing its detail".to_string()),
            (ok, detail) => Ok(Self { ok, detail }),
        }
    }
}

impl Verdict {
    pub fn into_parts(self) -> (bool, Option<String>) {
        (self.ok, self.detail)
    }
}

impl From<Result<(), MoveError>> for Verdict {
    fn from(result: Result<(), MoveError>) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                detail: None,
            },
            Err(error) => Self {
                ok: false,
                detail: Some(error.to_string()),
            },
        }
    }
}
