//! Peg labels.
//!
//! The classic puzzle has three pegs named `A`, `B` and `C`. The generator
//! works with any label type implementing [`PegLabel`], while the validator
//! only recognises the three canonical names.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// One of the three canonical pegs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// All pegs in label order.
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Resolve a canonical label. Anything other than exactly `"A"`, `"B"`
    /// or `"C"` is unknown.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trait for values that name a peg.
///
/// Labels only need identity: there is no ordering between pegs. Any
/// three distinct labels can drive the generator.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Peg, PegLabel};
///
/// assert_eq!(Peg::B.label(), "B");
/// assert_eq!("left".label(), "left");
/// assert_eq!(String::from("right").label(), "right");
/// ```
pub trait PegLabel: Clone + PartialEq + Debug + Send + Sync {
    /// The label's textual name, used for display and for validation.
    fn label(&self) -> &str;
}

impl PegLabel for Peg {
    fn label(&self) -> &str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl PegLabel for String {
    fn label(&self) -> &str {
        self.as_str()
    }
}

impl PegLabel for &str {
    fn label(&self) -> &str {
        self
    }
}
