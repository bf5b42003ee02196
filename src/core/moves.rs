//! Move values and the reasons a move can be illegal.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Transfer of the topmost disk of one peg onto another.
///
/// A `Move` is only a pair of peg indices; whether it is legal depends on
/// the state it is applied to.
///
/// # Example
///
/// ```rust
/// use hanoi::core::Move;
///
/// let mv = Move::from((0, 2));
/// assert_eq!(mv.to_string(), "0->2");
/// assert_eq!(mv.reversed(), Move::new(2, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Index of the peg the disk is taken from
    pub from: usize,
    /// Index of the peg the disk is placed on
    pub to: usize,
}

impl Move {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// The move that undoes this one.
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl From<(usize, usize)> for Move {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.from, mv.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Why an in-range move is illegal.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("source and destination are the same peg")]
    SamePeg,

    #[error("peg {peg} has no disk to move")]
    EmptySource { peg: usize },

    #[error("disk {moving} cannot rest on smaller disk {resting}")]
    LargerOnSmaller { moving: usize, resting: usize },
}
