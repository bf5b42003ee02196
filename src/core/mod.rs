//! Core puzzle types and logic.
//!
//! This module contains the pure core of the puzzle:
//! - `PuzzleState` with its move rules and goal test
//! - Lineage tracking through predecessor links
//! - The `Puzzle` trait that solvers are written against
//!
//! Nothing in this module performs I/O or mutates a state after it has
//! been constructed.

mod error;
mod history;
mod moves;
mod puzzle;
mod render;
mod state;
pub(crate) mod validation;

pub use error::{ConfigViolation, PuzzleError};
pub use history::Lineage;
pub use moves::{Move, MoveRejection};
pub use puzzle::Puzzle;
pub use state::{Disk, PuzzleState};
