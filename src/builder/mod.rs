//! Builder API for ergonomic puzzle construction.
//!
//! This module provides a fluent builder and small helpers for creating
//! puzzle states with defaults filled in.

pub mod puzzle;

pub use puzzle::PuzzleBuilder;

use crate::core::{PuzzleError, PuzzleState};

/// Create the starting position of the classic three-peg puzzle.
///
/// # Example
///
/// ```
/// use hanoi::builder::classic;
///
/// let start = classic(4)?;
/// assert_eq!(start.pegs(), 3);
/// assert_eq!(start.peg(0), Some(&[4, 3, 2, 1][..]));
/// # Ok::<(), hanoi::core::PuzzleError>(())
/// ```
pub fn classic(disks: usize) -> Result<PuzzleState, PuzzleError> {
    PuzzleBuilder::new().pegs(3).disks(disks).build()
}
