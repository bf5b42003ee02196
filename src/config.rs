//! Puzzle dimensions.

use crate::core::validation;
use crate::core::PuzzleError;
use serde::{Deserialize, Serialize};

/// Fewest pegs a puzzle may have.
pub const MIN_PEGS: usize = 3;

/// Fewest disks a puzzle may have.
pub const MIN_DISKS: usize = 1;

/// Number of pegs and disks of a puzzle.
///
/// Defaults to the classic three pegs with five disks.
///
/// # Example
///
/// ```rust
/// use hanoi::PuzzleConfig;
///
/// let config = PuzzleConfig::default();
/// assert_eq!((config.pegs, config.disks), (3, 5));
/// assert!(config.validate().is_ok());
/// assert!(PuzzleConfig::new(2, 0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of pegs, at least [`MIN_PEGS`]
    pub pegs: usize,
    /// Number of disks, at least [`MIN_DISKS`]
    pub disks: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self { pegs: 3, disks: 5 }
    }
}

impl PuzzleConfig {
    pub const fn new(pegs: usize, disks: usize) -> Self {
        Self { pegs, disks }
    }

    /// Check the peg and disk bounds, reporting every violation at once.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        validation::validate_config(self)
    }
}
