//! Error types for puzzle construction and moves.

use super::moves::{Move, MoveRejection};
use thiserror::Error;

/// A single problem found while validating a puzzle configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("at least {min} pegs are required (got {found})")]
    TooFewPegs { found: usize, min: usize },

    #[error("at least {min} disk is required (got {found})")]
    TooFewDisks { found: usize, min: usize },

    #[error("arrangement has {found} stacks but the puzzle has {expected} pegs")]
    StackCountMismatch { expected: usize, found: usize },

    #[error("disk {disk} on peg {peg} is outside 1..={disks}")]
    DiskOutOfRange {
        disk: usize,
        peg: usize,
        disks: usize,
    },

    #[error("disk {disk} appears more than once")]
    DuplicateDisk { disk: usize },

    #[error("disk {disk} is missing from the arrangement")]
    MissingDisk { disk: usize },

    #[error("arrangement holds {found} disks but the puzzle has {expected}")]
    DiskCountMismatch { expected: usize, found: usize },
}

/// Errors returned by puzzle construction and move application.
///
/// All of these are local validation failures. A rejected move never
/// modifies the state it was attempted on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid configuration: {}", join_violations(.violations))]
    InvalidConfiguration { violations: Vec<ConfigViolation> },

    #[error("Peg index {index} is out of range for a puzzle with {pegs} pegs")]
    InvalidPegIndex { index: usize, pegs: usize },

    #[error("Illegal move {mv}: {reason}")]
    InvalidMove { mv: Move, reason: MoveRejection },
}

impl PuzzleError {
    /// Violations carried by an `InvalidConfiguration` error, empty otherwise.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::InvalidConfiguration { violations } => violations,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
