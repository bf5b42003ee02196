//! Checkpoint error types.

use crate::core::PuzzleError;
use thiserror::Error;

/// Ways that capturing or resuming a game from a checkpoint can fail.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The checkpoint could not be encoded as JSON or bytes
    #[error("Could not encode checkpoint: {0}")]
    SerializationFailed(String),

    /// The input is not a well-formed checkpoint
    #[error("Could not decode checkpoint: {0}")]
    DeserializationFailed(String),

    /// The checkpoint was written in a format this crate does not read
    #[error("Checkpoint format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The recorded puzzle dimensions or origin arrangement are invalid
    #[error("Checkpoint origin is invalid: {0}")]
    ValidationFailed(String),

    /// A recorded move is illegal from the position it is replayed on
    #[error("Recorded move {index} cannot be replayed: {source}")]
    Replay {
        index: usize,
        #[source]
        source: PuzzleError,
    },
}
