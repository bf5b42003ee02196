//! Checkpoint and resume for puzzle lineages.
//!
//! A checkpoint is a replay log: the root arrangement plus every move made
//! since. Resuming rebuilds the root and replays each move through
//! [`PuzzleState::apply_move`], so a resumed state carries the same lineage
//! and a corrupted log is rejected instead of producing a state the rules
//! could not reach. Checkpoints are plain values; where the bytes are kept
//! is up to the caller.

use crate::config::PuzzleConfig;
use crate::core::{Disk, Move, PuzzleState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable replay log of a puzzle state.
///
/// # Example
///
/// ```rust
/// use hanoi::checkpoint::Checkpoint;
/// use hanoi::core::PuzzleState;
///
/// let state = PuzzleState::new_initial(3, 3)?.apply_move(0, 2)?;
/// let json = Checkpoint::capture(&state).to_json()?;
///
/// let resumed = Checkpoint::from_json(&json)?.resume()?;
/// assert_eq!(resumed, state);
/// assert_eq!(resumed.moves(), state.moves());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Peg and disk counts
    pub config: PuzzleConfig,

    /// Arrangement of the root of the lineage
    pub origin: Vec<Vec<Disk>>,

    /// Moves from the root to the captured state, in play order
    pub moves: Vec<Move>,
}

impl Checkpoint {
    /// Record the lineage of `state`.
    pub fn capture(state: &PuzzleState) -> Self {
        let moves = state.moves();
        debug!(moves = moves.len(), "captured checkpoint");
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            config: state.config(),
            origin: state.root().arrangement().to_vec(),
            moves,
        }
    }

    /// Number of moves recorded.
    pub fn depth(&self) -> usize {
        self.moves.len()
    }

    /// Rebuild the captured state by replaying every recorded move.
    #[instrument(skip(self), fields(id = %self.id, moves = self.moves.len()))]
    pub fn resume(&self) -> Result<PuzzleState, CheckpointError> {
        self.check_version()?;

        let root = PuzzleState::from_arrangement(
            self.config.pegs,
            self.config.disks,
            self.origin.clone(),
        )
        .map_err(|e| CheckpointError::ValidationFailed(e.to_string()))?;

        let state = self
            .moves
            .iter()
            .enumerate()
            .try_fold(root, |state, (index, &mv)| {
                state
                    .apply(mv)
                    .map_err(|source| CheckpointError::Replay { index, source })
            })?;

        debug!(goal = state.is_goal_state(), "resumed checkpoint");
        Ok(state)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Serialize to the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the compact binary format, rejecting unknown
    /// format versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version == CHECKPOINT_VERSION {
            Ok(())
        } else {
            Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MoveRejection, PuzzleError};

    fn played(moves: &[(usize, usize)]) -> PuzzleState {
        let start = PuzzleState::new_initial(3, 3).unwrap();
        PuzzleState::replay(&start, moves.iter().copied().map(Move::from)).unwrap()
    }

    #[test]
    fn capture_records_root_and_moves() {
        let state = played(&[(0, 2), (0, 1)]);
        let checkpoint = Checkpoint::capture(&state);

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.config, PuzzleConfig::new(3, 3));
        assert_eq!(checkpoint.origin, vec![vec![3, 2, 1], vec![], vec![]]);
        assert_eq!(checkpoint.moves, vec![Move::new(0, 2), Move::new(0, 1)]);
        assert_eq!(checkpoint.depth(), 2);
    }

    #[test]
    fn resume_rebuilds_lineage() {
        let state = played(&[(0, 2), (0, 1), (2, 1)]);
        let resumed = Checkpoint::capture(&state).resume().unwrap();

        assert_eq!(resumed, state);
        assert_eq!(resumed.moves(), state.moves());
        assert_eq!(resumed.depth(), 3);
    }

    #[test]
    fn checkpoint_ids_are_unique() {
        let state = played(&[]);
        assert_ne!(Checkpoint::capture(&state).id, Checkpoint::capture(&state).id);
    }

    #[test]
    fn json_roundtrip_preserves_checkpoint() {
        let checkpoint = Checkpoint::capture(&played(&[(0, 1)]));
        let json = checkpoint.to_json().unwrap();
        assert_eq!(Checkpoint::from_json(&json).unwrap(), checkpoint);
    }

    #[test]
    fn binary_roundtrip_preserves_checkpoint() {
        let checkpoint = Checkpoint::capture(&played(&[(0, 1), (0, 2)]));
        let bytes = checkpoint.to_bytes().unwrap();
        assert_eq!(Checkpoint::from_bytes(&bytes).unwrap(), checkpoint);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut checkpoint = Checkpoint::capture(&played(&[]));
        checkpoint.version = 99;
        let json = checkpoint.to_json().unwrap();

        let err = Checkpoint::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            }
        ));
        assert!(matches!(
            checkpoint.resume(),
            Err(CheckpointError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn garbage_fails_to_deserialize() {
        assert!(matches!(
            Checkpoint::from_json("{not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::from_bytes(&[1, 2, 3]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn tampered_origin_fails_validation() {
        let mut checkpoint = Checkpoint::capture(&played(&[]));
        checkpoint.origin = vec![vec![3, 3, 1], vec![], vec![]];

        assert!(matches!(
            checkpoint.resume(),
            Err(CheckpointError::ValidationFailed(_))
        ));
    }

    #[test]
    fn tampered_moves_fail_replay() {
        let mut checkpoint = Checkpoint::capture(&played(&[(0, 1)]));
        checkpoint.moves.push(Move::new(0, 1));

        match checkpoint.resume() {
            Err(CheckpointError::Replay { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(
                    source,
                    PuzzleError::InvalidMove {
                        mv: Move::new(0, 1),
                        reason: MoveRejection::LargerOnSmaller {
                            moving: 2,
                            resting: 1
                        },
                    }
                );
            }
            other => panic!("Expected replay failure, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_move_fails_replay() {
        let mut checkpoint = Checkpoint::capture(&played(&[]));
        checkpoint.moves.push(Move::new(0, 9));

        assert!(matches!(
            checkpoint.resume(),
            Err(CheckpointError::Replay {
                index: 0,
                source: PuzzleError::InvalidPegIndex { index: 9, pegs: 3 }
            })
        ));
    }

    #[test]
    fn tampered_disk_count_fails_validation() {
        let json = Checkpoint::capture(&played(&[(0, 2)])).to_json().unwrap();
        let tampered = json.replacen("\"disks\":3", &format!("\"disks\":{}", usize::MAX), 1);
        assert_ne!(json, tampered);

        match Checkpoint::from_json(&tampered).unwrap().resume() {
            Err(CheckpointError::ValidationFailed(message)) => {
                assert!(message.contains(&format!("the puzzle has {}", usize::MAX)));
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn error_messages_name_the_failing_step() {
        let version = CheckpointError::UnsupportedVersion {
            found: 7,
            supported: CHECKPOINT_VERSION,
        };
        assert_eq!(
            version.to_string(),
            "Checkpoint format version 7 is not supported (expected 1)"
        );

        let replay = CheckpointError::Replay {
            index: 4,
            source: PuzzleError::InvalidPegIndex { index: 9, pegs: 3 },
        };
        assert!(replay.to_string().starts_with("Recorded move 4 cannot be replayed"));
    }
}
