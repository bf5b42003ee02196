//! Hanoi: an immutable state-transition kernel for the multi-peg
//! disk-transfer puzzle.
//!
//! The crate models the Tower of Hanoi with any number of pegs (at least
//! three) as a tree of immutable snapshots. Every move produces a new state
//! that links back to the state it was derived from, so a solver, visualizer
//! or game UI can explore, backtrack and replay without copying histories
//! around or guarding shared data.
//!
//! # Core Concepts
//!
//! - **PuzzleState**: disks on pegs, move validation and application, legal
//!   move enumeration and the goal test
//! - **Lineage**: the chain of predecessors recording how a state was reached
//! - **Puzzle**: the trait generic search code is written against
//! - **Checkpoint**: a serializable replay log of a lineage
//!
//! # Example
//!
//! ```rust
//! use hanoi::core::{Move, PuzzleState};
//!
//! let start = PuzzleState::new_initial(3, 2)?;
//! let solved = PuzzleState::replay(
//!     &start,
//!     [Move::new(0, 1), Move::new(0, 2), Move::new(1, 2)],
//! )?;
//!
//! assert!(solved.is_goal_state());
//! assert_eq!(solved.depth(), 3);
//! assert_eq!(solved.to_string(), " | | 1\n | | 2");
//! # Ok::<(), hanoi::core::PuzzleError>(())
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use builder::PuzzleBuilder;
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::PuzzleConfig;
pub use crate::core::{Move, MoveRejection, Puzzle, PuzzleError, PuzzleState};
