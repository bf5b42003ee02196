//! The `Puzzle` trait: what a solver needs from a puzzle state.
//!
//! Search algorithms, visualizers and game front ends are written against
//! this trait rather than against [`PuzzleState`] directly. All methods are
//! pure.

use super::error::PuzzleError;
use super::moves::Move;
use super::state::PuzzleState;
use std::fmt::Debug;
use std::hash::Hash;

/// A position in a single-player puzzle with discrete moves.
///
/// # Required Traits
///
/// - `Clone`: search frontiers hold their own copies of states
/// - `Eq` + `Hash`: states can be deduplicated in visited sets
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: states may be shared across worker threads
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Puzzle, PuzzleState};
/// use std::collections::{HashSet, VecDeque};
///
/// /// Count the positions reachable from `start`.
/// fn reachable<P: Puzzle>(start: P) -> usize {
///     let mut seen = HashSet::new();
///     let mut queue = VecDeque::from([start]);
///     while let Some(state) = queue.pop_front() {
///         if !seen.insert(state.clone()) {
///             continue;
///         }
///         for mv in state.possible_moves() {
///             if let Ok(next) = state.next_state(mv) {
///                 queue.push_back(next);
///             }
///         }
///     }
///     seen.len()
/// }
///
/// // Every one of the 3^n placements of n disks is reachable.
/// assert_eq!(reachable(PuzzleState::new_initial(3, 3)?), 27);
/// # Ok::<(), hanoi::core::PuzzleError>(())
/// ```
pub trait Puzzle: Clone + Eq + Hash + Debug + Send + Sync {
    /// A single step between positions.
    type Move: Copy + Debug;

    /// Why a step was refused.
    type Error: std::error::Error;

    /// Name of the puzzle for display/logging.
    fn name(&self) -> &str;

    /// Every legal step from this position, in a stable order.
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// The position reached by taking `mv`.
    fn next_state(&self, mv: Self::Move) -> Result<Self, Self::Error>;

    /// Whether this position solves the puzzle.
    fn is_goal(&self) -> bool;
}

impl Puzzle for PuzzleState {
    type Move = Move;
    type Error = PuzzleError;

    fn name(&self) -> &str {
        "Tower of Hanoi"
    }

    fn possible_moves(&self) -> Vec<Move> {
        PuzzleState::possible_moves(self)
    }

    fn next_state(&self, mv: Move) -> Result<Self, PuzzleError> {
        self.apply(mv)
    }

    fn is_goal(&self) -> bool {
        self.is_goal_state()
    }
}
