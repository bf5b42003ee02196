//! State lineage: walking the predecessor links of a puzzle state.
//!
//! Every derived state points back at the state it came from, so the
//! history of how a state was reached is the chain of its ancestors. The
//! helpers here read that chain; nothing in a lineage is ever mutated.

use super::error::PuzzleError;
use super::moves::Move;
use super::state::PuzzleState;

/// Iterator from a state back to the root of its lineage.
///
/// Yields the starting state first and the root last.
#[derive(Clone, Debug)]
pub struct Lineage<'a> {
    next: Option<&'a PuzzleState>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = &'a PuzzleState;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.predecessor();
        Some(current)
    }
}

impl PuzzleState {
    /// Walk from this state back to its root.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi::core::PuzzleState;
    ///
    /// let start = PuzzleState::new_initial(3, 2)?;
    /// let end = start.apply_move(0, 1)?.apply_move(0, 2)?;
    ///
    /// assert_eq!(end.lineage().count(), 3);
    /// assert_eq!(end.lineage().last(), Some(&start));
    /// # Ok::<(), hanoi::core::PuzzleError>(())
    /// ```
    pub fn lineage(&self) -> Lineage<'_> {
        Lineage { next: Some(self) }
    }

    /// Number of moves between the root and this state.
    pub fn depth(&self) -> usize {
        self.lineage().count() - 1
    }

    /// The first state of this lineage.
    pub fn root(&self) -> &PuzzleState {
        let mut current = self;
        while let Some(parent) = current.predecessor() {
            current = parent;
        }
        current
    }

    /// States from the root up to and including this one.
    pub fn path(&self) -> Vec<&PuzzleState> {
        let mut path: Vec<_> = self.lineage().collect();
        path.reverse();
        path
    }

    /// Moves that lead from the root to this state, in play order.
    pub fn moves(&self) -> Vec<Move> {
        let mut moves: Vec<_> = self
            .lineage()
            .filter_map(PuzzleState::producing_move)
            .collect();
        moves.reverse();
        moves
    }

    /// Apply a sequence of moves starting at `root`.
    ///
    /// Stops at the first illegal move and returns its error. The returned
    /// state's lineage contains `root` and every intermediate state.
    pub fn replay<I>(root: &PuzzleState, moves: I) -> Result<PuzzleState, PuzzleError>
    where
        I: IntoIterator<Item = Move>,
    {
        moves
            .into_iter()
            .try_fold(root.clone(), |state, mv| state.apply(mv))
    }
}
