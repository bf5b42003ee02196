//! The puzzle state and its transition rules.
//!
//! A [`PuzzleState`] is an immutable snapshot of disks on pegs. Moves never
//! modify a state; [`PuzzleState::apply_move`] returns a new state that
//! links back to the one it was derived from.

use super::error::PuzzleError;
use super::moves::{Move, MoveRejection};
use super::validation;
use crate::config::PuzzleConfig;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Disk identifier. `1` is the smallest disk, `disks` the largest.
pub type Disk = usize;

/// Immutable arrangement of disks on pegs, with optional provenance.
///
/// Each peg is stored bottom to top. States reached through
/// [`apply_move`](Self::apply_move) always hold strictly decreasing stacks.
///
/// Equality and hashing consider only the peg count, disk count, and
/// arrangement. The predecessor link and producing move are provenance, so
/// two states reached along different paths compare equal.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Move, PuzzleState};
///
/// let start = PuzzleState::new_initial(3, 3)?;
/// assert_eq!(start.arrangement(), &[vec![3, 2, 1], vec![], vec![]]);
/// assert_eq!(start.possible_moves(), vec![Move::new(0, 1), Move::new(0, 2)]);
///
/// let next = start.apply_move(0, 1)?;
/// assert_eq!(next.arrangement(), &[vec![3, 2], vec![1], vec![]]);
/// assert_eq!(next.producing_move(), Some(Move::new(0, 1)));
/// assert_eq!(next.predecessor(), Some(&start));
/// # Ok::<(), hanoi::core::PuzzleError>(())
/// ```
#[derive(Clone)]
pub struct PuzzleState {
    pub(super) pegs: usize,
    pub(super) disks: usize,
    pub(super) arrangement: Vec<Vec<Disk>>,
    pub(super) predecessor: Option<Arc<PuzzleState>>,
    pub(super) producing_move: Option<Move>,
}

impl PuzzleState {
    /// Create the canonical starting state: every disk on peg 0, largest at
    /// the bottom, all other pegs empty.
    ///
    /// Fails with [`PuzzleError::InvalidConfiguration`] if `pegs < 3` or
    /// `disks < 1`.
    pub fn new_initial(pegs: usize, disks: usize) -> Result<Self, PuzzleError> {
        let config = PuzzleConfig::new(pegs, disks);
        config.validate()?;

        let mut arrangement = vec![Vec::new(); pegs];
        arrangement[0] = (1..=disks).rev().collect();

        trace!(pegs, disks, "created initial state");
        Ok(Self {
            pegs,
            disks,
            arrangement,
            predecessor: None,
            producing_move: None,
        })
    }

    /// Create a root state from an explicit arrangement.
    ///
    /// The arrangement must have one stack per peg and contain each disk in
    /// `1..=disks` exactly once. Every violation is reported together.
    ///
    /// Per-peg ordering is not checked: seeding an ill-ordered arrangement
    /// is allowed, and the caller is responsible for it. Use
    /// [`is_well_ordered`](Self::is_well_ordered) to check.
    pub fn from_arrangement(
        pegs: usize,
        disks: usize,
        arrangement: Vec<Vec<Disk>>,
    ) -> Result<Self, PuzzleError> {
        Self::from_arrangement_with_provenance(pegs, disks, arrangement, None, None)
    }

    /// Create a state from an explicit arrangement and provenance.
    ///
    /// Validation is the same as [`from_arrangement`](Self::from_arrangement).
    /// The predecessor and move are recorded as given and are not checked
    /// against the arrangement.
    pub fn from_arrangement_with_provenance(
        pegs: usize,
        disks: usize,
        arrangement: Vec<Vec<Disk>>,
        predecessor: Option<Arc<PuzzleState>>,
        producing_move: Option<Move>,
    ) -> Result<Self, PuzzleError> {
        validation::validate_arrangement(&PuzzleConfig::new(pegs, disks), &arrangement)?;

        trace!(pegs, disks, "created state from arrangement");
        Ok(Self {
            pegs,
            disks,
            arrangement,
            predecessor,
            producing_move,
        })
    }

    pub fn pegs(&self) -> usize {
        self.pegs
    }

    pub fn disks(&self) -> usize {
        self.disks
    }

    pub fn config(&self) -> PuzzleConfig {
        PuzzleConfig::new(self.pegs, self.disks)
    }

    /// All stacks, one per peg, each listed bottom to top.
    pub fn arrangement(&self) -> &[Vec<Disk>] {
        &self.arrangement
    }

    /// The stack on one peg, bottom to top, or `None` if out of range.
    pub fn peg(&self, index: usize) -> Option<&[Disk]> {
        self.arrangement.get(index).map(Vec::as_slice)
    }

    /// The topmost disk on a peg, `None` if the peg is empty or out of range.
    pub fn top(&self, index: usize) -> Option<Disk> {
        self.arrangement.get(index).and_then(|stack| stack.last().copied())
    }

    /// The state this one was derived from.
    pub fn predecessor(&self) -> Option<&PuzzleState> {
        self.predecessor.as_deref()
    }

    /// The move that turned the predecessor into this state.
    pub fn producing_move(&self) -> Option<Move> {
        self.producing_move
    }

    /// Whether this state has no predecessor.
    pub fn is_root(&self) -> bool {
        self.predecessor.is_none()
    }

    /// Whether every peg holds strictly decreasing disks from bottom to top.
    pub fn is_well_ordered(&self) -> bool {
        self.arrangement
            .iter()
            .all(|stack| stack.windows(2).all(|pair| pair[0] > pair[1]))
    }

    /// Explain why `mv` is illegal here, or `Ok(())` if it is legal.
    ///
    /// Checks run in order: same peg, empty source, empty destination
    /// (always legal), then the smaller-on-larger rule. Peg indices are
    /// expected to be in range; an out-of-range source reads as empty and an
    /// out-of-range destination as an empty peg.
    pub fn check_move(&self, mv: Move) -> Result<(), MoveRejection> {
        if mv.from == mv.to {
            return Err(MoveRejection::SamePeg);
        }
        let Some(moving) = self.top(mv.from) else {
            return Err(MoveRejection::EmptySource { peg: mv.from });
        };
        match self.top(mv.to) {
            None => Ok(()),
            Some(resting) if moving < resting => Ok(()),
            Some(resting) => Err(MoveRejection::LargerOnSmaller { moving, resting }),
        }
    }

    /// Whether moving the top disk of `from` onto `to` is legal.
    ///
    /// Out-of-range indices are never valid.
    pub fn is_valid_move(&self, from: usize, to: usize) -> bool {
        self.in_range(from) && self.in_range(to) && self.check_move(Move::new(from, to)).is_ok()
    }

    /// Move the top disk of `from` onto `to`, producing a new state.
    ///
    /// `self` is left untouched; the new state records `self` as its
    /// predecessor and `(from, to)` as its producing move.
    ///
    /// The predecessor is a fresh snapshot of `self`, so children derived
    /// from the same state each hold their own copy of its arrangement. When
    /// the state is already behind an `Arc`, [`apply_shared`](Self::apply_shared)
    /// links every child to that one allocation instead.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::InvalidPegIndex`] if either index is not below
    ///   [`pegs`](Self::pegs).
    /// - [`PuzzleError::InvalidMove`] if the move breaks the puzzle rules.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(&self, from: usize, to: usize) -> Result<PuzzleState, PuzzleError> {
        let (mv, arrangement) = self.moved_arrangement(from, to)?;
        Ok(self.child(Arc::new(self.clone()), mv, arrangement))
    }

    /// [`apply_move`](Self::apply_move) for a state held in an `Arc`.
    ///
    /// The child points at `self` directly, so siblings expanded from one
    /// parent share it rather than copying it once each.
    ///
    /// ```rust
    /// use hanoi::core::PuzzleState;
    /// use std::sync::Arc;
    ///
    /// let start = Arc::new(PuzzleState::new_initial(3, 2)?);
    /// let left = start.apply_shared(0, 1)?;
    /// let right = start.apply_shared(0, 2)?;
    /// assert_eq!(Arc::strong_count(&start), 3);
    /// assert_eq!(left.predecessor(), right.predecessor());
    /// # Ok::<(), hanoi::core::PuzzleError>(())
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn apply_shared(
        self: &Arc<Self>,
        from: usize,
        to: usize,
    ) -> Result<PuzzleState, PuzzleError> {
        let (mv, arrangement) = self.moved_arrangement(from, to)?;
        Ok(self.child(Arc::clone(self), mv, arrangement))
    }

    fn moved_arrangement(
        &self,
        from: usize,
        to: usize,
    ) -> Result<(Move, Vec<Vec<Disk>>), PuzzleError> {
        for index in [from, to] {
            if !self.in_range(index) {
                debug!(index, pegs = self.pegs, "rejected out-of-range peg");
                return Err(PuzzleError::InvalidPegIndex {
                    index,
                    pegs: self.pegs,
                });
            }
        }

        let mv = Move::new(from, to);
        if let Err(reason) = self.check_move(mv) {
            debug!(%mv, %reason, "rejected move");
            return Err(PuzzleError::InvalidMove { mv, reason });
        }

        let mut arrangement = self.arrangement.clone();
        if let Some(disk) = arrangement[from].pop() {
            arrangement[to].push(disk);
        }

        debug!(%mv, "applied move");
        Ok((mv, arrangement))
    }

    fn child(
        &self,
        parent: Arc<PuzzleState>,
        mv: Move,
        arrangement: Vec<Vec<Disk>>,
    ) -> PuzzleState {
        Self {
            pegs: self.pegs,
            disks: self.disks,
            arrangement,
            predecessor: Some(parent),
            producing_move: Some(mv),
        }
    }

    /// [`apply_move`](Self::apply_move) taking a [`Move`].
    pub fn apply(&self, mv: Move) -> Result<PuzzleState, PuzzleError> {
        self.apply_move(mv.from, mv.to)
    }

    /// Every legal move, ordered by source peg and then destination peg.
    pub fn possible_moves(&self) -> Vec<Move> {
        (0..self.pegs)
            .flat_map(|from| (0..self.pegs).map(move |to| Move::new(from, to)))
            .filter(|mv| self.is_valid_move(mv.from, mv.to))
            .collect()
    }

    /// Whether every disk sits on the last peg.
    pub fn is_goal_state(&self) -> bool {
        self.arrangement
            .last()
            .is_some_and(|stack| stack.len() == self.disks)
    }

    fn in_range(&self, index: usize) -> bool {
        index < self.pegs
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.pegs == other.pegs
            && self.disks == other.disks
            && self.arrangement == other.arrangement
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pegs.hash(state);
        self.disks.hash(state);
        self.arrangement.hash(state);
    }
}

impl Drop for PuzzleState {
    // Unlink ancestors one at a time so long histories don't overflow the
    // stack with recursive drops.
    fn drop(&mut self) {
        let mut next = self.predecessor.take();
        while let Some(parent) = next {
            next = match Arc::try_unwrap(parent) {
                Ok(mut parent) => parent.predecessor.take(),
                Err(_) => None,
            };
        }
    }
}
