//! Builder for constructing puzzle states.

use crate::config::PuzzleConfig;
use crate::core::{Disk, Move, PuzzleError, PuzzleState};
use std::sync::Arc;

/// Builder for constructing puzzle states with a fluent API.
///
/// Peg and disk counts fall back to [`PuzzleConfig::default`]. Without an
/// explicit arrangement the canonical starting position is built.
#[derive(Clone, Debug, Default)]
pub struct PuzzleBuilder {
    pegs: Option<usize>,
    disks: Option<usize>,
    arrangement: Option<Vec<Vec<Disk>>>,
    provenance: Option<(Arc<PuzzleState>, Move)>,
}

impl PuzzleBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with both counts taken from `config`.
    pub fn from_config(config: PuzzleConfig) -> Self {
        Self::new().pegs(config.pegs).disks(config.disks)
    }

    /// Set the number of pegs.
    pub fn pegs(mut self, pegs: usize) -> Self {
        self.pegs = Some(pegs);
        self
    }

    /// Set the number of disks.
    pub fn disks(mut self, disks: usize) -> Self {
        self.disks = Some(disks);
        self
    }

    /// Start from an explicit arrangement instead of the initial one.
    pub fn arrangement(mut self, arrangement: Vec<Vec<Disk>>) -> Self {
        self.arrangement = Some(arrangement);
        self
    }

    /// Record `parent` and `mv` as the provenance of the built state.
    pub fn derived_from(mut self, parent: Arc<PuzzleState>, mv: Move) -> Self {
        self.provenance = Some((parent, mv));
        self
    }

    /// The counts this builder will use.
    pub fn config(&self) -> PuzzleConfig {
        let defaults = PuzzleConfig::default();
        PuzzleConfig::new(
            self.pegs.unwrap_or(defaults.pegs),
            self.disks.unwrap_or(defaults.disks),
        )
    }

    /// Build the state.
    /// Returns an error if the configuration or arrangement is invalid.
    pub fn build(self) -> Result<PuzzleState, PuzzleError> {
        let config = self.config();
        let (predecessor, producing_move) = match self.provenance {
            Some((parent, mv)) => (Some(parent), Some(mv)),
            None => (None, None),
        };

        match self.arrangement {
            Some(arrangement) => PuzzleState::from_arrangement_with_provenance(
                config.pegs,
                config.disks,
                arrangement,
                predecessor,
                producing_move,
            ),
            None if predecessor.is_none() => PuzzleState::new_initial(config.pegs, config.disks),
            None => {
                let initial = PuzzleState::new_initial(config.pegs, config.disks)?;
                PuzzleState::from_arrangement_with_provenance(
                    config.pegs,
                    config.disks,
                    initial.arrangement().to_vec(),
                    predecessor,
                    producing_move,
                )
            }
        }
    }
}
