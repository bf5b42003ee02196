//! Configuration checks for puzzle construction.
//!
//! Every check produces a `Validation`, and all of them are combined with
//! `Validation::all_vec` so a caller sees every problem with a configuration
//! in one error rather than the first one found.

use super::error::{ConfigViolation, PuzzleError};
use super::state::Disk;
use crate::config::{PuzzleConfig, MIN_DISKS, MIN_PEGS};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use std::collections::BTreeMap;

/// Beyond this many absent disks the ids are not listed one by one.
const MISSING_LISTING_LIMIT: usize = 64;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn bound_checks(config: &PuzzleConfig) -> Vec<Check> {
    vec![
        check(config.pegs >= MIN_PEGS, || ConfigViolation::TooFewPegs {
            found: config.pegs,
            min: MIN_PEGS,
        }),
        check(config.disks >= MIN_DISKS, || ConfigViolation::TooFewDisks {
            found: config.disks,
            min: MIN_DISKS,
        }),
    ]
}

fn arrangement_checks(config: &PuzzleConfig, arrangement: &[Vec<Disk>]) -> Vec<Check> {
    let mut checks = vec![check(arrangement.len() == config.pegs, || {
        ConfigViolation::StackCountMismatch {
            expected: config.pegs,
            found: arrangement.len(),
        }
    })];

    // Counts only the ids actually present, so the work is bounded by the
    // arrangement and not by the claimed disk count.
    let mut seen: BTreeMap<Disk, usize> = BTreeMap::new();
    let mut placed = 0usize;
    for (peg, stack) in arrangement.iter().enumerate() {
        placed += stack.len();
        for &disk in stack {
            if (1..=config.disks).contains(&disk) {
                *seen.entry(disk).or_default() += 1;
            } else {
                checks.push(Validation::fail(ConfigViolation::DiskOutOfRange {
                    disk,
                    peg,
                    disks: config.disks,
                }));
            }
        }
    }

    let missing = config.disks.saturating_sub(seen.len());
    if missing <= MISSING_LISTING_LIMIT {
        for disk in 1..=config.disks {
            let count = seen.get(&disk).copied().unwrap_or(0);
            checks.push(check(count <= 1, || ConfigViolation::DuplicateDisk { disk }));
            checks.push(check(count >= 1, || ConfigViolation::MissingDisk { disk }));
        }
    } else {
        for (&disk, &count) in &seen {
            checks.push(check(count <= 1, || ConfigViolation::DuplicateDisk { disk }));
        }
        checks.push(Validation::fail(ConfigViolation::DiskCountMismatch {
            expected: config.disks,
            found: placed,
        }));
    }

    checks
}

fn into_result(checks: Vec<Check>) -> Result<(), PuzzleError> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(PuzzleError::InvalidConfiguration {
            violations: errors.iter().cloned().collect(),
        }),
    }
}

/// Validate peg and disk counts.
pub(crate) fn validate_config(config: &PuzzleConfig) -> Result<(), PuzzleError> {
    into_result(bound_checks(config))
}

/// Validate peg and disk counts together with an explicit arrangement.
///
/// Per-peg ordering is deliberately not checked here; see
/// [`PuzzleState::is_well_ordered`](super::PuzzleState::is_well_ordered).
pub(crate) fn validate_arrangement(
    config: &PuzzleConfig,
    arrangement: &[Vec<Disk>],
) -> Result<(), PuzzleError> {
    let mut checks = bound_checks(config);
    checks.extend(arrangement_checks(config, arrangement));
    into_result(checks)
}
