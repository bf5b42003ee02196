//! Textual rendering of puzzle states.

use super::state::PuzzleState;
use std::fmt;

/// Width of one peg column: the digits of the largest disk plus one space.
fn column_width(disks: usize) -> usize {
    disks.checked_ilog10().map_or(1, |log| log as usize + 2)
}

/// Renders the pegs vertically, tallest row first.
///
/// Each column shows the disk at that height right-justified, or a `|`
/// where the peg is empty.
///
/// ```rust
/// use hanoi::core::PuzzleState;
///
/// let start = PuzzleState::new_initial(3, 3)?;
/// assert_eq!(start.to_string(), " 1 | |\n 2 | |\n 3 | |");
/// # Ok::<(), hanoi::core::PuzzleError>(())
/// ```
impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = column_width(self.disks);
        for row in (0..self.disks).rev() {
            for stack in &self.arrangement {
                match stack.get(row) {
                    Some(disk) => write!(f, "{disk:>width$}")?,
                    None => write!(f, "{:>width$}", "|")?,
                }
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleState")
            .field("pegs", &self.pegs)
            .field("disks", &self.disks)
            .field("arrangement", &self.arrangement)
            .finish()
    }
}
