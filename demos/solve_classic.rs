//! Classic Solve
//!
//! This example plays the textbook recursive solution of the three-peg
//! puzzle and prints every position along the way.
//!
//! Key concepts:
//! - Moves produce new states; the start position is never modified
//! - The lineage of the final state records the whole game
//! - A checkpoint replays the game and reproduces the same state
//!
//! Run with: RUST_LOG=hanoi=debug cargo run --example solve_classic

use hanoi::core::{Move, PuzzleState};
use hanoi::{Checkpoint, PuzzleBuilder};
use tracing_subscriber::EnvFilter;

fn solve(disks: usize, from: usize, to: usize, via: usize, moves: &mut Vec<Move>) {
    if disks == 0 {
        return;
    }
    solve(disks - 1, from, via, to, moves);
    moves.push(Move::new(from, to));
    solve(disks - 1, via, to, from, moves);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Classic Solve Example ===\n");

    let start = PuzzleBuilder::new().disks(4).build()?;
    println!("Start:\n{start}\n");

    let mut moves = Vec::new();
    solve(start.disks(), 0, start.pegs() - 1, 1, &mut moves);

    let mut state = start.clone();
    for mv in &moves {
        state = state.apply(*mv)?;
        println!("Move {} ({mv}):\n{state}\n", state.depth());
    }

    println!("Solved: {}", state.is_goal_state());
    println!("Moves taken: {} (minimum {})", state.depth(), (1 << start.disks()) - 1);
    println!("Start unchanged: {}", start == PuzzleState::new_initial(3, 4)?);

    let json = Checkpoint::capture(&state).to_json()?;
    let resumed = Checkpoint::from_json(&json)?.resume()?;
    println!("Checkpoint size: {} bytes", json.len());
    println!("Resumed equals solved: {}", resumed == state);

    println!("\n=== Example Complete ===");
    Ok(())
}
