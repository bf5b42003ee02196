//! Concrete play-through scenarios and a breadth-first search oracle for
//! minimal solution lengths.

use hanoi::core::{ConfigViolation, Move, MoveRejection, Puzzle, PuzzleError, PuzzleState};
use hanoi::{Checkpoint, PuzzleBuilder};
use std::collections::{HashSet, VecDeque};

/// Length of the shortest path from `start` to any goal position.
fn shortest_solution<P: Puzzle>(start: P) -> Option<usize> {
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([(start, 0)]);

    while let Some((state, depth)) = queue.pop_front() {
        if state.is_goal() {
            return Some(depth);
        }
        for mv in state.possible_moves() {
            let next = state.next_state(mv).ok()?;
            if seen.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}

/// The textbook recursive three-peg solution.
fn recursive_solution(disks: usize, from: usize, to: usize, via: usize, out: &mut Vec<Move>) {
    if disks == 0 {
        return;
    }
    recursive_solution(disks - 1, from, via, to, out);
    out.push(Move::new(from, to));
    recursive_solution(disks - 1, via, to, from, out);
}

#[test]
fn initial_three_by_three() {
    let start = PuzzleState::new_initial(3, 3).unwrap();

    assert_eq!(start.arrangement(), &[vec![3, 2, 1], vec![], vec![]]);
    assert!(!start.is_goal_state());

    let moves = start.possible_moves();
    assert_eq!(moves, vec![Move::new(0, 1), Move::new(0, 2)]);
    assert!(!moves.contains(&Move::new(1, 2)));
    assert!(!moves.contains(&Move::new(2, 1)));
}

#[test]
fn first_move_onto_empty_peg() {
    let start = PuzzleState::new_initial(3, 3).unwrap();
    let second = start.apply_move(0, 1).unwrap();

    assert_eq!(second.arrangement(), &[vec![3, 2], vec![1], vec![]]);
    assert_eq!(second.producing_move(), Some(Move::new(0, 1)));
    assert_eq!(second.predecessor(), Some(&start));
}

#[test]
fn larger_disk_cannot_cover_smaller() {
    let second = PuzzleState::new_initial(3, 3)
        .unwrap()
        .apply_move(0, 1)
        .unwrap();

    let err = second.apply_move(0, 1).unwrap_err();
    assert_eq!(
        err,
        PuzzleError::InvalidMove {
            mv: Move::new(0, 1),
            reason: MoveRejection::LargerOnSmaller {
                moving: 2,
                resting: 1
            },
        }
    );
    assert_eq!(second.arrangement(), &[vec![3, 2], vec![1], vec![]]);
}

#[test]
fn second_disk_goes_to_free_peg() {
    let third = PuzzleState::new_initial(3, 3)
        .unwrap()
        .apply_move(0, 1)
        .unwrap()
        .apply_move(0, 2)
        .unwrap();

    assert_eq!(third.arrangement(), &[vec![3], vec![1], vec![2]]);
}

#[test]
fn full_three_disk_solve() {
    let start = PuzzleState::new_initial(3, 3).unwrap();
    let sequence = [(0, 1), (0, 2), (1, 2), (0, 1), (2, 0), (2, 1), (0, 1)];

    let mut state = start;
    for (from, to) in sequence {
        assert!(!state.is_goal_state());
        state = state.apply_move(from, to).unwrap();
        assert!(state.is_well_ordered());
    }

    // This sequence gathers the tower on peg 1, not on the goal peg
    assert_eq!(state.arrangement(), &[vec![], vec![3, 2, 1], vec![]]);
    assert!(!state.is_goal_state());
    assert_eq!(state.depth(), 7);
}

#[test]
fn full_three_disk_solve_onto_last_peg() {
    let start = PuzzleState::new_initial(3, 3).unwrap();
    let sequence = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)];

    let solved = PuzzleState::replay(&start, sequence.map(Move::from)).unwrap();

    assert_eq!(solved.arrangement(), &[vec![], vec![], vec![3, 2, 1]]);
    assert!(solved.is_goal_state());
    assert_eq!(solved.depth(), (1 << 3) - 1);
    assert_eq!(solved.to_string(), " | | 1\n | | 2\n | | 3");
}

#[test]
fn two_pegs_are_rejected() {
    let err = PuzzleState::new_initial(2, 1).unwrap_err();
    assert!(matches!(err, PuzzleError::InvalidConfiguration { .. }));
    assert_eq!(
        err.violations(),
        &[ConfigViolation::TooFewPegs { found: 2, min: 3 }]
    );
}

#[test]
fn three_peg_minimum_is_two_to_the_n_minus_one() {
    for disks in 1..=5 {
        let start = PuzzleState::new_initial(3, disks).unwrap();
        assert_eq!(shortest_solution(start), Some((1 << disks) - 1), "{disks} disks");
    }
}

#[test]
fn four_peg_minimums_match_known_values() {
    let known = [1, 3, 5, 9, 13];
    for (disks, expected) in (1..=known.len()).zip(known) {
        let start = PuzzleState::new_initial(4, disks).unwrap();
        assert_eq!(shortest_solution(start), Some(expected), "{disks} disks");
    }
}

#[test]
fn recursive_solution_reaches_goal() {
    for disks in 1..=10 {
        let mut moves = Vec::new();
        recursive_solution(disks, 0, 2, 1, &mut moves);

        let start = PuzzleState::new_initial(3, disks).unwrap();
        let solved = PuzzleState::replay(&start, moves.iter().copied()).unwrap();

        assert!(solved.is_goal_state());
        assert_eq!(solved.moves(), moves);
        assert_eq!(solved.depth(), (1 << disks) - 1);
    }
}

#[test]
fn solved_game_survives_a_checkpoint() {
    let mut moves = Vec::new();
    recursive_solution(6, 0, 2, 1, &mut moves);

    let start = PuzzleBuilder::new().disks(6).build().unwrap();
    let solved = PuzzleState::replay(&start, moves).unwrap();

    let bytes = Checkpoint::capture(&solved).to_bytes().unwrap();
    let resumed = Checkpoint::from_bytes(&bytes).unwrap().resume().unwrap();

    assert!(resumed.is_goal_state());
    assert_eq!(resumed.depth(), 63);
    assert_eq!(resumed, solved);
}

#[test]
fn siblings_derived_in_parallel_are_independent() {
    let start = PuzzleState::new_initial(5, 4).unwrap();
    let moves = start.possible_moves();

    let children: Vec<PuzzleState> = std::thread::scope(|scope| {
        let handles: Vec<_> = moves
            .iter()
            .map(|&mv| {
                let start = &start;
                scope.spawn(move || start.apply(mv).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(children.len(), 4);
    assert_eq!(start, PuzzleState::new_initial(5, 4).unwrap());
    for (child, mv) in children.iter().zip(&moves) {
        assert_eq!(child.producing_move(), Some(*mv));
        assert_eq!(child.top(mv.to), Some(1));
        assert_eq!(child.predecessor(), Some(&start));
    }
}
