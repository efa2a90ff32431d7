//! Shared lifecycle integration tests: restart, replay, elapsed time.
//!
//! These run both games through the `PuzzleEngine` trait to check the
//! behaviour they share.

use std::time::Duration;

use puzzle_engine::core::{Clock, FifteenConfig, HanoiConfig, ManualClock, MoveOutcome};
use puzzle_engine::games::{FifteenGame, HanoiGame, TowerMove};
use puzzle_engine::rules::PuzzleEngine;
use puzzle_engine::view::{FifteenSnapshot, HanoiSnapshot};

/// Restart, then the same intents, gives the same state.
fn assert_replay_deterministic<E>(engine: &mut E, intents: &[E::Intent], clock: &ManualClock) -> Vec<MoveOutcome>
where
    E: PuzzleEngine + Clone,
{
    let mut twin = engine.clone();

    engine.restart(clock);
    twin.restart(clock);
    let first = engine.replay(intents.iter().cloned()).unwrap();
    let second = twin.replay(intents.iter().cloned()).unwrap();

    assert_eq!(first, second);
    assert_eq!(engine.move_count(), twin.move_count());
    assert_eq!(engine.is_solved(), twin.is_solved());
    first
}

#[test]
fn test_hanoi_replay_is_deterministic() {
    let clock = ManualClock::new();
    let mut game = HanoiGame::start(HanoiConfig::new(3), &clock);
    let intents = [
        TowerMove::new(0, 2),
        TowerMove::new(0, 2), // rejected: 2 onto 1
        TowerMove::new(0, 1),
        TowerMove::new(2, 1),
    ];

    let outcomes = assert_replay_deterministic(&mut game, &intents, &clock);
    assert_eq!(
        outcomes,
        vec![MoveOutcome::Moved, MoveOutcome::Rejected, MoveOutcome::Moved, MoveOutcome::Moved]
    );
    assert_eq!(game.towers().to_vecs(), vec![vec![3], vec![2, 1], vec![]]);
    assert_eq!(game.move_count(), 3);
}

#[test]
fn test_fifteen_replay_from_seed_is_deterministic() {
    let clock = ManualClock::new();
    let mut game = FifteenGame::new(FifteenConfig::new().with_seed(2024), &clock);
    let intents: Vec<usize> = (0..40).map(|i| (i * 7) % 16).collect();

    assert_replay_deterministic(&mut game, &intents, &clock);

    // A fresh game from the same seed deals the same first board.
    let a = FifteenGame::new(FifteenConfig::new().with_seed(2024), &clock);
    let b = FifteenGame::new(FifteenConfig::new().with_seed(2024), &clock);
    assert_eq!(a.board(), b.board());
}

/// Replay stops at the first out-of-range intent.
#[test]
fn test_replay_stops_on_caller_error() {
    let clock = ManualClock::new();
    let mut game = HanoiGame::start(HanoiConfig::new(3), &clock);

    let result = game.replay([TowerMove::new(0, 1), TowerMove::new(0, 9), TowerMove::new(0, 2)]);

    assert!(result.is_err());
    assert_eq!(game.move_count(), 1);
}

#[test]
fn test_history_records_accepted_moves_only() {
    let clock = ManualClock::new();
    let mut game = HanoiGame::start(HanoiConfig::new(3), &clock);
    game.move_disk(0, 1).unwrap();
    game.move_disk(0, 1).unwrap(); // rejected
    game.move_disk(0, 2).unwrap();

    let history = game.lifecycle().history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].sequence, 1);
    assert_eq!(history[0].intent, TowerMove::new(0, 1));
    assert_eq!(history[1].sequence, 2);
    assert_eq!(history[1].intent, TowerMove::new(0, 2));
}

/// Elapsed time follows the clock and resets on restart.
#[test]
fn test_elapsed_time_in_snapshots() {
    let clock = ManualClock::new();
    let mut hanoi = HanoiGame::start(HanoiConfig::default(), &clock);
    let mut fifteen = FifteenGame::new(FifteenConfig::new().with_seed(1), &clock);

    clock.advance(Duration::from_secs(90));
    assert_eq!(HanoiSnapshot::capture(&hanoi, clock.now()).elapsed_secs, 90);
    assert_eq!(FifteenSnapshot::capture(&fifteen, clock.now()).elapsed_secs, 90);

    hanoi.restart(&clock);
    fifteen.restart(&clock);
    clock.advance(Duration::from_secs(5));
    assert_eq!(HanoiSnapshot::capture(&hanoi, clock.now()).elapsed_secs, 5);
    assert_eq!(FifteenSnapshot::capture(&fifteen, clock.now()).elapsed_secs, 5);
}
