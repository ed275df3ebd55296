use std::collections::HashSet;

use armada::{Board, HuntTargetAi, Player, ShotOutcome};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_search_exhausts_the_board_without_repeats() {
    let mut ai = HuntTargetAi::new();
    let mut tracker = Board::new();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut seen = HashSet::new();

    for _ in 0..100 {
        let (row, col) = ai
            .select_target(&mut rng, &tracker)
            .expect("cells still open");
        assert!(seen.insert((row, col)), "repeated {:?}", (row, col));
        tracker.record_shot(row, col, ShotOutcome::Miss);
        ai.observe((row, col), ShotOutcome::Miss, &tracker);
    }
    assert_eq!(ai.select_target(&mut rng, &tracker), None);
}

#[test]
fn test_hit_switches_to_hunting() {
    let mut ai = HuntTargetAi::new();
    let mut tracker = Board::new();
    let mut rng = SmallRng::seed_from_u64(1);

    assert!(!ai.is_hunting());
    tracker.record_shot(5, 5, ShotOutcome::Hit);
    ai.observe((5, 5), ShotOutcome::Hit, &tracker);

    assert!(ai.is_hunting());
    assert_eq!(ai.pending_targets(), 4);
    assert_eq!(ai.recent_hits(), &[(5, 5)]);

    let next = ai.select_target(&mut rng, &tracker).unwrap();
    assert!([(4, 5), (6, 5), (5, 4), (5, 6)].contains(&next));
}

#[test]
fn test_sunk_returns_to_search() {
    let mut ai = HuntTargetAi::new();
    let mut tracker = Board::new();

    tracker.record_shot(5, 5, ShotOutcome::Hit);
    ai.observe((5, 5), ShotOutcome::Hit, &tracker);
    assert!(ai.is_hunting());

    tracker.record_shot(5, 6, ShotOutcome::Sunk);
    ai.observe((5, 6), ShotOutcome::Sunk, &tracker);
    assert!(!ai.is_hunting());
    assert_eq!(ai.pending_targets(), 0);
    assert!(ai.recent_hits().is_empty());
}

#[test]
fn test_corner_hit_queues_two_neighbors() {
    let mut ai = HuntTargetAi::new();
    let mut tracker = Board::new();
    tracker.record_shot(0, 0, ShotOutcome::Hit);
    ai.observe((0, 0), ShotOutcome::Hit, &tracker);
    assert_eq!(ai.pending_targets(), 2);
}

#[test]
fn test_queue_deduplicates_neighbors() {
    let mut ai = HuntTargetAi::new();
    let mut tracker = Board::new();
    tracker.record_shot(5, 5, ShotOutcome::Hit);
    ai.observe((5, 5), ShotOutcome::Hit, &tracker);
    assert_eq!(ai.pending_targets(), 4);
    // the same observation again adds nothing new
    ai.observe((5, 5), ShotOutcome::Hit, &tracker);
    assert_eq!(ai.pending_targets(), 4);
}

#[test]
fn test_miss_and_repeat_leave_the_queue_alone() {
    let mut ai = HuntTargetAi::new();
    let mut tracker = Board::new();
    tracker.record_shot(5, 5, ShotOutcome::Hit);
    ai.observe((5, 5), ShotOutcome::Hit, &tracker);

    tracker.record_shot(9, 9, ShotOutcome::Miss);
    ai.observe((9, 9), ShotOutcome::Miss, &tracker);
    assert_eq!(ai.pending_targets(), 4);
    ai.observe((9, 9), ShotOutcome::Repeat, &tracker);
    assert_eq!(ai.pending_targets(), 4);
}

#[test]
fn test_stale_targets_are_skipped() {
    let mut ai = HuntTargetAi::new();
    let mut tracker = Board::new();
    let mut rng = SmallRng::seed_from_u64(3);

    tracker.record_shot(5, 5, ShotOutcome::Hit);
    ai.observe((5, 5), ShotOutcome::Hit, &tracker);
    // the first two queued neighbors get shot by other means
    tracker.record_shot(4, 5, ShotOutcome::Miss);
    tracker.record_shot(6, 5, ShotOutcome::Miss);

    let next = ai.select_target(&mut rng, &tracker).unwrap();
    assert!([(5, 4), (5, 6)].contains(&next));
}

fn duel_turn(
    shooter: &mut Player,
    opponent: &mut Player,
    ai: &mut HuntTargetAi,
    rng: &mut SmallRng,
) -> ShotOutcome {
    let (row, col) = ai.select_target(rng, shooter.shots()).expect("open cells");
    let outcome = shooter.fire_at(row, col, opponent);
    assert_ne!(outcome, ShotOutcome::Repeat);
    assert_ne!(outcome, ShotOutcome::Invalid);
    ai.observe((row, col), outcome, shooter.shots());
    outcome
}

#[test]
fn test_ai_vs_ai_duel_finishes() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut p1 = Player::new("p1");
    let mut p2 = Player::new("p2");
    assert_eq!(p1.place_ships_randomly(&mut rng), 0);
    assert_eq!(p2.place_ships_randomly(&mut rng), 0);
    let mut ai1 = HuntTargetAi::new();
    let mut ai2 = HuntTargetAi::new();

    let mut turns = 0;
    loop {
        turns += 1;
        assert!(turns <= 250, "duel took too many turns");
        duel_turn(&mut p1, &mut p2, &mut ai1, &mut rng);
        if p2.has_lost() {
            break;
        }
        duel_turn(&mut p2, &mut p1, &mut ai2, &mut rng);
        if p1.has_lost() {
            break;
        }
    }
    assert!(p1.has_lost() || p2.has_lost());
    let loser = if p1.has_lost() { &p1 } else { &p2 };
    assert_eq!(loser.ships_lost(), 10);
    assert_eq!(loser.ships_remaining(), 0);
}
