use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::prelude::*;
use sea_battle::{BOARD_SIZE, TOTAL_SHIP_CELLS};

fn random_game(seed: u64) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new("one", "two").unwrap();
    game.auto_place(&mut rng).unwrap();
    game.auto_place(&mut rng).unwrap();
    game
}

const N: usize = BOARD_SIZE as usize;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Turn passes on a miss only; the game ends exactly when a fleet is gone.
    #[test]
    fn turn_order_follows_results(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..N, 0..N), 1..400),
    ) {
        let mut game = random_game(seed);
        for (r, c) in shots {
            if game.is_over() {
                break;
            }
            let attacker = game.active_player();
            let report = game.attack(r, c).unwrap();
            prop_assert_eq!(report.attacker, attacker);
            let defender_sunk = game.player(attacker.other()).board().all_ships_sunk();
            prop_assert_eq!(report.winner.is_some(), defender_sunk);
            prop_assert_eq!(game.is_over(), defender_sunk);
            let expected_next = match report.result {
                AttackResult::Miss if !defender_sunk => attacker.other(),
                _ => attacker,
            };
            prop_assert_eq!(game.active_player(), expected_next);
            prop_assert_eq!(report.next, expected_next);
        }
    }

    /// Sweeping the whole board row by row always produces a winner with
    /// every enemy ship cell hit exactly once.
    #[test]
    fn sweep_always_finishes(seed in any::<u64>()) {
        let mut game = random_game(seed);
        let mut targets = [0usize; 2];
        while !game.is_over() {
            let id = game.active_player();
            let slot = match id {
                PlayerId::One => 0,
                PlayerId::Two => 1,
            };
            let idx = targets[slot];
            prop_assert!(idx < N * N);
            targets[slot] += 1;
            let report = game.attack(idx / N, idx % N).unwrap();
            prop_assert_ne!(report.result, AttackResult::Repeat);
        }
        let winner = game.winner_id().unwrap();
        let stats = game.player(winner).stats();
        prop_assert_eq!(stats.hits, TOTAL_SHIP_CELLS);
        prop_assert_eq!(stats.shots, stats.hits + stats.misses);
    }
}
