use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    AttackResult, FleetBuilder, Game, GameError, GamePhase, Orientation, PlayerId, ShipKind,
    NUM_SHIPS,
};

/// Non-touching layout for the standard fleet, in fleet order.
const LAYOUT: [(usize, usize); NUM_SHIPS] = [
    (0, 0), // Battleship
    (0, 5), // Cruiser
    (2, 0), // Cruiser
    (2, 4), // Submarine
    (2, 7), // Submarine
    (4, 0), // Submarine
    (4, 3), // Destroyers
    (4, 5),
    (4, 7),
    (4, 9),
];

fn layout_cells() -> Vec<(usize, usize)> {
    let sizes = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
    LAYOUT
        .iter()
        .zip(sizes)
        .flat_map(|(&(r, c), size)| (0..size).map(move |i| (r, c + i)))
        .collect()
}

fn deployed_game() -> Game {
    let mut game = Game::new("Alice", "Bob").unwrap();
    for _ in 0..2 {
        for &(r, c) in LAYOUT.iter() {
            game.place_next(r, c, Orientation::Horizontal).unwrap();
        }
    }
    game
}

#[test]
fn test_setup_phases_in_order() {
    let mut game = Game::new("Alice", "Bob").unwrap();
    assert_eq!(game.phase(), GamePhase::SetupP1);
    assert_eq!(game.setup_player(), Some(PlayerId::One));
    assert_eq!(game.attack(0, 0), Err(GameError::WrongPhase(GamePhase::SetupP1)));
    assert_eq!(
        GameError::WrongPhase(GamePhase::SetupP1).to_string(),
        "Operation not allowed during SetupP1"
    );

    for (i, &(r, c)) in LAYOUT.iter().enumerate() {
        let report = game.place_next(r, c, Orientation::Horizontal).unwrap();
        assert_eq!(report.player, PlayerId::One);
        assert_eq!(report.fleet_complete, i == NUM_SHIPS - 1);
    }
    assert_eq!(game.phase(), GamePhase::SetupP2);
    assert!(game.player(PlayerId::One).ships_placed());
    assert!(!game.player(PlayerId::Two).ships_placed());

    for &(r, c) in LAYOUT.iter() {
        game.place_next(r, c, Orientation::Horizontal).unwrap();
    }
    assert_eq!(game.phase(), GamePhase::Battle);
    assert_eq!(game.active_player(), PlayerId::One);
    assert_eq!(game.inactive_player(), PlayerId::Two);
    assert_eq!(
        game.place_next(9, 9, Orientation::Horizontal),
        Err(GameError::WrongPhase(GamePhase::Battle))
    );
}

#[test]
fn test_rejected_placement_can_be_retried() {
    let mut game = Game::new("Alice", "Bob").unwrap();
    assert_eq!(
        game.place_next(0, 7, Orientation::Horizontal),
        Err(GameError::OutOfBounds)
    );
    game.place_next(0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(
        game.place_next(1, 2, Orientation::Vertical),
        Err(GameError::Overlap)
    );
    let player = game.player(PlayerId::One);
    assert_eq!(player.pending().len(), NUM_SHIPS - 1);
    assert_eq!(player.next_ship(), Some(ShipKind::Cruiser));
    assert_eq!(player.board().ship_map().count_ones(), 4);
    game.place_next(5, 5, Orientation::Vertical).unwrap();
}

#[test]
fn test_place_kind_picks_requested_ship() {
    let mut game = Game::new("Alice", "Bob").unwrap();
    let report = game
        .place_kind(ShipKind::Destroyer, 9, 9, Orientation::Vertical)
        .unwrap();
    assert_eq!(report.kind, ShipKind::Destroyer);
    assert_eq!(report.cells, vec![(9, 9)]);
    let remaining = game.player(PlayerId::One).remaining_by_kind();
    assert_eq!(remaining[3], (ShipKind::Destroyer, 3));
    assert_eq!(remaining[0], (ShipKind::Battleship, 1));

    game.place_kind(ShipKind::Battleship, 0, 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        game.place_kind(ShipKind::Battleship, 6, 0, Orientation::Horizontal),
        Err(GameError::NoShipRemaining(ShipKind::Battleship))
    );
}

#[test]
fn test_hit_keeps_turn_miss_passes_it() {
    let mut game = deployed_game();

    let hit = game.attack(0, 0).unwrap();
    assert_eq!(hit.result, AttackResult::Hit);
    assert!(hit.extra_turn());
    assert_eq!(hit.next, PlayerId::One);
    assert_eq!(game.active_player(), PlayerId::One);

    let miss = game.attack(9, 9).unwrap();
    assert_eq!(miss.result, AttackResult::Miss);
    assert_eq!(miss.next, PlayerId::Two);
    assert_eq!(game.active_player(), PlayerId::Two);

    let miss = game.attack(9, 9).unwrap();
    assert_eq!(miss.attacker, PlayerId::Two);
    assert_eq!(game.active_player(), PlayerId::One);
}

#[test]
fn test_repeat_does_not_consume_turn() {
    let mut game = deployed_game();
    game.attack(0, 0).unwrap();
    let repeat = game.attack(0, 0).unwrap();
    assert_eq!(repeat.result, AttackResult::Repeat);
    assert_eq!(game.active_player(), PlayerId::One);
    let defender = game.player(PlayerId::Two);
    assert_eq!(defender.board().ships()[0].damage(), 1);
    assert_eq!(game.player(PlayerId::One).stats().shots, 1);

    game.attack(9, 9).unwrap();
    let before = game.player(PlayerId::Two).stats();
    assert_eq!(game.attack(9, 8).unwrap().result, AttackResult::Miss);
    assert_eq!(game.player(PlayerId::Two).stats().shots, before.shots + 1);
}

#[test]
fn test_invalid_attack_coordinate_fails_closed() {
    let mut game = deployed_game();
    assert_eq!(
        game.attack(10, 3),
        Err(GameError::InvalidCoordinate { row: 10, col: 3 })
    );
    assert_eq!(game.active_player(), PlayerId::One);
    assert_eq!(game.player(PlayerId::One).stats().shots, 0);
}

#[test]
fn test_sinking_reports_kind() {
    let mut game = deployed_game();
    let first = game.attack(0, 5).unwrap();
    assert_eq!(first.sunk, None);
    game.attack(0, 6).unwrap();
    let last = game.attack(0, 7).unwrap();
    assert_eq!(last.sunk, Some(ShipKind::Cruiser));
    assert_eq!(last.winner, None);
}

#[test]
fn test_full_game_to_victory() {
    let mut game = deployed_game();
    game.attack(9, 9).unwrap(); // Alice misses
    game.attack(9, 0).unwrap(); // Bob misses

    let cells = layout_cells();
    for (i, &(r, c)) in cells.iter().enumerate() {
        assert!(!game.is_over());
        let report = game.attack(r, c).unwrap();
        assert_eq!(report.result, AttackResult::Hit);
        if i + 1 == cells.len() {
            assert_eq!(report.winner, Some(PlayerId::One));
        }
    }
    assert!(game.is_over());
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.winner(), Some("Alice"));
    assert_eq!(game.loser(), Some("Bob"));
    assert_eq!(game.attack(5, 5), Err(GameError::GameAlreadyOver));

    let status = game.status();
    assert!(status.game_over);
    assert_eq!(status.winner.as_deref(), Some("Alice"));
    assert_eq!(status.current_player, None);
    assert_eq!(status.stats[0].hits, 20);
    assert_eq!(status.stats[0].misses, 1);

    let report = game.player(PlayerId::Two).fleet_report();
    assert_eq!(report.len(), NUM_SHIPS);
    assert!(report.iter().all(|s| s.sunk));
}

#[test]
fn test_views_hide_opponent_ships() {
    let game = deployed_game();
    let own = game.own_view(PlayerId::One);
    let theirs = game.opponent_view(PlayerId::One);
    assert_eq!(own[0][0], sea_battle::Cell::Ship);
    assert_eq!(theirs[0][0], sea_battle::Cell::Empty);
}

#[test]
fn test_auto_place_completes_both_fleets() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut game = Game::new("Alice", "Bob").unwrap();
    assert_eq!(game.auto_place(&mut rng).unwrap(), PlayerId::One);
    assert_eq!(game.phase(), GamePhase::SetupP2);
    assert_eq!(game.auto_place(&mut rng).unwrap(), PlayerId::Two);
    assert_eq!(game.phase(), GamePhase::Battle);
    for id in [PlayerId::One, PlayerId::Two] {
        let board = game.player(id).board();
        assert_eq!(board.ships().len(), NUM_SHIPS);
        assert_eq!(board.ship_map().count_ones(), 20);
    }
}

#[test]
fn test_auto_place_finishes_partial_fleet() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Game::new("Alice", "Bob").unwrap();
    game.place_next(0, 0, Orientation::Horizontal).unwrap();
    game.auto_place(&mut rng).unwrap();
    let board = game.player(PlayerId::One).board();
    assert_eq!(board.ships()[0].cells(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
    assert_eq!(board.ships().len(), NUM_SHIPS);
}

#[test]
fn test_rematch_resets_everything() {
    let mut game = deployed_game();
    game.attack(0, 0).unwrap();
    let fresh = game.rematch().unwrap();
    assert_eq!(fresh.phase(), GamePhase::SetupP1);
    assert_eq!(fresh.player(PlayerId::One).name(), "Alice");
    assert_eq!(fresh.player(PlayerId::Two).name(), "Bob");
    assert_eq!(fresh.player(PlayerId::Two).pending().len(), NUM_SHIPS);
    assert_eq!(fresh.player(PlayerId::One).stats().shots, 0);
}

#[test]
fn test_custom_fleet_game() {
    let mut builder = FleetBuilder::new();
    let fleet1 = vec![builder.build(ShipKind::Submarine).unwrap()];
    builder.reset();
    let fleet2 = vec![builder.build(ShipKind::Submarine).unwrap()];
    let mut game = Game::with_fleets("a", fleet1, "b", fleet2).unwrap();
    game.place_next(3, 3, Orientation::Vertical).unwrap();
    game.place_next(3, 3, Orientation::Vertical).unwrap();
    assert_eq!(game.attack(3, 3).unwrap().next, PlayerId::One);
    let last = game.attack(4, 3).unwrap();
    assert_eq!(last.winner, Some(PlayerId::One));
}

#[test]
fn test_custom_fleets_are_checked() {
    let destroyer = || FleetBuilder::new().build(ShipKind::Destroyer).unwrap();

    let err = Game::with_fleets("a", vec![destroyer()], "b", Vec::new()).unwrap_err();
    assert_eq!(err, GameError::EmptyFleet);

    // one Battleship from each of two builders is still two in one fleet
    let doubled = vec![
        FleetBuilder::new().build(ShipKind::Battleship).unwrap(),
        FleetBuilder::new().build(ShipKind::Battleship).unwrap(),
    ];
    let err = Game::with_fleets("a", doubled, "b", vec![destroyer()]).unwrap_err();
    assert_eq!(
        err,
        GameError::FleetQuotaExceeded {
            kind: ShipKind::Battleship,
            quota: 1
        }
    );
}

#[test]
fn test_miss_against_small_fleet_does_not_end_game() {
    let destroyer = || FleetBuilder::new().build(ShipKind::Destroyer).unwrap();
    let mut game = Game::with_fleets("a", vec![destroyer()], "b", vec![destroyer()]).unwrap();
    game.place_next(0, 0, Orientation::Horizontal).unwrap();
    game.place_next(9, 9, Orientation::Horizontal).unwrap();
    let report = game.attack(5, 5).unwrap();
    assert_eq!(report.result, AttackResult::Miss);
    assert_eq!(report.winner, None);
    assert_eq!(game.phase(), GamePhase::Battle);
    assert_eq!(report.next, PlayerId::Two);
}
