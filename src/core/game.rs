//! Turn controller: placement phase, alternating attacks, win detection.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
use rand::Rng;

use super::common::{AttackResult, Cell, Coord, GameError};
use super::config::{in_bounds, Grid};
use super::player::{Player, ShotStats};
use super::ship::{Orientation, Ship, ShipKind};

/// Identifies one of the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Phases of a game, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    SetupP1,
    SetupP2,
    Battle,
    GameOver,
}

/// Outcome of placing one ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReport {
    pub player: PlayerId,
    pub kind: ShipKind,
    pub cells: Vec<Coord>,
    /// `true` when this was the player's last ship.
    pub fleet_complete: bool,
}

/// Outcome of one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: PlayerId,
    pub target: Coord,
    pub result: AttackResult,
    /// Kind of the ship this hit sank, if any.
    pub sunk: Option<ShipKind>,
    /// Set when this attack ended the game.
    pub winner: Option<PlayerId>,
    /// Who moves next.
    pub next: PlayerId,
}

impl AttackReport {
    /// A hit that did not end the game grants the attacker another move.
    pub fn extra_turn(&self) -> bool {
        self.result == AttackResult::Hit && self.winner.is_none()
    }
}

/// Reporting snapshot of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStatus {
    pub player1_name: String,
    pub player2_name: String,
    pub phase: GamePhase,
    pub current_player: Option<String>,
    pub game_over: bool,
    pub winner: Option<String>,
    pub stats: [ShotStats; 2],
}

/// A two-player game, driven one placement or attack at a time.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    phase: GamePhase,
    active: PlayerId,
    winner: Option<PlayerId>,
}

impl Game {
    /// Start a game where both players deploy the standard fleet.
    pub fn new(name1: impl Into<String>, name2: impl Into<String>) -> Result<Self, GameError> {
        let p1 = Player::with_standard_fleet(name1)?;
        let p2 = Player::with_standard_fleet(name2)?;
        Ok(Self::from_players(p1, p2))
    }

    /// Start a game with caller-assembled fleets.
    ///
    /// Each fleet must be non-empty and within the per-kind quotas.
    pub fn with_fleets(
        name1: impl Into<String>,
        fleet1: Vec<Ship>,
        name2: impl Into<String>,
        fleet2: Vec<Ship>,
    ) -> Result<Self, GameError> {
        let p1 = Player::new(name1, fleet1)?;
        let p2 = Player::new(name2, fleet2)?;
        Ok(Self::from_players(p1, p2))
    }

    fn from_players(p1: Player, p2: Player) -> Self {
        Self {
            players: [p1, p2],
            phase: GamePhase::SetupP1,
            active: PlayerId::One,
            winner: None,
        }
    }

    /// Fresh game with the same names and new fleets.
    pub fn rematch(&self) -> Result<Self, GameError> {
        Self::new(
            self.player(PlayerId::One).name(),
            self.player(PlayerId::Two).name(),
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Player whose move it is: the placing player during setup, the
    /// attacker during battle.
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn inactive_player(&self) -> PlayerId {
        self.active.other()
    }

    /// Player currently placing ships, if in a setup phase.
    pub fn setup_player(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::SetupP1 => Some(PlayerId::One),
            GamePhase::SetupP2 => Some(PlayerId::Two),
            GamePhase::Battle | GamePhase::GameOver => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|id| self.player(id).name())
    }

    pub fn loser(&self) -> Option<&str> {
        self.winner.map(|id| self.player(id.other()).name())
    }

    /// Owner's view of their own board, ships shown.
    pub fn own_view(&self, id: PlayerId) -> Grid<Cell> {
        self.player(id).board().render(false)
    }

    /// The opponent's board as `id` may see it, ships hidden.
    pub fn opponent_view(&self, id: PlayerId) -> Grid<Cell> {
        self.player(id.other()).board().render(true)
    }

    pub fn status(&self) -> GameStatus {
        let current_player: Option<String> = match self.phase {
            GamePhase::GameOver => None,
            _ => Some(self.player(self.active).name().into()),
        };
        GameStatus {
            player1_name: self.player(PlayerId::One).name().into(),
            player2_name: self.player(PlayerId::Two).name().into(),
            phase: self.phase,
            current_player,
            game_over: self.is_over(),
            winner: self.winner().map(Into::into),
            stats: [
                self.player(PlayerId::One).stats(),
                self.player(PlayerId::Two).stats(),
            ],
        }
    }

    fn setup_seat(&self) -> Result<PlayerId, GameError> {
        match self.setup_player() {
            Some(id) => Ok(id),
            None if self.is_over() => Err(GameError::GameAlreadyOver),
            None => Err(GameError::WrongPhase(self.phase)),
        }
    }

    /// Place the setup player's next ship in fleet order.
    pub fn place_next(
        &mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<PlacementReport, GameError> {
        let id = self.setup_seat()?;
        let ship = self.players[id.index()].place_next(row, col, orientation)?;
        let (kind, cells) = (ship.kind(), ship.cells().to_vec());
        Ok(self.after_placement(id, kind, cells))
    }

    /// Place the setup player's next ship of `kind`.
    pub fn place_kind(
        &mut self,
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<PlacementReport, GameError> {
        let id = self.setup_seat()?;
        let ship = self.players[id.index()].place_kind(kind, row, col, orientation)?;
        let cells = ship.cells().to_vec();
        Ok(self.after_placement(id, kind, cells))
    }

    /// Deploy the setup player's remaining ships at random.
    pub fn auto_place<R: Rng>(&mut self, rng: &mut R) -> Result<PlayerId, GameError> {
        let id = self.setup_seat()?;
        self.players[id.index()].auto_place(rng)?;
        log::debug!("{} deployed at random", self.player(id).name());
        self.advance_setup();
        Ok(id)
    }

    fn after_placement(&mut self, id: PlayerId, kind: ShipKind, cells: Vec<Coord>) -> PlacementReport {
        let fleet_complete = self.player(id).ships_placed();
        if fleet_complete {
            self.advance_setup();
        }
        PlacementReport {
            player: id,
            kind,
            cells,
            fleet_complete,
        }
    }

    /// Move past setup phases whose player has finished placing.
    fn advance_setup(&mut self) {
        loop {
            let next = match self.phase {
                GamePhase::SetupP1 if self.player(PlayerId::One).ships_placed() => {
                    GamePhase::SetupP2
                }
                GamePhase::SetupP2 if self.player(PlayerId::Two).ships_placed() => {
                    GamePhase::Battle
                }
                _ => break,
            };
            log::info!("phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
            self.active = match next {
                GamePhase::SetupP2 => PlayerId::Two,
                _ => PlayerId::One,
            };
        }
    }

    /// The active player fires at (row, col) on the opponent's board.
    ///
    /// A hit keeps the turn, a miss passes it, a repeat changes nothing.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<AttackReport, GameError> {
        match self.phase {
            GamePhase::Battle => {}
            GamePhase::GameOver => return Err(GameError::GameAlreadyOver),
            phase => return Err(GameError::WrongPhase(phase)),
        }
        if !in_bounds(row, col) {
            log::debug!("rejected attack at ({}, {}): off the board", row, col);
            return Err(GameError::InvalidCoordinate { row, col });
        }

        let attacker = self.active;
        let defender = attacker.other();
        let (att, def) = self.seats_mut(attacker);

        let result = def.board_mut().receive_attack(row, col)?;
        let mut sunk = None;
        match result {
            AttackResult::Repeat => {
                log::debug!("{} repeated ({}, {})", att.name(), row, col);
                return Ok(AttackReport {
                    attacker,
                    target: (row, col),
                    result,
                    sunk: None,
                    winner: None,
                    next: attacker,
                });
            }
            AttackResult::Hit => {
                if let Some(ship) = def.board_mut().ship_at_mut(row, col) {
                    ship.hit();
                    if ship.is_sunk() {
                        sunk = Some(ship.kind());
                    }
                }
            }
            AttackResult::Miss => {}
        }
        att.record_shot(row, col, result)?;
        log::debug!("{} fired at ({}, {}): {:?}", att.name(), row, col, result);
        if let Some(kind) = sunk {
            log::info!("{} sank {}'s {}", att.name(), def.name(), kind);
        }

        let mut winner = None;
        if def.board().all_ships_sunk() {
            log::info!("{} wins against {}", att.name(), def.name());
            winner = Some(attacker);
            self.winner = winner;
            self.phase = GamePhase::GameOver;
        } else if result == AttackResult::Miss {
            self.active = defender;
        }

        Ok(AttackReport {
            attacker,
            target: (row, col),
            result,
            sunk,
            winner,
            next: self.active,
        })
    }

    /// Split borrow: (attacker, defender).
    fn seats_mut(&mut self, attacker: PlayerId) -> (&mut Player, &mut Player) {
        let [one, two] = &mut self.players;
        match attacker {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        }
    }
}
