//! Player aggregate: own board, attack view, and the ships still to deploy.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
use rand::Rng;

use super::board::{AttackView, Board};
use super::common::{AttackResult, Coord, GameError};
use super::config::FLEET;
use super::fleet::{check_fleet, FleetBuilder};
use super::placement::{random_placement, validate};
use super::ship::{Orientation, Ship, ShipKind};

/// Restarts attempted by [`Player::auto_place`] after a dead end.
const AUTO_PLACE_RESTARTS: usize = 50;

/// Shots fired by one player. Repeats are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotStats {
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
}

impl ShotStats {
    fn record(&mut self, result: AttackResult) {
        match result {
            AttackResult::Hit => self.hits += 1,
            AttackResult::Miss => self.misses += 1,
            AttackResult::Repeat => return,
        }
        self.shots += 1;
    }
}

/// End-of-game summary of one ship.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipReport {
    pub kind: ShipKind,
    pub cells: Vec<Coord>,
    pub damage: usize,
    pub sunk: bool,
}

impl From<&Ship> for ShipReport {
    fn from(ship: &Ship) -> Self {
        Self {
            kind: ship.kind(),
            cells: ship.cells().to_vec(),
            damage: ship.damage(),
            sunk: ship.is_sunk(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
    attack_view: AttackView,
    pending: Vec<Ship>,
    ships_placed: bool,
    stats: ShotStats,
}

impl Player {
    /// Create a player who still has to deploy `fleet`.
    ///
    /// The fleet is checked with [`check_fleet`]: it must be non-empty and
    /// within the per-kind quotas.
    pub fn new(name: impl Into<String>, fleet: Vec<Ship>) -> Result<Self, GameError> {
        check_fleet(&fleet)?;
        Ok(Self {
            name: name.into(),
            board: Board::new(),
            attack_view: AttackView::new(),
            pending: fleet,
            ships_placed: false,
            stats: ShotStats::default(),
        })
    }

    /// Create a player with a freshly built standard fleet.
    pub fn with_standard_fleet(name: impl Into<String>) -> Result<Self, GameError> {
        let fleet = FleetBuilder::new().standard_fleet()?;
        Self::new(name, fleet)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn attack_view(&self) -> &AttackView {
        &self.attack_view
    }

    pub fn stats(&self) -> ShotStats {
        self.stats
    }

    /// `true` once the whole fleet is on the board.
    pub fn ships_placed(&self) -> bool {
        self.ships_placed
    }

    /// Ships still waiting to be placed, in fleet order.
    pub fn pending(&self) -> &[Ship] {
        &self.pending
    }

    /// Kind of the ship `place_next` would deploy.
    pub fn next_ship(&self) -> Option<ShipKind> {
        self.pending.first().map(Ship::kind)
    }

    /// Outstanding ships per kind, in fleet order.
    pub fn remaining_by_kind(&self) -> [(ShipKind, usize); FLEET.len()] {
        FLEET.map(|kind| (kind, self.pending.iter().filter(|s| s.kind() == kind).count()))
    }

    /// Place the next pending ship in fleet order.
    pub fn place_next(
        &mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<&Ship, GameError> {
        if self.pending.is_empty() {
            return Err(GameError::FleetAlreadyPlaced);
        }
        self.place_at(0, row, col, orientation)
    }

    /// Place the next pending ship of `kind`.
    pub fn place_kind(
        &mut self,
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<&Ship, GameError> {
        if self.pending.is_empty() {
            return Err(GameError::FleetAlreadyPlaced);
        }
        let idx = self
            .pending
            .iter()
            .position(|s| s.kind() == kind)
            .ok_or(GameError::NoShipRemaining(kind))?;
        self.place_at(idx, row, col, orientation)
    }

    fn place_at(
        &mut self,
        idx: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<&Ship, GameError> {
        let kind = self.pending[idx].kind();
        let placement = validate(kind.size(), row, col, orientation, &self.board).map_err(|e| {
            log::debug!(
                "{}: rejected {} at ({}, {}) {:?}: {}",
                self.name,
                kind,
                row,
                col,
                orientation,
                e
            );
            e
        })?;
        let ship = self.pending.remove(idx);
        self.ships_placed = self.pending.is_empty();
        Ok(self.board.place(ship, placement))
    }

    /// Deploy every pending ship at random.
    ///
    /// Works on a scratch copy and restarts from the current board when a
    /// ship cannot be fitted; on failure nothing is modified.
    pub fn auto_place<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.pending.is_empty() {
            return Err(GameError::FleetAlreadyPlaced);
        }
        'attempt: for attempt in 0..AUTO_PLACE_RESTARTS {
            let mut board = self.board.clone();
            for ship in &self.pending {
                match random_placement(rng, ship.size(), &board) {
                    Ok(placement) => {
                        board.place(ship.clone(), placement);
                    }
                    Err(_) => {
                        log::debug!("{}: random deployment dead end #{}", self.name, attempt + 1);
                        continue 'attempt;
                    }
                }
            }
            self.board = board;
            self.pending.clear();
            self.ships_placed = true;
            return Ok(());
        }
        Err(GameError::UnableToPlaceFleet)
    }

    /// Note the outcome of one of this player's shots.
    pub(crate) fn record_shot(
        &mut self,
        row: usize,
        col: usize,
        result: AttackResult,
    ) -> Result<(), GameError> {
        self.attack_view.record(row, col, result)?;
        self.stats.record(result);
        Ok(())
    }

    /// Summary of every placed ship.
    pub fn fleet_report(&self) -> Vec<ShipReport> {
        self.board.ships().iter().map(ShipReport::from).collect()
    }
}
