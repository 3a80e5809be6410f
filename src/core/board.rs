//! Board state backed by bitboards: ship occupancy, hits and misses.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::common::{AttackResult, Cell, GameError};
use super::config::{in_bounds, Grid, BB, BOARD_SIZE, NUM_SHIPS};
use super::placement::Placement;
use super::ship::Ship;

/// One player's own board: the ships placed on it and the shots received.
///
/// A cell only ever moves Empty→Ship during placement, or Ship→Hit and
/// Empty→Miss during battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    ships: Vec<Ship>,
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Self {
            ships: Vec::with_capacity(NUM_SHIPS),
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE as usize
    }

    /// Ships placed on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Commit a validated placement, writing Ship into each footprint cell.
    ///
    /// Does not re-validate: `placement` must come from
    /// [`placement::validate`](super::placement::validate) against this board.
    pub fn place(&mut self, mut ship: Ship, placement: Placement) -> &Ship {
        let (cells, orientation, mask) = placement.into_parts();
        self.ship_map |= mask;
        ship.set_footprint(cells, orientation);
        log::debug!("{} placed at {:?}", ship.kind(), ship.cells());
        self.ships.push(ship);
        &self.ships[self.ships.len() - 1]
    }

    /// State of a single cell.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if !in_bounds(row, col) {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        let cell = if self.hits.get(row, col)? {
            Cell::Hit
        } else if self.misses.get(row, col)? {
            Cell::Miss
        } else if self.ship_map.get(row, col)? {
            Cell::Ship
        } else {
            Cell::Empty
        };
        Ok(cell)
    }

    /// Fire at (row, col). Resolved cells yield `Repeat` and change nothing.
    ///
    /// Only marks the cell; crediting damage to the ship is the caller's job
    /// (see [`ship_at_mut`](Self::ship_at_mut)).
    pub fn receive_attack(&mut self, row: usize, col: usize) -> Result<AttackResult, GameError> {
        let result = match self.cell(row, col)? {
            Cell::Hit | Cell::Miss => AttackResult::Repeat,
            Cell::Ship => {
                self.hits.set(row, col)?;
                AttackResult::Hit
            }
            Cell::Empty => {
                self.misses.set(row, col)?;
                AttackResult::Miss
            }
        };
        Ok(result)
    }

    /// The ship occupying (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(row, col))
    }

    pub fn ship_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.occupies(row, col))
    }

    /// Returns `true` when every ship placed here is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Ships placed here that are still afloat.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Display copy of the grid. With `hide_ships`, intact ship cells show
    /// as Empty.
    pub fn render(&self, hide_ships: bool) -> Grid<Cell> {
        let mut grid = [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = match self.cell(r, c) {
                    Ok(Cell::Ship) if hide_ships => Cell::Empty,
                    Ok(other) => other,
                    Err(_) => Cell::Empty,
                };
            }
        }
        grid
    }
}

/// A player's record of their own shots at the opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackView {
    hits: BB,
    misses: BB,
}

impl AttackView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Note the outcome of a shot. Repeats are ignored.
    pub fn record(&mut self, row: usize, col: usize, result: AttackResult) -> Result<(), GameError> {
        if !in_bounds(row, col) {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        match result {
            AttackResult::Hit => self.hits.set(row, col)?,
            AttackResult::Miss => self.misses.set(row, col)?,
            AttackResult::Repeat => {}
        }
        Ok(())
    }

    /// Returns `true` if a shot at (row, col) was already recorded.
    pub fn is_resolved(&self, row: usize, col: usize) -> bool {
        self.hits.get(row, col).unwrap_or(false) || self.misses.get(row, col).unwrap_or(false)
    }

    pub fn render(&self) -> Grid<Cell> {
        let mut grid = [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (r, c) in self.hits.iter_set_bits() {
            grid[r][c] = Cell::Hit;
        }
        for (r, c) in self.misses.iter_set_bits() {
            grid[r][c] = Cell::Miss;
        }
        grid
    }
}
