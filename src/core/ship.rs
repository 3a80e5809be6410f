//! Ship kinds, orientation and per-ship damage tracking.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use super::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step (row, col) taken from one segment to the next.
    pub const fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// The four ship classes and their fleet quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Submarine => 2,
            ShipKind::Destroyer => 1,
        }
    }

    /// How many ships of this kind one fleet holds.
    pub const fn quota(self) -> usize {
        match self {
            ShipKind::Battleship => 1,
            ShipKind::Cruiser => 2,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Position of the kind in the fleet table.
    pub(crate) const fn index(self) -> usize {
        match self {
            ShipKind::Battleship => 0,
            ShipKind::Cruiser => 1,
            ShipKind::Submarine => 2,
            ShipKind::Destroyer => 3,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single ship: its kind, footprint once placed, and accumulated damage.
///
/// Ships are only constructed through [`FleetBuilder`](super::fleet::FleetBuilder),
/// which enforces the per-kind quota.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    cells: Vec<Coord>,
    damage: usize,
    orientation: Option<Orientation>,
}

impl Ship {
    pub(crate) fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            cells: Vec::new(),
            damage: 0,
            orientation: None,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.kind.size()
    }

    /// Footprint in placement order; empty until placed.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn is_placed(&self) -> bool {
        self.orientation.is_some()
    }

    pub fn damage(&self) -> usize {
        self.damage
    }

    /// Returns `true` if (row, col) is part of the footprint.
    pub fn occupies(&self, row: usize, col: usize) -> bool {
        self.cells.iter().any(|&(r, c)| r == row && c == col)
    }

    /// Record one hit. Callers credit each distinct cell at most once.
    pub fn hit(&mut self) {
        self.damage += 1;
    }

    pub fn is_sunk(&self) -> bool {
        self.damage >= self.size()
    }

    /// Fix the footprint. Only called once, by `Board::place`.
    pub(crate) fn set_footprint(&mut self, cells: Vec<Coord>, orientation: Orientation) {
        debug_assert!(!self.is_placed());
        self.cells = cells;
        self.orientation = Some(orientation);
    }
}
