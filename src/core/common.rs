//! Shared types: cells, attack outcomes and the engine error.

use core::fmt;

use super::bitboard::BitBoardError;
use super::game::GamePhase;
use super::ship::ShipKind;

/// Zero-based (row, col) board coordinate.
pub type Coord = (usize, usize);

/// State of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    Hit,
    Miss,
    /// The cell was already resolved; nothing changed.
    Repeat,
}

/// Errors returned by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A computed ship cell falls outside the board.
    OutOfBounds,
    /// The ship would overlap or touch an already placed ship.
    Overlap,
    /// More ships of this kind were requested than one fleet allows.
    FleetQuotaExceeded { kind: ShipKind, quota: usize },
    /// Attack coordinate outside the board.
    InvalidCoordinate { row: usize, col: usize },
    /// No unplaced ship of this kind is left.
    NoShipRemaining(ShipKind),
    /// Every ship of the fleet is already on the board.
    FleetAlreadyPlaced,
    /// A fleet must hold at least one ship.
    EmptyFleet,
    /// Operation not allowed in the current phase.
    WrongPhase(GamePhase),
    /// The game has a winner; no further moves are accepted.
    GameAlreadyOver,
    /// Random deployment gave up.
    UnableToPlaceFleet,
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "Ship placement is out of board bounds"),
            GameError::Overlap => {
                write!(f, "Ship would overlap or touch another ship")
            }
            GameError::FleetQuotaExceeded { kind, quota } => {
                write!(f, "Cannot create more than {} {}(s)", quota, kind)
            }
            GameError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::NoShipRemaining(kind) => write!(f, "No {}s left to place", kind),
            GameError::FleetAlreadyPlaced => write!(f, "All ships are already placed"),
            GameError::EmptyFleet => write!(f, "A fleet needs at least one ship"),
            GameError::WrongPhase(phase) => {
                write!(f, "Operation not allowed during {:?}", phase)
            }
            GameError::GameAlreadyOver => write!(f, "The game is already over"),
            GameError::UnableToPlaceFleet => write!(f, "Unable to place fleet"),
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
