//! Commonly used types for ease of import.

pub use crate::core::{
    AttackReport, AttackResult, Board, Cell, FleetBuilder, Game, GameError, GamePhase,
    Orientation, PlayerId, ShipKind,
};

#[cfg(feature = "std")]
pub use crate::cli::{ConsoleSession, SessionOptions};
