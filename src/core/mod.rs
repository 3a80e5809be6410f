//! Game-state engine (no_std compatible).
//!
//! Board representation, fleet quotas, placement validation, attack
//! resolution, turn sequencing and win detection. Nothing in here reads
//! input or prints; front-ends drive it through [`Game`].

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod fleet;
pub mod game;
pub mod placement;
pub mod player;
pub mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::{AttackView, Board};
pub use common::{AttackResult, Cell, Coord, GameError};
pub use config::*;
pub use fleet::{check_fleet, FleetBuilder};
pub use game::{AttackReport, Game, GamePhase, GameStatus, PlacementReport, PlayerId};
pub use placement::{footprint, random_placement, validate, Placement};
pub use player::{Player, ShipReport, ShotStats};
pub use ship::{Orientation, Ship, ShipKind};
