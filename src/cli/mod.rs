//! Console front-end: input parsing, board rendering and the game loop.
//!
//! None of this decides game rules; everything goes through
//! [`Game`](crate::core::Game).

#![cfg(feature = "std")]

pub mod input;
pub mod interface;
pub mod session;

pub use input::{coord_to_string, parse_coord, parse_orientation, parse_placement, PlacementCommand};
pub use interface::{write_fleet_report, write_grid, write_player_view, write_stats};
pub use session::{ConsoleSession, SessionOptions};
