//! Placement validation.
//!
//! Validation is pure: it reads the board and returns a [`Placement`] or
//! an error. Committing the write is [`Board::place`]'s job, so a rejected
//! placement never touches the board.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use rand::Rng;

use super::board::Board;
use super::common::{Coord, GameError};
use super::config::{in_bounds, BB, BOARD_SIZE};
use super::ship::Orientation;

/// Attempts made by [`random_placement`] before giving up.
const RANDOM_ATTEMPTS: usize = 200;

/// A footprint that passed validation against a board.
///
/// Only [`validate`] can construct one. It is meant to be committed to the
/// same board right away, before any other placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    cells: Vec<Coord>,
    orientation: Orientation,
    mask: BB,
}

impl Placement {
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub(crate) fn into_parts(self) -> (Vec<Coord>, Orientation, BB) {
        (self.cells, self.orientation, self.mask)
    }
}

/// Cells a ship of `size` occupies starting at (`row`, `col`).
pub fn footprint(
    size: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> Result<Vec<Coord>, GameError> {
    let (dr, dc) = orientation.step();
    let mut cells = Vec::with_capacity(size);
    for i in 0..size {
        let (r, c) = (row + dr * i, col + dc * i);
        if !in_bounds(r, c) {
            return Err(GameError::OutOfBounds);
        }
        cells.push((r, c));
    }
    Ok(cells)
}

/// Check a ship of `size` at (`row`, `col`) against `board`.
///
/// Rejects footprints leaving the board and footprints that overlap or
/// touch, diagonals included, any ship already on the board.
pub fn validate(
    size: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
    board: &Board,
) -> Result<Placement, GameError> {
    let cells = footprint(size, row, col, orientation)?;
    let mask = BB::from_cells(cells.iter().copied())?;
    if mask.dilate().intersects(&board.ship_map()) {
        return Err(GameError::Overlap);
    }
    Ok(Placement {
        cells,
        orientation,
        mask,
    })
}

/// Returns a random valid placement for a ship of `size` on `board`.
pub fn random_placement<R: Rng>(
    rng: &mut R,
    size: usize,
    board: &Board,
) -> Result<Placement, GameError> {
    let n = BOARD_SIZE as usize;
    if size == 0 || size > n {
        return Err(GameError::OutOfBounds);
    }
    for _ in 0..RANDOM_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_r, max_c) = match orientation {
            Orientation::Horizontal => (n - 1, n - size),
            Orientation::Vertical => (n - size, n - 1),
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        if let Ok(placement) = validate(size, r, c, orientation, board) {
            return Ok(placement);
        }
    }
    Err(GameError::UnableToPlaceFleet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_follows_orientation() {
        assert_eq!(
            footprint(3, 2, 5, Orientation::Horizontal).unwrap(),
            vec![(2, 5), (2, 6), (2, 7)]
        );
        assert_eq!(
            footprint(3, 2, 5, Orientation::Vertical).unwrap(),
            vec![(2, 5), (3, 5), (4, 5)]
        );
    }

    #[test]
    fn footprint_rejects_edge_overrun() {
        assert_eq!(
            footprint(4, 0, 7, Orientation::Horizontal),
            Err(GameError::OutOfBounds)
        );
        assert!(footprint(4, 0, 6, Orientation::Horizontal).is_ok());
    }
}
