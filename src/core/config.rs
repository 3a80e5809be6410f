use super::bitboard::BitBoard;
use super::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;

/// Fleet composition, in placement order.
pub const FLEET: [ShipKind; 4] = [
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Submarine,
    ShipKind::Destroyer,
];

/// Number of ships each player deploys.
pub const NUM_SHIPS: usize = fleet_ships();

/// Total number of ship segments in one fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells();

/// Bitboard sized for the game board.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Snapshot grid handed to presentation code.
pub type Grid<C> = [[C; BOARD_SIZE as usize]; BOARD_SIZE as usize];

const fn fleet_ships() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET.len() {
        total += FLEET[i].quota();
        i += 1;
    }
    total
}

const fn fleet_cells() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET.len() {
        total += FLEET[i].quota() * FLEET[i].size();
        i += 1;
    }
    total
}

/// Returns `true` if (row, col) lies on the board.
#[inline]
pub const fn in_bounds(row: usize, col: usize) -> bool {
    row < BOARD_SIZE as usize && col < BOARD_SIZE as usize
}
