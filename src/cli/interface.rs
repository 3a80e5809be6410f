//! Text rendering of board snapshots.

use std::io::{self, Write};

use crate::core::{Cell, Grid, Player, ShipReport, ShotStats, BOARD_SIZE};

use super::input::coord_to_string;

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Ship => 'S',
        Cell::Hit => 'X',
        Cell::Miss => 'o',
    }
}

/// Draw one grid with column letters and row numbers.
pub fn write_grid<W: Write>(out: &mut W, title: &str, grid: &Grid<Cell>) -> io::Result<()> {
    writeln!(out, "    {}", title)?;
    writeln!(out, "    ╔═══════════════════════╗")?;
    write!(out, "    ║  ")?;
    for c in 0..BOARD_SIZE as usize {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out, " ║")?;
    writeln!(out, "    ╠═══════════════════════╣")?;
    for (r, row) in grid.iter().enumerate() {
        write!(out, "    ║ {:2}", r + 1)?;
        for cell in row {
            write!(out, " {}", cell_char(*cell))?;
        }
        writeln!(out, " ║")?;
    }
    writeln!(out, "    ╚═══════════════════════╝")
}

/// The player's own fleet followed by their record of shots.
pub fn write_player_view<W: Write>(out: &mut W, player: &Player) -> io::Result<()> {
    write_grid(out, "Your fleet", &player.board().render(false))?;
    writeln!(out, "    Legend: S=Ship  X=Hit  o=Miss  .=Water")?;
    write_grid(out, "Enemy waters", &player.attack_view().render())?;
    writeln!(out, "    Legend: X=Hit  o=Miss  .=Unknown")
}

pub fn write_fleet_report<W: Write>(out: &mut W, ships: &[ShipReport]) -> io::Result<()> {
    for ship in ships {
        let status = if ship.sunk { "SUNK" } else { "Afloat" };
        let cells: Vec<String> = ship
            .cells
            .iter()
            .map(|&(r, c)| coord_to_string(r, c))
            .collect();
        writeln!(
            out,
            "      {} ({}): {} [{}]",
            ship.kind,
            ship.kind.size(),
            status,
            cells.join(" ")
        )?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, name: &str, stats: &ShotStats) -> io::Result<()> {
    writeln!(
        out,
        "    {}: {} shots, {} hits, {} misses",
        name, stats.shots, stats.hits, stats.misses
    )
}
