//! Parsing of raw console input into validated coordinates and orientations.

use crate::core::{Coord, Orientation, ShipKind, BOARD_SIZE, FLEET};

/// Label of a coordinate as shown to the player, e.g. `(2, 0)` → `A3`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse `A1`..`J10` into a zero-based (row, col).
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    if !row_str.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(format!("Invalid row '{}' - must be a number 1-10", row_str));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

/// Accepts `H`/`V` (or the full words), case-insensitive.
pub fn parse_orientation(input: &str) -> Result<Orientation, String> {
    match input.trim().to_ascii_uppercase().as_str() {
        "H" | "HORIZONTAL" => Ok(Orientation::Horizontal),
        "V" | "VERTICAL" => Ok(Orientation::Vertical),
        other => Err(format!("Invalid orientation '{}' - use H or V", other)),
    }
}

/// Ship menu number (1-based, fleet order) to kind.
pub fn parse_ship_choice(input: &str) -> Result<ShipKind, String> {
    let n: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("Invalid ship number '{}'", input.trim()))?;
    n.checked_sub(1)
        .and_then(|i| FLEET.get(i).copied())
        .ok_or_else(|| format!("Ship number must be 1-{}", FLEET.len()))
}

/// A placement command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementCommand {
    /// `<coord> <H|V>`: next ship in fleet order.
    Next(Coord, Orientation),
    /// `<number> <coord> <H|V>`: next ship of the chosen kind.
    Kind(ShipKind, Coord, Orientation),
    /// `auto`: deploy the rest at random.
    Auto,
}

pub fn parse_placement(input: &str) -> Result<PlacementCommand, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [word] if word.eq_ignore_ascii_case("auto") => Ok(PlacementCommand::Auto),
        [coord, orient] => Ok(PlacementCommand::Next(
            parse_coord(coord)?,
            parse_orientation(orient)?,
        )),
        [ship, coord, orient] => Ok(PlacementCommand::Kind(
            parse_ship_choice(ship)?,
            parse_coord(coord)?,
            parse_orientation(orient)?,
        )),
        _ => Err("Expected `<coord> <H|V>`, `<ship number> <coord> <H|V>` or `auto`".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_roundtrip_through_labels() {
        assert_eq!(parse_coord("a1"), Ok((0, 0)));
        assert_eq!(parse_coord("J10"), Ok((9, 9)));
        assert_eq!(coord_to_string(9, 9), "J10");
    }

    #[test]
    fn bad_coords_are_rejected() {
        assert!(parse_coord("K1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A11").is_err());
        assert!(parse_coord("1A").is_err());
        assert!(parse_coord("A+5").is_err());
        assert!(parse_coord("B-1").is_err());
        assert!(parse_coord("").is_err());
    }

    #[test]
    fn orientation_only_accepts_h_or_v() {
        assert_eq!(parse_orientation("h"), Ok(Orientation::Horizontal));
        assert_eq!(parse_orientation("Vertical"), Ok(Orientation::Vertical));
        assert!(parse_orientation("diagonal").is_err());
    }

    #[test]
    fn placement_commands() {
        assert_eq!(parse_placement("AUTO"), Ok(PlacementCommand::Auto));
        assert_eq!(
            parse_placement("B2 v"),
            Ok(PlacementCommand::Next((1, 1), Orientation::Vertical))
        );
        assert_eq!(
            parse_placement("3 C4 H"),
            Ok(PlacementCommand::Kind(
                ShipKind::Submarine,
                (3, 2),
                Orientation::Horizontal
            ))
        );
        assert!(parse_placement("5 C4 H").is_err());
    }
}
