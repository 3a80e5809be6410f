//! Interactive console game: prompts, re-prompts and reporting around [`Game`].

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail};
use rand::rngs::SmallRng;

use crate::core::{AttackResult, Game, GameStatus, PlayerId, FLEET};

use super::input::{coord_to_string, parse_coord, parse_placement, PlacementCommand};
use super::interface::{write_fleet_report, write_grid, write_player_view, write_stats};

/// ANSI: erase the display and home the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Options for a console session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub player1: String,
    pub player2: String,
    /// Deploy both fleets at random instead of prompting.
    pub auto_place: bool,
    /// Print a JSON status line at the end of every game.
    pub json: bool,
    /// Pause and clear the screen whenever the other player takes the seat.
    pub handover: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            player1: "Player 1".to_string(),
            player2: "Player 2".to_string(),
            auto_place: false,
            json: false,
            handover: true,
        }
    }
}

/// A console front-end reading commands from `R` and writing to `W`.
pub struct ConsoleSession<R, W> {
    input: R,
    out: W,
    rng: SmallRng,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, out: W, rng: SmallRng, options: SessionOptions) -> Self {
        Self {
            input,
            out,
            rng,
            options,
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.out)
    }

    /// Play games until the user declines a rematch. Returns the final
    /// status of every game played.
    pub fn run(&mut self) -> anyhow::Result<Vec<GameStatus>> {
        self.welcome()?;
        let mut results = Vec::new();
        let mut game = Game::new(
            non_blank(&self.options.player1, "Player 1"),
            non_blank(&self.options.player2, "Player 2"),
        )
        .map_err(|e| anyhow!(e))?;
        loop {
            self.placement_phase(&mut game)?;
            self.battle_phase(&mut game)?;
            self.game_over(&game)?;
            results.push(game.status());
            if !self.play_again()? {
                writeln!(self.out, "\nThanks for playing")?;
                break;
            }
            writeln!(self.out, "Starting new game..")?;
            game = game.rematch().map_err(|e| anyhow!(e))?;
        }
        Ok(results)
    }

    fn welcome(&mut self) -> anyhow::Result<()> {
        let rule = "=".repeat(50);
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "Welcome to Sea Battle")?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "Rules:")?;
        let fleet: Vec<String> = FLEET
            .iter()
            .map(|k| format!("{} {}({})", k.quota(), k, k.size()))
            .collect();
        writeln!(self.out, "1. Each player places 10 ships: {}", fleet.join(", "))?;
        writeln!(self.out, "2. Ships may not touch, not even diagonally")?;
        writeln!(self.out, "3. Players take turns to attack the opponent's board")?;
        writeln!(self.out, "4. A hit earns another move")?;
        writeln!(self.out, "5. First to sink all enemy ships wins")?;
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            bail!("input closed");
        }
        Ok(buf.trim().to_string())
    }

    /// Wait for Enter, then clear the screen so the next player cannot see
    /// what was shown before. No-op when handover is off.
    fn hand_over(&mut self, prompt: &str) -> anyhow::Result<()> {
        if !self.options.handover {
            return Ok(());
        }
        self.read_line(prompt)?;
        write!(self.out, "{}", CLEAR_SCREEN)?;
        Ok(())
    }

    fn placement_phase(&mut self, game: &mut Game) -> anyhow::Result<()> {
        while let Some(id) = game.setup_player() {
            let name = game.player(id).name().to_string();
            writeln!(self.out, "\n{} place your ships", name)?;
            self.hand_over("Press Enter when ready ")?;
            if self.options.auto_place {
                game.auto_place(&mut self.rng).map_err(|e| anyhow!(e))?;
            } else {
                self.place_fleet(game, id)?;
            }
            write_grid(&mut self.out, "Your fleet", &game.own_view(id))?;
            writeln!(self.out, "\n{}'s ships are placed.", name)?;
            self.hand_over("Press Enter to continue ")?;
        }
        Ok(())
    }

    fn place_fleet(&mut self, game: &mut Game, id: PlayerId) -> anyhow::Result<()> {
        while game.setup_player() == Some(id) {
            let player = game.player(id);
            writeln!(self.out, "\nShips left to place:")?;
            for (i, (kind, count)) in player.remaining_by_kind().iter().enumerate() {
                if *count > 0 {
                    writeln!(
                        self.out,
                        "{}. {} (size {}) - {} left",
                        i + 1,
                        kind,
                        kind.size(),
                        count
                    )?;
                }
            }
            let next = player.next_ship().ok_or_else(|| anyhow!("fleet already placed"))?;
            let prompt = format!(
                "Place {} as `<coord> <H|V>`, pick with `<number> <coord> <H|V>`, or `auto`: ",
                next
            );
            let line = self.read_line(&prompt)?;
            let command = match parse_placement(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.out, "Invalid input: {}. Try again.", e)?;
                    continue;
                }
            };
            let outcome = match command {
                PlacementCommand::Next((r, c), o) => game.place_next(r, c, o).map(Some),
                PlacementCommand::Kind(kind, (r, c), o) => game.place_kind(kind, r, c, o).map(Some),
                PlacementCommand::Auto => game.auto_place(&mut self.rng).map(|_| None),
            };
            match outcome {
                Ok(Some(report)) => {
                    writeln!(self.out, "{} placed successfully!", report.kind)?;
                    if !report.fleet_complete {
                        write_grid(&mut self.out, "Your fleet", &game.own_view(id))?;
                    }
                }
                Ok(None) => writeln!(self.out, "Remaining ships deployed at random.")?,
                Err(e) => writeln!(self.out, "Error: {}. Try again.", e)?,
            }
        }
        Ok(())
    }

    fn battle_phase(&mut self, game: &mut Game) -> anyhow::Result<()> {
        writeln!(self.out, "\nLet the Battle begin!")?;
        let mut announce = true;
        while !game.is_over() {
            let id = game.active_player();
            let name = game.player(id).name().to_string();
            if announce {
                writeln!(self.out, "\n{} {}'s Turn {}", "=".repeat(20), name, "=".repeat(20))?;
                write_player_view(&mut self.out, game.player(id))?;
            }
            announce = true;
            let line = self.read_line("Enter target (e.g. C7): ")?;
            let (r, c) = match parse_coord(&line) {
                Ok(coord) => coord,
                Err(e) => {
                    writeln!(self.out, "Invalid input: {}. Try again.", e)?;
                    announce = false;
                    continue;
                }
            };
            if game.player(id).attack_view().is_resolved(r, c) {
                writeln!(self.out, "Already attacked {}. Try again.", coord_to_string(r, c))?;
                announce = false;
                continue;
            }
            let report = match game.attack(r, c) {
                Ok(report) => report,
                Err(e) => {
                    writeln!(self.out, "Error: {}. Try again.", e)?;
                    announce = false;
                    continue;
                }
            };
            match report.result {
                AttackResult::Repeat => {
                    writeln!(self.out, "Already attacked {}. Try again.", coord_to_string(r, c))?;
                    announce = false;
                }
                AttackResult::Hit => {
                    writeln!(self.out, "Hit!")?;
                    if let Some(kind) = report.sunk {
                        writeln!(self.out, "You sank a {}!", kind)?;
                    }
                    if report.extra_turn() {
                        writeln!(self.out, "{} gets another move", name)?;
                    }
                }
                AttackResult::Miss => {
                    writeln!(self.out, "Miss.")?;
                    let next = game.player(report.next).name();
                    writeln!(self.out, "{} takes the turn.", next)?;
                    self.hand_over("Press Enter when ready ")?;
                }
            }
        }
        Ok(())
    }

    fn game_over(&mut self, game: &Game) -> anyhow::Result<()> {
        let (winner, loser) = match (game.winner(), game.loser()) {
            (Some(w), Some(l)) => (w, l),
            _ => bail!("game ended without a winner"),
        };
        writeln!(self.out, "\nGame Over!!!")?;
        writeln!(self.out, "\nCongrats {}! You WIN!", winner)?;
        writeln!(self.out, "\nGood luck for the next one {}! You LOST!", loser)?;
        for id in [PlayerId::One, PlayerId::Two] {
            let player = game.player(id);
            write_stats(&mut self.out, player.name(), &player.stats())?;
            writeln!(self.out, "    {}'s fleet:", player.name())?;
            write_fleet_report(&mut self.out, &player.fleet_report())?;
        }
        if self.options.json {
            writeln!(self.out, "{}", serde_json::to_string(&game.status())?)?;
        }
        Ok(())
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        loop {
            let choice = self.read_line("\nAnother round? (y/n): ")?.to_lowercase();
            match choice.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.out, "Please enter 'y' for yes or 'n' for no")?,
            }
        }
    }
}

fn non_blank<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.trim().is_empty() {
        fallback
    } else {
        name.trim()
    }
}
