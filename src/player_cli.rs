#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{BoardError, FireResult, GameError},
    render::{coord_label, hidden_view, revealed_view},
    ship::Orientation,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Human player reading placements and shots from a line-based input.
pub struct CliPlayer {
    name: String,
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    /// Player reading from standard input.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_input(name, io::BufReader::new(io::stdin()))
    }

    /// Player reading from any buffered source, e.g. a scripted game.
    pub fn with_input(name: impl Into<String>, input: impl BufRead + 'static) -> Self {
        Self {
            name: name.into(),
            input: Box::new(input),
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        print!("{}", text);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(GameError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }
}

/// Parse `A5`-style input (column letter, 1-based row) on a `dim`-sized board.
pub fn parse_coord(input: &str, dim: usize) -> Result<(usize, usize), String> {
    let last_col = (b'A' + (dim.saturating_sub(1)) as u8) as char;
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!(
            "Invalid column '{}' - must be a letter A-{}",
            col_ch, last_col
        ));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= dim {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            col_ch, last_col
        ));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, dim))?;
    if row == 0 || row > dim {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, dim));
    }
    Ok((row - 1, col))
}

/// Parse `A5 H` placement input into (row, col, orientation).
pub fn parse_placement(input: &str, dim: usize) -> Result<(usize, usize, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parts.next().ok_or("Missing coordinate")?;
    let (row, col) = parse_coord(coord, dim)?;
    let orientation = parts
        .next()
        .ok_or("Missing orientation - add H or V (e.g., A5 H)")?;
    let orientation = Orientation::parse(orientation).map_err(|e| e.to_string())?;
    Ok((row, col, orientation))
}

fn print_placement_help() {
    println!("\n  Placement format: <coordinate> <orientation>");
    println!("    coordinate  column letter + row number, e.g. A5");
    println!("    orientation H (or 0) extends right, V (or 1) extends down");
    println!("  Press ENTER to place the current ship at random.\n");
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        let fleet = board.config().fleet();
        println!("\n════════════════════════════════════════════════════════════");
        println!("                    SHIP PLACEMENT PHASE");
        println!("════════════════════════════════════════════════════════════");
        print_placement_help();

        for (i, def) in fleet.iter().enumerate().skip(board.ships().len()) {
            loop {
                print!("{}", revealed_view(board));
                println!(
                    "\nShip {}/{}: {} ({}) length {}",
                    i + 1,
                    fleet.len(),
                    def.name(),
                    def.symbol(),
                    def.length()
                );
                let line = self.prompt("Enter placement (ENTER for random, 'help' for help): ")?;
                if line.is_empty() {
                    let (r, c, o) = board.random_placement(rng, def.length())?;
                    board.place_ship(r, c, def.length(), o, def.name())?;
                    println!("✓ {} randomly placed at {}", def.name(), coord_label(r, c));
                    break;
                }
                if line.eq_ignore_ascii_case("help") {
                    print_placement_help();
                    continue;
                }
                let (r, c, o) = match parse_placement(&line, board.dim()) {
                    Ok(parsed) => parsed,
                    Err(msg) => {
                        println!("✗ {}", msg);
                        continue;
                    }
                };
                match board.place_ship(r, c, def.length(), o, def.name()) {
                    Ok(()) => {
                        println!("✓ {} placed at {} ({})", def.name(), coord_label(r, c), o);
                        break;
                    }
                    Err(BoardError::InvalidPlacement) => {
                        println!("✗ The placement you have requested is illegal!");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
        print!("{}", revealed_view(board));
        Ok(())
    }

    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        target: &mut Board,
    ) -> Result<(usize, usize), GameError> {
        println!("\nOpponent board:");
        print!("{}", hidden_view(target));
        loop {
            let line = self.prompt("Enter the coordinate you want to fire upon: ")?;
            match parse_coord(&line, target.dim()) {
                Ok((r, c)) if target.is_fired(r, c) => {
                    println!("✗ You have attempted {} already!", coord_label(r, c));
                }
                Ok(coord) => return Ok(coord),
                Err(msg) => println!("✗ {}", msg),
            }
        }
    }

    fn handle_fire_result(&mut self, coord: (usize, usize), result: FireResult) {
        let label = coord_label(coord.0, coord.1);
        match result {
            FireResult::Hit => println!("{}: Target hit!", label),
            FireResult::Miss => println!("{}: Target missed!", label),
            FireResult::Sunk(name) => println!("{}: Target hit! You sank the {}!", label, name),
        }
    }
}
