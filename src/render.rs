//! Text renderings of a board: what the shooter sees, the full layout, and
//! the last score sweep.

use alloc::string::String;
use core::fmt::Write;

use crate::board::Board;
use crate::grid::{Cell, CellState};

/// Column letter + 1-based row, e.g. `C7`.
pub fn coord_label(row: usize, col: usize) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}{}", column_letter(col), row + 1);
    out
}

fn column_letter(col: usize) -> char {
    (b'A' + (col % 26) as u8) as char
}

fn render_grid(board: &Board, glyph: impl Fn(&Cell) -> char) -> String {
    let dim = board.dim();
    let width = dim * 2 + 4;
    let mut out = String::new();
    let _ = write!(out, "    ╔");
    for _ in 0..width {
        out.push('═');
    }
    let _ = writeln!(out, "╗");
    let _ = write!(out, "    ║   ");
    for c in 0..dim {
        let _ = write!(out, " {}", column_letter(c));
    }
    let _ = writeln!(out, " ║");
    for r in 0..dim {
        let _ = write!(out, "    ║ {:2}", r + 1);
        for cell in &board.cells()[r * dim..(r + 1) * dim] {
            let _ = write!(out, " {}", glyph(cell));
        }
        let _ = writeln!(out, " ║");
    }
    let _ = write!(out, "    ╚");
    for _ in 0..width {
        out.push('═');
    }
    let _ = writeln!(out, "╝");
    out
}

/// Opponent's view: only shots are shown.
pub fn hidden_view(board: &Board) -> String {
    let mut out = render_grid(board, |cell| match cell.state() {
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Unknown => '.',
    });
    out.push_str("    Legend: X=Hit  o=Miss  .=Unknown\n");
    out
}

/// Owner's view: ship symbols on unfired occupied cells.
pub fn revealed_view(board: &Board) -> String {
    let config = *board.config();
    let mut out = render_grid(board, |cell| match cell.state() {
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Unknown => cell
            .owner_label()
            .and_then(|label| config.ship(label))
            .map(|def| def.symbol())
            .unwrap_or('.'),
    });
    out.push_str("    Legend: X=Hit  o=Miss  .=Water, letters mark ships\n");
    out
}

/// Last computed score per cell; fired cells show their state instead.
pub fn score_table(board: &Board) -> String {
    let dim = board.dim();
    let mut out = String::from("\nOccupancy scores:\n   ");
    for c in 0..dim {
        let _ = write!(out, " {:>5}", column_letter(c));
    }
    out.push('\n');
    for r in 0..dim {
        let _ = write!(out, "{:2} ", r + 1);
        for cell in &board.cells()[r * dim..(r + 1) * dim] {
            match (cell.state(), cell.score()) {
                (CellState::Hit, _) => out.push_str("     X"),
                (CellState::Miss, _) => out.push_str("     o"),
                (CellState::Unknown, Some(score)) => {
                    let _ = write!(out, " {:5.3}", score);
                }
                (CellState::Unknown, None) => out.push_str("     -"),
            }
        }
        out.push('\n');
    }
    out
}
