//! Board rendering
//!
//! Rows are labelled with the index of their first square so a square's
//! number is `row label + column`.

use checkers_core::{GameState, Square, BOARD_SIZE};
use std::fmt::Write;

/// Full-width number sign used for empty squares in unicode mode
const UNICODE_EMPTY: char = '\u{FF03}';

/// Full-width digit zero; column headers count up from it
const UNICODE_DIGIT_ZERO: u32 = 0xFF10;

/// Render the board as ASCII: `M`/`K` white man/king, `m`/`k` black, `.` empty
pub fn render(state: &GameState) -> String {
    let mut out = String::new();
    let header = column_header();

    out.push_str(&header);
    for row in 0..BOARD_SIZE {
        let _ = write!(out, "\n{:>2} ", row * BOARD_SIZE);
        for col in 0..BOARD_SIZE {
            let symbol = Square::from_coords(row, col)
                .and_then(|sq| state.piece_at(sq))
                .map_or('.', |piece| piece.symbol());
            out.push(symbol);
            out.push(' ');
        }
        let _ = write!(out, "{:>2}", row * BOARD_SIZE);
    }
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out
}

/// Render the board with draughts glyphs (needs a unicode-capable console)
pub fn render_unicode(state: &GameState) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE as u32 {
        out.push(char::from_u32(UNICODE_DIGIT_ZERO + col).unwrap_or('?'));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let _ = write!(out, "{:>2} ", row * BOARD_SIZE);
        for col in 0..BOARD_SIZE {
            let symbol = Square::from_coords(row, col)
                .and_then(|sq| state.piece_at(sq))
                .map_or(UNICODE_EMPTY, |piece| piece.unicode_symbol());
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

fn column_header() -> String {
    let mut header = String::from("   ");
    for col in 0..BOARD_SIZE {
        let _ = write!(header, "{} ", col);
    }
    header
}
