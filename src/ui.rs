//! Text rendering of a board: the two symbol mappings and drawing helpers.

use crate::board::{Board, Cell, CLOSED, EDGE, FLAG, MINE};

/// Play-view mapping: hides terrain behind closed cells.
pub fn play_symbol(code: Cell) -> char {
    if code >= FLAG {
        return 'F';
    }
    if code >= CLOSED {
        return ' ';
    }
    if code == EDGE {
        return '#';
    }
    digit(code)
}

/// Answer-view mapping: reveals terrain. A flagged mine shows as `F`, the
/// flag outranking the mine marker.
pub fn answer_symbol(code: Cell) -> char {
    if code == MINE {
        return '*';
    }
    if code >= FLAG {
        return 'F';
    }
    if code >= CLOSED {
        return digit(code - CLOSED);
    }
    if code == EDGE {
        return '#';
    }
    digit(code)
}

fn digit(code: Cell) -> char {
    // only opened hints 0..=8 reach this point
    char::from_digit(code as u32, 10).unwrap_or('?')
}

/// Print the mapped grid followed by the closed/flag status line.
pub fn draw<F: Fn(Cell) -> char>(board: &Board, symbol: F) {
    for line in board.render(symbol) {
        println!("{}", line);
    }
    println!(
        "closed: {}, flags: {}",
        board.count_closed(),
        board.count_flagged()
    );
}

/// Display the board as the player sees it mid-game.
pub fn draw_play(board: &Board) {
    draw(board, play_symbol);
}

/// Display the board with all terrain revealed.
pub fn draw_answer(board: &Board) {
    draw(board, answer_symbol);
}
