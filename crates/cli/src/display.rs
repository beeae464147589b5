//! Board rendering for the terminal, from either player's perspective.

use chess_rules::{Color, Coord, Game, Piece};

fn glyph(occupant: Option<Piece>) -> char {
    match occupant {
        Some(p) => match p.color {
            Color::White => p.kind.letter(),
            Color::Black => p.kind.letter().to_ascii_lowercase(),
        },
        None => '.',
    }
}

/// White's perspective: rank 8 at the top, the opponent's name and
/// material advantage above the grid, the player's below.
pub fn print_board(game: &Game, white: &str, black: &str) {
    let board = game.board();
    println!("{} {}", black, board.material_advantage(Color::Black));
    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            print!("{} ", glyph(board.piece_at(Coord { rank, file })));
        }
        println!();
    }
    println!("{} {}", white, board.material_advantage(Color::White));
}

/// Black's perspective: the grid rotated a half turn.
pub fn print_rotated_board(game: &Game, white: &str, black: &str) {
    let board = game.board();
    println!("{} {}", white, board.material_advantage(Color::White));
    for rank in 0..8u8 {
        for file in (0..8u8).rev() {
            print!("{} ", glyph(board.piece_at(Coord { rank, file })));
        }
        println!();
    }
    println!("{} {}", black, board.material_advantage(Color::Black));
}

/// The numbered move list, two half-moves per line.
pub fn print_move_list(moves: &[String]) {
    for (i, pair) in moves.chunks(2).enumerate() {
        match pair {
            [w, b] => println!("{}.{} {}", i + 1, w, b),
            [w] => println!("{}.{}", i + 1, w),
            _ => {}
        }
    }
}
