//! Static position evaluator.
//!
//! Each term is computed once per side with its sign flipped for Black,
//! so `evaluate(White) + evaluate(Black)` is the advantage from White's
//! seat. No board mutation: counting reuses the geometry and obstruction
//! rules only, with no king-safety filter.

use crate::board::Board;
use crate::check::is_mated;
use crate::rules::can_reach;
use crate::types::{Color, Coord, Piece, PieceKind};

const MATE_SCORE: i32 = 10_000;

const MATERIAL_WEIGHT: i32 = 7;
const CAPTURES_WEIGHT: i32 = 2;
const KING_SAFETY_WEIGHT: i32 = 5;
const ACTIVITY_WEIGHT: i32 = 2;
const PAWN_STRUCTURE_WEIGHT: i32 = 2;
const MOBILITY_WEIGHT: i32 = 3;

/// Does the file hold a pawn of either color?
///
/// Historical polarity quirk: despite the chess term, "open" here means
/// the file *contains* a pawn, so the king-safety and rook-activity
/// bonuses fire on closed files. Call sites rely on this polarity.
pub fn is_open_file(board: &Board, file: u8) -> bool {
    (0..8u8).any(|rank| {
        matches!(
            board.piece_at(Coord { rank, file }),
            Some(p) if p.kind == PieceKind::Pawn
        )
    })
}

/// Destination squares this piece could capture on, per geometry and
/// obstruction.
fn capture_count(board: &Board, from: Coord, piece: Piece) -> i32 {
    Board::coords()
        .filter(|&to| board.piece_at(to).is_some() && can_reach(board, from, to, piece))
        .count() as i32
}

/// Destination squares this piece could move to, per geometry and
/// obstruction.
fn move_count(board: &Board, from: Coord, piece: Piece) -> i32 {
    Board::coords()
        .filter(|&to| can_reach(board, from, to, piece))
        .count() as i32
}

fn signed(side: Color, score: i32) -> i32 {
    match side {
        Color::White => score,
        Color::Black => -score,
    }
}

fn material_term(board: &Board, side: Color) -> i32 {
    signed(side, board.material_advantage(side) * MATERIAL_WEIGHT)
}

fn captures_term(board: &Board, side: Color) -> i32 {
    let mut own = 0;
    let mut opponent = 0;
    for from in Board::coords() {
        if let Some(p) = board.piece_at(from) {
            if p.color == side {
                own += capture_count(board, from, p);
            } else {
                opponent += capture_count(board, from, p);
            }
        }
    }
    signed(side, (own - opponent) * CAPTURES_WEIGHT)
}

fn king_safety_term(board: &Board, side: Color) -> i32 {
    let king = match board.king_location(side) {
        Some(c) => c,
        None => return 0,
    };

    let mut safety = 0;
    if is_open_file(board, king.file) {
        safety += 4 * KING_SAFETY_WEIGHT;
    }
    if king.file > 0 && is_open_file(board, king.file - 1) {
        safety += 2 * KING_SAFETY_WEIGHT;
    }
    if king.file < 7 && is_open_file(board, king.file + 1) {
        safety += 2 * KING_SAFETY_WEIGHT;
    }
    signed(side, safety * KING_SAFETY_WEIGHT)
}

fn activity_term(board: &Board, side: Color) -> i32 {
    let mut score = 0;
    for at in Board::coords() {
        let piece = match board.piece_at(at) {
            Some(p) if p.color == side => p,
            _ => continue,
        };
        if (at.rank == 3 || at.rank == 4) && (at.file == 3 || at.file == 4) {
            score += 5 * ACTIVITY_WEIGHT;
        }
        if piece.kind == PieceKind::Rook && is_open_file(board, at.file) {
            score += 10 * ACTIVITY_WEIGHT;
        }
    }
    signed(side, score)
}

fn pawn_structure_term(board: &Board, side: Color) -> i32 {
    let mut penalty = 0;
    for file in 0..8u8 {
        let mut found_pawn = false;
        let mut doubled = false;

        for rank in 0..8u8 {
            match board.piece_at(Coord { rank, file }) {
                Some(p) if p.kind == PieceKind::Pawn && p.color == side => {}
                _ => continue,
            }
            if found_pawn {
                doubled = true;
            }
            found_pawn = true;

            if file > 0 && !is_open_file(board, file - 1) {
                penalty += 10;
            }
            if file < 7 && !is_open_file(board, file + 1) {
                penalty += 10;
            }
        }
        if doubled {
            penalty += 15;
        }
    }
    // A penalty counts against the side: subtracted for White, added for
    // Black in the White-seat sign convention.
    -signed(side, penalty * PAWN_STRUCTURE_WEIGHT)
}

fn mobility_term(board: &Board, side: Color) -> i32 {
    let mut moves = 0;
    for from in Board::coords() {
        if let Some(p) = board.piece_at(from) {
            if p.color == side {
                moves += move_count(board, from, p);
            }
        }
    }
    signed(side, moves * MOBILITY_WEIGHT)
}

/// Score the position from one side's seat; positive favours White.
///
/// Terminal shortcut first: a mated White scores -10000, a mated Black
/// +10000 ("side" names the side that is mated).
pub fn evaluate(board: &Board, side: Color) -> i32 {
    if is_mated(board, side) {
        return match side {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }

    material_term(board, side)
        + captures_term(board, side)
        + king_safety_term(board, side)
        + mobility_term(board, side)
        + pawn_structure_term(board, side)
        + activity_term(board, side)
}

/// Combined advantage from White's seat. Each side's terms already carry
/// the sign flip, so the two evaluations simply add.
pub fn compute_advantage(board: &Board) -> i32 {
    evaluate(board, Color::White) + evaluate(board, Color::Black)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
