//! Check, checkmate and stalemate detection.
//!
//! `king_attacked` is a pure attack scan. The escape predicates need the
//! king-safety probe, so they clone the board once and probe the scratch
//! copy; callers keep a shared reference and never observe mutation.

use crate::board::Board;
use crate::rules::can_reach;
use crate::types::{Color, Coord, PieceKind};

/// Is the side's king attacked by any enemy piece?
///
/// A threat is any opposing piece whose geometry and path reach the king
/// square. No king-safety probe is applied: a pinned attacker still gives
/// check.
pub fn king_attacked(board: &Board, side: Color) -> bool {
    king_attacker(board, side).is_some()
}

/// First enemy piece, in row-major scan order, that attacks the side's
/// king. `None` when the king is safe (or absent).
pub fn king_attacker(board: &Board, side: Color) -> Option<Coord> {
    let king = board.king_location(side)?;
    Board::coords().find(|&c| match board.piece_at(c) {
        Some(p) => p.color == side.other() && can_reach(board, c, king, p),
        None => false,
    })
}

/// Would moving `from -> to` be accepted for `side`: right color on the
/// source square, geometry, obstruction, and the king left safe. Probes
/// in place; the board is restored before returning.
fn move_accepted(board: &mut Board, from: Coord, to: Coord, side: Color) -> bool {
    let piece = match board.piece_at(from) {
        Some(p) if p.color == side => p,
        _ => return false,
    };
    if !can_reach(board, from, to, piece) {
        return false;
    }
    !board.with_move(from, to, |b| king_attacked(b, side))
}

/// Can the king itself step out of check? Inspects only the at-most-eight
/// king moves; interposition and capturing the attacker are separate
/// predicates.
pub fn can_move_out_of_check(board: &Board, side: Color) -> bool {
    let king = match board.king_location(side) {
        Some(c) => c,
        None => return false,
    };

    let mut scratch = board.clone();
    for dr in -1..=1 {
        for df in -1..=1 {
            if let Some(to) = king.offset(dr, df) {
                if move_accepted(&mut scratch, king, to, side) {
                    return true;
                }
            }
        }
    }
    false
}

/// Can any piece of `side` capture the piece giving check?
pub fn can_capture_attacker(board: &Board, side: Color) -> bool {
    let attacker = match king_attacker(board, side) {
        Some(c) => c,
        None => return false,
    };

    let mut scratch = board.clone();
    Board::coords().any(|from| move_accepted(&mut scratch, from, attacker, side))
}

/// Can any non-king piece of `side` interpose on the checking line?
/// Only meaningful when the attacker slides; contact checks and knight
/// checks cannot be blocked.
pub fn can_block_check(board: &Board, side: Color) -> bool {
    let king = match board.king_location(side) {
        Some(c) => c,
        None => return false,
    };
    let attacker = match king_attacker(board, side) {
        Some(c) => c,
        None => return false,
    };
    let attacker_kind = match board.piece_at(attacker) {
        Some(p) => p.kind,
        None => return false,
    };
    if !attacker_kind.is_slider() {
        return false;
    }

    let mut scratch = board.clone();
    for square in between(attacker, king) {
        let blocked = Board::coords().any(|from| {
            match board.piece_at(from) {
                // The king cannot block its own check.
                Some(p) if p.color == side && p.kind != PieceKind::King => {}
                _ => return false,
            }
            move_accepted(&mut scratch, from, square, side)
        });
        if blocked {
            return true;
        }
    }
    false
}

/// Squares strictly between two aligned coordinates; empty when they are
/// adjacent or share no line.
fn between(a: Coord, b: Coord) -> Vec<Coord> {
    let dr = b.rank as i8 - a.rank as i8;
    let df = b.file as i8 - a.file as i8;
    if dr != 0 && df != 0 && dr.abs() != df.abs() {
        return Vec::new();
    }

    let step = (dr.signum(), df.signum());
    let mut out = Vec::new();
    let mut at = a.offset(step.0, step.1);
    while let Some(c) = at {
        if c == b {
            break;
        }
        out.push(c);
        at = c.offset(step.0, step.1);
    }
    out
}

/// Checkmate for one side: the king is attacked and neither a king step,
/// a capture of the attacker, nor an interposition is available.
pub fn is_mated(board: &Board, side: Color) -> bool {
    king_attacked(board, side)
        && !can_move_out_of_check(board, side)
        && !can_capture_attacker(board, side)
        && !can_block_check(board, side)
}

/// Stalemate for one side: the king is not attacked, yet no move of any
/// kind is accepted.
pub fn is_stalemated(board: &Board, side: Color) -> bool {
    if king_attacked(board, side) {
        return false;
    }

    let mut scratch = board.clone();
    let has_move = Board::coords()
        .filter(|&from| matches!(board.piece_at(from), Some(p) if p.color == side))
        .any(|from| Board::coords().any(|to| move_accepted(&mut scratch, from, to, side)));
    !has_move
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
