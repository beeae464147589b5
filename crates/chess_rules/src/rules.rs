//! Per-piece move geometry and sliding-piece obstruction.
//!
//! Geometry is pure shape: may this kind step from `from` to `to` on the
//! given board? Obstruction walks the open segment for the sliders.
//! Neither one asks whether the mover's king ends up attacked; that is
//! the resolver's job.

use crate::board::Board;
use crate::types::{Color, Coord, Piece, PieceKind};

/// Pure geometric legality for one piece at `from` toward `to`.
///
/// Shared preconditions first: a stay move is illegal, and so is landing
/// on a same-color occupant. Path obstruction is *not* checked here,
/// except for the pawn's own intervening square, which belongs to the
/// pawn rule.
pub fn geometry_ok(board: &Board, from: Coord, to: Coord, piece: Piece) -> bool {
    if from == to {
        return false;
    }
    if board.piece_at(to).map(|p| p.color) == Some(piece.color) {
        return false;
    }

    let dr = to.rank as i8 - from.rank as i8;
    let df = to.file as i8 - from.file as i8;

    match piece.kind {
        PieceKind::King => dr.abs() <= 1 && df.abs() <= 1,
        PieceKind::Queen => dr == 0 || df == 0 || dr.abs() == df.abs(),
        PieceKind::Rook => dr == 0 || df == 0,
        PieceKind::Bishop => dr.abs() == df.abs(),
        PieceKind::Knight => {
            (dr.abs() == 2 && df.abs() == 1) || (dr.abs() == 1 && df.abs() == 2)
        }
        PieceKind::Pawn => pawn_geometry(board, from, to, piece.color),
    }
}

fn pawn_geometry(board: &Board, from: Coord, to: Coord, color: Color) -> bool {
    let dir: i8 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let start_rank: i8 = match color {
        Color::White => 1,
        Color::Black => 6,
    };

    // Promotion is not modeled, so a pawn may never enter a back rank.
    if to.rank == 0 || to.rank == 7 {
        return false;
    }

    let dr = to.rank as i8 - from.rank as i8;
    let df = to.file as i8 - from.file as i8;

    if df == 0 {
        // Pushes land on empty squares only.
        if board.piece_at(to).is_some() {
            return false;
        }
        if dr == dir {
            return true;
        }
        if dr == 2 * dir && from.rank as i8 == start_rank {
            return match from.offset(dir, 0) {
                Some(mid) => board.is_empty(mid),
                None => false,
            };
        }
        false
    } else if df.abs() == 1 {
        // Diagonal step is a capture: one rank forward onto an occupant.
        dr == dir && board.piece_at(to).is_some()
    } else {
        false
    }
}

/// Emptiness of the open segment between `from` (exclusive) and `to`
/// (exclusive) for Bishop, Rook and Queen. Knights jump, the king moves
/// one step, and the pawn checks its own intervening square, so those
/// kinds pass trivially. The endpoint is not walked; captures are legal.
pub fn path_clear(board: &Board, from: Coord, to: Coord, kind: PieceKind) -> bool {
    if !kind.is_slider() {
        return true;
    }

    let dr = to.rank as i8 - from.rank as i8;
    let df = to.file as i8 - from.file as i8;
    if dr != 0 && df != 0 && dr.abs() != df.abs() {
        // Not a rook-like or bishop-like vector; nothing to walk.
        return false;
    }

    let step = (dr.signum(), df.signum());
    let mut at = from.offset(step.0, step.1);
    while let Some(c) = at {
        if c == to {
            return true;
        }
        if !board.is_empty(c) {
            return false;
        }
        at = c.offset(step.0, step.1);
    }
    // Walked off the board without reaching `to`; cannot happen for an
    // aligned pair, but fail closed.
    false
}

/// Geometry plus obstruction in one call.
pub fn can_reach(board: &Board, from: Coord, to: Coord, piece: Piece) -> bool {
    geometry_ok(board, from, to, piece) && path_clear(board, from, to, piece.kind)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
