//! The move resolver and executor: one `Game` owns one board and plays
//! half-moves given in algebraic notation. The engine is stateless with
//! respect to side-to-move; the caller passes it each call.

use crate::board::Board;
use crate::check::{is_mated, is_stalemated, king_attacked};
use crate::eval;
use crate::notation::{parse_move, ParseError, ParsedMove};
use crate::rules::can_reach;
use crate::types::{Color, Coord, Piece};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Move is illegal!")]
    Illegal,
}

/// A round of chess. Holds the single unit of mutable state, the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the starting layout.
    pub fn reset(&mut self) {
        self.board.reset();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.board.piece_at(at)
    }

    /// Parse, validate and execute one half-move for `side`.
    ///
    /// On any error the board is left exactly as it was. When several
    /// pieces of the stated kind could reach the destination, the first
    /// one in row-major scan order moves; the choice is deterministic.
    pub fn handle_move(&mut self, input: &str, side: Color) -> Result<(), MoveError> {
        let parsed = parse_move(input)?;
        let from = resolve_source(&mut self.board, &parsed, side).ok_or(MoveError::Illegal)?;

        let mover = self.board.piece_at(from);
        self.board.set(parsed.dest, mover);
        self.board.set(from, None);
        Ok(())
    }

    /// Would `handle_move` accept this move? The live board is never
    /// touched; probing happens on a scratch copy.
    pub fn can_play(&self, input: &str, side: Color) -> bool {
        let parsed = match parse_move(input) {
            Ok(p) => p,
            Err(_) => return false,
        };
        let mut scratch = self.board.clone();
        resolve_source(&mut scratch, &parsed, side).is_some()
    }

    pub fn is_king_attacked(&self, side: Color) -> bool {
        king_attacked(&self.board, side)
    }

    /// Checkmate of either king.
    pub fn is_checkmate(&self) -> bool {
        is_mated(&self.board, Color::White) || is_mated(&self.board, Color::Black)
    }

    /// Stalemate of either side.
    pub fn is_stalemate(&self) -> bool {
        is_stalemated(&self.board, Color::White) || is_stalemated(&self.board, Color::Black)
    }

    /// Full static evaluation from one side's seat.
    pub fn evaluate(&self, side: Color) -> i32 {
        eval::evaluate(&self.board, side)
    }

    /// Positive favours White, negative favours Black.
    pub fn compute_advantage(&self) -> i32 {
        eval::compute_advantage(&self.board)
    }
}

/// Scan the board for the first source square whose occupant matches the
/// parsed kind and side, reaches the destination, and leaves its own king
/// safe. The probe mutates `board` transiently and always restores it.
fn resolve_source(board: &mut Board, parsed: &ParsedMove, side: Color) -> Option<Coord> {
    let wanted = Piece::new(side, parsed.kind);
    for from in Board::coords() {
        if board.piece_at(from) != Some(wanted) {
            continue;
        }
        if !can_reach(board, from, parsed.dest, wanted) {
            continue;
        }
        let exposes_king = board.with_move(from, parsed.dest, |b| king_attacked(b, side));
        if !exposes_king {
            return Some(from);
        }
    }
    None
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
