use crate::types::*;
use std::fmt;

/// The 8x8 grid. Every cell is an explicit occupant: `Some(piece)` or the
/// empty square `None`. The grid owns its cells; there is no sharing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Board with every square empty. Useful for setting up positions.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// Board in the standard starting layout.
    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for f in 0..8 {
            b.grid[1][f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.grid[6][f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.grid[0][f] = Some(Piece::new(Color::White, kind));
            b.grid[7][f] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    /// Restore the starting layout in place.
    pub fn reset(&mut self) {
        *self = Board::startpos();
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.grid[at.rank as usize][at.file as usize]
    }

    pub fn set(&mut self, at: Coord, occupant: Option<Piece>) {
        self.grid[at.rank as usize][at.file as usize] = occupant;
    }

    pub fn is_empty(&self, at: Coord) -> bool {
        self.piece_at(at).is_none()
    }

    /// Row-major iteration over all 64 squares.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Coord { rank, file }))
    }

    /// Location of a side's king, if it is on the board.
    pub fn king_location(&self, side: Color) -> Option<Coord> {
        Self::coords().find(|&c| {
            self.piece_at(c) == Some(Piece::new(side, PieceKind::King))
        })
    }

    /// Sum of a side's non-king material points.
    pub fn material(&self, side: Color) -> i32 {
        Self::coords()
            .filter_map(|c| self.piece_at(c))
            .filter(|p| p.color == side && p.kind != PieceKind::King)
            .map(|p| p.kind.points())
            .sum()
    }

    /// Material difference from the given side's point of view.
    pub fn material_advantage(&self, side: Color) -> i32 {
        self.material(side) - self.material(side.other())
    }

    /// Apply `from -> to` in place, run `f` against the mutated grid, then
    /// restore both cells exactly as they were. Used for the king-safety
    /// probe; the caller never observes the transient state.
    pub fn with_move<T>(&mut self, from: Coord, to: Coord, f: impl FnOnce(&Board) -> T) -> T {
        let src = self.piece_at(from);
        let dst = self.piece_at(to);
        self.set(from, None);
        self.set(to, src);
        let out = f(self);
        self.set(from, src);
        self.set(to, dst);
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let glyph = match self.piece_at(Coord { rank, file }) {
                    Some(p) => match p.color {
                        Color::White => p.kind.letter(),
                        Color::Black => p.kind.letter().to_ascii_lowercase(),
                    },
                    None => '.',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
