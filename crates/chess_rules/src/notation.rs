//! Short algebraic notation parser.
//!
//! Accepted shapes: `e4`, `Nf3`, `Pe4`, `e4+`, `Qh7#`, and the capture
//! forms `exd5`, `Qxh7+`, `xe4`. Castling, en-passant and promotion
//! tokens are not part of the surface and are rejected. The parser is
//! pure: it never looks at the board.

use crate::types::{Coord, PieceKind};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Check,
    Mate,
}

/// What a move string says, before the board is consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedMove {
    pub kind: PieceKind,
    pub dest: Coord,
    pub capture: bool,
    pub marker: Option<Marker>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Move is not valid!")]
    Shape,
    #[error("Piece can only be K, Q, R, B or N!")]
    PieceLetter,
    #[error("File must be between 'a' and 'h'!")]
    File,
    #[error("Rank must be between '1' and '8'!")]
    Rank,
    #[error("End of move optionals can only be '+' or '#'!")]
    Optional,
}

/// Resolve a piece-class character. File letters and an explicit `P`
/// both denote a pawn; anything outside the class is an error.
fn piece_from_char(c: char) -> Result<PieceKind, ParseError> {
    match c {
        'K' => Ok(PieceKind::King),
        'Q' => Ok(PieceKind::Queen),
        'R' => Ok(PieceKind::Rook),
        'B' => Ok(PieceKind::Bishop),
        'N' => Ok(PieceKind::Knight),
        'P' | 'a'..='h' => Ok(PieceKind::Pawn),
        _ => Err(ParseError::PieceLetter),
    }
}

fn file_from_char(c: char) -> Result<i8, ParseError> {
    if ('a'..='h').contains(&c) {
        Ok(c as i8 - 'a' as i8)
    } else {
        Err(ParseError::File)
    }
}

fn rank_from_char(c: char) -> Result<i8, ParseError> {
    if ('1'..='8').contains(&c) {
        Ok(c as i8 - '1' as i8)
    } else {
        Err(ParseError::Rank)
    }
}

fn marker_from_char(c: char) -> Result<Marker, ParseError> {
    match c {
        '+' => Ok(Marker::Check),
        '#' => Ok(Marker::Mate),
        _ => Err(ParseError::Optional),
    }
}

fn dest_from_chars(file: char, rank: char) -> Result<Coord, ParseError> {
    let f = file_from_char(file)?;
    let r = rank_from_char(rank)?;
    // Both components are range-checked above, so the coordinate exists.
    Coord::new(r, f).ok_or(ParseError::Shape)
}

/// Parse a move string into its notation parts.
pub fn parse_move(input: &str) -> Result<ParsedMove, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.is_empty() {
        return Err(ParseError::Shape);
    }

    // A capture marker splits the string into piece part and target part.
    let split: Vec<&[char]> = chars.split(|&c| c == 'x' || c == 'X').collect();
    match split.len() {
        1 => parse_plain(&chars),
        2 => parse_capture(split[0], split[1]),
        _ => Err(ParseError::Shape),
    }
}

fn parse_plain(chars: &[char]) -> Result<ParsedMove, ParseError> {
    match chars.len() {
        // `fd`: pawn move.
        2 => Ok(ParsedMove {
            kind: PieceKind::Pawn,
            dest: dest_from_chars(chars[0], chars[1])?,
            capture: false,
            marker: None,
        }),
        // `Pfd`, or `fd+` / `fd#` for a pawn with marker.
        3 => {
            if chars[2] == '+' || chars[2] == '#' {
                Ok(ParsedMove {
                    kind: PieceKind::Pawn,
                    dest: dest_from_chars(chars[0], chars[1])?,
                    capture: false,
                    marker: Some(marker_from_char(chars[2])?),
                })
            } else {
                Ok(ParsedMove {
                    kind: piece_from_char(chars[0])?,
                    dest: dest_from_chars(chars[1], chars[2])?,
                    capture: false,
                    marker: None,
                })
            }
        }
        // `Pfd+` / `Pfd#`.
        4 => Ok(ParsedMove {
            kind: piece_from_char(chars[0])?,
            dest: dest_from_chars(chars[1], chars[2])?,
            capture: false,
            marker: Some(marker_from_char(chars[3])?),
        }),
        _ => Err(ParseError::Shape),
    }
}

fn parse_capture(left: &[char], right: &[char]) -> Result<ParsedMove, ParseError> {
    // Left of the `x`: empty means pawn, otherwise a single class char.
    let kind = match left.len() {
        0 => PieceKind::Pawn,
        1 => piece_from_char(left[0])?,
        _ => return Err(ParseError::Shape),
    };

    let (dest, marker) = match right.len() {
        2 => (dest_from_chars(right[0], right[1])?, None),
        3 => (
            dest_from_chars(right[0], right[1])?,
            Some(marker_from_char(right[2])?),
        ),
        _ => return Err(ParseError::Shape),
    };

    Ok(ParsedMove {
        kind,
        dest,
        capture: true,
        marker,
    })
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
