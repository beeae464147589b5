use super::*;
use crate::board::Board;

fn c(rank: u8, file: u8) -> Coord {
    Coord { rank, file }
}

fn piece(color: Color, kind: PieceKind) -> Piece {
    Piece::new(color, kind)
}

#[test]
fn test_stay_move_is_illegal() {
    let b = Board::startpos();
    let q = piece(Color::White, PieceKind::Queen);
    assert!(!geometry_ok(&b, c(0, 3), c(0, 3), q));
}

#[test]
fn test_same_color_destination_is_illegal() {
    let b = Board::startpos();
    // Ke1-e2 lands on White's own pawn.
    let k = piece(Color::White, PieceKind::King);
    assert!(!geometry_ok(&b, c(0, 4), c(1, 4), k));
}

#[test]
fn test_king_geometry() {
    let mut b = Board::empty();
    let k = piece(Color::White, PieceKind::King);
    b.set(c(4, 4), Some(k));
    assert!(geometry_ok(&b, c(4, 4), c(5, 5), k));
    assert!(geometry_ok(&b, c(4, 4), c(3, 4), k));
    assert!(!geometry_ok(&b, c(4, 4), c(6, 4), k));
    assert!(!geometry_ok(&b, c(4, 4), c(4, 6), k));
}

#[test]
fn test_knight_geometry() {
    let mut b = Board::empty();
    let n = piece(Color::White, PieceKind::Knight);
    b.set(c(4, 4), Some(n));
    for (to, ok) in [
        (c(6, 5), true),
        (c(6, 3), true),
        (c(5, 6), true),
        (c(3, 2), true),
        (c(2, 5), true),
        (c(5, 5), false),
        (c(6, 6), false),
        (c(4, 6), false),
    ] {
        assert_eq!(geometry_ok(&b, c(4, 4), to, n), ok, "to {to}");
    }
}

#[test]
fn test_slider_geometry() {
    let mut b = Board::empty();
    let q = piece(Color::White, PieceKind::Queen);
    let r = piece(Color::White, PieceKind::Rook);
    let bp = piece(Color::White, PieceKind::Bishop);
    b.set(c(4, 4), Some(q));

    assert!(geometry_ok(&b, c(4, 4), c(4, 0), q));
    assert!(geometry_ok(&b, c(4, 4), c(0, 0), q));
    assert!(geometry_ok(&b, c(4, 4), c(7, 4), q));
    assert!(!geometry_ok(&b, c(4, 4), c(6, 5), q));

    assert!(geometry_ok(&b, c(4, 4), c(4, 7), r));
    assert!(!geometry_ok(&b, c(4, 4), c(5, 5), r));

    assert!(geometry_ok(&b, c(4, 4), c(1, 1), bp));
    assert!(!geometry_ok(&b, c(4, 4), c(4, 7), bp));
}

#[test]
fn test_pawn_pushes() {
    let b = Board::startpos();
    let wp = piece(Color::White, PieceKind::Pawn);
    let bp = piece(Color::Black, PieceKind::Pawn);

    // Single and double push from the second rank.
    assert!(geometry_ok(&b, c(1, 4), c(2, 4), wp));
    assert!(geometry_ok(&b, c(1, 4), c(3, 4), wp));
    assert!(!geometry_ok(&b, c(1, 4), c(4, 4), wp));
    assert!(geometry_ok(&b, c(6, 4), c(4, 4), bp));

    // Backwards and sideways are illegal.
    assert!(!geometry_ok(&b, c(1, 4), c(0, 4), wp));
    assert!(!geometry_ok(&b, c(1, 4), c(1, 5), wp));
    assert!(!geometry_ok(&b, c(6, 4), c(7, 4), bp));
}

#[test]
fn test_pawn_double_push_needs_empty_intermediate() {
    let mut b = Board::startpos();
    // Block e3; e2-e4 must fail even though e4 is empty.
    b.set(c(2, 4), Some(piece(Color::Black, PieceKind::Knight)));
    let wp = piece(Color::White, PieceKind::Pawn);
    assert!(!geometry_ok(&b, c(1, 4), c(3, 4), wp));
}

#[test]
fn test_pawn_captures() {
    let mut b = Board::startpos();
    let wp = piece(Color::White, PieceKind::Pawn);
    // Empty diagonal is not a capture.
    assert!(!geometry_ok(&b, c(1, 4), c(2, 3), wp));
    // Occupied diagonal is.
    b.set(c(2, 3), Some(piece(Color::Black, PieceKind::Pawn)));
    assert!(geometry_ok(&b, c(1, 4), c(2, 3), wp));
    // Straight ahead onto an occupant is not.
    b.set(c(2, 4), Some(piece(Color::Black, PieceKind::Pawn)));
    assert!(!geometry_ok(&b, c(1, 4), c(2, 4), wp));
}

#[test]
fn test_pawn_cannot_enter_back_rank() {
    let mut b = Board::empty();
    let wp = piece(Color::White, PieceKind::Pawn);
    b.set(c(6, 0), Some(wp));
    // No promotion: the push to rank 8 is rejected.
    assert!(!geometry_ok(&b, c(6, 0), c(7, 0), wp));

    let bp = piece(Color::Black, PieceKind::Pawn);
    b.set(c(1, 0), Some(bp));
    assert!(!geometry_ok(&b, c(1, 0), c(0, 0), bp));
}

#[test]
fn test_path_clear_sliders() {
    let b = Board::startpos();
    // Bishop f1-c4 runs through e2 which holds a pawn.
    assert!(!path_clear(&b, c(0, 5), c(3, 2), PieceKind::Bishop));
    // Rook a1-a3 runs through the a2 pawn.
    assert!(!path_clear(&b, c(0, 0), c(2, 0), PieceKind::Rook));

    let mut open = Board::startpos();
    open.set(c(1, 4), None);
    assert!(path_clear(&open, c(0, 5), c(3, 2), PieceKind::Bishop));
}

#[test]
fn test_path_endpoint_not_walked() {
    // The destination itself may be occupied: captures are legal.
    let mut b = Board::empty();
    b.set(c(0, 0), Some(piece(Color::White, PieceKind::Rook)));
    b.set(c(0, 7), Some(piece(Color::Black, PieceKind::Rook)));
    assert!(path_clear(&b, c(0, 0), c(0, 7), PieceKind::Rook));
    assert!(can_reach(
        &b,
        c(0, 0),
        c(0, 7),
        piece(Color::White, PieceKind::Rook)
    ));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let b = Board::startpos();
    let n = piece(Color::White, PieceKind::Knight);
    // g1-f3 crosses the pawn wall without obstruction.
    assert!(can_reach(&b, c(0, 6), c(2, 5), n));
}

#[test]
fn test_path_clear_non_sliders_trivially_true() {
    let b = Board::startpos();
    assert!(path_clear(&b, c(0, 6), c(2, 5), PieceKind::Knight));
    assert!(path_clear(&b, c(0, 4), c(1, 4), PieceKind::King));
    assert!(path_clear(&b, c(1, 4), c(3, 4), PieceKind::Pawn));
}
