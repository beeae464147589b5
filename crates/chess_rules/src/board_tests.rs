use super::*;

fn c(rank: u8, file: u8) -> Coord {
    Coord { rank, file }
}

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();

    // Back ranks mirror each other.
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
        assert_eq!(
            b.piece_at(c(0, f as u8)),
            Some(Piece::new(Color::White, kind))
        );
        assert_eq!(
            b.piece_at(c(7, f as u8)),
            Some(Piece::new(Color::Black, kind))
        );
    }
    for f in 0..8 {
        assert_eq!(
            b.piece_at(c(1, f)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            b.piece_at(c(6, f)),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }
    for rank in 2..6 {
        for file in 0..8 {
            assert!(b.is_empty(c(rank, file)));
        }
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut b = Board::startpos();
    b.set(c(3, 4), Some(Piece::new(Color::White, PieceKind::Pawn)));
    b.set(c(1, 4), None);

    b.reset();
    let once = b.clone();
    b.reset();
    assert_eq!(b, once);
    assert_eq!(b, Board::startpos());
}

#[test]
fn test_king_location() {
    let b = Board::startpos();
    assert_eq!(b.king_location(Color::White), Some(c(0, 4)));
    assert_eq!(b.king_location(Color::Black), Some(c(7, 4)));

    let empty = Board::empty();
    assert_eq!(empty.king_location(Color::White), None);
}

#[test]
fn test_material_counts() {
    let b = Board::startpos();
    // 8 pawns + 2 knights + 2 bishops + 2 rooks + 1 queen = 39.
    assert_eq!(b.material(Color::White), 39);
    assert_eq!(b.material(Color::Black), 39);
    assert_eq!(b.material_advantage(Color::White), 0);

    let mut b = Board::startpos();
    b.set(c(7, 3), None); // remove the black queen
    assert_eq!(b.material_advantage(Color::White), 9);
    assert_eq!(b.material_advantage(Color::Black), -9);
}

#[test]
fn test_with_move_restores_both_cells() {
    let mut b = Board::startpos();
    let before = b.clone();

    // A quiet move and a capture-shaped overwrite both restore.
    let seen = b.with_move(c(1, 4), c(3, 4), |probe| probe.piece_at(c(3, 4)));
    assert_eq!(seen, Some(Piece::new(Color::White, PieceKind::Pawn)));
    assert_eq!(b, before);

    let seen = b.with_move(c(0, 1), c(6, 1), |probe| probe.piece_at(c(6, 1)));
    assert_eq!(seen, Some(Piece::new(Color::White, PieceKind::Knight)));
    assert_eq!(b, before);
}

#[test]
fn test_display_renders_glyphs() {
    let text = Board::startpos().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0].trim(), "r n b q k b n r");
    assert_eq!(lines[7].trim(), "R N B Q K B N R");
    assert_eq!(lines[3].trim(), ". . . . . . . .");
}
