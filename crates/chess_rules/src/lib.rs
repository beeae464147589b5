pub mod board;
pub mod check;
pub mod eval;
pub mod game;
pub mod notation;
pub mod rules;
pub mod types;

// Re-export the core surface so callers can use `chess_rules::Game` etc.
pub use board::Board;
pub use check::{
    can_block_check, can_capture_attacker, can_move_out_of_check, is_mated, is_stalemated,
    king_attacked, king_attacker,
};
pub use eval::{compute_advantage, evaluate, is_open_file};
pub use game::{Game, MoveError};
pub use notation::{parse_move, Marker, ParseError, ParsedMove};
pub use rules::{can_reach, geometry_ok, path_clear};
pub use types::{Color, Coord, Piece, PieceKind};
