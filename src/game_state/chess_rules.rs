//! Canonical chess-rule constants.
//!
//! Static layout facts shared by board setup and move generation: board
//! size, back-rank order, and the per-side rows and directions pawns use.

use crate::game_state::chess_types::{PieceKind, Side};

/// Squares per row and per column.
pub const BOARD_SIZE: i8 = 8;

/// Back-rank piece order for columns 0 through 7.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column of the queen-side rook corner.
pub const QUEEN_SIDE_ROOK_COL: i8 = 0;

/// Column of the king-side rook corner.
pub const KING_SIDE_ROOK_COL: i8 = BOARD_SIZE - 1;

/// Row holding a side's back rank.
#[inline]
pub const fn back_row_index(side: Side) -> i8 {
    match side {
        Side::White => 7,
        Side::Black => 0,
    }
}

/// Row holding a side's pawns at the start of the game.
#[inline]
pub const fn pawn_start_row(side: Side) -> i8 {
    match side {
        Side::White => 6,
        Side::Black => 1,
    }
}

/// Row delta of a forward pawn step (towards the opponent's back rank).
#[inline]
pub const fn pawn_direction(side: Side) -> i8 {
    match side {
        Side::White => -1,
        Side::Black => 1,
    }
}
