//! Check detection and the self-check legality filter.
//!
//! Legality is tested by playing each candidate on the live board through
//! [`Board::with_temporary_move`] and asking whether the mover's king is
//! threatened afterwards. No board copy is made, so callers need exclusive
//! access to the board for the duration of a query.

use crate::board_location::Square;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind, Side};
use crate::move_generation::move_generator::pseudo_legal_moves;

/// True iff `side` has a king and that king is threatened.
pub fn is_under_check(board: &Board, side: Side) -> bool {
    board
        .find_any(PieceKind::King, side)
        .is_some_and(|king| board.is_square_under_threat(king, side))
}

/// True iff playing `mv` would leave `side`'s king unthreatened.
pub fn leaves_king_safe(board: &mut Board, mv: Move, side: Side) -> bool {
    board.with_temporary_move(mv.from, mv.to, |scratch| !is_under_check(scratch, side))
}

/// Legal moves of whatever piece stands on `from`, ignoring turn order.
pub fn legal_moves_from(board: &mut Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    let side = piece.side;
    let candidates = pseudo_legal_moves(piece, from, board);

    candidates
        .into_iter()
        .filter(|&mv| leaves_king_safe(board, mv, side))
        .collect()
}

/// Legal moves of every piece of `side`, origins in row-major order.
pub fn legal_moves_for_side(board: &mut Board, side: Side) -> Vec<Move> {
    let origins: Vec<Square> = board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .map(|(square, _)| square)
        .collect();

    origins
        .into_iter()
        .flat_map(|from| legal_moves_from(board, from))
        .collect()
}

/// True iff no piece of `side` has a legal move.
pub fn has_no_legal_moves(board: &mut Board, side: Side) -> bool {
    let origins: Vec<Square> = board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .map(|(square, _)| square)
        .collect();

    origins
        .into_iter()
        .all(|from| legal_moves_from(board, from).is_empty())
}
