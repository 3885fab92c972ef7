//! Per-kind dispatch for pseudo-legal generation and threat patterns.
//!
//! Every piece kind is handled by one arm of an exhaustive match, so a new
//! kind cannot be added without deciding how it moves and what it threatens.

use crate::board_location::Square;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Piece, PieceKind};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::{generate_king_moves, generate_king_steps};
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::{generate_pawn_moves, pawn_capture_squares};
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Moves that obey movement, blocking and capture rules for `piece` standing
/// on `from`, without asking whether they leave its own king in check.
pub fn pseudo_legal_moves(piece: &Piece, from: Square, board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.side, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.side, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.side, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.side, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.side, &mut out),
        PieceKind::King => generate_king_moves(board, from, piece, &mut out),
    }
    out
}

/// True iff `piece` on `from` threatens `target`.
///
/// Pawns threaten both forward diagonals whether or not anything stands
/// there; kings threaten their single steps but never a castling target.
/// Every other kind threatens exactly its pseudo-legal destinations.
pub fn threatens(piece: &Piece, from: Square, board: &Board, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_capture_squares(from, piece.side).any(|square| square == target),
        PieceKind::King => {
            let mut steps = Vec::with_capacity(8);
            generate_king_steps(board, from, piece.side, &mut steps);
            steps.iter().any(|mv| mv.to == target)
        }
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            pseudo_legal_moves(piece, from, board)
                .iter()
                .any(|mv| mv.to == target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Side;

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves_per_side() {
        let board = Board::for_new_game();
        for side in [Side::White, Side::Black] {
            let total: usize = board
                .pieces()
                .filter(|(_, piece)| piece.side == side)
                .map(|(from, piece)| pseudo_legal_moves(piece, from, &board).len())
                .sum();
            assert_eq!(total, 20);
        }
    }

    #[test]
    fn pseudo_legal_moves_never_land_on_own_pieces_or_off_board() {
        let board = Board::for_new_game();
        for (from, piece) in board.pieces() {
            for mv in pseudo_legal_moves(piece, from, &board) {
                assert_eq!(mv.from, from);
                assert!(mv.to.in_bounds());
                assert!(board.is_empty_or_capturable(mv.to, piece.side));
            }
        }
    }

    #[test]
    fn sliders_threaten_a_king_they_could_capture() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceKind::Rook, Side::Black);
        let rook_at = Square::new(7, 4);
        let king_at = Square::new(5, 4);
        board.place_piece(rook_at, Some(rook.clone())).unwrap();
        board
            .place_piece(king_at, Some(Piece::new(PieceKind::King, Side::White)))
            .unwrap();

        assert!(threatens(&rook, rook_at, &board, king_at));
        assert!(!threatens(&rook, rook_at, &board, Square::new(4, 4)));
    }

    #[test]
    fn king_threat_excludes_castling_targets() {
        let mut board = Board::empty();
        let king = Piece::new(PieceKind::King, Side::Black);
        let king_at = Square::new(0, 4);
        board.place_piece(king_at, Some(king.clone())).unwrap();
        board
            .place_piece(Square::new(0, 7), Some(Piece::new(PieceKind::Rook, Side::Black)))
            .unwrap();

        assert!(pseudo_legal_moves(&king, king_at, &board).contains(&Move::new(king_at, Square::new(0, 6))));
        assert!(!threatens(&king, king_at, &board, Square::new(0, 6)));
        assert!(threatens(&king, king_at, &board, Square::new(1, 5)));
    }
}
