use crate::board_location::{Square, DIAGONAL_DIRECTIONS};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Side};
use crate::move_generation::legal_move_shared::push_ray_moves;

pub fn generate_bishop_moves(board: &Board, from: Square, side: Side, out: &mut Vec<Move>) {
    push_ray_moves(board, from, side, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    fn moves_of(board: &Board, from: Square, side: Side) -> Vec<Move> {
        let mut out = Vec::new();
        generate_bishop_moves(board, from, side, &mut out);
        out
    }

    #[test]
    fn bishop_from_centre_covers_both_diagonals() {
        let board = Board::empty();
        let from = Square::new(4, 3);

        let moves = moves_of(&board, from, Side::White);

        assert!(moves.contains(&Move::new(from, Square::new(0, 7))));
        assert!(moves.contains(&Move::new(from, Square::new(1, 0))));
        assert!(moves.contains(&Move::new(from, Square::new(7, 0))));
        assert!(moves.contains(&Move::new(from, Square::new(7, 6))));
        assert_eq!(moves.len(), 13);
    }

    #[test]
    fn bishop_is_blocked_by_friend_and_captures_enemy() {
        let mut board = Board::empty();
        let from = Square::new(4, 4);
        board
            .place_piece(Square::new(2, 2), Some(Piece::new(PieceKind::Pawn, Side::Black)))
            .unwrap();
        board
            .place_piece(Square::new(6, 6), Some(Piece::new(PieceKind::Pawn, Side::White)))
            .unwrap();

        let moves = moves_of(&board, from, Side::Black);

        assert!(moves.contains(&Move::new(from, Square::new(3, 3))));
        assert!(!moves.contains(&Move::new(from, Square::new(2, 2))));
        assert!(moves.contains(&Move::new(from, Square::new(6, 6))));
        assert!(!moves.contains(&Move::new(from, Square::new(7, 7))));
    }
}
