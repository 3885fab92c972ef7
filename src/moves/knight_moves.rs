use crate::board_location::{Direction, Square};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Side};
use crate::move_generation::legal_move_shared::push_step_moves;

/// The eight L-shaped knight jumps.
pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Knight: single jumps, never blocked by pieces in between.
pub fn generate_knight_moves(board: &Board, from: Square, side: Side, out: &mut Vec<Move>) {
    push_step_moves(board, from, side, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    fn moves_of(board: &Board, from: Square, side: Side) -> Vec<Move> {
        let mut out = Vec::new();
        generate_knight_moves(board, from, side, &mut out);
        out
    }

    #[test]
    fn knight_in_centre_has_eight_jumps() {
        let from = Square::new(4, 4);
        let moves = moves_of(&Board::empty(), from, Side::White);

        assert_eq!(moves.len(), 8);
        for (d_row, d_col) in KNIGHT_OFFSETS {
            assert!(moves.contains(&Move::new(from, from.offset(d_row, d_col))));
        }
    }

    #[test]
    fn knight_in_corner_keeps_only_on_board_jumps() {
        let from = Square::new(7, 0);
        let moves = moves_of(&Board::empty(), from, Side::Black);

        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(from, Square::new(5, 1))));
        assert!(moves.contains(&Move::new(from, Square::new(6, 2))));
    }

    #[test]
    fn knight_jumps_over_surrounding_pieces() {
        let board = Board::for_new_game();
        let from = Square::new(7, 1);

        let moves = moves_of(&board, from, Side::White);

        assert_eq!(
            moves.iter().map(|mv| mv.to).collect::<Vec<_>>(),
            vec![Square::new(5, 2), Square::new(5, 0)]
        );
    }

    #[test]
    fn knight_captures_enemy_but_not_friend() {
        let mut board = Board::empty();
        let from = Square::new(4, 4);
        let enemy = Square::new(2, 5);
        let friend = Square::new(2, 3);
        board
            .place_piece(enemy, Some(Piece::new(PieceKind::Queen, Side::Black)))
            .unwrap();
        board
            .place_piece(friend, Some(Piece::new(PieceKind::Queen, Side::White)))
            .unwrap();

        let moves = moves_of(&board, from, Side::White);

        assert!(moves.contains(&Move::new(from, enemy)));
        assert!(!moves.contains(&Move::new(from, friend)));
    }
}
