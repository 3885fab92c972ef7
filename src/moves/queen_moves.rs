use crate::board_location::{Square, AXIAL_DIRECTIONS, DIAGONAL_DIRECTIONS};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Side};
use crate::move_generation::legal_move_shared::push_ray_moves;

/// Queen: rook rays plus bishop rays.
pub fn generate_queen_moves(board: &Board, from: Square, side: Side, out: &mut Vec<Move>) {
    push_ray_moves(board, from, side, &AXIAL_DIRECTIONS, out);
    push_ray_moves(board, from, side, &DIAGONAL_DIRECTIONS, out);
}
