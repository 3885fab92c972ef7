use crate::board_location::{Direction, Square, AXIAL_DIRECTIONS, DIAGONAL_DIRECTIONS};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::{Move, Piece, PieceKind, Side};
use crate::move_generation::legal_move_shared::push_step_moves;

/// All eight single-square king steps.
pub const KING_STEPS: [Direction; 8] = [
    AXIAL_DIRECTIONS[0],
    AXIAL_DIRECTIONS[1],
    AXIAL_DIRECTIONS[2],
    AXIAL_DIRECTIONS[3],
    DIAGONAL_DIRECTIONS[0],
    DIAGONAL_DIRECTIONS[1],
    DIAGONAL_DIRECTIONS[2],
    DIAGONAL_DIRECTIONS[3],
];

pub fn generate_king_moves(board: &Board, from: Square, king: &Piece, out: &mut Vec<Move>) {
    generate_king_steps(board, from, king.side, out);
    generate_castling_moves(board, from, king, out);
}

/// Single steps only; this is also the king's threat pattern.
pub fn generate_king_steps(board: &Board, from: Square, side: Side, out: &mut Vec<Move>) {
    push_step_moves(board, from, side, &KING_STEPS, out);
}

/// Two-column king moves towards an unmoved rook of the same side.
///
/// Both squares the king crosses must be empty and unthreatened. Whether the
/// king's current square is attacked is left to the self-check filter.
fn generate_castling_moves(board: &Board, from: Square, king: &Piece, out: &mut Vec<Move>) {
    if king.has_moved {
        return;
    }

    for (direction, rook_col) in [(1, KING_SIDE_ROOK_COL), (-1, QUEEN_SIDE_ROOK_COL)] {
        let corner = Square::new(from.row, rook_col);
        let rook_ready = board.get(corner).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.side == king.side && !rook.has_moved
        });
        if !rook_ready {
            continue;
        }

        let transit = [from.offset(0, direction), from.offset(0, 2 * direction)];
        let path_clear = transit.iter().all(|&square| {
            square.in_bounds()
                && board.is_empty(square)
                && !board.is_square_under_threat(square, king.side)
        });
        if path_clear {
            out.push(Move::new(from, transit[1]));
        }
    }
}
