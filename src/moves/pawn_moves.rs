use crate::board_location::{manhattan_distance, Square};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::chess_types::{Move, PieceKind, Side};

/// Pawn pushes, diagonal captures and en-passant.
///
/// En-passant follows the engine's own rule rather than standard chess: when
/// the previous move left an enemy pawn a Manhattan distance of 2 from where
/// it started, and that pawn now sits a Manhattan distance of 1 from this
/// one, the capture lands on the enemy pawn's own square. Pawns reaching the
/// far rank are not promoted.
pub fn generate_pawn_moves(board: &Board, from: Square, side: Side, out: &mut Vec<Move>) {
    let forward = pawn_direction(side);

    let single = from.offset(forward, 0);
    if single.in_bounds() && board.is_empty(single) {
        out.push(Move::new(from, single));

        let double = from.offset(2 * forward, 0);
        if from.row == pawn_start_row(side) && double.in_bounds() && board.is_empty(double) {
            out.push(Move::new(from, double));
        }
    }

    for to in pawn_capture_squares(from, side) {
        if board.is_capturable(to, side) {
            out.push(Move::new(from, to));
        }
    }

    if let Some(target) = en_passant_target(board, from, side) {
        out.push(Move::new(from, target));
    }
}

/// The forward diagonals of a pawn that lie on the board, occupied or not.
pub fn pawn_capture_squares(from: Square, side: Side) -> impl Iterator<Item = Square> {
    let forward = pawn_direction(side);
    [-1, 1]
        .into_iter()
        .filter_map(move |d_col| from.checked_offset(forward, d_col))
}

fn en_passant_target(board: &Board, from: Square, side: Side) -> Option<Square> {
    let last = board.last_move()?;
    let landed = board.get(last.to)?;
    let is_enemy_pawn = landed.kind == PieceKind::Pawn && landed.side != side;

    (is_enemy_pawn
        && manhattan_distance(last.from, last.to) == 2
        && manhattan_distance(from, last.to) == 1)
        .then_some(last.to)
}
