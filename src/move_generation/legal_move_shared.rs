//! Generation primitives shared by the piece generators.

use crate::board_location::{Direction, Square};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Side};

/// Walks outward from `from` along each direction, emitting a move onto
/// every empty square and onto the first enemy piece met. A ray stops at the
/// first occupied square, friend or foe, and at the board edge.
pub fn push_ray_moves(
    board: &Board,
    from: Square,
    side: Side,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        let mut to = from.step(direction);
        while to.in_bounds() {
            if board.is_empty_or_capturable(to, side) {
                out.push(Move::new(from, to));
            }
            if !board.is_empty(to) {
                break;
            }
            to = to.step(direction);
        }
    }
}

/// Emits one move per offset whose target is on the board and either empty
/// or held by the enemy. Nothing in between is inspected.
pub fn push_step_moves(
    board: &Board,
    from: Square,
    side: Side,
    offsets: &[Direction],
    out: &mut Vec<Move>,
) {
    out.extend(
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| from.checked_offset(d_row, d_col))
            .filter(|&to| board.is_empty_or_capturable(to, side))
            .map(|to| Move::new(from, to)),
    );
}
