//! Errors surfaced by the rules engine.
//!
//! Every variant describes bad caller input; none signals internal
//! corruption. A failed call never leaves the board or the game mutated, so
//! callers can report the message and carry on with the same state.

use crate::board_location::Square;
use crate::game_state::chess_types::{PieceKind, Side};

/// Why [`Game::make_move`](crate::game_state::game::Game::make_move) rejected
/// a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    /// The game already ended; no further moves are accepted.
    #[error("game has already ended")]
    GameEnded,

    /// The origin square is empty.
    #[error("no piece at {square}")]
    NoPieceAtOrigin { square: Square },

    /// The origin holds a piece of the side not on move.
    #[error("wrong side to move: it is {next_player}'s turn")]
    WrongSideToMove { next_player: Side },

    /// The destination is not among the piece's legal moves. Covers off-board
    /// targets, blocked paths, own-piece captures, self-check and malformed
    /// castling alike.
    #[error("{side} {kind} cannot move from {from} to {to}")]
    IllegalMove {
        kind: PieceKind,
        side: Side,
        from: Square,
        to: Square,
    },
}

/// Failures of direct board edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square {square} is off the board")]
    OffBoard { square: Square },
}
