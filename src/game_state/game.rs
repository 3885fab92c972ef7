//! Turn order, legality and game termination.
//!
//! `Game` is the only mutating entry point meant for callers: it owns the
//! board, rejects illegal input without touching state, and decides when the
//! game is over. Legality queries play candidates on the live board and roll
//! them back, which is why they take `&mut self`.

use tracing::{debug, info};

use crate::board_location::Square;
use crate::errors::IllegalMoveError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Piece, PieceKind, Side};
use crate::game_state::config::{GameConfig, MateDetection};
use crate::move_generation::legal_move_checks::{
    has_no_legal_moves, is_under_check, legal_moves_for_side, legal_moves_from,
};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Side },
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    next_player: Side,
    outcome: Option<GameOutcome>,
    config: GameConfig,
}

impl Game {
    /// A game on `board` with White to move and default rules.
    pub fn new(board: Board) -> Self {
        Self::with_config(board, GameConfig::default())
    }

    pub fn with_config(board: Board, config: GameConfig) -> Self {
        Self {
            board,
            next_player: Side::White,
            outcome: None,
            config,
        }
    }

    /// A game from the standard starting position.
    pub fn new_game() -> Self {
        Self::new(Board::for_new_game())
    }

    /// Read-only board inspection; off-board coordinates yield `None`.
    pub fn piece_at(&self, row: i8, col: i8) -> Option<&Piece> {
        self.board.get(Square::new(row, col))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Side {
        self.next_player
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn is_ended(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_in_check(&self, side: Side) -> bool {
        is_under_check(&self.board, side)
    }

    /// Legal moves of the piece on `from`.
    ///
    /// Empty once the game has ended, for an empty square, and for a piece of
    /// the side not on move. The board is left exactly as it was found.
    pub fn allowed_moves(&mut self, from: Square) -> Vec<Move> {
        if self.is_ended() {
            return Vec::new();
        }
        let owned_by_mover = self
            .board
            .get(from)
            .is_some_and(|piece| piece.side == self.next_player);
        if !owned_by_mover {
            return Vec::new();
        }
        legal_moves_from(&mut self.board, from)
    }

    /// Legal moves of every piece of the side to move, origins in row-major
    /// order.
    pub fn all_allowed_moves(&mut self) -> Vec<Move> {
        if self.is_ended() {
            return Vec::new();
        }
        legal_moves_for_side(&mut self.board, self.next_player)
    }

    /// Validates and plays `mv`, then hands the turn over.
    ///
    /// On failure nothing changes. After a successful move the side now on
    /// move is checked for checkmate and, if enabled, stalemate.
    pub fn make_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        if self.is_ended() {
            return Err(IllegalMoveError::GameEnded);
        }

        let (kind, side) = match self.board.get(mv.from) {
            Some(piece) => (piece.kind, piece.side),
            None => return Err(IllegalMoveError::NoPieceAtOrigin { square: mv.from }),
        };
        if side != self.next_player {
            return Err(IllegalMoveError::WrongSideToMove {
                next_player: self.next_player,
            });
        }
        if !self.allowed_moves(mv.from).contains(&mv) {
            return Err(IllegalMoveError::IllegalMove {
                kind,
                side,
                from: mv.from,
                to: mv.to,
            });
        }

        self.board.move_piece(mv.from, mv.to);
        self.next_player = side.opposite();
        debug!(%side, %kind, from = %mv.from, to = %mv.to, next = %self.next_player, "move applied");

        self.outcome = self.evaluate_outcome();
        if let Some(outcome) = self.outcome {
            info!(?outcome, "game ended");
        }
        Ok(())
    }

    fn evaluate_outcome(&mut self) -> Option<GameOutcome> {
        let side = self.next_player;

        if is_under_check(&self.board, side) {
            let no_moves = match self.config.mate_detection {
                MateDetection::Legal => has_no_legal_moves(&mut self.board, side),
                MateDetection::PseudoLegal => self.board.has_no_moves(side),
            };
            return no_moves.then_some(GameOutcome::Checkmate {
                winner: side.opposite(),
            });
        }

        let stalemated = self.config.stalemate_ends_game
            && self.board.find_any(PieceKind::King, side).is_some()
            && has_no_legal_moves(&mut self.board, side);
        stalemated.then_some(GameOutcome::Stalemate)
    }
}
