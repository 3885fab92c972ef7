//! Mailbox board: an 8x8 occupancy grid plus a one-ply move lookback.
//!
//! The board applies moves unconditionally; legality and turn order belong to
//! [`Game`](crate::game_state::game::Game). Threat and mobility queries go
//! through the same per-piece generators used for ordinary moves, so "can
//! move to S" and "threatens S" share one code path.

use crate::board_location::Square;
use crate::errors::BoardError;
use crate::game_state::chess_rules::{
    back_row_index, pawn_start_row, BACK_RANK_ORDER, BOARD_SIZE, KING_SIDE_ROOK_COL,
    QUEEN_SIDE_ROOK_COL,
};
use crate::game_state::chess_types::{Move, Piece, PieceKind, Side};
use crate::move_generation::move_generator::{pseudo_legal_moves, threatens};

const GRID: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; GRID]; GRID],
    last_move: Option<Move>,
}

impl Board {
    /// A board with every square vacant, for building custom positions with
    /// [`Board::place_piece`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard starting position: White on row 7, Black on row 0.
    pub fn for_new_game() -> Self {
        let mut board = Self::empty();
        for side in [Side::White, Side::Black] {
            let back_row = back_row_index(side);
            let pawn_row = pawn_start_row(side);
            for (col, kind) in (0..BOARD_SIZE).zip(BACK_RANK_ORDER) {
                board.put(Square::new(back_row, col), Some(Piece::new(kind, side)));
                board.put(
                    Square::new(pawn_row, col),
                    Some(Piece::new(PieceKind::Pawn, side)),
                );
            }
        }
        board
    }

    /// The piece on `square`, or `None` when the square is empty or off-board.
    #[inline]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        let (row, col) = grid_index(square)?;
        self.squares[row][col].as_ref()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// True iff `square` holds a piece of the side opposing `own_side`.
    #[inline]
    pub fn is_capturable(&self, square: Square, own_side: Side) -> bool {
        self.get(square).is_some_and(|piece| piece.side != own_side)
    }

    #[inline]
    pub fn is_empty_or_capturable(&self, square: Square, own_side: Side) -> bool {
        self.is_empty(square) || self.is_capturable(square, own_side)
    }

    /// The most recently applied move, `None` before the first move.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub fn has_last_move(&self) -> bool {
        self.last_move.is_some()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    /// Writes `piece` (or vacancy) straight into `square`, returning the
    /// previous occupant. Bypasses every legality and turn check and leaves
    /// `last_move` untouched.
    pub fn place_piece(
        &mut self,
        square: Square,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, BoardError> {
        let slot = self
            .slot_mut(square)
            .ok_or(BoardError::OffBoard { square })?;
        Ok(std::mem::replace(slot, piece))
    }

    /// Applies a move that the caller has already validated.
    ///
    /// A king travelling two or more columns castles: the rook in the corner
    /// it is heading for is moved first, onto the square next to the king's
    /// origin in the direction of travel, and the king follows. Anything else
    /// is a plain relocation, so an en-passant capture (whose destination is
    /// the captured pawn's own square) removes its victim by overwriting it.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        if self.is_castle_move(from, to) {
            let direction = (to.col - from.col).signum();
            let rook_col = if direction > 0 {
                KING_SIDE_ROOK_COL
            } else {
                QUEEN_SIDE_ROOK_COL
            };
            self.move_piece(Square::new(from.row, rook_col), from.offset(0, direction));
        }

        self.relocate(from, to);
        self.last_move = Some(Move::new(from, to));
        if let Some(piece) = self.slot_mut(to).and_then(Option::as_mut) {
            piece.has_moved = true;
        }
    }

    /// True iff some piece of the side opposing `side` threatens `square`.
    pub fn is_square_under_threat(&self, square: Square, side: Side) -> bool {
        self.pieces()
            .filter(|(_, piece)| piece.side != side)
            .any(|(from, piece)| threatens(piece, from, self, square))
    }

    /// First square in row-major order holding a `kind` of `side`.
    ///
    /// With several matches (custom positions with two kings of one side) the
    /// lowest row, then lowest column, wins.
    pub fn find_any(&self, kind: PieceKind, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == kind && piece.side == side)
            .map(|(square, _)| square)
    }

    /// True iff no piece of `side` has a single pseudo-legal move.
    ///
    /// This counts pseudo-legal moves only; a side whose every move walks
    /// into check still "has moves" here.
    pub fn has_no_moves(&self, side: Side) -> bool {
        self.pieces()
            .filter(|(_, piece)| piece.side == side)
            .all(|(from, piece)| pseudo_legal_moves(piece, from, self).is_empty())
    }

    /// Plays `from -> to` as a bare relocation, runs `action` against the
    /// resulting position, and restores both squares before returning.
    ///
    /// The restore runs on every exit path, unwinding included. Only the two
    /// squares change: `last_move` and `has_moved` flags are never touched,
    /// and a castling king travels alone.
    pub fn with_temporary_move<T>(
        &mut self,
        from: Square,
        to: Square,
        action: impl FnOnce(&Board) -> T,
    ) -> T {
        let mover = self.take(from);
        let displaced = self.put(to, mover);
        let guard = TemporaryMove {
            board: self,
            from,
            to,
            displaced,
        };
        let outcome = action(&*guard.board);
        drop(guard);
        outcome
    }

    fn is_castle_move(&self, from: Square, to: Square) -> bool {
        self.get(from)
            .is_some_and(|piece| piece.kind == PieceKind::King)
            && (from.col - to.col).abs() >= 2
    }

    fn relocate(&mut self, from: Square, to: Square) {
        let mover = self.take(from);
        self.put(to, mover);
    }

    fn slot_mut(&mut self, square: Square) -> Option<&mut Option<Piece>> {
        let (row, col) = grid_index(square)?;
        Some(&mut self.squares[row][col])
    }

    fn take(&mut self, square: Square) -> Option<Piece> {
        self.slot_mut(square).and_then(Option::take)
    }

    fn put(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        self.slot_mut(square)
            .and_then(|slot| std::mem::replace(slot, piece))
    }
}

/// Undo record for [`Board::with_temporary_move`]; restoring happens on drop.
struct TemporaryMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    displaced: Option<Piece>,
}

impl Drop for TemporaryMove<'_> {
    fn drop(&mut self) {
        let mover = self.board.take(self.to);
        self.board.put(self.from, mover);
        self.board.put(self.to, self.displaced.take());
    }
}

#[inline]
fn grid_index(square: Square) -> Option<(usize, usize)> {
    square
        .in_bounds()
        .then(|| (square.row as usize, square.col as usize))
}
