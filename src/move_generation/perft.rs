use std::panic;
use std::thread;

use crate::board_location::manhattan_distance;
use crate::errors::IllegalMoveError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind};
use crate::game_state::game::{Game, GameOutcome};

/// Leaf statistics of a move-path enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, before: &Board, mv: Move, after: &Game) {
        self.nodes += 1;

        let Some(mover) = before.get(mv.from) else {
            return;
        };
        let is_capture = before.get(mv.to).is_some();
        if is_capture {
            self.captures += 1;
        }
        // Ordinary pawn captures are diagonal; only the en-passant rule lands
        // a pawn on an occupied orthogonal neighbour.
        if mover.kind == PieceKind::Pawn && is_capture && manhattan_distance(mv.from, mv.to) == 1 {
            self.en_passant += 1;
        }
        if mover.kind == PieceKind::King && (mv.to.col - mv.from.col).abs() >= 2 {
            self.castles += 1;
        }
        if after.is_in_check(after.next_player()) {
            self.checks += 1;
        }
        if matches!(after.outcome(), Some(GameOutcome::Checkmate { .. })) {
            self.checkmates += 1;
        }
    }
}

/// Counts every legal move path of exactly `depth` plies from `game`.
///
/// `game` is not modified; each path is played on its own clone through
/// [`Game::make_move`], so the count exercises the same validation callers
/// go through.
pub fn perft(game: &Game, depth: u8) -> Result<PerftCounts, IllegalMoveError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut root = game.clone();
    let mut total = PerftCounts::default();
    for mv in root.all_allowed_moves() {
        perft_recurse(&root, mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

/// Same as [`perft`], one scoped thread per root move.
pub fn perft_multi_threaded(game: &Game, depth: u8) -> Result<PerftCounts, IllegalMoveError> {
    if depth == 0 {
        return perft(game, depth);
    }

    let mut root = game.clone();
    let root_moves = root.all_allowed_moves();
    let root = &root;

    thread::scope(|scope| -> Result<PerftCounts, IllegalMoveError> {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(root, mv, depth, 1, &mut local).map(|()| local)
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = handle
                .join()
                .unwrap_or_else(|payload| panic::resume_unwind(payload))?;
            total.merge(local);
        }
        Ok(total)
    })
}

fn perft_recurse(
    game: &Game,
    mv: Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), IllegalMoveError> {
    let mut child = game.clone();
    child.make_move(mv)?;

    if current_depth == search_depth {
        counts.record_leaf(game.board(), mv, &child);
        return Ok(());
    }

    for next in child.all_allowed_moves() {
        perft_recurse(&child, next, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}
