//! Crate root module declarations for the chess referee.
//!
//! The crate answers "what can move where" for a position and applies chosen
//! moves, including castling and en-passant, while tracking check, checkmate
//! and stalemate. [`game_state::game::Game`] is the entry point; the lower
//! modules are public so tools and benchmarks can reach the board and the
//! generators directly.

pub mod errors;
pub mod board_location;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod config;
    pub mod game;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}
