//! Perft baseline runner.
//!
//! Usage:
//! `cargo run --release --bin perft_baseline`
//! `cargo run --release --bin perft_baseline -- --depth 4 --threads`
//!
//! Set `RUST_LOG=chess_referee=debug` to trace every applied move.

use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_referee::board_location::Square;
use chess_referee::errors::BoardError;
use chess_referee::game_state::board::Board;
use chess_referee::game_state::chess_types::{Piece, PieceKind, Side};
use chess_referee::game_state::config::GameConfig;
use chess_referee::game_state::game::Game;
use chess_referee::move_generation::perft::{perft, perft_multi_threaded, PerftCounts};

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn board_from(pieces: &[(i8, i8, PieceKind, Side)]) -> Result<Board, BoardError> {
    let mut board = Board::empty();
    for &(row, col, kind, side) in pieces {
        board.place_piece(Square::new(row, col), Some(Piece::new(kind, side)))?;
    }
    Ok(board)
}

fn run_case(name: &str, game: &Game, depth: u8, threaded: bool) -> Result<(), String> {
    let started = Instant::now();
    let counts: PerftCounts = if threaded {
        perft_multi_threaded(game, depth)
    } else {
        perft(game, depth)
    }
    .map_err(|e| e.to_string())?;
    let elapsed = started.elapsed();
    let nps = (counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;

    info!(case = name, depth, nodes = counts.nodes, "perft finished");
    println!(
        "{name}: depth={depth} nodes={} captures={} en_passant={} castles={} checks={} checkmates={} elapsed_ms={} nps={nps}",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.checks,
        counts.checkmates,
        elapsed.as_millis(),
    );
    Ok(())
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let depth = parse_arg_u8("--depth", 3);
    let threaded = has_flag("--threads");
    let config = GameConfig::from_env();

    let castling = board_from(&[
        (7, 4, PieceKind::King, Side::White),
        (7, 0, PieceKind::Rook, Side::White),
        (7, 7, PieceKind::Rook, Side::White),
        (0, 4, PieceKind::King, Side::Black),
        (0, 0, PieceKind::Rook, Side::Black),
        (0, 7, PieceKind::Rook, Side::Black),
    ])
    .map_err(|e| e.to_string())?;
    let end_kpk = board_from(&[
        (7, 4, PieceKind::King, Side::White),
        (6, 4, PieceKind::Pawn, Side::White),
        (5, 4, PieceKind::King, Side::Black),
    ])
    .map_err(|e| e.to_string())?;

    let suite = [
        ("startpos", Game::with_config(Board::for_new_game(), config)),
        ("castling", Game::with_config(castling, config)),
        ("end_kpk", Game::with_config(end_kpk, config)),
    ];

    println!("perft baseline run: depth={depth} threaded={threaded} config={config:?}");
    for (name, game) in &suite {
        run_case(name, game, depth, threaded)?;
    }
    Ok(())
}
