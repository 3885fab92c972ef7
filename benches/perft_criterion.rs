use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_referee::board_location::Square;
use chess_referee::game_state::board::Board;
use chess_referee::game_state::chess_types::{Piece, PieceKind, Side};
use chess_referee::game_state::game::Game;
use chess_referee::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    build: fn() -> Game,
    expected_nodes: &'static [u64],
}

fn start_position() -> Game {
    Game::new_game()
}

/// Kings, rooks and a few pawns with both castles still available.
fn castling_middlegame() -> Game {
    let mut board = Board::empty();
    let pieces = [
        (7, 4, PieceKind::King, Side::White),
        (7, 0, PieceKind::Rook, Side::White),
        (7, 7, PieceKind::Rook, Side::White),
        (6, 3, PieceKind::Pawn, Side::White),
        (6, 4, PieceKind::Pawn, Side::White),
        (0, 4, PieceKind::King, Side::Black),
        (0, 0, PieceKind::Rook, Side::Black),
        (0, 7, PieceKind::Rook, Side::Black),
        (1, 3, PieceKind::Pawn, Side::Black),
        (1, 4, PieceKind::Pawn, Side::Black),
    ];
    for (row, col, kind, side) in pieces {
        board
            .place_piece(Square::new(row, col), Some(Piece::new(kind, side)))
            .expect("benchmark squares are on the board");
    }
    Game::new(board)
}

const CASES_QUICK: &[BenchCase] = &[BenchCase {
    name: "start_position",
    build: start_position,
    expected_nodes: &[20, 400, 8910],
}];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start_position",
        build: start_position,
        expected_nodes: &[20, 400, 8910],
    },
    BenchCase {
        name: "castling_middlegame",
        build: castling_middlegame,
        expected_nodes: &[],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("CHESS_REFEREE_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = (case.build)();
        let depths: Vec<(u8, Option<u64>)> = if case.expected_nodes.is_empty() {
            vec![(1, None), (2, None), (3, None)]
        } else {
            case.expected_nodes
                .iter()
                .enumerate()
                .map(|(idx, nodes)| ((idx + 1) as u8, Some(*nodes)))
                .collect()
        };

        for (depth, expected_nodes) in depths {
            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth).expect("perft should run");
            if let Some(expected) = expected_nodes {
                assert_eq!(
                    warmup.nodes as u64, expected,
                    "node mismatch in warmup for {} depth {}",
                    case.name, depth
                );
            }

            group.throughput(Throughput::Elements(warmup.nodes as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                &warmup.nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_allowed_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("allowed_moves");
    group.sample_size(50);

    for (name, build) in [
        ("start_position", start_position as fn() -> Game),
        ("castling_middlegame", castling_middlegame),
    ] {
        let mut game = build();
        group.bench_function(name, |b| {
            b.iter(|| black_box(game.all_allowed_moves().len()));
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_allowed_moves);
criterion_main!(perft_benches);
