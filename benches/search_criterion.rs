use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::search::best_move_search::{
    find_best_move, SearchAlgorithm, SearchConfig,
};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
    },
    BenchCase {
        name: "open_game",
        fen: "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w - - 0 1",
    },
    BenchCase {
        name: "queen_endgame",
        fen: "4k3/8/8/3q4/8/2N5/8/4K3 w - - 0 1",
    },
];

const ALGORITHMS: [SearchAlgorithm; 3] = [
    SearchAlgorithm::Minimax,
    SearchAlgorithm::Negamax,
    SearchAlgorithm::NegamaxAlphaBeta,
];

fn search_depth() -> u8 {
    match std::env::var("MAILBOX_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => 3,
        _ => 2,
    }
}

fn bench_search(c: &mut Criterion) {
    let config = SearchConfig {
        depth: search_depth(),
    };

    let mut group = c.benchmark_group(format!("search_d{}", config.depth));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in CASES {
        let mut game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");
        let legal_moves = game.generate_legal_moves();

        // Correctness guard: all variants must agree before timing.
        let scores: Vec<i32> = ALGORITHMS
            .iter()
            .map(|&algorithm| {
                find_best_move(&mut game, &legal_moves, algorithm, config)
                    .expect("benchmark position has legal moves")
                    .score
            })
            .collect();
        assert!(
            scores.windows(2).all(|pair| pair[0] == pair[1]),
            "search variants disagree on {}: {scores:?}",
            case.name
        );

        for algorithm in ALGORITHMS {
            let bench_name = format!("{}_{}", case.name, algorithm);
            group.bench_function(BenchmarkId::from_parameter(bench_name), |b| {
                b.iter(|| {
                    let result =
                        find_best_move(black_box(&mut game), &legal_moves, algorithm, config)
                            .expect("search benchmark run should succeed");
                    black_box(result.best_move)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
