//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- greedy alphabeta --depth 2 --games 20 --verbose`

use anyhow::{anyhow, Context, Result};

use mailbox_chess::engines::engine_search::SearchEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::engines::player_kind::PlayerKind;
use mailbox_chess::search::best_move_search::{SearchAlgorithm, SearchConfig};
use mailbox_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut player1 = PlayerKind::Greedy;
    let mut player2 = PlayerKind::Search(SearchAlgorithm::NegamaxAlphaBeta);
    let mut search = SearchConfig::default();
    let mut series = MatchSeriesConfig {
        games: 10,
        base_seed: 1234,
        per_game: MatchConfig {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
        },
        verbose: false,
    };

    let mut players_seen = 0;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => series.verbose = true,
            "--depth" => {
                let value = args.next().ok_or_else(|| anyhow!("--depth needs a number"))?;
                search.depth = value.parse().context("invalid --depth")?;
            }
            "--games" => {
                let value = args.next().ok_or_else(|| anyhow!("--games needs a number"))?;
                series.games = value.parse().context("invalid --games")?;
            }
            "--seed" => {
                let value = args.next().ok_or_else(|| anyhow!("--seed needs a number"))?;
                series.base_seed = value.parse().context("invalid --seed")?;
            }
            kind => {
                let kind: PlayerKind = kind.parse()?;
                if kind.is_human() {
                    return Err(anyhow!("a match series needs two engines"));
                }
                match players_seen {
                    0 => player1 = kind,
                    1 => player2 = kind,
                    _ => return Err(anyhow!("at most two players may be given")),
                }
                players_seen += 1;
            }
        }
    }

    println!("player1={player1} player2={player2} depth={}", search.depth);

    // Humans were rejected above, so the fallback is never built.
    let factory = |kind: PlayerKind| -> Box<dyn Engine> {
        kind.build_engine(search)
            .unwrap_or_else(|| Box::new(SearchEngine::new(SearchAlgorithm::default(), search)))
    };
    let stats = play_engine_match_series(|| factory(player1), || factory(player2), series)?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
