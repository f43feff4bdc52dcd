//! Interactive terminal game.
//!
//! Run with:
//! `cargo run --release -- --white human --black alphabeta --depth 3`
//!
//! Enter moves as `e2e4`, `u` to take back a move, `q` to quit. Pass
//! `--verbose` (or set `RUST_LOG`) to see search diagnostics.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use log::debug;

use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::engines::player_kind::PlayerKind;
use mailbox_chess::game_state::chess_types::Color;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::search::best_move_search::{SearchAlgorithm, SearchConfig};
use mailbox_chess::utils::algebraic::parse_move_notation;
use mailbox_chess::utils::render_game_state::render_game_state;

struct CliOptions {
    white: PlayerKind,
    black: PlayerKind,
    search: SearchConfig,
    verbose: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            white: PlayerKind::Human,
            black: PlayerKind::Search(SearchAlgorithm::default()),
            search: SearchConfig::default(),
            verbose: false,
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliOptions> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--white" | "--black" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("{arg} needs a player kind"))?;
                let kind: PlayerKind = value.parse()?;
                if arg == "--white" {
                    options.white = kind;
                } else {
                    options.black = kind;
                }
            }
            "--depth" => {
                let value = args.next().ok_or_else(|| anyhow!("--depth needs a number"))?;
                options.search.depth = value
                    .parse()
                    .with_context(|| format!("invalid search depth {value:?}"))?;
            }
            "--verbose" | "-v" => options.verbose = true,
            other => bail!(
                "unknown argument {other:?} (expected --white/--black <human|random|greedy|minimax|negamax|alphabeta>, --depth N, --verbose)"
            ),
        }
    }

    Ok(options)
}

enum HumanCommand {
    Quit,
    Undo,
    Move(String),
}

fn read_command(input: &mut impl BufRead, side: Color) -> Result<HumanCommand> {
    print!("{side} to move> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(HumanCommand::Quit);
    }

    Ok(match line.trim() {
        "q" | "quit" => HumanCommand::Quit,
        "u" | "undo" => HumanCommand::Undo,
        text => HumanCommand::Move(text.to_owned()),
    })
}

fn main() -> Result<()> {
    let options = parse_args(std::env::args().skip(1))?;

    let default_level = if options.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut players: [Option<Box<dyn Engine>>; 2] = [
        options.white.build_engine(options.search),
        options.black.build_engine(options.search),
    ];
    println!(
        "white: {} / black: {} / depth {}",
        options.white, options.black, options.search.depth
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = GameState::new_game();

    loop {
        println!("\n{}", render_game_state(&game));

        let legal_moves = game.generate_legal_moves();
        let side = game.side_to_move();
        if game.is_checkmate() {
            println!("Checkmate, {} wins.", side.opposite());
            break;
        }
        if game.is_stalemate() {
            println!("Stalemate.");
            break;
        }
        if game.is_in_check() {
            println!("{side} is in check.");
        }

        if let Some(engine) = players[side.index()].as_mut() {
            let out = engine.choose_move(&mut game, &legal_moves)?;
            for line in &out.info_lines {
                debug!("{line}");
            }
            let mv = out
                .best_move
                .ok_or_else(|| anyhow!("{} returned no move", engine.name()))?;
            println!("{} plays {mv}", engine.name());
            game.apply_move(mv);
            continue;
        }

        match read_command(&mut input, side)? {
            HumanCommand::Quit => break,
            HumanCommand::Undo => {
                // Against an engine, take back its reply as well.
                let plies = if options.white.is_human() && options.black.is_human() {
                    1
                } else {
                    2
                };
                for _ in 0..plies {
                    if game.undo_move().is_none() {
                        break;
                    }
                }
            }
            HumanCommand::Move(text) => {
                let played = parse_move_notation(&text).and_then(|(from, to)| game.play_move(from, to));
                if let Err(err) = played {
                    println!("{err}");
                }
            }
        }
    }

    println!("Moves: {}", move_list(&game));
    Ok(())
}

fn move_list(game: &GameState) -> String {
    game.move_log()
        .iter()
        .map(|mv| mv.chess_notation())
        .collect::<Vec<_>>()
        .join(" ")
}
