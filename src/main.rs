use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mirror_chess::console::game_loop::{GameConfig, GameLoop};
use mirror_chess::engines::engine_greedy::GreedyEngine;
use mirror_chess::engines::engine_random::RandomEngine;
use mirror_chess::engines::engine_trait::Engine;
use mirror_chess::errors::ChessResult;
use mirror_chess::game_state::chess_types::Color;
use mirror_chess::game_state::position::Position;
use mirror_chess::utils::game_record::{record_headers, write_game_record_with_headers};
use mirror_chess::utils::render_position::RenderStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    Light,
    Dark,
    /// Engine plays both sides.
    Neither,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Greedy,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Plain,
    Unicode,
}

#[derive(Parser, Debug)]
#[command(name = "mirror-chess", about = "Play chess against a one-ply evaluator")]
struct Cli {
    /// Side played from the keyboard
    #[arg(long, value_enum, default_value_t = HumanSide::Light)]
    human: HumanSide,

    /// Move-selection policy for the other side
    #[arg(long, value_enum, default_value_t = EngineKind::Greedy)]
    engine: EngineKind,

    /// Start from this FEN instead of the standard position
    #[arg(long)]
    fen: Option<String>,

    /// Stop after this many plies
    #[arg(long)]
    max_plies: Option<u16>,

    /// Board rendering
    #[arg(long, value_enum, default_value_t = StyleArg::Unicode)]
    style: StyleArg,

    /// Write a game record to this path when the game ends
    #[arg(long)]
    record: Option<String>,

    /// Seed for engine tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. `info` or `mirror_chess=debug` (defaults to RUST_LOG, then `warn`)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "game aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_engine(kind: EngineKind, seed: Option<u64>) -> Box<dyn Engine> {
    match (kind, seed) {
        (EngineKind::Greedy, Some(seed)) => Box::new(GreedyEngine::seeded(seed)),
        (EngineKind::Greedy, None) => Box::new(GreedyEngine::new()),
        (EngineKind::Random, Some(seed)) => Box::new(RandomEngine::seeded(seed)),
        (EngineKind::Random, None) => Box::new(RandomEngine::new()),
    }
}

fn run(cli: &Cli) -> ChessResult<()> {
    let initial = match &cli.fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::new_game(),
    };

    let human = match cli.human {
        HumanSide::Light => Some(Color::Light),
        HumanSide::Dark => Some(Color::Dark),
        HumanSide::Neither => None,
    };
    let config = GameConfig {
        human,
        max_plies: cli.max_plies,
        style: match cli.style {
            StyleArg::Plain => RenderStyle::Plain,
            StyleArg::Unicode => RenderStyle::Unicode,
        },
    };

    let mut game = GameLoop::new(initial, build_engine(cli.engine, cli.seed), config);
    info!(engine = game.engine_name(), ?human, fen = %game.initial().get_fen(), "starting game");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let end = game.run(&mut stdin.lock(), &mut stdout)?;
    stdout.flush()?;

    if let Some(path) = &cli.record {
        let engine_name = game.engine_name().to_owned();
        let (white, black) = match human {
            Some(Color::Light) => ("Human", engine_name.as_str()),
            Some(Color::Dark) => (engine_name.as_str(), "Human"),
            None => (engine_name.as_str(), engine_name.as_str()),
        };
        let headers = record_headers(
            game.initial(),
            white,
            black,
            end.result_token(),
            chrono::Local::now().date_naive(),
        );
        let record = write_game_record_with_headers(game.initial(), game.moves_played(), &headers)?;
        fs::write(path, record)?;
        info!(path = %path, "game record written");
    }

    Ok(())
}
