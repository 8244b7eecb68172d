//! mnk - terminal tic-tac-toe on any board size.

use anyhow::{Context, Result};
use clap::Parser;
use mnk_game::{
    Cli, Command, EventFormat, GameConfig, GameController, parse_position, render_board,
    render_status, run_session, write_events,
};
use std::io::{self, Write};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = cli.game_config()?;
    match &cli.command {
        Command::Play => run_play(&config),
        Command::Script { moves, json } => run_script(&config, moves, *json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &GameConfig) -> Result<()> {
    info!("Starting interactive game");
    let (mut controller, opening) = GameController::start(config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_session(&mut controller, &opening, stdin.lock(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Apply a list of moves non-interactively
#[instrument(skip(config, moves), fields(moves = moves.len()))]
fn run_script(config: &GameConfig, moves: &[String], json: bool) -> Result<()> {
    let format = if json {
        EventFormat::Json
    } else {
        EventFormat::Text
    };

    let positions = moves
        .iter()
        .map(|m| parse_position(m).with_context(|| format!("Invalid move `{m}`")))
        .collect::<Result<Vec<_>>>()?;

    let (mut controller, opening) = GameController::start(config)?;
    let mut stdout = io::stdout().lock();
    write_events(&mut stdout, &opening, format)?;

    for position in positions {
        let events = controller.handle_cell_activation(position);
        write_events(&mut stdout, &events, format)?;
    }

    if format == EventFormat::Text {
        writeln!(stdout)?;
        writeln!(stdout, "{}", render_board(controller.board()))?;
        writeln!(stdout, "{}", render_status(controller.board()))?;
    }
    info!(state = %controller.board().state(), "Script finished");
    Ok(())
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,mnk_game=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Tracing initialized");
}
