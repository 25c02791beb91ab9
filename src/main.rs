//! Terminal Connections (default binary).
//!
//! Reads configuration from the environment (see `GameConfig::from_env`),
//! deals a board, and plays over stdin/stdout. Logs go to stderr and are
//! controlled by `RUST_LOG`.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::info;

use connections::{
    BoardRenderer, GameConfig, GameEngine, GameResult, InputAdapter, SessionOutcome, StdinPrompt,
};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = GameConfig::from_env().context("invalid configuration")?;
    let mut engine = GameEngine::from_config(&config).context("failed to set up the board")?;
    info!("playing seed {}", engine.state().seed());

    let mut stdout = io::stdout();
    writeln!(stdout, "Hello! Welcome to Connections.")?;
    writeln!(
        stdout,
        "Find the {} hidden groups of four. Type a word to select or deselect it.",
        engine.remaining_categories().len()
    )?;

    let renderer = BoardRenderer::new(config.color);
    let mut adapter = InputAdapter::new(StdinPrompt::stdio(), stdout, renderer);
    let outcome = adapter.run(&mut engine).context("game loop failed")?;

    Ok(match outcome {
        SessionOutcome::Finished(GameResult::Won) | SessionOutcome::Abandoned => ExitCode::SUCCESS,
        SessionOutcome::Finished(GameResult::Lost) => ExitCode::from(1),
    })
}
