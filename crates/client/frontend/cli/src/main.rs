//! Robot arena console entry point.
use std::io;

use anyhow::Result;
use arena_cli::{ArenaApp, CliConfig, ConsoleProvider, TextPresenter, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(&config.logging)?;

    let mut app = ArenaApp::from_config(&config)?;

    let stdin = io::stdin();
    let mut provider = ConsoleProvider::new(stdin.lock(), io::stdout());
    let mut presenter = TextPresenter::new(io::stdout());

    let outcome = app.run(&mut provider, &mut presenter)?;

    tracing::info!(%outcome, "robot-arena exiting");
    Ok(())
}
