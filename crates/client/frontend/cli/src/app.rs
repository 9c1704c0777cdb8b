//! Glue code tying content, the battle engine, and the console together.
use anyhow::{Context, Result};

use arena_content::{ConfigLoader, RosterLoader};
use arena_core::{
    ActionProvider, BattleEngine, BattleOutcome, EngineError, EventSink, GameConfig, GameError,
    Roster,
};

use crate::config::CliConfig;

/// A ready-to-play battle: roster plus rules.
pub struct ArenaApp {
    roster: Roster,
    game_config: GameConfig,
}

impl ArenaApp {
    pub fn new(roster: Roster, game_config: GameConfig) -> Self {
        Self {
            roster,
            game_config,
        }
    }

    /// Loads the roster and rules named by `config`, falling back to the
    /// built-in roster and default rules.
    pub fn from_config(config: &CliConfig) -> Result<Self> {
        let roster = match &config.roster_path {
            Some(path) => RosterLoader::load(path)
                .with_context(|| format!("loading roster from {}", path.display()))?,
            None => RosterLoader::builtin().context("loading built-in roster")?,
        };

        let game_config = match &config.game_config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("loading game config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        tracing::info!(
            robots = roster.len(),
            boss = %roster.boss().name(),
            boss_reduction = %game_config.boss_reduction,
            "arena ready"
        );
        Ok(Self::new(roster, game_config))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.game_config
    }

    /// Plays the battle to the end.
    pub fn run<P, S>(&mut self, provider: &mut P, sink: &mut S) -> Result<BattleOutcome>
    where
        P: ActionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        let mut engine = BattleEngine::new(&mut self.roster, &self.game_config);
        engine.run(provider, sink).map_err(|err| {
            report_engine_error(&err);
            anyhow::Error::new(err).context("battle aborted")
        })
    }
}

fn report_engine_error(err: &EngineError) {
    let severity = err.severity();
    if severity.is_bug() {
        tracing::error!(code = err.error_code(), %severity, %err, "battle engine bug");
    } else {
        tracing::warn!(code = err.error_code(), %severity, %err, "battle aborted");
    }
}
