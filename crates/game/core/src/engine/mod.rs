//! Round loop and turn resolution.
//!
//! The [`BattleEngine`] is the authoritative driver for a [`Roster`]. It
//! asks an [`ActionProvider`] for each robot's choice, resolves the choice,
//! the boss counter-attack, regen and cooldowns, and reports every step to an
//! [`EventSink`]. All roster mutations during a battle flow through it.

mod errors;
mod provider;
mod turns;

pub use errors::EngineError;
pub use provider::{ActionProvider, ProviderError, ScriptedProvider, TurnChoice};
pub use turns::{BattleOutcome, TurnPhase};

use crate::config::GameConfig;
use crate::event::{CombatEvent, EventSink};
use crate::state::Roster;

/// Battle engine that runs rounds until the boss or every robot falls.
pub struct BattleEngine<'a> {
    roster: &'a mut Roster,
    config: &'a GameConfig,
    phase: TurnPhase,
    round: u32,
}

impl<'a> BattleEngine<'a> {
    /// Creates a new engine over the given roster.
    pub fn new(roster: &'a mut Roster, config: &'a GameConfig) -> Self {
        Self {
            roster,
            config,
            phase: TurnPhase::RoundStart,
            round: 0,
        }
    }

    pub fn roster(&self) -> &Roster {
        self.roster
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Rounds started so far (1-based once the first round begins).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Runs the battle to completion.
    ///
    /// Between rounds the provider is asked to confirm before the next one
    /// starts. Returns [`EngineError::RoundLimit`] if `max_rounds` is hit
    /// first.
    pub fn run<P, S>(&mut self, provider: &mut P, sink: &mut S) -> Result<BattleOutcome, EngineError>
    where
        P: ActionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        let robots = self
            .roster
            .robots()
            .iter()
            .map(|robot| robot.stats.describe())
            .collect();
        emit(
            sink,
            CombatEvent::BattleStarted {
                robots,
                boss: self.roster.boss().stats.describe(),
            },
        )?;
        tracing::info!(
            robots = self.roster.len(),
            boss = %self.roster.boss().name(),
            "battle started"
        );

        loop {
            if let Some(outcome) = self.roster.outcome() {
                return self.finish(outcome, sink);
            }
            if let Some(limit) = self.config.max_rounds {
                if self.round >= limit {
                    tracing::warn!(limit, "round limit reached");
                    return Err(EngineError::RoundLimit { limit });
                }
            }
            if self.round > 0 {
                provider.confirm_next_round(self.round + 1)?;
            }
            self.play_round(provider, sink)?;
        }
    }

    /// Plays one round: every active robot acts once, in roster order.
    ///
    /// Stops early if the boss falls mid-round.
    pub fn play_round<P, S>(&mut self, provider: &mut P, sink: &mut S) -> Result<(), EngineError>
    where
        P: ActionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.roster.outcome().is_some() {
            return Err(EngineError::BattleOver);
        }

        self.round += 1;
        self.phase = TurnPhase::RoundStart;
        emit(sink, CombatEvent::RoundStarted { round: self.round })?;

        for index in 0..self.roster.len() {
            if !self.roster.boss().is_active() {
                break;
            }
            let Some(robot) = self.roster.robot(index) else {
                break;
            };
            if !robot.is_active() {
                tracing::debug!(robot = %robot.name(), "skipping defeated robot");
                continue;
            }

            self.phase = TurnPhase::ActorTurn(index);
            emit(
                sink,
                CombatEvent::TurnStarted {
                    index,
                    robot: robot.stats.describe(),
                },
            )?;

            self.phase = TurnPhase::ActionPrompt(index);
            let choice = provider.choose_action(robot)?;
            self.step_turn(index, choice, sink)?;
        }

        self.phase = TurnPhase::RoundEnd;
        emit(
            sink,
            CombatEvent::RoundEnded {
                round: self.round,
                boss: self.roster.boss().stats.describe(),
            },
        )
    }

    fn finish<S>(&mut self, outcome: BattleOutcome, sink: &mut S) -> Result<BattleOutcome, EngineError>
    where
        S: EventSink + ?Sized,
    {
        self.phase = TurnPhase::Finished(outcome);
        let boss = self.roster.boss().name().to_owned();

        if outcome == BattleOutcome::Victory {
            emit(sink, CombatEvent::BossDefeated { boss: boss.clone() })?;
        }
        emit(
            sink,
            CombatEvent::BattleEnded {
                outcome,
                rounds: self.round,
                boss,
            },
        )?;

        tracing::info!(%outcome, rounds = self.round, "battle finished");
        Ok(outcome)
    }
}

fn emit<S>(sink: &mut S, event: CombatEvent) -> Result<(), EngineError>
where
    S: EventSink + ?Sized,
{
    sink.emit(&event).map_err(EngineError::Sink)
}
