//! Structured battle events emitted by the engine and consumed by frontends.

use crate::ability::{AbilityEffect, AbilityKind};
use crate::combat::{Heal, Strike};
use crate::engine::BattleOutcome;
use crate::state::ActorStats;

/// Everything the engine reports, in the order it happens.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    BattleStarted {
        robots: Vec<ActorStats>,
        boss: ActorStats,
    },
    RoundStarted {
        round: u32,
    },
    /// A robot is up; carries its stats before acting.
    TurnStarted {
        index: usize,
        robot: ActorStats,
    },
    /// A robot's plain attack on the boss.
    Attacked(Strike),
    AbilityUsed {
        user: String,
        ability: AbilityKind,
        effect: AbilityEffect,
    },
    AbilityOnCooldown {
        user: String,
        ability: AbilityKind,
        remaining: u32,
    },
    CounterAttacked(Strike),
    Regenerated(Heal),
    /// End of round; carries the boss status block.
    RoundEnded {
        round: u32,
        boss: ActorStats,
    },
    BossDefeated {
        boss: String,
    },
    BattleEnded {
        outcome: BattleOutcome,
        rounds: u32,
        boss: String,
    },
}

/// Receiver of engine events.
///
/// Presentation implements this to render text; tests collect into a `Vec`.
pub trait EventSink {
    fn emit(&mut self, event: &CombatEvent) -> std::io::Result<()>;
}

impl EventSink for Vec<CombatEvent> {
    fn emit(&mut self, event: &CombatEvent) -> std::io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &CombatEvent) -> std::io::Result<()> {
        (**self).emit(event)
    }
}
