use crate::ability::{AbilityOutcome, Target};
use crate::config::BossReduction;
use crate::event::{CombatEvent, EventSink};

use super::{BattleEngine, EngineError, TurnChoice, emit};

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    /// The boss ran out of energy.
    Victory,
    /// Every robot ran out of energy while the boss still stands.
    Defeat,
}

/// Where the engine is inside a round. Indices are roster positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    RoundStart,
    ActorTurn(usize),
    ActionPrompt(usize),
    AttackResolved(usize),
    AbilityResolved(usize),
    CounterAttack(usize),
    CooldownTick(usize),
    NextActor,
    RoundEnd,
    Finished(BattleOutcome),
}

/// Turn resolution methods for BattleEngine.
impl BattleEngine<'_> {
    /// Resolves one robot's turn with an already-chosen action.
    ///
    /// Order: action, boss counter-attack (if the boss still stands), regen,
    /// cooldown tick.
    pub fn step_turn<S>(
        &mut self,
        index: usize,
        choice: TurnChoice,
        sink: &mut S,
    ) -> Result<(), EngineError>
    where
        S: EventSink + ?Sized,
    {
        if self.roster.outcome().is_some() {
            return Err(EngineError::BattleOver);
        }

        let (robots, boss) = self.roster.split_mut();
        let len = robots.len();
        let robot = robots
            .get_mut(index)
            .ok_or(EngineError::RobotNotFound { index, len })?;
        if !robot.is_active() {
            return Err(EngineError::RobotInactive {
                name: robot.name().to_owned(),
            });
        }

        match choice {
            TurnChoice::Attack => {
                self.phase = TurnPhase::AttackResolved(index);
                let strike = match self.config.boss_reduction {
                    BossReduction::Defense => boss.take_hit(&robot.stats, false),
                    BossReduction::Armor => robot.stats.attack(&mut boss.stats),
                };
                emit(sink, CombatEvent::Attacked(strike))?;
            }
            TurnChoice::Ability(slot) => {
                let outcome = robot.use_ability(slot, Target::Boss(&mut *boss))?;
                self.phase = TurnPhase::AbilityResolved(index);
                let event = match outcome {
                    AbilityOutcome::Used {
                        user,
                        ability,
                        effect,
                    } => CombatEvent::AbilityUsed {
                        user,
                        ability,
                        effect,
                    },
                    AbilityOutcome::OnCooldown {
                        user,
                        ability,
                        remaining,
                    } => CombatEvent::AbilityOnCooldown {
                        user,
                        ability,
                        remaining,
                    },
                };
                emit(sink, event)?;
            }
        }

        if boss.is_active() {
            self.phase = TurnPhase::CounterAttack(index);
            let strike = boss.stats.attack(&mut robot.stats);
            emit(sink, CombatEvent::CounterAttacked(strike))?;
        }

        let heal = robot.stats.heal(self.config.regen_per_turn);
        emit(sink, CombatEvent::Regenerated(heal))?;

        self.phase = TurnPhase::CooldownTick(index);
        robot.tick_cooldowns();

        tracing::debug!(
            robot = %robot.name(),
            energy = robot.stats.energy,
            boss_energy = boss.stats.energy,
            "turn resolved"
        );
        self.phase = TurnPhase::NextActor;
        Ok(())
    }
}
