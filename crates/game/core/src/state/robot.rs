//! Player-side combatants.

use arrayvec::ArrayVec;

use crate::ability::{Ability, AbilityError, AbilityKind, AbilityOutcome, Target};
use crate::config::GameConfig;

use super::ActorStats;

/// Robot archetype. The class fixes which two abilities a robot carries.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RobotClass {
    /// Support frame: Repair and Shock Attack.
    Regular,
    /// Assault frame: Plasma Attack and Super Defense.
    Special,
}

impl RobotClass {
    /// Abilities granted to this class, in menu order.
    pub const fn ability_kinds(self) -> [AbilityKind; GameConfig::MAX_ABILITIES] {
        match self {
            RobotClass::Regular => [AbilityKind::Repair, AbilityKind::ShockAttack],
            RobotClass::Special => [AbilityKind::PlasmaAttack, AbilityKind::SuperDefense],
        }
    }
}

/// A robot on the player side: stats plus its class abilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Robot {
    pub stats: ActorStats,
    class: RobotClass,
    abilities: ArrayVec<Ability, { GameConfig::MAX_ABILITIES }>,
}

impl Robot {
    pub fn new(
        class: RobotClass,
        name: impl Into<String>,
        energy: i32,
        armor: i32,
        attack: i32,
    ) -> Self {
        Self {
            stats: ActorStats::new(name, energy, armor, attack),
            class,
            abilities: class.ability_kinds().into_iter().map(Ability::new).collect(),
        }
    }

    pub fn regular(name: impl Into<String>, energy: i32, armor: i32, attack: i32) -> Self {
        Self::new(RobotClass::Regular, name, energy, armor, attack)
    }

    pub fn special(name: impl Into<String>, energy: i32, armor: i32, attack: i32) -> Self {
        Self::new(RobotClass::Special, name, energy, armor, attack)
    }

    pub fn name(&self) -> &str {
        &self.stats.name
    }

    pub fn class(&self) -> RobotClass {
        self.class
    }

    pub fn is_active(&self) -> bool {
        self.stats.is_active()
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn ability(&self, slot: usize) -> Option<&Ability> {
        self.abilities.get(slot)
    }

    /// Uses the ability in `slot` on `target` if it is off cooldown.
    ///
    /// A cooling-down ability is reported, not an error: the turn goes on.
    pub fn use_ability(
        &mut self,
        slot: usize,
        target: Target<'_>,
    ) -> Result<AbilityOutcome, AbilityError> {
        let available = self.abilities.len();
        let ability = self
            .abilities
            .get_mut(slot)
            .ok_or(AbilityError::UnknownSlot { slot, available })?;

        if !ability.can_use() {
            tracing::debug!(
                robot = %self.stats.name,
                ability = %ability.kind(),
                remaining = ability.cooldown(),
                "ability still cooling down"
            );
            return Ok(AbilityOutcome::OnCooldown {
                user: self.stats.name.clone(),
                ability: ability.kind(),
                remaining: ability.cooldown(),
            });
        }

        let effect = ability.apply(&mut self.stats, target);
        Ok(AbilityOutcome::Used {
            user: self.stats.name.clone(),
            ability: ability.kind(),
            effect,
        })
    }

    /// Ticks every ability cooldown down by one.
    pub fn tick_cooldowns(&mut self) {
        for ability in &mut self.abilities {
            ability.reset_cooldown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityEffect;
    use crate::state::Boss;

    #[test]
    fn classes_carry_fixed_abilities() {
        let regular = Robot::regular("R2D2", 130, 50, 18);
        let special = Robot::special("C3PO", 150, 45, 122);

        let kinds = |robot: &Robot| robot.abilities().iter().map(Ability::kind).collect::<Vec<_>>();

        assert_eq!(
            kinds(&regular),
            vec![AbilityKind::Repair, AbilityKind::ShockAttack]
        );
        assert_eq!(
            kinds(&special),
            vec![AbilityKind::PlasmaAttack, AbilityKind::SuperDefense]
        );
    }

    #[test]
    fn class_parses_from_text() {
        assert_eq!("Regular".parse::<RobotClass>(), Ok(RobotClass::Regular));
        assert_eq!("special".parse::<RobotClass>(), Ok(RobotClass::Special));
        assert_eq!(RobotClass::Special.to_string(), "special");
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let mut robot = Robot::regular("R2D2", 130, 50, 18);
        let mut boss = Boss::new("Megatron", 200, 15, 25);

        let err = robot.use_ability(2, Target::Boss(&mut boss)).unwrap_err();

        assert_eq!(
            err,
            AbilityError::UnknownSlot {
                slot: 2,
                available: 2
            }
        );
    }

    #[test]
    fn cooling_down_ability_reports_and_does_nothing() {
        let mut robot = Robot::regular("R2D2", 100, 50, 18);
        let mut boss = Boss::new("Megatron", 200, 15, 25);

        robot.use_ability(0, Target::Boss(&mut boss)).unwrap();
        let outcome = robot.use_ability(0, Target::Boss(&mut boss)).unwrap();

        assert_eq!(
            outcome,
            AbilityOutcome::OnCooldown {
                user: "R2D2".into(),
                ability: AbilityKind::Repair,
                remaining: 3,
            }
        );
        assert_eq!(robot.stats.energy, 120);
    }

    #[test]
    fn repair_scenario_cools_down_for_three_resolutions() {
        let mut robot = Robot::regular("R2D2", 100, 50, 18);
        let mut boss = Boss::new("Megatron", 200, 15, 25);

        let outcome = robot.use_ability(0, Target::Boss(&mut boss)).unwrap();

        assert!(matches!(
            outcome,
            AbilityOutcome::Used {
                effect: AbilityEffect::Healed(_),
                ..
            }
        ));
        assert_eq!(robot.stats.energy, 120);
        assert_eq!(robot.ability(0).unwrap().cooldown(), 3);
        assert!(!robot.ability(0).unwrap().can_use());

        robot.tick_cooldowns();
        robot.tick_cooldowns();
        assert!(!robot.ability(0).unwrap().can_use());
        robot.tick_cooldowns();
        assert!(robot.ability(0).unwrap().can_use());
    }

    #[test]
    fn cooldowns_are_independent_per_ability() {
        let mut robot = Robot::regular("R2D2", 100, 50, 18);
        let mut boss = Boss::new("Megatron", 200, 15, 25);

        robot.use_ability(1, Target::Boss(&mut boss)).unwrap();

        assert!(robot.ability(0).unwrap().can_use());
        assert_eq!(robot.ability(1).unwrap().cooldown(), 2);
    }
}
