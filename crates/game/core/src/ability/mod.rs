//! Cooldown-gated robot abilities.
//!
//! The ability set is closed: [`AbilityKind`] names the four effects and
//! [`Ability`] pairs a kind with its own cooldown counter. Dispatch is a
//! plain `match` on the kind.
//!
//! # Cooldown model
//!
//! - `can_use()` is true only at cooldown 0
//! - `apply()` sets the cooldown to the kind's fixed value
//! - `reset_cooldown()` ticks it down once per owning robot's turn, floored at 0

use crate::combat::{Heal, Strike, apply_damage};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorStats, Boss};

/// Energy restored by Repair.
pub const REPAIR_AMOUNT: i32 = 20;
/// Flat damage dealt by Shock Attack.
pub const SHOCK_DAMAGE: i32 = 15;
/// Flat damage dealt by Plasma Attack to anything but the boss.
pub const PLASMA_DAMAGE: i32 = 25;
/// Armor granted by each Super Defense.
pub const SUPER_DEFENSE_ARMOR: i32 = 10;

/// The four ability effects.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityKind {
    /// Heals the user.
    Repair,
    /// Flat damage, ignores armor.
    ShockAttack,
    /// Flat damage that pierces armor; against the boss lands the user's full attack.
    PlasmaAttack,
    /// Permanent armor buff on the user.
    SuperDefense,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 4] = [
        AbilityKind::Repair,
        AbilityKind::ShockAttack,
        AbilityKind::PlasmaAttack,
        AbilityKind::SuperDefense,
    ];

    /// Cooldown set when the ability is used.
    pub const fn cooldown(self) -> u32 {
        match self {
            AbilityKind::Repair => 3,
            AbilityKind::ShockAttack => 2,
            AbilityKind::PlasmaAttack => 4,
            AbilityKind::SuperDefense => 3,
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            AbilityKind::Repair => "Repair",
            AbilityKind::ShockAttack => "Shock Attack",
            AbilityKind::PlasmaAttack => "Plasma Attack",
            AbilityKind::SuperDefense => "Super Defense",
        }
    }
}

/// Who an ability is aimed at.
#[derive(Debug)]
pub enum Target<'a> {
    Boss(&'a mut Boss),
    Actor(&'a mut ActorStats),
}

impl Target<'_> {
    fn stats_mut(&mut self) -> &mut ActorStats {
        match self {
            Target::Boss(boss) => &mut boss.stats,
            Target::Actor(actor) => actor,
        }
    }
}

/// What an ability did once it fired.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityEffect {
    /// The user recovered energy.
    Healed(Heal),
    /// Flat damage landed on the target.
    Damaged(Strike),
    /// The target was the boss and took the user's full attack.
    Pierced(Strike),
    /// The user's armor went up.
    ArmorRaised {
        name: String,
        amount: i32,
        armor: i32,
    },
}

/// Result of asking a robot to use an ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityOutcome {
    Used {
        user: String,
        ability: AbilityKind,
        effect: AbilityEffect,
    },
    OnCooldown {
        user: String,
        ability: AbilityKind,
        remaining: u32,
    },
}

/// Errors raised when selecting an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AbilityError {
    #[error("ability slot {slot} does not exist (robot has {available})")]
    UnknownSlot { slot: usize, available: usize },
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            AbilityError::UnknownSlot { .. } => "ABILITY_UNKNOWN_SLOT",
        }
    }
}

/// A single ability instance with its own cooldown counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    kind: AbilityKind,
    cooldown: u32,
}

impl Ability {
    pub fn new(kind: AbilityKind) -> Self {
        Self { kind, cooldown: 0 }
    }

    pub fn kind(&self) -> AbilityKind {
        self.kind
    }

    /// Turns left before the ability can be used again.
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn can_use(&self) -> bool {
        self.cooldown == 0
    }

    /// Fires the effect and starts the cooldown.
    ///
    /// Does not check [`Ability::can_use`]; callers do.
    pub fn apply(&mut self, user: &mut ActorStats, mut target: Target<'_>) -> AbilityEffect {
        let effect = match self.kind {
            AbilityKind::Repair => AbilityEffect::Healed(user.heal(REPAIR_AMOUNT)),
            AbilityKind::ShockAttack => {
                AbilityEffect::Damaged(flat_strike(user, target.stats_mut(), SHOCK_DAMAGE))
            }
            AbilityKind::PlasmaAttack => match target {
                Target::Boss(boss) => AbilityEffect::Pierced(boss.take_hit(user, true)),
                Target::Actor(actor) => {
                    AbilityEffect::Damaged(flat_strike(user, actor, PLASMA_DAMAGE))
                }
            },
            AbilityKind::SuperDefense => {
                user.armor = user.armor.saturating_add(SUPER_DEFENSE_ARMOR);
                AbilityEffect::ArmorRaised {
                    name: user.name.clone(),
                    amount: SUPER_DEFENSE_ARMOR,
                    armor: user.armor,
                }
            }
        };
        self.cooldown = self.kind.cooldown();

        tracing::debug!(ability = %self.kind, user = %user.name, cooldown = self.cooldown, "ability used");
        effect
    }

    /// Ticks the cooldown down by one, never below zero.
    pub fn reset_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}

fn flat_strike(user: &ActorStats, target: &mut ActorStats, damage: i32) -> Strike {
    target.energy = apply_damage(target.energy, damage);
    Strike {
        attacker: user.name.clone(),
        target: target.name.clone(),
        damage,
        target_energy: target.energy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> ActorStats {
        ActorStats::new("C3PO", 150, 45, 122)
    }

    fn boss() -> Boss {
        Boss::new("Megatron", 200, 15, 25)
    }

    #[test]
    fn usable_again_after_exactly_k_resolutions() {
        for kind in AbilityKind::ALL {
            let mut ability = Ability::new(kind);
            let mut user = user();
            let mut boss = boss();
            assert!(ability.can_use());

            ability.apply(&mut user, Target::Boss(&mut boss));

            for _ in 0..kind.cooldown() {
                assert!(!ability.can_use(), "{kind} usable too early");
                ability.reset_cooldown();
            }
            assert!(ability.can_use(), "{kind} still cooling down");
        }
    }

    #[test]
    fn cooldown_never_goes_negative() {
        let mut ability = Ability::new(AbilityKind::ShockAttack);
        for _ in 0..5 {
            ability.reset_cooldown();
        }
        assert_eq!(ability.cooldown(), 0);
        assert!(ability.can_use());
    }

    #[test]
    fn repair_heals_user_twenty() {
        let mut ability = Ability::new(AbilityKind::Repair);
        let mut user = ActorStats::new("R2D2", 100, 50, 18);
        let mut boss = boss();

        let effect = ability.apply(&mut user, Target::Boss(&mut boss));

        assert_eq!(user.energy, 120);
        assert_eq!(boss.stats.energy, 200);
        assert_eq!(ability.cooldown(), 3);
        assert!(matches!(effect, AbilityEffect::Healed(Heal { amount: 20, .. })));
    }

    #[test]
    fn shock_ignores_armor() {
        let mut ability = Ability::new(AbilityKind::ShockAttack);
        let mut user = user();
        let mut tank = ActorStats::new("Tank", 100, 500, 0);
        let mut boss = boss();

        ability.apply(&mut user, Target::Actor(&mut tank));
        assert_eq!(tank.energy, 85);

        ability.reset_cooldown();
        ability.reset_cooldown();
        ability.apply(&mut user, Target::Boss(&mut boss));
        assert_eq!(boss.stats.energy, 185);
    }

    #[test]
    fn plasma_against_boss_lands_full_attack() {
        let mut ability = Ability::new(AbilityKind::PlasmaAttack);
        let mut user = user();
        let mut boss = boss();

        let effect = ability.apply(&mut user, Target::Boss(&mut boss));

        assert_eq!(boss.stats.energy, 200 - 122);
        match effect {
            AbilityEffect::Pierced(strike) => assert_eq!(strike.damage, user.attack),
            other => panic!("unexpected effect: {other:?}"),
        }
        assert_eq!(ability.cooldown(), 4);
    }

    #[test]
    fn plasma_against_actor_is_flat_twenty_five() {
        for armor in [0, 45, 1_000] {
            let mut ability = Ability::new(AbilityKind::PlasmaAttack);
            let mut user = user();
            let mut target = ActorStats::new("Target", 100, armor, 0);

            ability.apply(&mut user, Target::Actor(&mut target));

            assert_eq!(target.energy, 75);
        }
    }

    #[test]
    fn super_defense_stacks_without_cap() {
        let mut ability = Ability::new(AbilityKind::SuperDefense);
        let mut user = user();
        let mut boss = boss();

        for n in 1..=6 {
            ability.apply(&mut user, Target::Boss(&mut boss));
            assert_eq!(user.armor, 45 + 10 * n);
        }
        assert_eq!(boss.stats.energy, 200);
    }

    #[test]
    fn labels_and_keys() {
        assert_eq!(AbilityKind::ShockAttack.label(), "Shock Attack");
        assert_eq!(AbilityKind::ShockAttack.to_string(), "shock_attack");
        assert_eq!(
            "plasma_attack".parse::<AbilityKind>(),
            Ok(AbilityKind::PlasmaAttack)
        );
    }
}
