//! The single opposing combatant.

use crate::combat::{Strike, apply_damage, boss_hit_damage};

use super::ActorStats;

/// The boss: an actor with a separate `defense` stat.
///
/// Displayed armor starts at `defense / 2`. The two numbers are independent
/// after construction: `armor` is what the boss shows and what the generic
/// actor formula reads, `defense` is what [`Boss::take_hit`] reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Boss {
    pub stats: ActorStats,
    defense: i32,
}

impl Boss {
    pub fn new(name: impl Into<String>, energy: i32, defense: i32, attack: i32) -> Self {
        Self {
            stats: ActorStats::new(name, energy, defense / 2, attack),
            defense,
        }
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn name(&self) -> &str {
        &self.stats.name
    }

    pub fn is_active(&self) -> bool {
        self.stats.is_active()
    }

    /// Defense-aware hit. With `ignore_armor` the attacker's full attack lands.
    pub fn take_hit(&mut self, attacker: &ActorStats, ignore_armor: bool) -> Strike {
        let damage = boss_hit_damage(attacker.attack, self.defense, ignore_armor);
        self.stats.energy = apply_damage(self.stats.energy, damage);

        tracing::debug!(
            attacker = %attacker.name,
            boss = %self.stats.name,
            damage,
            ignore_armor,
            "boss took hit"
        );

        Strike {
            attacker: attacker.name.clone(),
            target: self.stats.name.clone(),
            damage,
            target_energy: self.stats.energy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_is_half_of_defense() {
        let boss = Boss::new("Megatron", 200, 15, 25);
        assert_eq!(boss.defense(), 15);
        assert_eq!(boss.stats.armor, 7);
    }

    #[test]
    fn take_hit_reduces_by_defense() {
        let mut boss = Boss::new("Megatron", 200, 15, 25);
        let robot = ActorStats::new("R2D2", 130, 50, 18);

        let strike = boss.take_hit(&robot, false);

        assert_eq!(strike.damage, 3);
        assert_eq!(boss.stats.energy, 197);
    }

    #[test]
    fn piercing_hit_deals_full_attack() {
        let mut boss = Boss::new("Megatron", 200, 15, 25);
        let robot = ActorStats::new("C3PO", 150, 45, 122);

        let strike = boss.take_hit(&robot, true);

        assert_eq!(strike.damage, 122);
        assert_eq!(boss.stats.energy, 78);
    }

    #[test]
    fn defense_and_armor_are_independent() {
        let mut boss = Boss::new("Megatron", 200, 15, 25);
        boss.stats.armor += 10;
        let robot = ActorStats::new("R2D2", 130, 50, 18);

        assert_eq!(boss.take_hit(&robot, false).damage, 3);
        assert_eq!(boss.defense(), 15);
    }
}
