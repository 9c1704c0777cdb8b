//! Shared attribute holder for every combatant.

use crate::combat::{Heal, Strike, apply_damage, calculate_damage};

/// Name and combat attributes of a single combatant.
///
/// Energy may go negative; any value at or below zero means the actor is
/// defeated. Actors are never removed from a battle, only skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorStats {
    pub name: String,
    pub energy: i32,
    pub armor: i32,
    pub attack: i32,
}

impl ActorStats {
    pub fn new(name: impl Into<String>, energy: i32, armor: i32, attack: i32) -> Self {
        Self {
            name: name.into(),
            energy,
            armor,
            attack,
        }
    }

    /// Returns true while the actor still has energy left.
    pub fn is_active(&self) -> bool {
        self.energy > 0
    }

    /// Plain attack: `max(0, self.attack - target.armor)` off the target's energy.
    pub fn attack(&self, target: &mut ActorStats) -> Strike {
        let damage = calculate_damage(self.attack, target.armor);
        target.energy = apply_damage(target.energy, damage);

        tracing::debug!(
            attacker = %self.name,
            target = %target.name,
            damage,
            "plain attack resolved"
        );

        Strike {
            attacker: self.name.clone(),
            target: target.name.clone(),
            damage,
            target_energy: target.energy,
        }
    }

    /// Adds `amount` to own energy. There is no upper bound.
    pub fn heal(&mut self, amount: i32) -> Heal {
        self.energy = self.energy.saturating_add(amount);

        Heal {
            name: self.name.clone(),
            amount,
            energy: self.energy,
        }
    }

    /// Snapshot of the current stats for presentation.
    pub fn describe(&self) -> ActorStats {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_subtracts_reduced_damage() {
        let attacker = ActorStats::new("R2D2", 130, 50, 18);
        let mut target = ActorStats::new("Dummy", 100, 10, 0);

        let strike = attacker.attack(&mut target);

        assert_eq!(strike.damage, 8);
        assert_eq!(strike.target_energy, 92);
        assert_eq!(target.energy, 92);
        assert_eq!(strike.attacker, "R2D2");
        assert_eq!(strike.target, "Dummy");
    }

    #[test]
    fn armor_above_attack_deals_nothing() {
        let boss = ActorStats::new("Megatron", 200, 7, 25);
        let mut robot = ActorStats::new("R2D2", 130, 50, 18);

        let strike = boss.attack(&mut robot);

        assert_eq!(strike.damage, 0);
        assert_eq!(robot.energy, 130);
    }

    #[test]
    fn attacks_never_raise_energy() {
        for (attack, armor) in [(0, 0), (5, 100), (100, 5), (-10, 3), (3, -10)] {
            let attacker = ActorStats::new("A", 1, 0, attack);
            let mut target = ActorStats::new("T", 50, armor, 0);
            let strike = attacker.attack(&mut target);
            assert!(target.energy <= 50);
            assert_eq!(strike.damage, (attack - armor).max(0));
        }
    }

    #[test]
    fn energy_goes_negative_and_marks_defeat() {
        let attacker = ActorStats::new("Big", 1, 0, 40);
        let mut target = ActorStats::new("Small", 10, 0, 0);

        attacker.attack(&mut target);

        assert_eq!(target.energy, -30);
        assert!(!target.is_active());
    }

    #[test]
    fn heal_adds_energy() {
        let mut robot = ActorStats::new("C3PO", 150, 45, 122);
        let heal = robot.heal(5);
        assert_eq!(heal.amount, 5);
        assert_eq!(heal.energy, 155);
        assert_eq!(robot.energy, 155);
    }

    #[test]
    fn zero_energy_is_inactive() {
        let robot = ActorStats::new("Zero", 0, 0, 0);
        assert!(!robot.is_active());
        assert_eq!(robot.describe(), robot);
    }
}
