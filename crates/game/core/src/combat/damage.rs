//! Damage calculation and application.

/// Calculate damage from an attack against a flat reduction.
///
/// # Formula
///
/// ```text
/// final_damage = max(0, attack - reduction)
/// ```
///
/// `reduction` is the target's armor, or the boss's defense on the
/// `take_hit` path. The result is never negative, so an attack can never
/// raise the target's energy.
pub fn calculate_damage(attack: i32, reduction: i32) -> i32 {
    attack.saturating_sub(reduction).max(0)
}

/// Damage the boss takes from an attacker.
///
/// Piercing hits (`ignore_armor`) deal the attacker's full attack value.
pub fn boss_hit_damage(attack: i32, defense: i32, ignore_armor: bool) -> i32 {
    if ignore_armor {
        attack
    } else {
        calculate_damage(attack, defense)
    }
}

/// Apply damage to current energy.
///
/// Energy is allowed to go negative: anything at or below zero is defeated.
pub fn apply_damage(current_energy: i32, damage: i32) -> i32 {
    current_energy.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_is_subtracted() {
        assert_eq!(calculate_damage(18, 15), 3);
        assert_eq!(calculate_damage(122, 7), 115);
    }

    #[test]
    fn damage_never_negative() {
        assert_eq!(calculate_damage(25, 50), 0);
        assert_eq!(calculate_damage(0, 0), 0);
        assert_eq!(calculate_damage(i32::MIN, i32::MAX), 0);
    }

    #[test]
    fn piercing_ignores_defense() {
        assert_eq!(boss_hit_damage(122, 15, true), 122);
        assert_eq!(boss_hit_damage(122, 15, false), 107);
        assert_eq!(boss_hit_damage(10, 15, false), 0);
    }

    #[test]
    fn energy_can_drop_below_zero() {
        assert_eq!(apply_damage(10, 25), -15);
    }
}
