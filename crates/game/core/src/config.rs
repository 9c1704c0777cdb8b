/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Energy every robot recovers at the end of its own turn.
    pub regen_per_turn: i32,

    /// Which stat reduces a robot's plain attack against the boss.
    pub boss_reduction: BossReduction,

    /// Hard cap on rounds. `None` lets the battle run until it is decided.
    pub max_rounds: Option<u32>,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of robots on the player side of a roster.
    pub const MAX_ROBOTS: usize = 8;
    /// Every robot class carries exactly this many abilities.
    pub const MAX_ABILITIES: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REGEN_PER_TURN: i32 = 5;

    pub fn new() -> Self {
        Self {
            regen_per_turn: Self::DEFAULT_REGEN_PER_TURN,
            boss_reduction: BossReduction::default(),
            max_rounds: None,
        }
    }

    pub fn with_boss_reduction(mut self, boss_reduction: BossReduction) -> Self {
        self.boss_reduction = boss_reduction;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Damage reduction applied when a robot plainly attacks the boss.
///
/// The boss carries two reduction values: `defense`, and the displayed
/// `armor` (half of defense at construction). Abilities always go through
/// defense; this policy picks the stat for plain attacks.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum BossReduction {
    /// Plain attacks go through `Boss::take_hit`, reduced by defense.
    #[default]
    Defense,
    /// Plain attacks use the generic actor formula against displayed armor.
    Armor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let config = GameConfig::default();
        assert_eq!(config.regen_per_turn, 5);
        assert_eq!(config.boss_reduction, BossReduction::Defense);
        assert_eq!(config.max_rounds, None);
    }

    #[test]
    fn boss_reduction_parses_case_insensitively() {
        assert_eq!("ARMOR".parse::<BossReduction>(), Ok(BossReduction::Armor));
        assert_eq!("defense".parse::<BossReduction>(), Ok(BossReduction::Defense));
        assert!("shield".parse::<BossReduction>().is_err());
    }
}
