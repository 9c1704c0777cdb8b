//! Roster loader.
//!
//! Loads the robots and the boss from RON files, or from the roster embedded
//! in the binary.

use std::path::Path;

use arena_core::{Boss, GameError, Robot, RobotClass, Roster};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Roster embedded at compile time.
const BUILTIN_ROSTER: &str = include_str!("../../data/roster.ron");

/// One robot entry in a roster file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotSpec {
    pub name: String,
    pub class: RobotClass,
    pub energy: i32,
    pub armor: i32,
    pub attack: i32,
}

/// The boss entry in a roster file. Armor is derived from defense.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossSpec {
    pub name: String,
    pub energy: i32,
    pub defense: i32,
    pub attack: i32,
}

/// On-disk roster format.
///
/// ```ron
/// RosterSpec(
///     robots: [(name: "R2D2", class: regular, energy: 130, armor: 50, attack: 18)],
///     boss: (name: "Megatron", energy: 200, defense: 15, attack: 25),
/// )
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSpec {
    pub robots: Vec<RobotSpec>,
    pub boss: BossSpec,
}

impl RosterSpec {
    /// Builds a validated roster, keeping file order as turn order.
    pub fn build(self) -> LoadResult<Roster> {
        let robots = self.robots.into_iter().map(|spec| {
            Robot::new(spec.class, spec.name, spec.energy, spec.armor, spec.attack)
        });
        let boss = Boss::new(
            self.boss.name,
            self.boss.energy,
            self.boss.defense,
            self.boss.attack,
        );

        Roster::new(robots, boss)
            .map_err(|e| anyhow::anyhow!("Invalid roster ({}): {}", e.error_code(), e))
    }
}

/// Loader for rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let roster = Self::parse(&content)?;

        tracing::debug!(
            path = %path.display(),
            robots = roster.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    /// The built-in roster: R2D2 and C3PO against Megatron.
    pub fn builtin() -> LoadResult<Roster> {
        Self::parse(BUILTIN_ROSTER)
    }

    /// Parse a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let spec: RosterSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        spec.build()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use arena_core::AbilityKind;

    use super::*;

    #[test]
    fn builtin_roster_matches_classic_lineup() {
        let roster = RosterLoader::builtin().unwrap();

        let r2d2 = roster.robot(0).unwrap();
        assert_eq!(r2d2.name(), "R2D2");
        assert_eq!(r2d2.class(), RobotClass::Regular);
        assert_eq!(
            (r2d2.stats.energy, r2d2.stats.armor, r2d2.stats.attack),
            (130, 50, 18)
        );

        let c3po = roster.robot(1).unwrap();
        assert_eq!(c3po.name(), "C3PO");
        assert_eq!(c3po.class(), RobotClass::Special);
        assert_eq!(
            (c3po.stats.energy, c3po.stats.armor, c3po.stats.attack),
            (150, 45, 122)
        );
        assert_eq!(c3po.abilities()[0].kind(), AbilityKind::PlasmaAttack);

        let boss = roster.boss();
        assert_eq!(boss.name(), "Megatron");
        assert_eq!(boss.stats.energy, 200);
        assert_eq!(boss.defense(), 15);
        assert_eq!(boss.stats.armor, 7);
        assert_eq!(boss.stats.attack, 25);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn rejects_empty_robot_list() {
        let err = RosterLoader::parse(
            r#"(robots: [], boss: (name: "Solo", energy: 10, defense: 0, attack: 1))"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Invalid roster"));
        assert!(err.to_string().contains("ROSTER_EMPTY"));
    }

    #[test]
    fn rejects_unknown_class() {
        let err = RosterLoader::parse(
            r#"(
                robots: [(name: "X", class: wizard, energy: 1, armor: 1, attack: 1)],
                boss: (name: "B", energy: 1, defense: 1, attack: 1),
            )"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Failed to parse roster RON"));
    }

    #[test]
    fn loads_custom_roster_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"RosterSpec(
                robots: [
                    (name: "Alpha", class: special, energy: 90, armor: 5, attack: 30),
                    (name: "Beta", class: regular, energy: 80, armor: 6, attack: 20),
                    (name: "Gamma", class: regular, energy: 70, armor: 7, attack: 10),
                ],
                boss: (name: "Overlord", energy: 500, defense: 21, attack: 40),
            )"#
        )
        .unwrap();

        let roster = RosterLoader::load(file.path()).unwrap();

        let names: Vec<_> = roster.robots().iter().map(Robot::name).collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
        assert_eq!(roster.boss().stats.armor, 10);
    }
}
