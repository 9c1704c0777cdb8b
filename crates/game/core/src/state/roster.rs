//! The battle line-up: robots in turn order and the boss they face.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::engine::BattleOutcome;
use crate::error::{ErrorSeverity, GameError};

use super::{Boss, Robot};

/// Errors raised while assembling a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("a roster needs at least one robot")]
    Empty,

    #[error("roster is full ({capacity} robots); cannot add {name}")]
    Full { name: String, capacity: usize },
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            RosterError::Empty => "ROSTER_EMPTY",
            RosterError::Full { .. } => "ROSTER_FULL",
        }
    }
}

/// Ordered robots plus the one boss they fight.
///
/// Insertion order is turn order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    robots: ArrayVec<Robot, { GameConfig::MAX_ROBOTS }>,
    boss: Boss,
}

impl Roster {
    pub fn new(robots: impl IntoIterator<Item = Robot>, boss: Boss) -> Result<Self, RosterError> {
        let mut slots = ArrayVec::new();
        for robot in robots {
            slots.try_push(robot).map_err(|err| RosterError::Full {
                name: err.element().stats.name,
                capacity: GameConfig::MAX_ROBOTS,
            })?;
        }
        if slots.is_empty() {
            return Err(RosterError::Empty);
        }

        Ok(Self {
            robots: slots,
            boss,
        })
    }

    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn robot(&self, index: usize) -> Option<&Robot> {
        self.robots.get(index)
    }

    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    /// Mutable access to robots and boss at the same time.
    pub fn split_mut(&mut self) -> (&mut [Robot], &mut Boss) {
        (&mut self.robots, &mut self.boss)
    }

    pub fn any_robot_active(&self) -> bool {
        self.robots.iter().any(Robot::is_active)
    }

    /// `Some` once the battle is decided. Victory wins a tie.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if !self.boss.is_active() {
            Some(BattleOutcome::Victory)
        } else if !self.any_robot_active() {
            Some(BattleOutcome::Defeat)
        } else {
            None
        }
    }
}
