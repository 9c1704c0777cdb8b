//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe combatants and the
//! roster. Frontends query this state but mutate it exclusively through the
//! engine.
pub mod actor;
pub mod boss;
pub mod robot;
pub mod roster;

pub use actor::ActorStats;
pub use boss::Boss;
pub use robot::{Robot, RobotClass};
pub use roster::{Roster, RosterError};
