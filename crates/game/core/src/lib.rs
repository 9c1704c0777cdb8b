//! Deterministic combat rules for the robot arena.
//!
//! `arena-core` defines the canonical rules (actors, abilities, damage
//! formulas, turn loop) and exposes pure APIs that frontends drive. All
//! battle progression flows through [`engine::BattleEngine`]; input arrives
//! through [`engine::ActionProvider`] and every state change is reported as a
//! [`event::CombatEvent`] to an [`event::EventSink`].
pub mod ability;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod state;

pub use ability::{Ability, AbilityEffect, AbilityError, AbilityKind, AbilityOutcome, Target};
pub use combat::{Heal, Strike};
pub use config::{BossReduction, GameConfig};
pub use engine::{
    ActionProvider, BattleEngine, BattleOutcome, EngineError, ProviderError, ScriptedProvider,
    TurnChoice, TurnPhase,
};
pub use error::{ErrorSeverity, GameError};
pub use event::{CombatEvent, EventSink};
pub use state::{ActorStats, Boss, Robot, RobotClass, Roster, RosterError};
