//! Data-driven content definitions and loaders.
//!
//! This crate houses the static arena content and provides loaders for
//! RON/TOML data files:
//! - Rosters: robots, their classes and the boss (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! A built-in roster is embedded so the game runs without any data files.
//! All loaders use arena-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{BossSpec, ConfigLoader, RobotSpec, RosterLoader, RosterSpec};
