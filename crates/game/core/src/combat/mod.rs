//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic and integer-only.
//!
//! # Core Functions
//!
//! - `calculate_damage`: Attack reduced by a flat armor/defense value
//! - `boss_hit_damage`: The boss's defense-aware damage rule
//! - `apply_damage`: Energy reduction (not clamped; negative means defeated)

pub mod damage;
pub mod result;

pub use damage::{apply_damage, boss_hit_damage, calculate_damage};
pub use result::{Heal, Strike};
