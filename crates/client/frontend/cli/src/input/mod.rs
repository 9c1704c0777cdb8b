//! Console input: menu validation and the stdin-backed action provider.
mod menu;
mod provider;

pub use menu::{ChoiceError, parse_menu_choice};
pub use provider::ConsoleProvider;
