//! Text console frontend for the robot arena.
//!
//! This crate provides the interactive line-based interface for the game.
//!
//! # Architecture
//!
//! The frontend never touches battle rules directly:
//! - [`input::ConsoleProvider`] implements `arena_core::ActionProvider`,
//!   prompting and re-prompting until a menu choice is valid
//! - [`presentation::TextPresenter`] implements `arena_core::EventSink`,
//!   turning combat events into text lines
//! - [`ArenaApp`] loads content and hands both to the engine

mod app;
mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::ArenaApp;
pub use config::{CliConfig, LoggingConfig};
pub use input::{ChoiceError, ConsoleProvider, parse_menu_choice};
pub use presentation::TextPresenter;
