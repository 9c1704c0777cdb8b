//! Text rendering of combat events.
mod text;

pub use text::{TextPresenter, event_lines, stats_line};
