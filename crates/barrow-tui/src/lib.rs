//! barrow-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for the game: rendering, key and
//! mouse decoding, and the session loop glue. All game rules live in
//! barrow-core; this crate only translates events into commands and
//! world state into cells.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
