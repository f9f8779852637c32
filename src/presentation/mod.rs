//! Presentation layer handling terminal UI and user input.
//!
//! Draws the site with ratatui and maps crossterm key events onto
//! application state changes.

pub mod input;
pub mod sections;
pub mod ui;

pub use input::*;
pub use ui::*;
