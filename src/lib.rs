//! scrollbar library - Abstract scroll bar core with a terminal playground
//!
//! The `scrollbar` module holds the toolkit-independent core. `app` and
//! `widgets` wire it to a ratatui terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod scrollbar;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::ScrollbarError;
pub use scrollbar::{HorizontalAxis, ScrollStep, Scrollbar, VerticalAxis, WidgetState};
