//! Centralized theme configuration for the demo UI.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` and never hardcode `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Item list styles
pub mod list {
    use super::*;

    pub const TEXT: Style = Style::new().fg(palette::TEXT);
}

/// Status line styles
pub mod status {
    use super::*;

    pub const TEXT: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const WARNING: Style = Style::new().fg(palette::WARNING);
}

/// Scroll bar styles
///
/// Positioner styles are looked up by `WidgetState::ordinal()`.
pub mod scrollbar {
    use super::*;
    use crate::scrollbar::WidgetState;

    pub const TRACK_SYMBOL_VERTICAL: &str = "│";
    pub const TRACK_SYMBOL_HORIZONTAL: &str = "─";
    pub const POSITIONER_SYMBOL: &str = "█";

    pub const TRACK: Style = Style::new().fg(palette::BG_HIGHLIGHT);

    /// Enabled, Disabled, Pressed, Focussed
    pub const POSITIONER: [Style; WidgetState::COUNT] = [
        Style::new().fg(palette::CYAN),
        Style::new().fg(palette::TEXT_DIM),
        Style::new().fg(palette::PINK).add_modifier(Modifier::BOLD),
        Style::new().fg(palette::PURPLE),
    ];

    pub fn positioner(state: WidgetState) -> Style {
        POSITIONER[state.ordinal()]
    }
}
