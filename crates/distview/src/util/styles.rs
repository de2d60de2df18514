//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use crate::config::Theme;
use crate::state::Overlay;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for errors
pub const ERROR_COLOR: Color = Color::Red;

/// Colour of each overlay on the plot.
pub fn overlay_color(overlay: Overlay) -> Color {
    match overlay {
        Overlay::Mean => Color::Red,
        Overlay::Median => Color::Green,
        Overlay::Mode => Color::Blue,
        Overlay::StdDev | Overlay::Range => Color::Magenta,
        Overlay::Skewness => Color::Rgb(255, 165, 0),
        Overlay::Kurtosis => Color::Rgb(165, 42, 42),
    }
}

/// Text on the window background.
pub fn base_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.into()).bg(theme.background.into())
}

/// Text on a panel.
pub fn panel_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.into()).bg(theme.panel.into())
}

/// Highlighted entry: panel-coloured text on the highlight colour.
pub fn highlight_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.into())
        .bg(theme.highlight.into())
        .add_modifier(Modifier::BOLD)
}

/// A bordered panel block whose border takes the accent colour when focused.
pub fn focused_block(title: &str, focused: bool, theme: &Theme) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(theme.accent.into())
    } else {
        Style::default().fg(theme.text.into())
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(panel_style(theme))
        .title(title.to_string())
}
