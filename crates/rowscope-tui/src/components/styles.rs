//! Shared style definitions for TUI components.

use ratatui::style::{Color, Modifier, Style};

// === Border Styles ===

pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Get border style based on focus state.
#[inline]
pub fn border_style(focused: bool) -> Style {
    if focused {
        BORDER_FOCUSED
    } else {
        BORDER_UNFOCUSED
    }
}

// === Table Styles ===

/// Style for grid header text.
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for the highlighted grid row.
pub fn row_highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub const HIGHLIGHT_SYMBOL: &str = "► ";

// === Text Styles ===

/// Style for dimmed/hint text, including placeholders.
pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);

/// Style for loading text and notices.
pub const TEXT_WARNING: Style = Style::new().fg(Color::Yellow);

pub const TEXT_ERROR: Style = Style::new().fg(Color::Red);

pub const TEXT_SUCCESS: Style = Style::new().fg(Color::Green);

/// Style for titles and emphasized values.
pub fn text_bold_white() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

// === Catalog Styles ===

/// The table whose data is on screen.
pub fn active_entry_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Cursor row in the catalog list.
pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

// === Input Styles ===

pub fn cursor_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Navigation hint that currently does nothing.
pub fn disabled_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM)
}
