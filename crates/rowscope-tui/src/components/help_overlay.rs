//! Help overlay component.
//!
//! Displays a modal overlay showing all available keybindings.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::styles::{BORDER_FOCUSED, TEXT_DIM};

/// Help overlay showing keybindings.
pub struct HelpOverlay;

impl HelpOverlay {
    const GLOBAL_KEYS: &'static [(&'static str, &'static str)] = &[
        ("Ctrl+C", "Quit application"),
        ("Tab", "Next tab"),
        ("Shift+Tab", "Previous tab"),
        ("F1", "Toggle help"),
    ];

    const BROWSE_KEYS: &'static [(&'static str, &'static str)] = &[
        ("q", "Quit application"),
        ("1 / 2", "Browse / Query tab"),
        ("↑ / ↓", "Move in table list"),
        ("Home / End", "First / last table"),
        ("Enter", "Open table"),
        ("n / →", "Next page"),
        ("p / ←", "Previous page"),
        ("j / k", "Scroll rows"),
        ("h / l", "Scroll columns"),
        ("r", "Reload table list"),
        ("?", "Toggle help"),
    ];

    const QUERY_KEYS: &'static [(&'static str, &'static str)] = &[
        ("F5", "Run query"),
        ("Alt+Enter", "Run query"),
        ("Enter", "New line"),
        ("Ctrl+U", "Clear editor"),
        ("↑ ↓ ← →", "Scroll results"),
    ];

    /// Render the help overlay centered on screen.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 80, area);
        frame.render_widget(Clear, popup_area);

        let mut lines: Vec<Line> = vec![Line::from("")];
        for (title, keys) in [
            ("Global", Self::GLOBAL_KEYS),
            ("Browse Tables", Self::BROWSE_KEYS),
            ("Custom Query", Self::QUERY_KEYS),
        ] {
            Self::push_section(&mut lines, title, keys);
        }
        lines.push(Line::from(Span::styled(
            "  Press ? or Esc to close",
            TEXT_DIM,
        )));

        let help_text = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(BORDER_FOCUSED),
            )
            .alignment(Alignment::Left);

        frame.render_widget(help_text, popup_area);
    }

    fn push_section(lines: &mut Vec<Line<'static>>, title: &'static str, keys: &[(&str, &str)]) {
        lines.push(Line::from(Span::styled(
            format!("  {}", title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from("  ──────────────────────────────────"));
        for (key, action) in keys {
            lines.push(Self::format_keybinding(key, action));
        }
        lines.push(Line::from(""));
    }

    fn format_keybinding(key: &str, action: &str) -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("{:<14}", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(action.to_string()),
        ])
    }

    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }
}
