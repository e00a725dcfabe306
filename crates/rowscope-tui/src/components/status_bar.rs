//! Status bar component.
//!
//! Displays the active tab's keybindings and the latest status message.

use ratatui::{
    Frame,
    crossterm::event::KeyEvent,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rowscope_core::core::ViewTab;

use super::Component;
use super::styles::{BORDER_UNFOCUSED, TEXT_DIM, TEXT_SUCCESS, TEXT_WARNING};

/// Key binding display item.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyBinding {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

const BROWSE_BINDINGS: &[KeyBinding] = &[
    KeyBinding::new("1/2", "Tab"),
    KeyBinding::new("↑↓", "Table"),
    KeyBinding::new("Enter", "Open"),
    KeyBinding::new("n/p", "Page"),
    KeyBinding::new("hjkl", "Scroll"),
    KeyBinding::new("?", "Help"),
    KeyBinding::new("q", "Quit"),
];

const QUERY_BINDINGS: &[KeyBinding] = &[
    KeyBinding::new("Tab", "Browse"),
    KeyBinding::new("F5", "Run"),
    KeyBinding::new("Ctrl+U", "Clear"),
    KeyBinding::new("↑↓←→", "Scroll"),
    KeyBinding::new("F1", "Help"),
    KeyBinding::new("Ctrl+C", "Quit"),
];

/// Status bar showing keybindings and messages.
#[derive(Debug)]
pub struct StatusBar {
    message: String,
    bindings: &'static [KeyBinding],
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            bindings: BROWSE_BINDINGS,
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Show the bindings that apply on `tab`.
    pub fn set_tab(&mut self, tab: ViewTab) {
        self.bindings = match tab {
            ViewTab::Browse => BROWSE_BINDINGS,
            ViewTab::Query => QUERY_BINDINGS,
        };
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        self.bindings
    }
}

impl Component for StatusBar {
    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", TEXT_DIM));
            }
            spans.push(Span::styled(format!(" {} ", binding.key), TEXT_WARNING));
            spans.push(Span::raw(binding.action));
        }

        if !self.message.is_empty() {
            spans.push(Span::styled(" │ ", TEXT_DIM));
            spans.push(Span::styled(self.message.clone(), TEXT_SUCCESS));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(BORDER_UNFOCUSED),
        );

        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_follow_tab() {
        let mut bar = StatusBar::new();
        assert!(bar.bindings().iter().any(|b| b.key == "n/p"));

        bar.set_tab(ViewTab::Query);
        assert!(bar.bindings().iter().any(|b| b.key == "F5"));
        assert!(!bar.bindings().iter().any(|b| b.key == "n/p"));

        bar.set_tab(ViewTab::Browse);
        assert_eq!(bar.bindings(), BROWSE_BINDINGS);
    }

    #[test]
    fn test_message() {
        let mut bar = StatusBar::default();
        bar.set_message("Loaded 3 tables");
        assert_eq!(bar.message(), "Loaded 3 tables");
    }
}
