//! Query tab: a small editor above the result panel.

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use rowscope_core::display::PanelContent;

use super::styles::{TEXT_SUCCESS, border_style, cursor_style, input_text_style};
use super::{Component, GridView};
use crate::layout::query::EDITOR_HEIGHT;

#[derive(Debug, Default)]
pub struct QueryPanel {
    input: String,
    panel: PanelContent,
    grid: GridView,
}

impl QueryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The editor text exactly as typed.
    pub fn text(&self) -> &str {
        &self.input
    }

    pub fn insert_str(&mut self, text: &str) {
        self.input.push_str(text);
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn update(&mut self, panel: &PanelContent) {
        if self.panel != *panel {
            self.grid.reset();
        }
        self.panel = panel.clone();
    }

    pub fn panel(&self) -> &PanelContent {
        &self.panel
    }

    fn result_title(&self) -> String {
        match self.panel.grid() {
            Some(grid) => format!(
                " Results ({} rows, {} columns) ",
                grid.row_count(),
                grid.column_count()
            ),
            None => " Results ".to_string(),
        }
    }
}

impl Component for QueryPanel {
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let [editor_area, result_area] =
            Layout::vertical([Constraint::Length(EDITOR_HEIGHT), Constraint::Min(0)]).areas(area);

        let mut lines: Vec<Line> = self
            .input
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), input_text_style())))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("█", cursor_style()));
        }
        let editor = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Query ")
                .title_bottom(Line::from(Span::styled(
                    " F5 / Alt+Enter run ",
                    TEXT_SUCCESS,
                )))
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        );
        frame.render_widget(editor, editor_area);

        let block = Block::default()
            .title(self.result_title())
            .borders(Borders::ALL)
            .border_style(border_style(false));
        self.grid.render(frame, result_area, &self.panel, block);
    }

    /// Editing keys. Running the query is handled by the app.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.clear(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.push(c)
            }
            KeyCode::Enter if key.modifiers.is_empty() => self.input.push('\n'),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Up => self.grid.scroll_up(),
            KeyCode::Down => self.grid.scroll_down(&self.panel),
            KeyCode::Left => self.grid.scroll_left(),
            KeyCode::Right => self.grid.scroll_right(&self.panel),
            _ => return false,
        }
        true
    }
}
