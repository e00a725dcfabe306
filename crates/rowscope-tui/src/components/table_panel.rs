//! Browse tab data view: table title, paging info and the current page.

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rowscope_core::core::pagination::NO_TABLE_PLACEHOLDER;
use rowscope_core::core::{BrowseMode, PageView};

use super::styles::{TEXT_DIM, TEXT_WARNING, border_style, disabled_style, text_bold_white};
use super::{Component, GridView};
use crate::layout::browse::INFO_HEIGHT;

#[derive(Debug, Default)]
pub struct TablePanel {
    view: PageView,
    grid: GridView,
}

impl TablePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a fresh copy of the browse view. New content resets scrolling.
    pub fn update(&mut self, view: &PageView) {
        if self.view.body != view.body {
            self.grid.reset();
        }
        self.view = view.clone();
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    fn nav_hint(label: &'static str, disabled: bool) -> Span<'static> {
        if disabled {
            Span::styled(label, disabled_style())
        } else {
            Span::styled(label, TEXT_WARNING)
        }
    }
}

impl Component for TablePanel {
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = match &self.view.mode {
            BrowseMode::NoTable => " Data ".to_string(),
            BrowseMode::Table { title } => format!(" {} ", title),
        };
        let block = Block::default()
            .title(Span::styled(title, text_bold_white()))
            .borders(Borders::ALL)
            .border_style(border_style(focused));

        if self.view.mode == BrowseMode::NoTable {
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(format!("  {}", NO_TABLE_PLACEHOLDER), TEXT_DIM)),
            ])
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        let [info_area, body_area] =
            Layout::vertical([Constraint::Length(INFO_HEIGHT), Constraint::Min(0)]).areas(inner);

        let info = Paragraph::new(vec![
            Line::from(vec![
                Self::nav_hint("◀ p", self.view.prev_disabled),
                Span::raw(format!("  {}  ", self.view.page_info)),
                Self::nav_hint("n ▶", self.view.next_disabled),
            ]),
            Line::from(Span::styled(self.view.row_info.clone(), TEXT_DIM)),
        ]);
        frame.render_widget(info, info_area);

        self.grid
            .render(frame, body_area, &self.view.body, Block::default());
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('k') => self.grid.scroll_up(),
            KeyCode::Char('j') => self.grid.scroll_down(&self.view.body),
            KeyCode::Char('h') => self.grid.scroll_left(),
            KeyCode::Char('l') => self.grid.scroll_right(&self.view.body),
            _ => return false,
        }
        true
    }
}
