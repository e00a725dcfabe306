//! Table catalog list (left column of the browse tab).

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rowscope_core::core::CatalogState;

use super::Component;
use super::styles::{
    HIGHLIGHT_SYMBOL, TEXT_DIM, TEXT_ERROR, TEXT_WARNING, active_entry_style, border_style,
    selected_style,
};

const LOADING_TABLES: &str = "⏳ Loading tables...";

/// Selectable list of tables. The cursor is separate from the active entry.
#[derive(Debug, Default)]
pub struct CatalogList {
    state: CatalogState,
    list_state: ListState,
}

impl CatalogList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a fresh copy of the catalog, keeping the cursor in range.
    pub fn update(&mut self, state: &CatalogState) {
        self.state = state.clone();
        let len = self.len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select_next(&mut self) {
        let len = self.len();
        if len > 0 {
            let next = self.list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
            self.list_state.select(Some(next));
        }
    }

    pub fn select_previous(&mut self) {
        if self.len() > 0 {
            let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
            self.list_state.select(Some(prev));
        }
    }

    pub fn select_first(&mut self) {
        if self.len() > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    fn len(&self) -> usize {
        match &self.state {
            CatalogState::Ready(entries) => entries.len(),
            _ => 0,
        }
    }

    fn title(&self) -> String {
        match &self.state {
            CatalogState::Ready(entries) => format!(" Tables ({}) ", entries.len()),
            _ => " Tables ".to_string(),
        }
    }
}

impl Component for CatalogList {
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(border_style(focused));

        let message = |text: String, style: Style| {
            Paragraph::new(vec![Line::from(""), Line::from(Span::styled(text, style))])
                .block(block.clone())
        };

        match &self.state {
            CatalogState::Loading => {
                frame.render_widget(message(format!(" {}", LOADING_TABLES), TEXT_WARNING), area)
            }
            CatalogState::Empty(text) => {
                frame.render_widget(message(format!(" {}", text), TEXT_DIM), area)
            }
            CatalogState::Failed(text) => {
                frame.render_widget(message(format!(" ❌ {}", text), TEXT_ERROR), area)
            }
            CatalogState::Ready(entries) => {
                let items: Vec<ListItem> = entries
                    .iter()
                    .map(|entry| {
                        if entry.is_active() {
                            ListItem::new(Span::styled(
                                format!("● {}", entry.label()),
                                active_entry_style(),
                            ))
                        } else {
                            ListItem::new(format!("  {}", entry.label()))
                        }
                    })
                    .collect();

                let list = List::new(items)
                    .block(block.clone())
                    .highlight_style(selected_style())
                    .highlight_symbol(HIGHLIGHT_SYMBOL);
                frame.render_stateful_widget(list, area, &mut self.list_state);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            _ => return false,
        }
        true
    }
}
