//! Keyboard input handling for the application.
//!
//! Overlay keys come first, then global keys, then keys for the active tab.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rowscope_core::core::ViewTab;

use crate::action::{AppAction, PageMove};
use crate::components::Component;

use super::App;

impl App {
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_overlay_keys(key.code) {
            return;
        }
        if self.handle_global_keys(key) {
            return;
        }
        match self.session.tabs.active() {
            ViewTab::Browse => self.handle_browse_keys(key),
            ViewTab::Query => self.handle_query_keys(key),
        }
    }

    /// Pasted text goes to the query editor.
    pub(super) fn handle_paste(&mut self, text: &str) {
        if self.session.tabs.is_active(ViewTab::Query) {
            self.query_panel.insert_str(text);
        }
    }

    fn handle_overlay_keys(&mut self, code: KeyCode) -> bool {
        if !self.show_help {
            return false;
        }
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1)) {
            self.show_help = false;
        }
        true
    }

    /// Keys that work on every tab, including while typing a query.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Tab => {
                self.session.tabs.next();
                self.switch_to_tab(self.session.tabs.active());
            }
            KeyCode::BackTab => {
                self.session.tabs.previous();
                self.switch_to_tab(self.session.tabs.active());
            }
            _ => return false,
        }
        true
    }

    fn handle_browse_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('1') => self.switch_to_tab(ViewTab::Browse),
            KeyCode::Char('2') => self.switch_to_tab(ViewTab::Query),
            KeyCode::Char('r') => {
                let _ = self.action_tx.send(AppAction::LoadCatalog);
            }
            KeyCode::Enter => {
                if let Some(index) = self.catalog_list.selected_index() {
                    let _ = self.action_tx.send(AppAction::OpenEntry(index));
                }
            }
            KeyCode::Char('n') | KeyCode::Right => self.request_page(PageMove::Next),
            KeyCode::Char('p') | KeyCode::Left => self.request_page(PageMove::Previous),
            KeyCode::F(5) => self.request_page(PageMove::Reload),
            KeyCode::Up | KeyCode::Down | KeyCode::Home | KeyCode::End => {
                self.catalog_list.handle_key(key);
            }
            _ => {
                self.table_panel.handle_key(key);
            }
        }
    }

    /// Disabled navigation does nothing, like a disabled button.
    fn request_page(&mut self, movement: PageMove) {
        let view = self.session.pagination.view();
        let disabled = match movement {
            PageMove::Previous => view.prev_disabled,
            PageMove::Next => view.next_disabled,
            PageMove::Reload => false,
        };
        if !disabled {
            let _ = self.action_tx.send(AppAction::Page(movement));
        }
    }

    fn handle_query_keys(&mut self, key: KeyEvent) {
        let run = match key.code {
            KeyCode::F(5) => true,
            KeyCode::Enter => key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT),
            _ => false,
        };
        if run {
            let text = self.query_panel.text().to_string();
            let _ = self.action_tx.send(AppAction::RunQuery(text));
        } else {
            self.query_panel.handle_key(key);
        }
    }
}
