//! UI Components for rowscope-tui.
//!
//! Components keep their own presentation state (selection, scroll offsets,
//! editor text) and receive controller state through `update` methods.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

mod catalog_list;
mod grid_view;
mod help_overlay;
mod query_panel;
mod status_bar;
pub mod styles;
mod table_panel;

pub use catalog_list::CatalogList;
pub use grid_view::GridView;
pub use help_overlay::HelpOverlay;
pub use query_panel::QueryPanel;
pub use status_bar::StatusBar;
pub use table_panel::TablePanel;

/// Common trait for all UI components.
pub trait Component {
    /// Draw the component within the given area.
    /// Takes `&mut self` to support stateful widgets like TableState.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Handle keyboard input. Returns true if the event was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;
}
