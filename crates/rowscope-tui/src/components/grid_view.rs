//! Drawing of a [`PanelContent`] as a scrollable ratatui table.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table, TableState},
};
use rowscope_core::display::{Grid, PanelContent, SafeText};
use unicode_width::UnicodeWidthStr;

use super::styles::{
    HIGHLIGHT_SYMBOL, TEXT_DIM, TEXT_ERROR, TEXT_WARNING, header_style, row_highlight_style,
};
use crate::layout::grid::{MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH};

/// Row cursor and horizontal column offset for one grid.
#[derive(Debug, Default)]
pub struct GridView {
    table_state: TableState,
    scroll_x: usize,
}

impl GridView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first row and column, for freshly loaded content.
    pub fn reset(&mut self) {
        self.table_state = TableState::default();
        self.scroll_x = 0;
    }

    pub fn scroll_x(&self) -> usize {
        self.scroll_x
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn scroll_up(&mut self) {
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(current.saturating_sub(1)));
    }

    pub fn scroll_down(&mut self, panel: &PanelContent) {
        let rows = panel.grid().map(Grid::row_count).unwrap_or(0);
        if rows == 0 {
            return;
        }
        let next = self.table_state.selected().map_or(0, |i| i + 1);
        self.table_state.select(Some(next.min(rows - 1)));
    }

    pub fn scroll_left(&mut self) {
        self.scroll_x = self.scroll_x.saturating_sub(1);
    }

    pub fn scroll_right(&mut self, panel: &PanelContent) {
        let columns = panel.grid().map(Grid::column_count).unwrap_or(0);
        if self.scroll_x + 1 < columns {
            self.scroll_x += 1;
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, panel: &PanelContent, block: Block) {
        match panel {
            PanelContent::Blank => frame.render_widget(block, area),
            PanelContent::Placeholder(text) => render_message(frame, area, block, "", text, TEXT_DIM),
            PanelContent::Loading(text) => {
                render_message(frame, area, block, "⏳ ", text, TEXT_WARNING)
            }
            PanelContent::Error(text) => render_message(frame, area, block, "❌ ", text, TEXT_ERROR),
            PanelContent::Table { notice, grid } => {
                let inner = block.inner(area);
                frame.render_widget(block, area);

                let grid_area = match notice {
                    Some(notice) => {
                        let [notice_area, rest] =
                            Layout::vertical([Constraint::Length(1), Constraint::Min(0)])
                                .areas(inner);
                        frame.render_widget(
                            Paragraph::new(Span::styled(format!("⚠ {}", notice), TEXT_WARNING)),
                            notice_area,
                        );
                        rest
                    }
                    None => inner,
                };
                self.render_grid(frame, grid_area, grid);
            }
        }
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect, grid: &Grid) {
        let widths = column_widths(grid);
        self.scroll_x = self.scroll_x.min(widths.len().saturating_sub(1));
        let window = visible_columns(&widths, self.scroll_x, area.width);

        let header = Row::new(
            grid.header()[window.clone()]
                .iter()
                .map(|cell| Cell::from(cell.text().to_string())),
        )
        .style(header_style());

        let rows = grid.rows().iter().map(|row| {
            Row::new(
                row[window.clone()]
                    .iter()
                    .map(|cell| Cell::from(cell.text().to_string())),
            )
        });

        let constraints = widths[window.clone()]
            .iter()
            .map(|width| Constraint::Length(*width));

        let table = Table::new(rows, constraints)
            .header(header)
            .row_highlight_style(row_highlight_style())
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

fn render_message(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    prefix: &str,
    text: &SafeText,
    style: ratatui::style::Style,
) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}{}", prefix, text), style)),
    ])
    .block(block);
    frame.render_widget(paragraph, area);
}

/// Display width of each column: its widest cell, clamped.
fn column_widths(grid: &Grid) -> Vec<u16> {
    (0..grid.column_count())
        .map(|col| {
            let header = grid.header()[col].text().as_str().width();
            let widest = grid
                .rows()
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.text().as_str().width())
                .fold(header, usize::max);
            u16::try_from(widest)
                .unwrap_or(u16::MAX)
                .clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// Columns that fit in `available` cells starting at `start`; always at least one.
fn visible_columns(widths: &[u16], start: usize, available: u16) -> Range<usize> {
    if start >= widths.len() {
        return widths.len()..widths.len();
    }
    let mut used: u16 = 0;
    let mut end = start;
    for width in &widths[start..] {
        // One cell of spacing between columns.
        let needed = if end == start { *width } else { width + 1 };
        if end > start && used.saturating_add(needed) > available {
            break;
        }
        used = used.saturating_add(needed);
        end += 1;
    }
    start..end
}
