//! Console rendering of grids and panels with comfy-table.
//!
//! Grids passed in here should be built with
//! [`TerminalEscaper`](crate::display::escape::TerminalEscaper).

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

use crate::display::grid::Grid;
use crate::display::panel::PanelContent;
use crate::utils::text::truncate_text;

const DEFAULT_WIDTH: usize = 80;
const DEFAULT_MAX_CELL_WIDTH: usize = 40;

pub struct ConsoleTable {
    max_width: usize,
    max_cell_width: usize,
    use_colors: bool,
}

impl ConsoleTable {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> usize {
        match terminal::size() {
            Ok((cols, _)) => (cols as usize).clamp(40, 200),
            Err(_) => DEFAULT_WIDTH,
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    pub fn with_max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = width.max(4);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn render_grid(&self, grid: &Grid) -> String {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(self.max_width as u16);

        table.set_header(
            grid.header()
                .iter()
                .map(|cell| self.header_cell(cell.text().as_str())),
        );
        for row in grid.rows() {
            table.add_row(
                row.iter()
                    .map(|cell| Cell::new(truncate_text(cell.text().as_str(), self.max_cell_width))),
            );
        }
        table.to_string()
    }

    /// Render a panel: a table with its notice, or its single message line.
    pub fn render_panel(&self, panel: &PanelContent) -> String {
        match panel {
            PanelContent::Blank => String::new(),
            PanelContent::Table { notice, grid } => {
                let table = self.render_grid(grid);
                match notice {
                    Some(notice) => format!("⚠️  {}\n{}", notice, table),
                    None => table,
                }
            }
            PanelContent::Error(text) => format!("❌ {}", text),
            PanelContent::Placeholder(text) | PanelContent::Loading(text) => text.to_string(),
        }
    }

    fn header_cell(&self, text: &str) -> Cell {
        let cell = Cell::new(text).add_attribute(Attribute::Bold);
        if self.use_colors {
            cell.fg(Color::Cyan)
        } else {
            cell
        }
    }
}

impl Default for ConsoleTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::escape::{Escaper, TerminalEscaper};
    use serde_json::json;

    fn plain() -> ConsoleTable {
        ConsoleTable::new().with_max_width(80).with_colors(false)
    }

    #[test]
    fn test_render_grid_contains_cells() {
        let grid = Grid::build(
            &["id".to_string(), "name".to_string()],
            &[vec![json!(1), json!("alice")], vec![json!(2), json!(null)]],
            &TerminalEscaper,
        );
        let output = plain().render_grid(&grid);
        assert!(output.contains("id"));
        assert!(output.contains("alice"));
        assert!(!output.contains("null"));
    }

    #[test]
    fn test_long_cells_are_truncated() {
        let long = "x".repeat(100);
        let grid = Grid::build(&["c".to_string()], &[vec![json!(long)]], &TerminalEscaper);
        let output = plain().with_max_cell_width(10).render_grid(&grid);
        assert!(output.contains("xxxxxxx..."));
        assert!(!output.contains(&"x".repeat(11)));
    }

    #[test]
    fn test_render_panel_messages() {
        let console = plain();
        assert_eq!(console.render_panel(&PanelContent::Blank), "");
        assert_eq!(
            console.render_panel(&PanelContent::Error(TerminalEscaper.escape("boom"))),
            "❌ boom"
        );
        assert_eq!(
            console.render_panel(&PanelContent::Placeholder(TerminalEscaper.escape("Enter a query to run"))),
            "Enter a query to run"
        );
    }

    #[test]
    fn test_render_panel_with_notice() {
        let grid = Grid::build(&["1".to_string()], &[vec![json!(1)]], &TerminalEscaper);
        let panel = PanelContent::Table {
            notice: Some(TerminalEscaper.escape("Results truncated to 1000 rows")),
            grid,
        };
        let output = plain().render_panel(&panel);
        assert!(output.starts_with("⚠️  Results truncated to 1000 rows\n"));
    }
}
