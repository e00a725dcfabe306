//! Rendering of untyped tabular data into an escaped grid.

use serde_json::Value;

use crate::api::models::CellValue;
use crate::display::escape::{Escaper, SafeText};

/// One rendered cell. Its hover title is always the displayed text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridCell {
    text: SafeText,
}

impl GridCell {
    pub fn text(&self) -> &SafeText {
        &self.text
    }

    pub fn title(&self) -> &SafeText {
        &self.text
    }
}

/// A header row plus body rows, every string already escaped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    header: Vec<GridCell>,
    rows: Vec<Vec<GridCell>>,
}

impl Grid {
    /// Build a grid from column names and rows of JSON values.
    ///
    /// Rows shorter than the header are padded with empty cells; validated
    /// payloads never exercise that path.
    pub fn build<E: Escaper + ?Sized>(
        columns: &[String],
        rows: &[Vec<CellValue>],
        escaper: &E,
    ) -> Self {
        let header = columns
            .iter()
            .map(|name| GridCell {
                text: escaper.escape(name),
            })
            .collect();

        let rows = rows
            .iter()
            .map(|row| {
                let mut cells: Vec<GridCell> = row
                    .iter()
                    .map(|value| GridCell {
                        text: escaper.escape(&cell_text(value)),
                    })
                    .collect();
                if cells.len() < columns.len() {
                    cells.resize_with(columns.len(), GridCell::default);
                }
                cells
            })
            .collect();

        Grid { header, rows }
    }

    pub fn header(&self) -> &[GridCell] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Plain-text form of a cell value. Null becomes the empty string.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::escape::HtmlEscaper;
    use serde_json::json;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_grid_shape_matches_input() {
        let cols = columns(&["id", "name", "score"]);
        let rows = vec![
            vec![json!(1), json!("a"), json!(0.5)],
            vec![json!(2), json!("b"), json!(null)],
            vec![json!(3), json!("c"), json!(7)],
            vec![json!(4), json!("d"), json!(true)],
        ];
        let grid = Grid::build(&cols, &rows, &HtmlEscaper);

        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.row_count(), 4);
        assert!(grid.rows().iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_null_renders_empty_not_literal_null() {
        let grid = Grid::build(
            &columns(&["a", "b"]),
            &[vec![json!(null), json!("null")]],
            &HtmlEscaper,
        );
        assert_eq!(grid.rows()[0][0].text().as_str(), "");
        assert_eq!(grid.rows()[0][1].text().as_str(), "null");
    }

    #[test]
    fn test_title_equals_text_and_is_escaped() {
        let grid = Grid::build(
            &columns(&["<b>"]),
            &[vec![json!("a&b")]],
            &HtmlEscaper,
        );
        let header = &grid.header()[0];
        assert_eq!(header.text().as_str(), "&lt;b&gt;");
        assert_eq!(header.title(), header.text());

        let cell = &grid.rows()[0][0];
        assert_eq!(cell.text().as_str(), "a&amp;b");
        assert_eq!(cell.title(), cell.text());
    }

    #[test]
    fn test_empty_rows_render_header_only() {
        let grid = Grid::build(&columns(&["id"]), &[], &HtmlEscaper);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn test_zero_columns_is_total() {
        let grid = Grid::build(&[], &[vec![], vec![]], &HtmlEscaper);
        assert_eq!(grid.column_count(), 0);
        assert_eq!(grid.row_count(), 2);
        assert!(grid.rows().iter().all(Vec::is_empty));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let grid = Grid::build(&columns(&["a", "b"]), &[vec![json!(1)]], &HtmlEscaper);
        assert_eq!(grid.rows()[0].len(), 2);
        assert_eq!(grid.rows()[0][1].text().as_str(), "");
    }

    #[test]
    fn test_cell_text_formats() {
        assert_eq!(cell_text(&json!(9.99)), "9.99");
        assert_eq!(cell_text(&json!(false)), "false");
        assert_eq!(cell_text(&json!("text")), "text");
        assert_eq!(cell_text(&json!([1, 2])), "[1,2]");
        assert_eq!(cell_text(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }
}
