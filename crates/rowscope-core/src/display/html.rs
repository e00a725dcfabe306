//! Markup serialization of panels.
//!
//! Every string written here is a [`SafeText`] produced by
//! [`HtmlEscaper`](crate::display::escape::HtmlEscaper); the functions only
//! add structure. Feeding them text escaped for another surface is a bug.

use crate::core::catalog::CatalogState;
use crate::core::pagination::{BrowseMode, NO_TABLE_PLACEHOLDER, PageView};
use crate::display::escape::SafeText;
use crate::display::grid::Grid;
use crate::display::panel::PanelContent;

const LOADING_TABLES: &str = "Loading tables...";

/// `<table class="result-table">` with titled header and body cells.
pub fn grid_html(grid: &Grid) -> String {
    let mut out = String::from("<table class=\"result-table\"><thead><tr>");
    for cell in grid.header() {
        push_titled(&mut out, "th", cell.title(), cell.text());
    }
    out.push_str("</tr></thead><tbody>");
    for row in grid.rows() {
        out.push_str("<tr>");
        for cell in row {
            push_titled(&mut out, "td", cell.title(), cell.text());
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

pub fn panel_html(panel: &PanelContent) -> String {
    match panel {
        PanelContent::Blank => String::new(),
        PanelContent::Placeholder(text) => wrap("p", "placeholder", text),
        PanelContent::Loading(text) => wrap("p", "loading", text),
        PanelContent::Error(text) => wrap("div", "error-message", text),
        PanelContent::Table { notice, grid } => {
            let mut out = notice
                .as_ref()
                .map(|notice| wrap("div", "truncated-warning", notice))
                .unwrap_or_default();
            out.push_str(&grid_html(grid));
            out
        }
    }
}

/// The table list. Each entry carries its name in `data-table`.
pub fn catalog_html(state: &CatalogState) -> String {
    match state {
        CatalogState::Loading => format!("<p class=\"loading\">{}</p>", LOADING_TABLES),
        CatalogState::Empty(text) => wrap("p", "placeholder", text),
        CatalogState::Failed(text) => wrap("p", "error-message", text),
        CatalogState::Ready(entries) => entries
            .iter()
            .map(|entry| {
                let class = if entry.is_active() {
                    "table-item active"
                } else {
                    "table-item"
                };
                format!(
                    "<div class=\"{}\" data-table=\"{}\">{}</div>",
                    class,
                    entry.label(),
                    entry.label()
                )
            })
            .collect(),
    }
}

/// The browse view: title, paging text and body, or the no-table prompt.
pub fn browse_html(view: &PageView) -> String {
    let title = match &view.mode {
        BrowseMode::NoTable => {
            return format!("<div class=\"table-info\"><p>{}</p></div>", NO_TABLE_PLACEHOLDER);
        }
        BrowseMode::Table { title } => title,
    };

    format!(
        concat!(
            "<div class=\"data-container\"><h2>{}</h2>",
            "<div class=\"pagination\">",
            "<button class=\"prev-page\"{}>Previous</button>",
            "<span class=\"page-info\">{}</span>",
            "<button class=\"next-page\"{}>Next</button></div>",
            "<p class=\"row-info\">{}</p>{}</div>"
        ),
        title,
        disabled_attr(view.prev_disabled),
        view.page_info,
        disabled_attr(view.next_disabled),
        view.row_info,
        panel_html(&view.body)
    )
}

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled { " disabled" } else { "" }
}

fn wrap(tag: &str, class: &str, text: &SafeText) -> String {
    format!("<{tag} class=\"{class}\">{text}</{tag}>")
}

fn push_titled(out: &mut String, tag: &str, title: &SafeText, text: &SafeText) {
    out.push_str(&format!("<{tag} title=\"{title}\">{text}</{tag}>"));
}
