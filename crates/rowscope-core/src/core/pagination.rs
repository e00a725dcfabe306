//! Table selection and page navigation.
//!
//! [`PaginationController`] is the only owner of [`ViewState`]. Every request
//! it issues is a [`PageFetch`] carrying a sequence number; a completion is
//! applied only when it answers the most recent fetch, so responses that
//! arrive out of order cannot overwrite a newer view.

use crate::api::models::{PageResult, Reply, TableName};
use crate::api::source::DataSource;
use crate::display::escape::{Escaper, HtmlEscaper, SafeText};
use crate::display::grid::Grid;
use crate::display::panel::PanelContent;
use crate::error::ApiError;
use crate::utils::text::format_count;

/// Rows requested per page. Not configurable.
pub const PAGE_SIZE: u32 = 100;

pub const NO_TABLE_PLACEHOLDER: &str = "Select a table to view its data";
pub const LOADING_TABLE_MESSAGE: &str = "Loading...";

/// Which table and page the browse view is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected_table: Option<TableName>,
    current_page: u32,
    total_pages: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_table: None,
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl ViewState {
    pub fn selected_table(&self) -> Option<&str> {
        self.selected_table.as_deref()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }
}

/// A page request that has been issued and awaits its completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFetch {
    seq: u64,
    table: TableName,
    page: u32,
    per_page: u32,
}

impl PageFetch {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

/// What happened to a completion handed back to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued after this one; the result was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrowseMode {
    #[default]
    NoTable,
    Table {
        title: SafeText,
    },
}

/// Everything the browse view displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub mode: BrowseMode,
    pub page_info: String,
    pub row_info: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub body: PanelContent,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            mode: BrowseMode::NoTable,
            page_info: String::new(),
            row_info: String::new(),
            prev_disabled: true,
            next_disabled: true,
            body: PanelContent::Blank,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginationController<E: Escaper = HtmlEscaper> {
    escaper: E,
    state: ViewState,
    view: PageView,
    last_issued: u64,
    pending: Option<u64>,
}

impl<E: Escaper> PaginationController<E> {
    pub fn new(escaper: E) -> Self {
        Self {
            escaper,
            state: ViewState::default(),
            view: PageView::default(),
            last_issued: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Switch to `name` at page 1 and issue the first page request.
    pub fn select_table(&mut self, name: TableName) -> PageFetch {
        self.view = PageView {
            mode: BrowseMode::Table {
                title: self.escaper.escape(&name),
            },
            body: PanelContent::Loading(self.escaper.escape(LOADING_TABLE_MESSAGE)),
            ..PageView::default()
        };
        self.state.selected_table = Some(name.clone());
        self.state.current_page = 1;
        self.issue(name)
    }

    /// Issue a request for the current page. `None` when no table is selected.
    pub fn load_page(&mut self) -> Option<PageFetch> {
        let table = self.state.selected_table.clone()?;
        Some(self.issue(table))
    }

    /// Go straight to `page` of the selected table. Pages below 1 mean 1;
    /// pages past the end are clamped once the server reports the total.
    pub fn jump_to(&mut self, page: u32) -> Option<PageFetch> {
        self.state.selected_table.as_ref()?;
        self.state.current_page = page.max(1);
        self.load_page()
    }

    pub fn previous_page(&mut self) -> Option<PageFetch> {
        if self.state.selected_table.is_none() || self.state.current_page <= 1 {
            return None;
        }
        self.state.current_page -= 1;
        self.load_page()
    }

    pub fn next_page(&mut self) -> Option<PageFetch> {
        if self.state.selected_table.is_none()
            || self.state.current_page >= self.state.total_pages
        {
            return None;
        }
        self.state.current_page += 1;
        self.load_page()
    }

    /// Apply the outcome of `fetch` unless a newer fetch has been issued.
    pub fn complete(
        &mut self,
        fetch: &PageFetch,
        result: Result<Reply<PageResult>, ApiError>,
    ) -> Completion {
        if fetch.seq != self.last_issued {
            log::debug!(
                "Dropping stale page {} of '{}' (request {}, latest {})",
                fetch.page,
                fetch.table,
                fetch.seq,
                self.last_issued
            );
            return Completion::Stale;
        }
        self.pending = None;

        match result {
            Ok(Reply::Data(page)) => self.apply_page(page),
            Ok(Reply::Reported(message)) => {
                self.view.body = PanelContent::Error(self.escaper.escape(&message));
            }
            Err(e) => {
                log::warn!("Page request for '{}' failed: {}", fetch.table, e);
                self.view.body = PanelContent::Error(self.escaper.escape(&format!("Error: {}", e)));
            }
        }
        Completion::Applied
    }

    /// Run `fetch` against `source` and apply the result.
    pub async fn fetch<S: DataSource + ?Sized>(
        &mut self,
        source: &S,
        fetch: PageFetch,
    ) -> Completion {
        let result = source
            .fetch_page(&fetch.table, fetch.page, fetch.per_page)
            .await;
        self.complete(&fetch, result)
    }

    fn issue(&mut self, table: TableName) -> PageFetch {
        self.last_issued += 1;
        self.pending = Some(self.last_issued);
        PageFetch {
            seq: self.last_issued,
            table,
            page: self.state.current_page,
            per_page: PAGE_SIZE,
        }
    }

    fn apply_page(&mut self, page: PageResult) {
        // An empty table reports zero pages; the view always has at least one.
        let total_pages = page.total_pages.max(1);
        self.state.total_pages = total_pages;
        self.state.current_page = self.state.current_page.min(total_pages);

        let start = u64::from(page.page - 1) * u64::from(page.per_page) + 1;
        let end = (start + page.rows.len() as u64)
            .saturating_sub(1)
            .min(page.total);

        self.view.page_info = format!("Page {} of {}", page.page, total_pages);
        self.view.row_info = format!(
            "Showing rows {}-{} of {} total ({} columns)",
            start,
            end,
            format_count(page.total),
            page.columns.len()
        );
        self.view.prev_disabled = self.state.current_page <= 1;
        self.view.next_disabled = self.state.current_page >= total_pages;
        self.view.body = PanelContent::Table {
            notice: None,
            grid: Grid::build(&page.columns, &page.rows, &self.escaper),
        };
    }
}

impl Default for PaginationController<HtmlEscaper> {
    fn default() -> Self {
        Self::new(HtmlEscaper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(page: u32, total: u64, total_pages: u32, rows: usize) -> PageResult {
        PageResult {
            columns: vec!["id".to_string()],
            rows: (0..rows).map(|i| vec![json!(i)]).collect(),
            page,
            per_page: PAGE_SIZE,
            total,
            total_pages,
        }
    }

    fn on_page(controller: &mut PaginationController, target: u32, total_pages: u32) {
        let fetch = controller.select_table("events".to_string());
        controller.complete(&fetch, Ok(Reply::Data(page(1, 1_000, total_pages, 100))));
        while controller.state().current_page() < target {
            let fetch = controller.next_page().expect("next page");
            let result = page(fetch.page(), 1_000, total_pages, 100);
            controller.complete(&fetch, Ok(Reply::Data(result)));
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = PaginationController::default();
        assert_eq!(controller.state(), &ViewState::default());
        assert_eq!(controller.state().selected_table(), None);
        assert_eq!(controller.state().current_page(), 1);
        assert_eq!(controller.state().total_pages(), 1);
        assert_eq!(controller.view().mode, BrowseMode::NoTable);
    }

    #[test]
    fn test_navigation_without_table_is_noop() {
        let mut controller = PaginationController::default();
        assert!(controller.load_page().is_none());
        assert!(controller.next_page().is_none());
        assert!(controller.previous_page().is_none());
        assert_eq!(controller.state(), &ViewState::default());
    }

    #[test]
    fn test_select_table_issues_page_one() {
        let mut controller = PaginationController::default();
        let fetch = controller.select_table("orders".to_string());
        assert_eq!(fetch.table(), "orders");
        assert_eq!(fetch.page(), 1);
        assert_eq!(fetch.per_page(), PAGE_SIZE);
        assert!(controller.is_loading());
        assert_eq!(
            controller.view().mode,
            BrowseMode::Table {
                title: HtmlEscaper.escape("orders")
            }
        );
    }

    #[test]
    fn test_jump_to_page() {
        let mut controller = PaginationController::default();
        assert!(controller.jump_to(3).is_none());

        controller.select_table("orders".to_string());
        let fetch = controller.jump_to(3).expect("fetch");
        assert_eq!(fetch.page(), 3);
        assert_eq!(controller.state().current_page(), 3);

        let fetch = controller.jump_to(0).expect("fetch");
        assert_eq!(fetch.page(), 1);
    }

    #[test]
    fn test_select_table_resets_page() {
        let mut controller = PaginationController::default();
        on_page(&mut controller, 4, 10);
        assert_eq!(controller.state().current_page(), 4);

        let fetch = controller.select_table("users".to_string());
        assert_eq!(controller.state().current_page(), 1);
        assert_eq!(controller.state().selected_table(), Some("users"));
        assert_eq!(fetch.page(), 1);
    }

    #[test]
    fn test_successful_load_updates_view() {
        let mut controller = PaginationController::default();
        let fetch = controller.select_table("orders".to_string());
        let result = PageResult {
            columns: vec!["id".to_string(), "total".to_string()],
            rows: vec![vec![json!(1), json!(9.99)], vec![json!(2), json!(null)]],
            page: 1,
            per_page: 100,
            total: 2,
            total_pages: 1,
        };
        assert_eq!(
            controller.complete(&fetch, Ok(Reply::Data(result))),
            Completion::Applied
        );

        let view = controller.view();
        assert_eq!(view.page_info, "Page 1 of 1");
        assert_eq!(view.row_info, "Showing rows 1-2 of 2 total (2 columns)");
        assert!(view.prev_disabled);
        assert!(view.next_disabled);
        let grid = view.body.grid().expect("grid");
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.rows()[1][1].text().as_str(), "");
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_row_range_on_later_page() {
        let mut controller = PaginationController::default();
        let fetch = controller.select_table("events".to_string());
        controller.complete(&fetch, Ok(Reply::Data(page(1, 250, 3, 100))));
        let fetch = controller.next_page().expect("page 2");
        controller.complete(&fetch, Ok(Reply::Data(page(2, 250, 3, 100))));
        assert_eq!(
            controller.view().row_info,
            "Showing rows 101-200 of 250 total (1 columns)"
        );
        assert!(!controller.view().prev_disabled);
        assert!(!controller.view().next_disabled);

        let fetch = controller.next_page().expect("page 3");
        controller.complete(&fetch, Ok(Reply::Data(page(3, 250, 3, 50))));
        assert_eq!(
            controller.view().row_info,
            "Showing rows 201-250 of 250 total (1 columns)"
        );
        assert_eq!(controller.view().page_info, "Page 3 of 3");
        assert!(controller.view().next_disabled);
    }

    #[test]
    fn test_row_range_trusts_response_per_page() {
        let mut controller = PaginationController::default();
        let fetch = controller.select_table("events".to_string());
        controller.complete(&fetch, Ok(Reply::Data(page(1, 100, 4, 25))));
        let fetch = controller.next_page().expect("page 2");
        let mut clamped = page(2, 100, 4, 25);
        clamped.per_page = 25;
        controller.complete(&fetch, Ok(Reply::Data(clamped)));
        assert_eq!(
            controller.view().row_info,
            "Showing rows 26-50 of 100 total (1 columns)"
        );
    }

    #[test]
    fn test_total_uses_digit_grouping() {
        let mut controller = PaginationController::default();
        let fetch = controller.select_table("big".to_string());
        controller.complete(&fetch, Ok(Reply::Data(page(1, 1_234_567, 12_346, 100))));
        assert_eq!(
            controller.view().row_info,
            "Showing rows 1-100 of 1,234,567 total (1 columns)"
        );
    }

    #[test]
    fn test_boundaries_are_idempotent() {
        let mut controller = PaginationController::default();
        on_page(&mut controller, 1, 2);
        assert!(controller.previous_page().is_none());
        assert_eq!(controller.state().current_page(), 1);

        on_page(&mut controller, 2, 2);
        assert!(controller.next_page().is_none());
        assert!(controller.next_page().is_none());
        assert_eq!(controller.state().current_page(), 2);

        let fetch = controller.previous_page().expect("back to page 1");
        assert_eq!(fetch.page(), 1);
    }

    #[test]
    fn test_empty_table_has_one_page() {
        let mut controller = PaginationController::default();
        let fetch = controller.select_table("empty".to_string());
        let result = PageResult {
            columns: vec!["id".to_string()],
            rows: vec![],
            page: 1,
            per_page: 100,
            total: 0,
            total_pages: 0,
        };
        controller.complete(&fetch, Ok(Reply::Data(result)));
        assert_eq!(controller.state().total_pages(), 1);
        assert_eq!(controller.view().page_info, "Page 1 of 1");
        assert!(controller.view().next_disabled);
        assert_eq!(controller.view().body.grid().map(Grid::row_count), Some(0));
    }

    #[test]
    fn test_reported_error_keeps_state() {
        let mut controller = PaginationController::default();
        on_page(&mut controller, 2, 5);
        let before = controller.state().clone();

        let fetch = controller.load_page().expect("reload");
        controller.complete(&fetch, Ok(Reply::Reported("Table not found".to_string())));

        assert_eq!(controller.state(), &before);
        assert_eq!(
            controller.view().body,
            PanelContent::Error(HtmlEscaper.escape("Table not found"))
        );
    }

    #[test]
    fn test_transport_error_keeps_total_pages() {
        let mut controller = PaginationController::default();
        on_page(&mut controller, 1, 5);

        let fetch = controller.next_page().expect("page 2");
        controller.complete(
            &fetch,
            Err(ApiError::Transport {
                endpoint: "/api/table/events/data".to_string(),
                message: "<reset>".to_string(),
            }),
        );

        assert_eq!(controller.state().total_pages(), 5);
        assert_eq!(
            controller.view().body.message().map(SafeText::as_str),
            Some("Error: Request failed: &lt;reset&gt;")
        );
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut controller = PaginationController::default();
        on_page(&mut controller, 1, 5);

        let second = controller.next_page().expect("page 2");
        let third = controller.next_page().expect("page 3");

        assert_eq!(
            controller.complete(&third, Ok(Reply::Data(page(3, 1_000, 5, 100)))),
            Completion::Applied
        );
        assert_eq!(
            controller.complete(&second, Ok(Reply::Data(page(2, 1_000, 5, 100)))),
            Completion::Stale
        );
        assert_eq!(controller.view().page_info, "Page 3 of 5");
        assert_eq!(controller.state().current_page(), 3);
    }

    #[test]
    fn test_response_for_previous_table_is_dropped() {
        let mut controller = PaginationController::default();
        let old = controller.select_table("users".to_string());
        let new = controller.select_table("orders".to_string());

        assert_eq!(
            controller.complete(&old, Ok(Reply::Data(page(1, 10, 1, 10)))),
            Completion::Stale
        );
        assert!(controller.is_loading());
        assert_eq!(
            controller.complete(&new, Ok(Reply::Data(page(1, 3, 1, 3)))),
            Completion::Applied
        );
    }

    #[test]
    fn test_shrunken_table_clamps_current_page() {
        let mut controller = PaginationController::default();
        on_page(&mut controller, 3, 3);

        let fetch = controller.load_page().expect("reload");
        controller.complete(&fetch, Ok(Reply::Data(page(3, 150, 2, 0))));
        assert_eq!(controller.state().total_pages(), 2);
        assert_eq!(controller.state().current_page(), 2);
        assert!(controller.view().next_disabled);
    }
}
