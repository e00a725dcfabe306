//! One browsing session: catalog, pagination, query panel and tabs together.

use crate::api::models::TableName;
use crate::api::source::DataSource;
use crate::core::catalog::CatalogLoader;
use crate::core::pagination::{Completion, PageFetch, PaginationController};
use crate::core::query::QueryExecutor;
use crate::core::tabs::{TabCoordinator, ViewTab};
use crate::display::escape::{Escaper, HtmlEscaper};

/// Wires the controllers the way the browser page does.
///
/// The catalog's active marker follows table selection; the query panel and
/// tabs stay independent of both.
#[derive(Debug, Clone)]
pub struct BrowserSession<E: Escaper + Clone = HtmlEscaper> {
    pub catalog: CatalogLoader<E>,
    pub pagination: PaginationController<E>,
    pub query: QueryExecutor<E>,
    pub tabs: TabCoordinator,
}

impl<E: Escaper + Clone> BrowserSession<E> {
    pub fn new(escaper: E, initial_tab: ViewTab) -> Self {
        Self {
            catalog: CatalogLoader::new(escaper.clone()),
            pagination: PaginationController::new(escaper.clone()),
            query: QueryExecutor::new(escaper),
            tabs: TabCoordinator::new(initial_tab),
        }
    }

    /// Mark `name` active in the catalog and start loading its first page.
    pub fn select_table(&mut self, name: TableName) -> PageFetch {
        if !self.catalog.mark_active(&name) {
            log::debug!("Selected table '{}' is not in the catalog", name);
        }
        self.pagination.select_table(name)
    }

    /// Select the catalog entry at `index`, if there is one.
    pub fn select_entry(&mut self, index: usize) -> Option<PageFetch> {
        let name = self.catalog.entry(index)?.name().to_string();
        Some(self.select_table(name))
    }

    pub async fn load_catalog<S: DataSource + ?Sized>(&mut self, source: &S) -> Completion {
        self.catalog.load(source).await
    }

    pub async fn open_table<S: DataSource + ?Sized>(
        &mut self,
        source: &S,
        name: TableName,
    ) -> Completion {
        let fetch = self.select_table(name);
        self.pagination.fetch(source, fetch).await
    }

    pub async fn next_page<S: DataSource + ?Sized>(&mut self, source: &S) -> Option<Completion> {
        let fetch = self.pagination.next_page()?;
        Some(self.pagination.fetch(source, fetch).await)
    }

    pub async fn previous_page<S: DataSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Option<Completion> {
        let fetch = self.pagination.previous_page()?;
        Some(self.pagination.fetch(source, fetch).await)
    }

    pub async fn run_query<S: DataSource + ?Sized>(&mut self, source: &S, text: &str) -> Completion {
        self.query.execute(source, text).await
    }
}

impl Default for BrowserSession<HtmlEscaper> {
    fn default() -> Self {
        Self::new(HtmlEscaper, ViewTab::Browse)
    }
}
