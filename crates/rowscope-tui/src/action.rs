//! Application actions.
//!
//! Key handlers and background tasks never touch controller state directly;
//! they send an [`AppAction`] that the app loop applies in order.

use rowscope_core::api::models::{PageResult, QueryResult, Reply, TableName};
use rowscope_core::core::{CatalogRequest, PageFetch, QuerySubmission};
use rowscope_core::error::ApiError;

#[derive(Debug)]
pub enum AppAction {
    /// Request the table catalog
    LoadCatalog,
    CatalogLoaded(CatalogRequest, Result<Reply<Vec<TableName>>, ApiError>),

    /// Select the catalog entry at this index and load its first page
    OpenEntry(usize),
    Page(PageMove),
    PageLoaded(PageFetch, Result<Reply<PageResult>, ApiError>),

    RunQuery(String),
    QueryCompleted(QuerySubmission, Result<Reply<QueryResult>, ApiError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Previous,
    Next,
    Reload,
}
