//! Controllers for catalog loading, pagination, queries and tab switching.
//!
//! Controllers are synchronous state machines. Each network-bound operation
//! returns a ticket that the caller completes with the request's result,
//! either through the async helpers here or from a spawned task.

pub mod catalog;
pub mod pagination;
pub mod query;
pub mod session;
pub mod tabs;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{CatalogEntry, CatalogLoader, CatalogRequest, CatalogState};
pub use pagination::{BrowseMode, Completion, PAGE_SIZE, PageFetch, PageView, PaginationController, ViewState};
pub use query::{QueryExecutor, QuerySubmission};
pub use session::BrowserSession;
pub use tabs::{TabCoordinator, ViewTab};
