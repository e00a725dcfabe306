//! # rowscope-core
//!
//! Core library for browsing tables and running read-only queries against a
//! rowscope backend.
//!
//! This crate provides the shared functionality used by both `rowscope-cli`
//! and `rowscope-tui`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowscope_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> rowscope_core::Result<()> {
//!     let config = Config::load(None)?;
//!     let client = RowscopeClient::new(config.resolve_url(None))?;
//!
//!     let mut session = BrowserSession::default();
//!     session.load_catalog(&client).await;
//!     if let Some(fetch) = session.select_entry(0) {
//!         session.pagination.fetch(&client, fetch).await;
//!     }
//!     println!("{}", session.pagination.view().row_info);
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           API Layer                 │  HTTP client, payload schemas, DataSource seam
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  Catalog, pagination, query and tab controllers
//! ├─────────────────────────────────────┤
//! │        Display Layer                │  Escapers, grids, panels, HTML and console output
//! ├─────────────────────────────────────┤
//! │   Storage / Utils Layers            │  Configuration, logging, text helpers
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Escaping
//!
//! Server-supplied strings reach a surface only as [`display::SafeText`],
//! which only an [`display::Escaper`] can produce. Pick
//! [`display::HtmlEscaper`] for markup and [`display::TerminalEscaper`] for
//! terminals.

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::{ApiError, AppError};

    pub use crate::api::client::RowscopeClient;
    pub use crate::api::models::{PageResult, QueryResult, Reply, SchemaColumn, TableName};
    pub use crate::api::source::DataSource;

    pub use crate::core::{
        BrowserSession, CatalogLoader, CatalogState, Completion, PAGE_SIZE, PaginationController,
        QueryExecutor, TabCoordinator, ViewTab,
    };

    pub use crate::display::{
        ConsoleTable, Escaper, Grid, HtmlEscaper, PanelContent, SafeText, TerminalEscaper,
    };

    pub use crate::storage::config::Config;
}

/// API layer - HTTP client, payload schemas and the data source seam.
pub mod api;

/// Controllers for the catalog, pagination, queries and tabs.
///
/// - [`core::catalog`]: table list and the active entry
/// - [`core::pagination`]: view state and page requests
/// - [`core::query`]: ad-hoc queries and their result panel
/// - [`core::tabs`]: top-level view switching
/// - [`core::session`]: all of the above wired together
pub mod core;

/// Display layer - escaping, grids, panels and their serializations.
pub mod display;

/// Error handling - hierarchical error system.
///
/// - Domain-specific error variants (API, CLI, Storage, ...)
/// - Severity levels (Critical, High, Medium, Low)
/// - Troubleshooting hints for common issues
pub mod error;

/// Storage layer - TOML configuration.
pub mod storage;

/// Utilities layer - logging setup, validation and text formatting.
pub mod utils;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
