//! The data seam between controllers and the backend.

use async_trait::async_trait;

use crate::api::client::RowscopeClient;
use crate::api::models::{PageResult, QueryResult, Reply, SchemaColumn, TableName};
use crate::error::ApiError;

/// Anything that can answer the four backend requests.
///
/// The HTTP client is the production implementation; tests substitute an
/// in-memory source.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn list_tables(&self) -> Result<Reply<Vec<TableName>>, ApiError>;

    async fn fetch_page(
        &self,
        table: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Reply<PageResult>, ApiError>;

    async fn run_query(&self, query: &str) -> Result<Reply<QueryResult>, ApiError>;

    async fn table_schema(&self, table: &str) -> Result<Reply<Vec<SchemaColumn>>, ApiError>;
}

#[async_trait]
impl DataSource for RowscopeClient {
    async fn list_tables(&self) -> Result<Reply<Vec<TableName>>, ApiError> {
        RowscopeClient::list_tables(self).await
    }

    async fn fetch_page(
        &self,
        table: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Reply<PageResult>, ApiError> {
        RowscopeClient::fetch_page(self, table, page, per_page).await
    }

    async fn run_query(&self, query: &str) -> Result<Reply<QueryResult>, ApiError> {
        RowscopeClient::run_query(self, query).await
    }

    async fn table_schema(&self, table: &str) -> Result<Reply<Vec<SchemaColumn>>, ApiError> {
        RowscopeClient::table_schema(self, table).await
    }
}
