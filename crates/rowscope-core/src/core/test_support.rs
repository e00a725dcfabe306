//! In-memory [`DataSource`] for controller tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::models::{PageResult, QueryResult, Reply, SchemaColumn, TableName};
use crate::api::source::DataSource;
use crate::error::ApiError;

#[derive(Default)]
pub struct MemorySource {
    pub tables: Vec<TableName>,
    pub pages: HashMap<(String, u32), Reply<PageResult>>,
    pub query: Option<Reply<QueryResult>>,
    /// When set, every request fails with a transport error carrying this text.
    pub offline: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn with_tables(tables: &[&str]) -> Self {
        Self {
            tables: tables.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, reply: Reply<QueryResult>) -> Self {
        self.query = Some(reply);
        self
    }

    /// Fail every request with a transport error carrying `message`.
    pub fn offline(mut self, message: &str) -> Self {
        self.offline = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, endpoint: String) -> Result<(), ApiError> {
        self.calls.lock().expect("calls lock").push(endpoint.clone());
        match &self.offline {
            Some(message) => Err(ApiError::Transport {
                endpoint,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn list_tables(&self) -> Result<Reply<Vec<TableName>>, ApiError> {
        self.record("/api/tables".to_string())?;
        Ok(Reply::Data(self.tables.clone()))
    }

    async fn fetch_page(
        &self,
        table: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Reply<PageResult>, ApiError> {
        self.record(format!("/api/table/{}/data?page={}&per_page={}", table, page, per_page))?;
        Ok(self
            .pages
            .get(&(table.to_string(), page))
            .cloned()
            .unwrap_or_else(|| Reply::Reported(format!("Table '{}' not found", table))))
    }

    async fn run_query(&self, query: &str) -> Result<Reply<QueryResult>, ApiError> {
        self.record(format!("/api/query {}", query))?;
        Ok(self
            .query
            .clone()
            .unwrap_or_else(|| Reply::Reported("No query provided".to_string())))
    }

    async fn table_schema(&self, table: &str) -> Result<Reply<Vec<SchemaColumn>>, ApiError> {
        self.record(format!("/api/table/{}/schema", table))?;
        Ok(Reply::Data(Vec::new()))
    }
}
