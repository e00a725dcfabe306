pub mod client;
pub mod models;
pub mod source;

pub use client::RowscopeClient;
pub use models::{PageResult, QueryResult, Reply, SchemaColumn, TableName};
pub use source::DataSource;
