use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payloads that can be checked after deserialization.
///
/// A payload that fails validation is treated like an unparsable one.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Name of a browsable table as reported by the catalog endpoint.
pub type TableName = String;

/// A single cell as delivered by the server: any JSON scalar, or null.
pub type CellValue = Value;

/// Outcome of a request that reached the server and produced a well-formed body.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// The payload matched the expected schema.
    Data(T),
    /// The server answered with `{"error": "..."}`.
    Reported(String),
}

impl<T> Reply<T> {
    pub fn data(self) -> Option<T> {
        match self {
            Reply::Data(data) => Some(data),
            Reply::Reported(_) => None,
        }
    }
}

/// Body shape used by the server to report application errors.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Payload of `POST /api/query`.
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// One page of a table as returned by `GET /api/table/{name}/data`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PageResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Validate for PageResult {
    /// Check the structural invariants of a page before it reaches the UI.
    fn validate(&self) -> Result<(), String> {
        if self.page == 0 {
            return Err("page must be at least 1".to_string());
        }
        if self.per_page == 0 {
            return Err("per_page must be at least 1".to_string());
        }
        if self.rows.len() > self.per_page as usize {
            return Err(format!(
                "page holds {} rows but per_page is {}",
                self.rows.len(),
                self.per_page
            ));
        }
        check_row_widths(&self.columns, &self.rows)
    }
}

/// Result of an ad-hoc query as returned by `POST /api/query`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    #[serde(default)]
    pub truncated: bool,
}

impl Validate for QueryResult {
    fn validate(&self) -> Result<(), String> {
        check_row_widths(&self.columns, &self.rows)
    }
}

/// Column description returned by `GET /api/table/{name}/schema`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SchemaColumn {
    pub column: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

fn check_row_widths(columns: &[String], rows: &[Vec<CellValue>]) -> Result<(), String> {
    match rows.iter().position(|row| row.len() != columns.len()) {
        Some(index) => Err(format!(
            "row {} has {} cells, expected {}",
            index,
            rows[index].len(),
            columns.len()
        )),
        None => Ok(()),
    }
}

impl Validate for Vec<TableName> {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Validate for Vec<SchemaColumn> {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_result_deserialization() {
        let json = r#"{
            "columns": ["id", "total"],
            "rows": [[1, 9.99], [2, null]],
            "page": 1,
            "per_page": 100,
            "total": 2,
            "total_pages": 1
        }"#;

        let page: PageResult = serde_json::from_str(json).unwrap();
        assert_eq!(page.columns, vec!["id", "total"]);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[1][1], Value::Null);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_page_result_rejects_ragged_rows() {
        let page = PageResult {
            columns: vec!["a".to_string(), "b".to_string()],
            rows: vec![vec![json!(1), json!(2)], vec![json!(3)]],
            page: 1,
            per_page: 100,
            total: 2,
            total_pages: 1,
        };
        let err = page.validate().unwrap_err();
        assert_eq!(err, "row 1 has 1 cells, expected 2");
    }

    #[test]
    fn test_page_result_rejects_oversized_page() {
        let page = PageResult {
            columns: vec!["a".to_string()],
            rows: vec![vec![json!(1)], vec![json!(2)], vec![json!(3)]],
            page: 1,
            per_page: 2,
            total: 3,
            total_pages: 2,
        };
        assert!(page.validate().is_err());
    }

    #[test]
    fn test_page_result_rejects_zero_page() {
        let page = PageResult {
            columns: vec![],
            rows: vec![],
            page: 0,
            per_page: 100,
            total: 0,
            total_pages: 0,
        };
        assert!(page.validate().is_err());
    }

    #[test]
    fn test_query_result_truncated_defaults_to_false() {
        let result: QueryResult =
            serde_json::from_value(json!({"columns": ["1"], "rows": [[1]]})).unwrap();
        assert!(!result.truncated);
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_query_request_serialization() {
        let body = serde_json::to_string(&QueryRequest { query: "SELECT 1" }).unwrap();
        assert_eq!(body, r#"{"query":"SELECT 1"}"#);
    }

    #[test]
    fn test_schema_column_type_rename() {
        let columns: Vec<SchemaColumn> =
            serde_json::from_value(json!([{"column": "id", "type": "INTEGER"}])).unwrap();
        assert_eq!(columns[0].data_type, "INTEGER");
    }

    #[test]
    fn test_reply_accessors() {
        let reply: Reply<u32> = Reply::Reported("Table not found".to_string());
        assert_eq!(reply.data(), None);
        assert_eq!(Reply::Data(3).data(), Some(3));
    }
}
