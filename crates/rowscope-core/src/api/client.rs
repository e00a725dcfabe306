use crate::api::models::{
    PageResult, QueryRequest, QueryResult, Reply, SchemaColumn, TableName, Validate,
};
use crate::error::ApiError;
use crate::utils::error_helpers::{convert_json_error, convert_request_error};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("rowscope/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct RowscopeClient {
    client: Client,
    pub base_url: String,
    timeout_secs: u64,
}

impl RowscopeClient {
    // Create baseClient with default settings
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init", timeout_secs))?;

        Ok(RowscopeClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    pub fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let invalid = |message: String| ApiError::Transport {
            endpoint: format!("/{}", segments.join("/")),
            message,
        };

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| invalid(format!("Invalid server URL '{}': {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid(format!("Server URL '{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// List the names of all browsable tables.
    pub async fn list_tables(&self) -> Result<Reply<Vec<TableName>>, ApiError> {
        let endpoint = "/api/tables";
        let url = self.endpoint_url(&["api", "tables"])?;
        self.send(self.build_request(Method::GET, url), endpoint)
            .await
    }

    /// Fetch one page of rows from a table.
    pub async fn fetch_page(
        &self,
        table: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Reply<PageResult>, ApiError> {
        let endpoint = format!("/api/table/{}/data", table);
        let url = self.endpoint_url(&["api", "table", table, "data"])?;
        let request = self
            .build_request(Method::GET, url)
            .query(&[("page", page), ("per_page", per_page)]);
        self.send(request, &endpoint).await
    }

    /// Submit a read query.
    pub async fn run_query(&self, query: &str) -> Result<Reply<QueryResult>, ApiError> {
        let endpoint = "/api/query";
        let url = self.endpoint_url(&["api", "query"])?;
        let request = self
            .build_request(Method::POST, url)
            .json(&QueryRequest { query });
        self.send(request, endpoint).await
    }

    /// Describe the columns of a table.
    pub async fn table_schema(&self, table: &str) -> Result<Reply<Vec<SchemaColumn>>, ApiError> {
        let endpoint = format!("/api/table/{}/schema", table);
        let url = self.endpoint_url(&["api", "table", table, "schema"])?;
        self.send(self.build_request(Method::GET, url), &endpoint)
            .await
    }

    async fn send<T>(&self, request: RequestBuilder, endpoint: &str) -> Result<Reply<T>, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        log::debug!("Sending request to {}", endpoint);

        let response = request.send().await.map_err(|e| {
            log::warn!("Request to {} failed: {}", endpoint, e);
            convert_request_error(e, endpoint, self.timeout_secs)
        })?;

        self.handle_response(response, endpoint).await
    }

    /// Classify a response as data, a server-reported error, or a transport failure.
    ///
    /// A JSON object carrying a non-empty `error` string is a reported error
    /// whatever the status code. Anything else that is not a successful,
    /// schema-valid payload is an [`ApiError`].
    pub async fn handle_response<T>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<Reply<T>, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| convert_request_error(e, endpoint, self.timeout_secs))?;

        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(e) if status.is_success() => return Err(convert_json_error(e, endpoint)),
            Err(_) => {
                return Err(ApiError::Http {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    message: body,
                });
            }
        };

        if let Some(message) = reported_error(&value) {
            log::debug!("{} reported an error: {}", endpoint, message);
            return Ok(Reply::Reported(message));
        }

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message: body,
            });
        }

        let data: T = serde_json::from_value(value).map_err(|e| convert_json_error(e, endpoint))?;
        data.validate()
            .map_err(|message| ApiError::InvalidPayload {
                endpoint: endpoint.to_string(),
                message,
            })?;

        Ok(Reply::Data(data))
    }
}

fn reported_error(value: &Value) -> Option<String> {
    value
        .as_object()?
        .get("error")?
        .as_str()
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = RowscopeClient::new("http://example.test".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_removed() {
        let client = RowscopeClient::new("http://example.test/".to_string())
            .expect("client creation failed");
        assert_eq!(client.base_url, "http://example.test");
        assert_eq!(client.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_endpoint_url_encodes_table_name() {
        let client =
            RowscopeClient::new("http://example.test".to_string()).expect("client creation failed");
        let url = client
            .endpoint_url(&["api", "table", "weird name/x?y", "data"])
            .expect("url");
        assert_eq!(
            url.as_str(),
            "http://example.test/api/table/weird%20name%2Fx%3Fy/data"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let client = RowscopeClient::new("http://example.test/browser/".to_string())
            .expect("client creation failed");
        let url = client.endpoint_url(&["api", "tables"]).expect("url");
        assert_eq!(url.as_str(), "http://example.test/browser/api/tables");
    }

    #[test]
    fn test_endpoint_url_rejects_invalid_base() {
        let client =
            RowscopeClient::new("not a url".to_string()).expect("client creation failed");
        assert!(matches!(
            client.endpoint_url(&["api", "tables"]),
            Err(ApiError::Transport { .. })
        ));
    }

    #[test]
    fn test_build_request() {
        let client =
            RowscopeClient::new("http://example.test".to_string()).expect("client creation failed");
        let url = client.endpoint_url(&["api", "query"]).expect("url");
        let built_request = client
            .build_request(Method::POST, url)
            .build()
            .expect("Failed to build request");

        assert_eq!(built_request.url().as_str(), "http://example.test/api/query");
        assert_eq!(built_request.method(), Method::POST);
    }

    #[test]
    fn test_reported_error_detection() {
        assert_eq!(
            reported_error(&json!({"error": "Table not found"})),
            Some("Table not found".to_string())
        );
        assert_eq!(reported_error(&json!({"error": ""})), None);
        assert_eq!(reported_error(&json!({"error": null})), None);
        assert_eq!(reported_error(&json!(["error"])), None);
    }
}
