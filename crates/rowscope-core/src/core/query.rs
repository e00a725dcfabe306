//! Ad-hoc query submission and the query result panel.

use crate::api::models::{QueryResult, Reply};
use crate::api::source::DataSource;
use crate::core::pagination::Completion;
use crate::display::escape::{Escaper, HtmlEscaper};
use crate::display::grid::Grid;
use crate::display::panel::PanelContent;
use crate::error::ApiError;

pub const TRUNCATION_NOTICE: &str = "Results truncated to 1000 rows";
pub const EMPTY_QUERY_PLACEHOLDER: &str = "Enter a query to run";
pub const RUNNING_MESSAGE: &str = "Running query...";

/// A submitted query awaiting its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySubmission {
    seq: u64,
    text: String,
}

impl QuerySubmission {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The trimmed query text sent to the server.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Runs queries and owns the result panel. Independent of table browsing.
#[derive(Debug, Clone)]
pub struct QueryExecutor<E: Escaper = HtmlEscaper> {
    escaper: E,
    panel: PanelContent,
    last_issued: u64,
}

impl<E: Escaper> QueryExecutor<E> {
    pub fn new(escaper: E) -> Self {
        Self {
            escaper,
            panel: PanelContent::Blank,
            last_issued: 0,
        }
    }

    pub fn panel(&self) -> &PanelContent {
        &self.panel
    }

    /// Start a query. Blank text shows the prompt and issues nothing.
    ///
    /// Every call with non-blank text issues a fresh submission, even when the
    /// text is unchanged.
    pub fn run(&mut self, text: &str) -> Option<QuerySubmission> {
        let text = text.trim();
        if text.is_empty() {
            self.panel = PanelContent::Placeholder(self.escaper.escape(EMPTY_QUERY_PLACEHOLDER));
            return None;
        }

        self.last_issued += 1;
        self.panel = PanelContent::Loading(self.escaper.escape(RUNNING_MESSAGE));
        Some(QuerySubmission {
            seq: self.last_issued,
            text: text.to_string(),
        })
    }

    pub fn complete(
        &mut self,
        submission: &QuerySubmission,
        result: Result<Reply<QueryResult>, ApiError>,
    ) -> Completion {
        if submission.seq != self.last_issued {
            log::debug!(
                "Dropping stale query result (request {}, latest {})",
                submission.seq,
                self.last_issued
            );
            return Completion::Stale;
        }

        self.panel = match result {
            Ok(Reply::Data(result)) => {
                log::debug!(
                    "Query returned {} rows x {} columns (truncated: {})",
                    result.rows.len(),
                    result.columns.len(),
                    result.truncated
                );
                PanelContent::Table {
                    notice: result
                        .truncated
                        .then(|| self.escaper.escape(TRUNCATION_NOTICE)),
                    grid: Grid::build(&result.columns, &result.rows, &self.escaper),
                }
            }
            Ok(Reply::Reported(message)) => PanelContent::Error(self.escaper.escape(&message)),
            Err(e) => {
                log::warn!("Query request failed: {}", e);
                PanelContent::Error(self.escaper.escape(&format!("Error: {}", e)))
            }
        };
        Completion::Applied
    }

    /// Submit `text` to `source` and apply the result.
    pub async fn execute<S: DataSource + ?Sized>(&mut self, source: &S, text: &str) -> Completion {
        let Some(submission) = self.run(text) else {
            return Completion::Applied;
        };
        let result = source.run_query(&submission.text).await;
        self.complete(&submission, result)
    }
}

impl Default for QueryExecutor<HtmlEscaper> {
    fn default() -> Self {
        Self::new(HtmlEscaper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::MemorySource;
    use crate::display::escape::SafeText;
    use serde_json::json;

    fn one_by_one(truncated: bool) -> QueryResult {
        QueryResult {
            columns: vec!["1".to_string()],
            rows: vec![vec![json!(1)]],
            truncated,
        }
    }

    #[tokio::test]
    async fn test_blank_query_issues_no_request() {
        let source = MemorySource::default();
        let mut executor = QueryExecutor::default();

        for text in ["", "   ", "\n\t "] {
            executor.execute(&source, text).await;
            assert_eq!(
                executor.panel(),
                &PanelContent::Placeholder(HtmlEscaper.escape(EMPTY_QUERY_PLACEHOLDER))
            );
        }
        assert!(source.calls().is_empty());
    }

    #[test]
    fn test_run_shows_running_indicator() {
        let mut executor = QueryExecutor::default();
        let submission = executor.run("  SELECT 1 ").expect("submission");
        assert_eq!(submission.text(), "SELECT 1");
        assert!(executor.panel().is_loading());
    }

    #[test]
    fn test_untruncated_result_has_no_notice() {
        let mut executor = QueryExecutor::default();
        let submission = executor.run("SELECT 1").expect("submission");
        executor.complete(&submission, Ok(Reply::Data(one_by_one(false))));

        let grid = executor.panel().grid().expect("grid");
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.rows()[0][0].text().as_str(), "1");
        assert!(executor.panel().notice().is_none());
    }

    #[test]
    fn test_truncated_result_carries_notice() {
        let mut executor = QueryExecutor::default();
        let submission = executor.run("SELECT 1").expect("submission");
        executor.complete(&submission, Ok(Reply::Data(one_by_one(true))));

        assert_eq!(
            executor.panel().notice().map(SafeText::as_str),
            Some(TRUNCATION_NOTICE)
        );
        assert!(executor.panel().grid().is_some());
    }

    #[test]
    fn test_reported_error_renders_message_only() {
        let mut executor = QueryExecutor::default();
        let submission = executor.run("SELEC 1").expect("submission");
        executor.complete(
            &submission,
            Ok(Reply::Reported("syntax error near SELECT".to_string())),
        );

        assert_eq!(
            executor.panel(),
            &PanelContent::Error(HtmlEscaper.escape("syntax error near SELECT"))
        );
        assert!(executor.panel().grid().is_none());
    }

    #[test]
    fn test_transport_error_is_prefixed() {
        let mut executor = QueryExecutor::default();
        let submission = executor.run("SELECT 1").expect("submission");
        executor.complete(
            &submission,
            Err(ApiError::Timeout {
                timeout_secs: 30,
                endpoint: "/api/query".to_string(),
            }),
        );

        assert_eq!(
            executor.panel().message().map(SafeText::as_str),
            Some("Error: Request timed out after 30s")
        );
    }

    #[test]
    fn test_column_aliases_are_escaped() {
        let mut executor = QueryExecutor::default();
        let submission = executor.run("SELECT 1 AS x").expect("submission");
        let result = QueryResult {
            columns: vec!["<img src=x onerror=alert(1)>".to_string()],
            rows: vec![vec![json!("\"quoted\"")]],
            truncated: false,
        };
        executor.complete(&submission, Ok(Reply::Data(result)));

        let grid = executor.panel().grid().expect("grid");
        assert_eq!(
            grid.header()[0].text().as_str(),
            "&lt;img src=x onerror=alert(1)&gt;"
        );
        assert_eq!(grid.rows()[0][0].text().as_str(), "&quot;quoted&quot;");
    }

    #[test]
    fn test_older_submission_is_stale() {
        let mut executor = QueryExecutor::default();
        let first = executor.run("SELECT 1").expect("first");
        let second = executor.run("SELECT 2").expect("second");

        assert_eq!(
            executor.complete(&second, Ok(Reply::Data(one_by_one(false)))),
            Completion::Applied
        );
        assert_eq!(
            executor.complete(&first, Ok(Reply::Reported("late".to_string()))),
            Completion::Stale
        );
        assert!(executor.panel().grid().is_some());
    }

    #[tokio::test]
    async fn test_identical_text_repeats_request() {
        let source = MemorySource::default().with_query(Reply::Data(one_by_one(false)));
        let mut executor = QueryExecutor::default();

        executor.execute(&source, "SELECT 1").await;
        executor.execute(&source, "SELECT 1").await;
        assert_eq!(
            source.calls(),
            vec!["/api/query SELECT 1".to_string(), "/api/query SELECT 1".to_string()]
        );
        assert!(executor.panel().grid().is_some());
    }
}
