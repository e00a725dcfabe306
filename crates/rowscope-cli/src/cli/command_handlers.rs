use std::path::PathBuf;

use rowscope_core::api::{DataSource, Reply};
use rowscope_core::core::query::EMPTY_QUERY_PLACEHOLDER;
use rowscope_core::core::{BrowseMode, CatalogLoader, CatalogState, PageView, PaginationController, QueryExecutor};
use rowscope_core::display::html::{browse_html, catalog_html, grid_html, panel_html};
use rowscope_core::display::{ConsoleTable, Escaper, Grid, HtmlEscaper, TerminalEscaper};
use rowscope_core::error::{ApiError, AppError, CliError};
use rowscope_core::storage::config::{Config, URL_ENV_VAR};
use rowscope_core::utils::validation::{validate_timeout, validate_url};
use serde_json::Value;

use crate::cli::main_types::{ConfigCommands, OutputFormat};

/// Unwrap a reply, turning a server-reported error into a CLI failure.
fn require<T>(result: Result<Reply<T>, ApiError>) -> Result<T, AppError> {
    match result? {
        Reply::Data(data) => Ok(data),
        Reply::Reported(message) => Err(CliError::Reported(message).into()),
    }
}

fn catalog_text(state: &CatalogState) -> String {
    match state {
        CatalogState::Loading => String::new(),
        CatalogState::Empty(text) | CatalogState::Failed(text) => text.to_string(),
        CatalogState::Ready(entries) => entries
            .iter()
            .map(|entry| entry.label().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Tables, pages and schemas.
pub struct BrowseHandler<'a> {
    source: &'a dyn DataSource,
    format: OutputFormat,
    console: ConsoleTable,
}

impl<'a> BrowseHandler<'a> {
    pub fn new(source: &'a dyn DataSource, format: OutputFormat) -> Self {
        Self {
            source,
            format,
            console: ConsoleTable::new(),
        }
    }

    pub fn with_console(mut self, console: ConsoleTable) -> Self {
        self.console = console;
        self
    }

    pub async fn tables(&self) -> Result<String, AppError> {
        let names = require(self.source.list_tables().await)?;
        log::debug!("Server listed {} tables", names.len());

        Ok(match self.format {
            OutputFormat::Text => {
                let mut catalog = CatalogLoader::new(TerminalEscaper);
                catalog.apply(Ok(Reply::Data(names)));
                catalog_text(catalog.state())
            }
            OutputFormat::Html => {
                let mut catalog = CatalogLoader::new(HtmlEscaper);
                catalog.apply(Ok(Reply::Data(names)));
                catalog_html(catalog.state())
            }
        })
    }

    pub async fn page(&self, table: &str, page: u32) -> Result<String, AppError> {
        match self.format {
            OutputFormat::Text => {
                let mut controller = PaginationController::new(TerminalEscaper);
                self.load_page(&mut controller, table, page).await?;
                Ok(self.page_text(controller.view()))
            }
            OutputFormat::Html => {
                let mut controller = PaginationController::new(HtmlEscaper);
                self.load_page(&mut controller, table, page).await?;
                Ok(browse_html(controller.view()))
            }
        }
    }

    async fn load_page<E: Escaper>(
        &self,
        controller: &mut PaginationController<E>,
        table: &str,
        page: u32,
    ) -> Result<(), AppError> {
        let first = controller.select_table(table.to_string());
        let fetch = controller.jump_to(page).unwrap_or(first);
        let result = require(
            self.source
                .fetch_page(fetch.table(), fetch.page(), fetch.per_page())
                .await,
        )?;
        controller.complete(&fetch, Ok(Reply::Data(result)));

        let total_pages = controller.state().total_pages();
        if fetch.page() > total_pages {
            return Err(CliError::InvalidArguments(format!(
                "page {} is past the end of '{}' ({} pages)",
                fetch.page(),
                table,
                total_pages
            ))
            .into());
        }
        Ok(())
    }

    fn page_text(&self, view: &PageView) -> String {
        let title = match &view.mode {
            BrowseMode::Table { title } => title.to_string(),
            BrowseMode::NoTable => String::new(),
        };
        format!(
            "{}\n{}\n{}\n{}",
            title,
            view.page_info,
            view.row_info,
            self.console.render_panel(&view.body)
        )
    }

    pub async fn schema(&self, table: &str) -> Result<String, AppError> {
        let columns = require(self.source.table_schema(table).await)?;
        let header = ["column".to_string(), "type".to_string()];
        let rows: Vec<Vec<Value>> = columns
            .into_iter()
            .map(|c| vec![Value::String(c.column), Value::String(c.data_type)])
            .collect();

        Ok(match self.format {
            OutputFormat::Text => self
                .console
                .render_grid(&Grid::build(&header, &rows, &TerminalEscaper)),
            OutputFormat::Html => grid_html(&Grid::build(&header, &rows, &HtmlEscaper)),
        })
    }
}

pub struct QueryHandler<'a> {
    source: &'a dyn DataSource,
    format: OutputFormat,
    console: ConsoleTable,
}

impl<'a> QueryHandler<'a> {
    pub fn new(source: &'a dyn DataSource, format: OutputFormat) -> Self {
        Self {
            source,
            format,
            console: ConsoleTable::new(),
        }
    }

    pub fn with_console(mut self, console: ConsoleTable) -> Self {
        self.console = console;
        self
    }

    pub async fn handle(&self, query: &str) -> Result<String, AppError> {
        match self.format {
            OutputFormat::Text => {
                let mut executor = QueryExecutor::new(TerminalEscaper);
                self.execute(&mut executor, query).await?;
                Ok(self.console.render_panel(executor.panel()))
            }
            OutputFormat::Html => {
                let mut executor = QueryExecutor::new(HtmlEscaper);
                self.execute(&mut executor, query).await?;
                Ok(panel_html(executor.panel()))
            }
        }
    }

    async fn execute<E: Escaper>(
        &self,
        executor: &mut QueryExecutor<E>,
        query: &str,
    ) -> Result<(), AppError> {
        let submission = executor.run(query).ok_or_else(|| {
            CliError::InvalidArguments(EMPTY_QUERY_PLACEHOLDER.to_string())
        })?;
        let result = require(self.source.run_query(submission.text()).await)?;
        executor.complete(&submission, Ok(Reply::Data(result)));
        Ok(())
    }
}

#[derive(Default)]
pub struct ConfigHandler {
    config_path: Option<PathBuf>,
}

impl ConfigHandler {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config: &mut Config,
        url_override: Option<&str>,
    ) -> Result<String, AppError> {
        match command {
            ConfigCommands::Show => Ok(self.show(config, url_override, std::env::var(URL_ENV_VAR).ok())),
            ConfigCommands::Set { url, timeout } => {
                if url.is_none() && timeout.is_none() {
                    return Err(CliError::InvalidArguments(
                        "No configuration values provided. Use --url and/or --timeout".to_string(),
                    )
                    .into());
                }

                let mut updated = Vec::new();
                if let Some(url) = url {
                    validate_url(&url)?;
                    updated.push(format!("URL to {}", url));
                    config.set_url(url);
                }
                if let Some(secs) = timeout {
                    validate_timeout(secs)?;
                    updated.push(format!("timeout to {}s", secs));
                    config.set_timeout_secs(secs);
                }

                let path = config.save(self.config_path.clone())?;
                Ok(format!(
                    "✅ Set {}\nConfiguration saved to {}",
                    updated.join(", "),
                    path.display()
                ))
            }
        }
    }

    fn show(&self, config: &Config, url_override: Option<&str>, env_url: Option<String>) -> String {
        let path = match &self.config_path {
            Some(path) => path.display().to_string(),
            None => Config::config_file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|e| format!("<{}>", e)),
        };
        let origin = if url_override.is_some() {
            "--url"
        } else if env_url.as_deref().is_some_and(|s| !s.is_empty()) {
            URL_ENV_VAR
        } else if config.url.is_some() {
            "config file"
        } else {
            "default"
        };

        let mut lines = vec![
            "Current Configuration:".to_string(),
            "=====================".to_string(),
            format!("Config file: {}", path),
            format!(
                "URL: {} (from {})",
                config.resolve_url_with_env(url_override, env_url),
                origin
            ),
            format!("Timeout: {}s", config.timeout_secs()),
        ];
        if config.timeout_secs.is_none() {
            lines.push("  (default timeout)".to_string());
        }
        lines.join("\n")
    }
}
