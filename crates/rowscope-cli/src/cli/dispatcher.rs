use std::path::PathBuf;

use crate::cli::command_handlers::{BrowseHandler, ConfigHandler, QueryHandler};
use crate::cli::main_types::{Commands, OutputFormat};
use rowscope_core::api::client::RowscopeClient;
use rowscope_core::error::AppError;
use rowscope_core::storage::config::Config;
use rowscope_core::utils::validation::validate_url;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    url_override: Option<String>,
    format: OutputFormat,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        url_override: Option<String>,
        format: OutputFormat,
    ) -> Self {
        Self {
            config,
            config_path,
            url_override,
            format,
        }
    }

    fn create_client(&self) -> Result<RowscopeClient, AppError> {
        let url = self.config.resolve_url(self.url_override.as_deref());
        validate_url(&url)?;
        log::debug!("Connecting to {} (timeout {}s)", url, self.config.timeout_secs());
        Ok(RowscopeClient::with_timeout(url, self.config.timeout_secs())?)
    }

    /// Run `command` and return what should be printed on stdout.
    pub async fn dispatch(&mut self, command: Commands) -> Result<String, AppError> {
        match command {
            Commands::Config { command } => ConfigHandler::new(self.config_path.clone()).handle(
                command,
                &mut self.config,
                self.url_override.as_deref(),
            ),
            Commands::Tables => {
                let client = self.create_client()?;
                BrowseHandler::new(&client, self.format).tables().await
            }
            Commands::Page { table, page } => {
                let client = self.create_client()?;
                BrowseHandler::new(&client, self.format)
                    .page(&table, page)
                    .await
            }
            Commands::Schema { table } => {
                let client = self.create_client()?;
                BrowseHandler::new(&client, self.format).schema(&table).await
            }
            Commands::Query { query } => {
                let client = self.create_client()?;
                QueryHandler::new(&client, self.format).handle(&query).await
            }
        }
    }
}
