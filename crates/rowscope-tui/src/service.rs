//! Backend connection setup.

use std::path::PathBuf;
use std::sync::Arc;

use rowscope_core::api::{DataSource, RowscopeClient};
use rowscope_core::error::AppError;
use rowscope_core::storage::config::Config;
use rowscope_core::utils::validation::validate_url;

use crate::error::TuiResult;

/// Connection status for display
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConnectionStatus {
    /// Waiting for the first response
    #[default]
    Connecting,
    /// The server answered a request
    Connected,
    /// The last request could not reach the server
    Error(String),
}

/// Build the data source from CLI overrides, environment and config file.
///
/// Returns the source together with the URL it talks to.
pub fn init_service(
    url_override: Option<&str>,
    config_path: Option<PathBuf>,
) -> TuiResult<(Arc<dyn DataSource>, String)> {
    let config = Config::load(config_path).map_err(AppError::from)?;
    let url = config.resolve_url(url_override);
    validate_url(&url)?;

    let client =
        RowscopeClient::with_timeout(url.clone(), config.timeout_secs()).map_err(AppError::from)?;
    log::info!("Using server {} (timeout {}s)", url, client.timeout_secs());

    Ok((Arc::new(client), url))
}
