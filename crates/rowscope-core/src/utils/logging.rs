//! Subscriber setup for the binaries.
//!
//! Library code logs through the `log` facade; these functions install a
//! `tracing-subscriber` formatter that also receives `log` records.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::UtilsError;

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "rowscope_core=debug,rowscope_cli=debug,rowscope_tui=debug"
    } else {
        "warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr, leaving stdout for command output.
pub fn init_stderr(verbose: bool) -> Result<(), UtilsError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| UtilsError::Logging {
            message: e.to_string(),
        })
}

/// Log to a file, for front ends that own the terminal.
pub fn init_file(path: &Path, verbose: bool) -> Result<(), UtilsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| UtilsError::Logging {
            message: format!("Cannot create {}: {}", parent.display(), e),
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| UtilsError::Logging {
            message: format!("Cannot open {}: {}", path.display(), e),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| UtilsError::Logging {
            message: e.to_string(),
        })
}

/// Default log file: `~/.local/state/rowscope/<name>.log`, falling back to
/// the temp directory.
pub fn default_log_path(name: &str) -> std::path::PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("rowscope")
        .join(format!("{}.log", name))
}
