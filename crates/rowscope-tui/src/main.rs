//! rowscope-tui - Terminal UI for browsing a rowscope backend
//!
//! Two tabs: a paged table browser and a free-form query editor.

use std::io::{self, stdout};
use std::path::PathBuf;

use clap::Parser;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rowscope_core::core::ViewTab;
use rowscope_core::utils::logging;

mod action;
mod app;
mod components;
mod error;
mod event;
mod layout;
mod service;

use app::App;
use error::{TuiError, TuiResult};

#[derive(Parser, Debug)]
#[command(name = "rowscope-tui", version, about = "Browse tables and run queries in the terminal")]
struct Args {
    /// Server URL (overrides ROWSCOPE_URL and the config file)
    #[arg(long)]
    url: Option<String>,

    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tab to open on start (browse or query)
    #[arg(long, default_value = "browse")]
    tab: ViewTab,

    /// Log debug detail
    #[arg(short, long)]
    verbose: bool,

    /// Write logs here instead of the default state directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> TuiResult<()> {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a file.
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| logging::default_log_path("rowscope-tui"));
    if let Err(e) = logging::init_file(&log_path, args.verbose) {
        eprintln!("Warning: {}", e);
    }

    let (source, url) = service::init_service(args.url.as_deref(), args.config.clone())?;
    log::info!("Starting rowscope-tui on the {} tab", args.tab);

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut app = App::new(source, url, args.tab);
    let result = app.run_async(&mut terminal).await;

    restore_terminal()?;

    if let Err(ref err) = result {
        log::error!("Application error: {}", err);
    }
    result.map_err(TuiError::from)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["rowscope-tui"]);
        assert_eq!(args.tab, ViewTab::Browse);
        assert!(args.url.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_tab_and_url() {
        let args = Args::parse_from([
            "rowscope-tui",
            "--tab",
            "query",
            "--url",
            "http://db.internal:5000",
        ]);
        assert_eq!(args.tab, ViewTab::Query);
        assert_eq!(args.url.as_deref(), Some("http://db.internal:5000"));
    }

    #[test]
    fn test_unknown_tab_is_rejected() {
        assert!(Args::try_parse_from(["rowscope-tui", "--tab", "charts"]).is_err());
    }
}
