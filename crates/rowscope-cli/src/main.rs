use std::io::{self, Write};

use clap::Parser;
use rowscope_core::display::{Escaper, TerminalEscaper};
use rowscope_core::error::AppError;
use rowscope_core::storage::config::Config;
use rowscope_core::utils::error_helpers::convert_io_to_display_error;
use rowscope_core::utils::logging;

mod cli;

use cli::dispatcher::Dispatcher;
use cli::main_types::Cli;

/// Error text for stderr. Server-supplied messages are escaped like any
/// other terminal output.
fn error_report(err: &AppError) -> String {
    let mut out = format!(
        "{} Error: {}",
        err.severity().emoji(),
        TerminalEscaper.escape(&err.display_friendly())
    );
    if let Some(hint) = err.troubleshooting_hint() {
        out.push_str(&format!("\n   Hint: {}", hint));
    }
    out
}

fn report(err: &AppError) {
    eprintln!("{}", error_report(err));
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_stderr(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let config = match Config::load(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            report(&AppError::from(err));
            std::process::exit(1);
        }
    };

    let mut dispatcher = Dispatcher::new(config, cli.config, cli.url, cli.format);
    match dispatcher.dispatch(cli.command).await {
        Ok(output) => {
            // A closed pipe (`| head`) is reported, not a panic.
            if let Err(e) = writeln!(io::stdout().lock(), "{}", output) {
                report(&AppError::from(convert_io_to_display_error(e, "Writing output")));
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            report(&e);
            std::process::exit(1);
        }
    }
}
