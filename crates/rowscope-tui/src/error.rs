//! Errors that stop the TUI before or while it owns the terminal.

use std::io;

use rowscope_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuiError {
    /// Raw mode, alternate screen or drawing failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Configuration, URL validation or client construction failed.
    #[error("{}", .0.display_friendly())]
    Startup(#[from] AppError),
}

pub type TuiResult<T> = Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rowscope_core::utils::validation::validate_url;

    #[test]
    fn test_startup_error_is_friendly() {
        let err = TuiError::from(validate_url("localhost:5000").expect_err("invalid"));
        assert!(err.to_string().contains("must start with http://"));
    }
}
