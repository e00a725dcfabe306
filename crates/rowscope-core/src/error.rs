use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Server reported an error: {0}")]
    Reported(String),
}

/// Failures that prevent a well-formed reply from reaching the client.
///
/// An `error` field inside an otherwise valid response is not an `ApiError`;
/// it arrives as [`crate::api::Reply::Reported`].
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Request failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidPayload { endpoint: String, message: String },
}

impl ApiError {
    /// True when no response arrived at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Timeout { .. } | ApiError::Transport { .. })
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
    #[error("Logging setup error: {message}")]
    Logging { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::Timeout { .. } => ErrorSeverity::Medium,
                ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                ApiError::Transport { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Utils(UtilsError::Logging { .. }) => ErrorSeverity::Critical,
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Api(ApiError::Transport { endpoint, .. }) => {
                format!("Could not reach the server ({})", endpoint)
            }
            AppError::Cli(CliError::Reported(message)) => message.clone(),
            AppError::Storage(StorageError::ConfigDirNotFound) => {
                "configuration directory not found".to_string()
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(ApiError::Transport { .. } | ApiError::Timeout { .. }) => Some(
                "Check that the server is running and ROWSCOPE_URL points at it".to_string(),
            ),
            AppError::Api(ApiError::InvalidPayload { .. }) => {
                Some("The server answered with an unexpected payload; check its version".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => Some(
                "'rowscope-cli config set --url <url>' rewrites the configuration file".to_string(),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let api_err = ApiError::Http {
            status: 502,
            endpoint: "/api/tables".to_string(),
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(format!("{}", api_err), "HTTP error: 502 Bad Gateway");

        let api_err = ApiError::Transport {
            endpoint: "/api/tables".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(format!("{}", api_err), "Request failed: connection refused");

        let api_err = ApiError::InvalidPayload {
            endpoint: "/api/query".to_string(),
            message: "missing field `columns`".to_string(),
        };
        assert_eq!(
            format!("{}", api_err),
            "Invalid response from /api/query: missing field `columns`"
        );
        assert!(!api_err.is_unreachable());
        assert!(
            ApiError::Timeout {
                timeout_secs: 30,
                endpoint: "/api/tables".to_string()
            }
            .is_unreachable()
        );
    }

    #[test]
    fn test_app_error_display_api() {
        let app_err = AppError::Api(ApiError::Timeout {
            timeout_secs: 10,
            endpoint: "endpoint".to_string(),
        });
        assert_eq!(
            format!("{}", app_err),
            "ApiError: Request timed out after 10s"
        );
        if let AppError::Api(ApiError::Timeout {
            timeout_secs,
            endpoint,
        }) = app_err
        {
            assert_eq!(timeout_secs, 10);
            assert_eq!(endpoint, "endpoint");
        }
    }

    #[test]
    fn test_severity_mapping() {
        let app_err = AppError::Api(ApiError::Http {
            status: 500,
            endpoint: "/api/query".to_string(),
            message: "boom".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);

        let app_err = AppError::Api(ApiError::Http {
            status: 404,
            endpoint: "/api/table/x/data".to_string(),
            message: "nope".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);

        let app_err = AppError::Utils(UtilsError::Validation {
            message: "Invalid input".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::Low);
        assert_eq!(
            format!("{}", app_err),
            "UtilsError: Validation error: Invalid input"
        );
    }

    #[test]
    fn test_troubleshooting_hints() {
        let app_err = AppError::Api(ApiError::Transport {
            endpoint: "/api/tables".to_string(),
            message: "refused".to_string(),
        });
        assert!(app_err.troubleshooting_hint().is_some());
        assert_eq!(
            app_err.display_friendly(),
            "Could not reach the server (/api/tables)"
        );

        let app_err = AppError::Cli(CliError::InvalidArguments("x".to_string()));
        assert!(app_err.troubleshooting_hint().is_none());
    }

    #[test]
    fn test_reported_error_is_shown_verbatim() {
        let app_err = AppError::Cli(CliError::Reported("Table not found".to_string()));
        assert_eq!(app_err.display_friendly(), "Table not found");
    }
}
