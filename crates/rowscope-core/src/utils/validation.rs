//! Input validation for user-supplied settings.

use crate::error::UtilsError;

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(UtilsError::Validation {
            message: "URL cannot be empty".to_string(),
        }
        .into());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(UtilsError::Validation {
            message: format!(
                "Invalid URL '{}': URL must start with http:// or https://",
                url
            ),
        }
        .into());
    }

    Ok(())
}

/// Validate a request timeout in seconds.
pub fn validate_timeout(secs: u64) -> crate::Result<()> {
    if secs == 0 || secs > 3600 {
        return Err(UtilsError::Validation {
            message: format!(
                "Invalid timeout {}s: must be between 1 and 3600 seconds",
                secs
            ),
        }
        .into());
    }
    Ok(())
}
