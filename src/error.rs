// src/error.rs

//! Unified error handling for the search application.

use std::fmt;

use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Highlighting and debouncing never produce one of these; they degrade to
/// fallback output instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// WordPress answered with a non-success status
    #[error("WordPress API error {status} for {url}")]
    Api { status: u16, url: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Search failed for a query
    #[error("Search error for '{query}': {message}")]
    Search { query: String, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an API status error.
    pub fn api(status: reqwest::StatusCode, url: impl Into<String>) -> Self {
        Self::Api {
            status: status.as_u16(),
            url: url.into(),
        }
    }

    /// Create a search error with the offending query.
    pub fn search(query: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Search {
            query: query.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = AppError::api(
            reqwest::StatusCode::NOT_FOUND,
            "https://cms.example.com/wp-json/wp/v2/posts",
        );
        assert_eq!(
            err.to_string(),
            "WordPress API error 404 for https://cms.example.com/wp-json/wp/v2/posts"
        );
    }

    #[test]
    fn test_search_error_message() {
        let err = AppError::search("cinco", "timed out");
        assert_eq!(err.to_string(), "Search error for 'cinco': timed out");
    }
}
