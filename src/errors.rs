/*!
 * Error types for the shownamer application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the episode catalog service
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when making an API request fails
    #[error("Catalog request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse catalog response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("Catalog responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication
    #[error("Catalog authentication failed: {0}")]
    AuthenticationError(String),

    /// No series in the catalog matched the query
    #[error("No series found for query: {0}")]
    SeriesNotFound(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            CatalogError::ParseError(error.to_string())
        } else {
            CatalogError::RequestFailed(error.to_string())
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the catalog service
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error in the application configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
