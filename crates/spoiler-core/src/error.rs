use core::result::Result as CoreResult;
use std::io::Error as IoError;

use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for Story Spoiler client operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors raised while configuring, authenticating, or talking to the API.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// The HTTP request could not be completed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// A request or response body was not valid JSON for the expected shape.
    #[error("JSON serialization error: {0}")]
    Json(#[from] SerdeJsonError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] TomlError),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The login endpoint answered with a non-success status.
    #[error("Authentication failed with status {status}: {body}")]
    Authentication {
        /// HTTP status code returned by the login endpoint
        status: u16,
        /// Raw response body
        body: String,
    },
}

impl Error {
    /// Whether the error happened below HTTP, before any status was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value as JsonValue, from_str};
    use std::io;

    #[test]
    fn test_error_display() {
        let config_error = Error::Config("base_url is empty".to_owned());
        assert_eq!(
            config_error.to_string(),
            "Configuration error: base_url is empty"
        );

        let auth_error = Error::Authentication {
            status: 401,
            body: "Invalid credentials".to_owned(),
        };
        assert_eq!(
            auth_error.to_string(),
            "Authentication failed with status 401: Invalid credentials"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "config.toml");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(!error.is_transport());
    }

    #[test]
    fn test_error_from_json() {
        let json_error = from_str::<JsonValue>("not json").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
