//! Error types for the htmldocx library.
//!
//! Conversion and sanitization are deliberately infallible: malformed
//! markup, unknown tags, and bad CSS values are recovered from or ignored
//! rather than reported. Errors here cover the fallible library surface
//! only (document serialization).

use thiserror::Error;

/// Result type alias for htmldocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when working with converted documents.
#[derive(Error, Debug)]
pub enum Error {
    /// Error serializing a document model to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Other("something went wrong".to_string());
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON serialization error"));
    }
}
