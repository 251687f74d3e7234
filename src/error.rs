//! Error handling module for shoptui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

#![allow(dead_code)] // Error variants and helpers are available for future use

use thiserror::Error;

/// Main error type for shoptui
#[derive(Error, Debug)]
pub enum ShopError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog errors (loading, malformed product data)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Validation errors (user input, form fields)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend/API errors (stubbed requests, order submission)
    #[error("API error: {0}")]
    Api(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// State errors (mutex poisoning, invalid state)
    #[error("State error: {0}")]
    State(String),

    /// Checkout errors (empty cart, missing profile or address)
    #[error("Checkout error: {0}")]
    Checkout(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for shoptui operations
pub type Result<T> = std::result::Result<T, ShopError>;

// Convenient error constructors
impl ShopError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an API error
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a checkout error
    pub fn checkout(msg: impl Into<String>) -> Self {
        Self::Checkout(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Helper function to create general errors (for backward compatibility)
pub fn general_error(msg: impl Into<String>) -> ShopError {
    ShopError::General(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShopError::config("carousel interval too short");
        assert_eq!(
            err.to_string(),
            "Configuration error: carousel interval too short"
        );

        let err = ShopError::validation("email address is not valid");
        assert_eq!(
            err.to_string(),
            "Validation error: email address is not valid"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ShopError = io_err.into();
        assert!(matches!(err, ShopError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = ShopError::catalog("duplicate product id");
        assert!(matches!(err, ShopError::Catalog(_)));

        let err = ShopError::checkout("cart is empty");
        assert!(matches!(err, ShopError::Checkout(_)));
    }
}
