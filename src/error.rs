//! Unified error types for the Argos BDD suite

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the Argos BDD suite
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// WebDriver protocol errors
    #[error("WebDriver error: {0}")]
    WebDriver(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported browser kind in configuration
    #[error("Unsupported browser: {0}")]
    UnsupportedBrowser(String),

    /// Element not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Element reference went stale after a page re-render
    #[error("Stale element: {0}")]
    Stale(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Displayed text could not be parsed into a value
    #[error("Parse error: {0}")]
    Parse(String),

    /// A scenario assertion did not hold
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new WebDriver error
    pub fn webdriver<S: Into<String>>(msg: S) -> Self {
        Error::WebDriver(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new unsupported browser error
    pub fn unsupported_browser<S: Into<String>>(kind: S) -> Self {
        Error::UnsupportedBrowser(kind.into())
    }

    /// Create a new element not found error
    pub fn element_not_found<S: Into<String>>(what: S) -> Self {
        Error::ElementNotFound(what.into())
    }

    /// Create a new stale element error
    pub fn stale<S: Into<String>>(what: S) -> Self {
        Error::Stale(what.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a new assertion error
    pub fn assertion<S: Into<String>>(msg: S) -> Self {
        Error::Assertion(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// Whether this error denotes a stale element reference.
    ///
    /// Staleness surfaces either as our own `Stale` variant (mock driver)
    /// or inside a WebDriver protocol message (thirtyfour driver).
    pub fn is_stale(&self) -> bool {
        match self {
            Error::Stale(_) => true,
            Error::WebDriver(msg) => msg.contains("stale element"),
            _ => false,
        }
    }
}

impl From<thirtyfour::error::WebDriverError> for Error {
    fn from(err: thirtyfour::error::WebDriverError) -> Self {
        Error::WebDriver(err.to_string())
    }
}
