//! Configuration management for the Argos BDD suite

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fmt;

/// Suite configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Browser to drive ("chrome" or "edge")
    pub browser: String,

    /// Base URL of the shop under test
    pub argos_url: String,

    /// WebDriver endpoint (chromedriver / msedgedriver)
    pub webdriver_url: String,

    /// Explicit wait timeout in milliseconds
    pub wait_timeout_ms: u64,

    /// Poll interval for explicit waits in milliseconds
    pub poll_interval_ms: u64,

    /// Directory that failure screenshots are written to
    pub screenshot_dir: String,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser: "chrome".to_string(),
            argos_url: "https://www.argos.co.uk/".to_string(),
            webdriver_url: "http://localhost:4444".to_string(),
            wait_timeout_ms: 60_000,
            poll_interval_ms: 250,
            screenshot_dir: "target/screenshots".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(browser) = env::var("ARGOS_BROWSER") {
            config.browser = browser;
        }

        if let Ok(url) = env::var("ARGOS_URL") {
            config.argos_url = url;
        }

        if let Ok(url) = env::var("ARGOS_WEBDRIVER_URL") {
            config.webdriver_url = url;
        }

        if let Ok(timeout) = env::var("ARGOS_WAIT_TIMEOUT_MS") {
            config.wait_timeout_ms = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid ARGOS_WAIT_TIMEOUT_MS"))?;
        }

        if let Ok(interval) = env::var("ARGOS_POLL_INTERVAL_MS") {
            config.poll_interval_ms = interval
                .parse()
                .map_err(|_| Error::configuration("Invalid ARGOS_POLL_INTERVAL_MS"))?;
        }

        if let Ok(dir) = env::var("ARGOS_SCREENSHOT_DIR") {
            config.screenshot_dir = dir;
        }

        if let Ok(log_level) = env::var("ARGOS_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Resolve the configured browser kind, failing fast on anything unrecognised
    pub fn browser_kind(&self) -> Result<BrowserKind> {
        BrowserKind::parse(&self.browser)
    }
}

/// Supported browsers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    Edge,
}

impl BrowserKind {
    /// Parse a configuration value into a browser kind.
    ///
    /// Anything other than "chrome" or "edge" is a fatal configuration error.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(BrowserKind::Chrome),
            "edge" => Ok(BrowserKind::Edge),
            other => Err(Error::unsupported_browser(other)),
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserKind::Chrome => write!(f, "chrome"),
            BrowserKind::Edge => write!(f, "edge"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_chrome() {
        let config = Config::default();
        assert_eq!(config.browser_kind().unwrap(), BrowserKind::Chrome);
        assert_eq!(config.wait_timeout_ms, 60_000);
    }

    #[test]
    fn browser_kind_accepts_known_values_case_insensitively() {
        assert_eq!(BrowserKind::parse("Chrome").unwrap(), BrowserKind::Chrome);
        assert_eq!(BrowserKind::parse(" EDGE ").unwrap(), BrowserKind::Edge);
    }

    #[test]
    fn browser_kind_rejects_unknown_values() {
        let err = BrowserKind::parse("firefox").unwrap_err();
        assert!(matches!(err, Error::UnsupportedBrowser(_)));
    }

    #[test]
    fn from_file_parses_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
browser = "edge"
argos_url = "https://staging.example.test/"
webdriver_url = "http://localhost:9515"
wait_timeout_ms = 5000
poll_interval_ms = 100
screenshot_dir = "out/shots"
log_level = "debug"
"#,
        )
        .unwrap();

        let config = Config::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.browser_kind().unwrap(), BrowserKind::Edge);
        assert_eq!(config.argos_url, "https://staging.example.test/");
        assert_eq!(config.wait_timeout_ms, 5000);
    }
}
