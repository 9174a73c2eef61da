//! Argos BDD: behaviour-driven UI test suite for the Argos online shop
//!
//! This library drives a browser through page objects (home, search results,
//! product, trolley) and exposes a shopping flow that the cucumber runner in
//! `tests/` binds Gherkin steps to. The browser sits behind the
//! [`driver::DriverSession`] trait, with a live WebDriver implementation and
//! a scripted shopfront for hermetic runs.

pub mod config;
pub mod error;

pub mod driver;
pub mod element;
pub mod flow;
pub mod pages;
pub mod session;

// Re-exports
pub use error::{Error, Result};

/// Suite library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing output, honouring `RUST_LOG` when set
pub fn init_logging(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
