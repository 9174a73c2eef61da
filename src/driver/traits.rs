//! Browser session traits
//!
//! This module defines the abstract interface between the suite and whatever
//! drives the browser. Page objects and waits only ever see these traits, so
//! the same code runs against a live WebDriver endpoint or the scripted
//! shopfront in [`crate::driver::mock`].

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;

use crate::driver::Locator;
use crate::Result;

/// Factory producing fresh driver sessions.
///
/// The session registry calls this once per worker; implementations decide
/// whether that means spawning a real browser or opening a mock shopfront.
pub type SessionFactory =
    Arc<dyn Fn() -> BoxFuture<'static, Result<Arc<dyn DriverSession>>> + Send + Sync>;

/// A live connection to one browser instance under automated control
#[async_trait]
pub trait DriverSession: Send + Sync {
    /// Get session ID
    fn id(&self) -> &str;

    /// Navigate to a URL
    async fn goto(&self, url: &str) -> Result<()>;

    /// Resolve a locator to the first matching element
    async fn find(&self, locator: &Locator) -> Result<Arc<dyn ElementHandle>>;

    /// Resolve a locator to every matching element (empty when none match)
    async fn find_all(&self, locator: &Locator) -> Result<Vec<Arc<dyn ElementHandle>>>;

    /// Execute JavaScript in the page and return its JSON result
    async fn execute(&self, script: &str) -> Result<serde_json::Value>;

    /// Capture a PNG screenshot of the current page
    async fn screenshot_png(&self) -> Result<Vec<u8>>;

    /// Close the browser session
    async fn quit(&self) -> Result<()>;
}

/// A resolved DOM element.
///
/// Handles are only valid until the page re-renders; afterwards operations
/// return a stale-element error and callers must re-resolve the locator.
#[async_trait]
pub trait ElementHandle: Send + Sync {
    /// Click the element
    async fn click(&self) -> Result<()>;

    /// Clear the element's current value
    async fn clear(&self) -> Result<()>;

    /// Type text into the element
    async fn send_keys(&self, text: &str) -> Result<()>;

    /// Get the element's rendered text
    async fn text(&self) -> Result<String>;

    /// Get an attribute value
    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    /// Whether the element is currently displayed
    async fn is_displayed(&self) -> Result<bool>;

    /// Whether the element is displayed and enabled
    async fn is_clickable(&self) -> Result<bool>;

    /// Scroll the element into the viewport
    async fn scroll_into_view(&self) -> Result<()>;
}

impl std::fmt::Debug for dyn DriverSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverSession").field("id", &self.id()).finish()
    }
}

impl std::fmt::Debug for dyn ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ElementHandle")
    }
}
