//! WebDriver-backed session
//!
//! Wraps a thirtyfour [`WebDriver`] behind the [`DriverSession`] trait. The
//! browser kind comes from configuration; anything other than Chrome or Edge
//! is rejected before a driver is ever constructed.

use async_trait::async_trait;
use std::sync::Arc;
use thirtyfour::prelude::*;
use tracing::{debug, info};

use crate::config::{BrowserKind, Config};
use crate::driver::{DriverSession, ElementHandle, Locator, Strategy};
use crate::{Error, Result};

/// A driver session backed by a remote WebDriver endpoint
pub struct WebDriverSession {
    id: String,
    driver: WebDriver,
}

impl WebDriverSession {
    /// Connect to the configured WebDriver endpoint and start a browser
    pub async fn connect(config: &Config) -> Result<Self> {
        let kind = config.browser_kind()?;
        info!("Starting {} session via {}", kind, config.webdriver_url);

        let driver = match kind {
            BrowserKind::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                caps.add_arg("--disable-notifications")?;
                caps.add_arg("--disable-popup-blocking")?;
                caps.add_arg("--disable-infobars")?;
                caps.add_arg("--ignore-certificate-errors")?;
                caps.add_arg("--no-default-browser-check")?;
                caps.add_arg("--incognito")?;
                WebDriver::new(&config.webdriver_url, caps).await?
            }
            BrowserKind::Edge => {
                let caps = DesiredCapabilities::edge();
                WebDriver::new(&config.webdriver_url, caps).await?
            }
        };

        driver.maximize_window().await?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            driver,
        })
    }

    fn to_by(locator: &Locator) -> By {
        match locator.strategy() {
            Strategy::Id => By::Id(locator.expression()),
            Strategy::XPath => By::XPath(locator.expression()),
            Strategy::Css => By::Css(locator.expression()),
        }
    }
}

#[async_trait]
impl DriverSession for WebDriverSession {
    fn id(&self) -> &str {
        &self.id
    }

    async fn goto(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn find(&self, locator: &Locator) -> Result<Arc<dyn ElementHandle>> {
        let element = self
            .driver
            .find(Self::to_by(locator))
            .await
            .map_err(|e| Error::element_not_found(format!("{}: {}", locator, e)))?;
        Ok(Arc::new(WebDriverElement { element }))
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<Arc<dyn ElementHandle>>> {
        let elements = self.driver.find_all(Self::to_by(locator)).await?;
        Ok(elements
            .into_iter()
            .map(|element| Arc::new(WebDriverElement { element }) as Arc<dyn ElementHandle>)
            .collect())
    }

    async fn execute(&self, script: &str) -> Result<serde_json::Value> {
        let ret = self.driver.execute(script, Vec::new()).await?;
        Ok(ret.json().clone())
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        Ok(self.driver.screenshot_as_png().await?)
    }

    async fn quit(&self) -> Result<()> {
        // WebDriver::quit consumes the handle; the session is cloneable
        // because state lives behind an Arc.
        self.driver.clone().quit().await?;
        Ok(())
    }
}

struct WebDriverElement {
    element: WebElement,
}

#[async_trait]
impl ElementHandle for WebDriverElement {
    async fn click(&self) -> Result<()> {
        self.element.click().await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.element.clear().await?;
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> Result<()> {
        self.element.send_keys(text).await?;
        Ok(())
    }

    async fn text(&self) -> Result<String> {
        Ok(self.element.text().await?)
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.element.attr(name).await?)
    }

    async fn is_displayed(&self) -> Result<bool> {
        Ok(self.element.is_displayed().await?)
    }

    async fn is_clickable(&self) -> Result<bool> {
        Ok(self.element.is_displayed().await? && self.element.is_enabled().await?)
    }

    async fn scroll_into_view(&self) -> Result<()> {
        self.element.scroll_into_view().await?;
        Ok(())
    }
}
