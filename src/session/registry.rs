//! Session registry
//!
//! Owns every live browser session, keyed by an explicit worker id. Each
//! scenario runs on its own worker, so the map never sees contention on a
//! single key; distinct workers get distinct sessions and cannot observe
//! each other's browser state.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::driver::mock::{MockProduct, MockShopfront};
use crate::driver::{DriverSession, Locator, SessionFactory, WebDriverSession};
use crate::element::{ElementInteractor, WaitPolicy};
use crate::session::screenshot::{FsScreenshotSink, MemoryScreenshotSink, ScreenshotSink};
use crate::{Error, Result};

/// Accept button of the cookie-consent prompt shown on first navigation
pub(crate) const CONSENT_ACCEPT: Locator = Locator::id("explicit-consent-prompt-accept");

/// Registry of live sessions, one per worker
pub struct SessionRegistry {
    base_url: String,
    policy: WaitPolicy,
    factory: SessionFactory,
    sink: Arc<dyn ScreenshotSink>,
    sessions: RwLock<HashMap<String, Arc<dyn DriverSession>>>,
}

impl SessionRegistry {
    /// Create a registry with an explicit session factory and screenshot sink
    pub fn new(config: &Config, factory: SessionFactory, sink: Arc<dyn ScreenshotSink>) -> Self {
        Self {
            base_url: config.argos_url.clone(),
            policy: WaitPolicy::from_config(config),
            factory,
            sink,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Registry that drives real browsers through the configured WebDriver
    /// endpoint, writing failure screenshots to the configured directory
    pub fn with_webdriver(config: &Config) -> Self {
        let session_config = config.clone();
        let factory: SessionFactory = Arc::new(move || {
            let session_config = session_config.clone();
            Box::pin(async move {
                let session = WebDriverSession::connect(&session_config).await?;
                Ok(Arc::new(session) as Arc<dyn DriverSession>)
            })
        });
        let sink = Arc::new(FsScreenshotSink::new(&config.screenshot_dir));
        Self::new(config, factory, sink)
    }

    /// Registry backed by a fresh scripted shopfront per session
    pub fn mock(config: &Config, catalog: Vec<MockProduct>) -> Self {
        Self::new(
            config,
            MockShopfront::fresh_factory(catalog),
            Arc::new(MemoryScreenshotSink::new()),
        )
    }

    /// Get the worker's session, creating it on first use.
    ///
    /// Creation builds the driver, navigates to the base URL and dismisses
    /// the cookie-consent prompt; subsequent calls with the same worker id
    /// return the identical session unchanged.
    pub async fn acquire(&self, worker: &str) -> Result<Arc<dyn DriverSession>> {
        if let Some(session) = self
            .sessions
            .read()
            .map_err(|e| Error::internal(format!("Lock error: {}", e)))?
            .get(worker)
            .cloned()
        {
            debug!("Reusing session {} for worker {}", session.id(), worker);
            return Ok(session);
        }

        let session = (self.factory)().await?;
        info!("Created session {} for worker {}", session.id(), worker);

        session.goto(&self.base_url).await?;

        let interactor = ElementInteractor::new(Arc::clone(&session), self.policy.clone());
        interactor.wait_for_clickable(&CONSENT_ACCEPT).await?;
        interactor.click("Consent accept button", &CONSENT_ACCEPT).await;

        self.sessions
            .write()
            .map_err(|e| Error::internal(format!("Lock error: {}", e)))?
            .insert(worker.to_string(), Arc::clone(&session));

        Ok(session)
    }

    /// Tear down the worker's session.
    ///
    /// A failed scenario gets a screenshot attached first; capture or sink
    /// errors are logged and never block the quit, and the registry binding
    /// is released no matter what.
    pub async fn release(&self, worker: &str, failed: bool, scenario: &str) -> Result<()> {
        let session = self
            .sessions
            .write()
            .map_err(|e| Error::internal(format!("Lock error: {}", e)))?
            .remove(worker);

        let Some(session) = session else {
            debug!("No session bound to worker {} at release", worker);
            return Ok(());
        };

        if failed {
            match session.screenshot_png().await {
                Ok(png) => {
                    if let Err(err) = self.sink.attach(scenario, &png) {
                        warn!("Failed to attach failure screenshot: {}", err);
                    }
                }
                Err(err) => warn!("Failed to capture failure screenshot: {}", err),
            }
        }

        if let Err(err) = session.quit().await {
            warn!("Failed to quit session {}: {}", session.id(), err);
        } else {
            info!("Session {} closed for worker {}", session.id(), worker);
        }

        Ok(())
    }

    /// Wait policy sessions of this registry operate under
    pub fn wait_policy(&self) -> WaitPolicy {
        self.policy.clone()
    }

    /// Number of live sessions
    pub fn session_count(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }
}
