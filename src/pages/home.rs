//! Home page

use std::sync::Arc;
use tracing::info;

use crate::driver::{DriverSession, Locator};
use crate::element::{ElementInteractor, WaitPolicy};
use crate::Result;

pub(crate) const HOME_LOGO: Locator = Locator::id("argos-logo");

pub struct HomePage {
    interactor: ElementInteractor,
}

impl HomePage {
    pub fn new(session: Arc<dyn DriverSession>, policy: WaitPolicy) -> Self {
        Self {
            interactor: ElementInteractor::new(session, policy),
        }
    }

    /// Wait for the home-identifying logo to confirm we landed on the shop
    pub async fn verify_loaded(&self) -> Result<()> {
        self.interactor.wait_for_visible(&HOME_LOGO).await?;
        info!("User is directed to the home page");
        Ok(())
    }
}
