//! Element interactor
//!
//! Wait-qualified element operations shared by every page object. Two
//! failure regimes coexist on purpose: waits raise [`Error::Timeout`] so
//! scenarios fail fast when a page never reaches the expected state, while
//! clicks and typing return an [`Interaction`] outcome that records failure
//! without raising — callers tolerate best-effort interaction with
//! non-critical UI (closing an optional dialog) but can opt into strict
//! handling via [`Interaction::strict`].

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::driver::{DriverSession, ElementHandle, Locator};
use crate::element::wait::{wait_until, WaitPolicy};
use crate::{Error, Result};

/// Outcome of a lenient interaction
#[derive(Debug)]
pub enum Interaction {
    Completed,
    Failed(Error),
}

impl Interaction {
    pub fn completed(&self) -> bool {
        matches!(self, Interaction::Completed)
    }

    /// Convert the outcome back into a hard error for call sites that do
    /// need the interaction to have happened
    pub fn strict(self) -> Result<()> {
        match self {
            Interaction::Completed => Ok(()),
            Interaction::Failed(err) => Err(err),
        }
    }
}

/// Wait-qualified element operations bound to one driver session
pub struct ElementInteractor {
    session: Arc<dyn DriverSession>,
    policy: WaitPolicy,
}

impl ElementInteractor {
    pub fn new(session: Arc<dyn DriverSession>, policy: WaitPolicy) -> Self {
        Self { session, policy }
    }

    /// Wait for clickability, then click. Failures are logged and carried in
    /// the returned outcome, never raised.
    pub async fn click(&self, name: &str, locator: &Locator) -> Interaction {
        match self.try_click(locator).await {
            Ok(()) => {
                info!("Clicked on {}", name);
                Interaction::Completed
            }
            Err(err) => {
                warn!("Error while clicking on {}: {}", name, err);
                Interaction::Failed(err)
            }
        }
    }

    async fn try_click(&self, locator: &Locator) -> Result<()> {
        let element = self.wait_for_clickable(locator).await?;
        element.click().await
    }

    /// Wait for visibility, clear the field, type `text`. Same lenient
    /// policy as [`Self::click`].
    pub async fn enter_text(&self, name: &str, locator: &Locator, text: &str) -> Interaction {
        match self.try_enter_text(locator, text).await {
            Ok(()) => {
                info!("Typed '{}' into {}", text, name);
                Interaction::Completed
            }
            Err(err) => {
                warn!("Error while entering text into {}: {}", name, err);
                Interaction::Failed(err)
            }
        }
    }

    async fn try_enter_text(&self, locator: &Locator, text: &str) -> Result<()> {
        let element = self.wait_for_visible(locator).await?;
        element.clear().await?;
        element.send_keys(text).await
    }

    /// Wait until the locator resolves to a displayed element
    pub async fn wait_for_visible(&self, locator: &Locator) -> Result<Arc<dyn ElementHandle>> {
        let what = format!("{} to be visible", locator);
        wait_until(&self.policy, &what, || {
            let session = Arc::clone(&self.session);
            let locator = locator.clone();
            async move {
                let element = session.find(&locator).await?;
                if element.is_displayed().await? {
                    Ok(Some(element))
                } else {
                    Ok(None)
                }
            }
        })
        .await
    }

    /// Wait until the locator resolves to a clickable element
    pub async fn wait_for_clickable(&self, locator: &Locator) -> Result<Arc<dyn ElementHandle>> {
        let what = format!("{} to be clickable", locator);
        wait_until(&self.policy, &what, || {
            let session = Arc::clone(&self.session);
            let locator = locator.clone();
            async move {
                let element = session.find(&locator).await?;
                if element.is_clickable().await? {
                    Ok(Some(element))
                } else {
                    Ok(None)
                }
            }
        })
        .await
    }

    /// Wait until every element the locator currently resolves to is
    /// displayed.
    ///
    /// Elements that go stale mid-wait are re-resolved on the next poll
    /// rather than failing the wait. An empty resolution satisfies the wait
    /// vacuously.
    pub async fn wait_for_visible_all(
        &self,
        locator: &Locator,
    ) -> Result<Vec<Arc<dyn ElementHandle>>> {
        let what = format!("all {} to be visible", locator);
        wait_until(&self.policy, &what, || {
            let session = Arc::clone(&self.session);
            let locator = locator.clone();
            async move {
                let elements = session.find_all(&locator).await?;
                for element in &elements {
                    match element.is_displayed().await {
                        Ok(true) => {}
                        Ok(false) => return Ok(None),
                        // re-resolve the whole collection instead of failing
                        Err(err) if err.is_stale() => return Ok(None),
                        Err(err) => return Err(err),
                    }
                }
                Ok(Some(elements))
            }
        })
        .await
    }

    /// Wait for visibility, then return the element's rendered text
    pub async fn read_text(&self, locator: &Locator) -> Result<String> {
        let element = self.wait_for_visible(locator).await?;
        element.text().await
    }

    /// Best-effort scroll of the target into the viewport
    pub async fn scroll_into_view(&self, locator: &Locator) {
        match self.session.find(locator).await {
            Ok(element) => {
                if let Err(err) = element.scroll_into_view().await {
                    debug!("Could not scroll {} into view: {}", locator, err);
                }
            }
            Err(err) => debug!("Could not resolve {} to scroll: {}", locator, err),
        }
    }

    /// Best-effort scroll to the top of the page
    pub async fn scroll_to_top(&self) {
        if let Err(err) = self.session.execute("window.scrollTo(0, 0);").await {
            debug!("Could not scroll to top: {}", err);
        }
    }

    /// Wait for the document to finish loading
    pub async fn wait_for_page_ready(&self) -> Result<()> {
        wait_until(&self.policy, "document to be ready", || {
            let session = Arc::clone(&self.session);
            async move {
                let state = session.execute("return document.readyState;").await?;
                Ok((state.as_str() == Some("complete")).then_some(()))
            }
        })
        .await
    }

    /// Open a dropdown and click the option whose text equals `wanted`.
    ///
    /// A staleness error anywhere in the attempt triggers exactly one
    /// re-resolution and retry; a second staleness error propagates.
    pub async fn select_dropdown_option(
        &self,
        name: &str,
        dropdown: &Locator,
        options: &Locator,
        wanted: &str,
    ) -> Result<()> {
        match self.try_select_option(name, dropdown, options, wanted).await {
            Err(err) if err.is_stale() => {
                info!("Retrying {} selection after a stale element", name);
                self.try_select_option(name, dropdown, options, wanted).await
            }
            other => other,
        }
    }

    async fn try_select_option(
        &self,
        name: &str,
        dropdown: &Locator,
        options: &Locator,
        wanted: &str,
    ) -> Result<()> {
        self.wait_for_visible(dropdown).await?;
        self.click(name, dropdown).await;
        let elements = self.wait_for_visible_all(options).await?;
        for element in elements {
            if element.text().await? == wanted {
                element.click().await?;
                info!("Selected '{}' from {}", wanted, name);
                self.wait_for_page_ready().await?;
                return Ok(());
            }
        }
        Err(Error::element_not_found(format!(
            "option '{}' in {}",
            wanted, name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::mock::{MockProduct, MockShopfront};
    use std::time::Duration;

    const CONSENT_ACCEPT: Locator = Locator::id("explicit-consent-prompt-accept");
    const SEARCH_BOX: Locator = Locator::id("searchTerm");
    const SEARCH_BUTTON: Locator = Locator::xpath("//button[@type='submit']");
    const RESULT_TITLES: Locator = Locator::xpath("//div[@data-test='component-product-card-title']");
    const MISSING: Locator = Locator::id("no-such-element");

    fn quick_policy() -> WaitPolicy {
        WaitPolicy::new(Duration::from_millis(100), Duration::from_millis(5))
    }

    async fn interactor_on_results(
        catalog: Vec<MockProduct>,
    ) -> (std::sync::Arc<MockShopfront>, ElementInteractor) {
        let shop = MockShopfront::new(catalog);
        let session: Arc<dyn DriverSession> = Arc::new(shop.open_session());
        session.goto("https://shop.test/").await.unwrap();
        let interactor = ElementInteractor::new(session, quick_policy());
        interactor.click("Consent accept", &CONSENT_ACCEPT).await;
        interactor.click("Search button", &SEARCH_BUTTON).await;
        (shop, interactor)
    }

    fn catalog() -> Vec<MockProduct> {
        vec![
            MockProduct::new("Bush 32 Inch Television", 149.99),
            MockProduct::new("LG 43 Inch Television", 329.99),
        ]
    }

    #[tokio::test]
    async fn lenient_click_on_missing_element_reports_failure_without_raising() {
        let (_shop, interactor) = interactor_on_results(catalog()).await;

        let outcome = interactor.click("Ghost button", &MISSING).await;
        assert!(!outcome.completed());
        assert!(matches!(outcome.strict(), Err(Error::Timeout(_))));
    }

    #[tokio::test]
    async fn visibility_wait_on_missing_element_raises_timeout() {
        let (_shop, interactor) = interactor_on_results(catalog()).await;

        let err = interactor.wait_for_visible(&MISSING).await.unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
    }

    #[tokio::test]
    async fn enter_text_clears_before_typing() {
        let (_shop, interactor) = interactor_on_results(catalog()).await;

        assert!(interactor
            .enter_text("Search box", &SEARCH_BOX, "dyson")
            .await
            .completed());
        assert!(interactor
            .enter_text("Search box", &SEARCH_BOX, "television")
            .await
            .completed());

        assert_eq!(interactor.read_text(&SEARCH_BOX).await.unwrap(), "television");
    }

    #[tokio::test]
    async fn collection_wait_tolerates_stale_elements_by_re_resolving() {
        let (shop, interactor) = interactor_on_results(catalog()).await;
        shop.set_stale_result_reads(2);

        let elements = interactor.wait_for_visible_all(&RESULT_TITLES).await.unwrap();
        assert_eq!(elements.len(), 2);
        assert!(elements[0].is_displayed().await.unwrap());
    }

    #[tokio::test]
    async fn collection_wait_is_vacuous_on_an_empty_resolution() {
        let (_shop, interactor) = interactor_on_results(Vec::new()).await;

        let elements = interactor.wait_for_visible_all(&RESULT_TITLES).await.unwrap();
        assert!(elements.is_empty());
    }

    #[tokio::test]
    async fn page_ready_wait_completes_against_the_shopfront() {
        let (_shop, interactor) = interactor_on_results(catalog()).await;
        interactor.wait_for_page_ready().await.unwrap();
    }
}
