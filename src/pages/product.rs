//! Product page

use std::sync::Arc;
use tracing::info;

use crate::driver::{DriverSession, Locator};
use crate::element::{ElementInteractor, WaitPolicy};
use crate::Result;

pub(crate) const PRODUCT_TITLE: Locator = Locator::xpath("//span[@data-test='product-title']");
pub(crate) const ADD_TO_TROLLEY: Locator =
    Locator::xpath("//button[@data-test='add-to-trolley-button-button']");
pub(crate) const DIALOG_CLOSE: Locator =
    Locator::xpath("//button[@data-test='component-att-modal-button-close']");
pub(crate) const TROLLEY_LINK: Locator = Locator::xpath("//a[@data-test='trolley']");
pub(crate) const PRODUCT_PRICE: Locator = Locator::xpath("//span[@data-e2e='product-line-price']");

pub struct ProductPage {
    interactor: ElementInteractor,
}

impl ProductPage {
    pub fn new(session: Arc<dyn DriverSession>, policy: WaitPolicy) -> Self {
        Self {
            interactor: ElementInteractor::new(session, policy),
        }
    }

    /// Title of the product being added to the trolley
    pub async fn title(&self) -> Result<String> {
        self.interactor.wait_for_page_ready().await?;
        self.interactor.read_text(&PRODUCT_TITLE).await
    }

    /// Add the current product to the trolley
    pub async fn add_to_trolley(&self) -> Result<()> {
        self.interactor.wait_for_visible(&ADD_TO_TROLLEY).await?;
        self.interactor.scroll_into_view(&ADD_TO_TROLLEY).await;
        self.interactor.click("Add to trolley button", &ADD_TO_TROLLEY).await;
        info!("Add to trolley button is clicked");
        Ok(())
    }

    /// Close the added-to-trolley confirmation dialog
    pub async fn dismiss_added_dialog(&self) -> Result<()> {
        self.interactor.wait_for_clickable(&DIALOG_CLOSE).await?;
        self.interactor.click("Added-to-trolley close button", &DIALOG_CLOSE).await;
        info!("Added-to-trolley dialog is closed");
        Ok(())
    }

    /// Open the trolley from the page header
    pub async fn open_trolley(&self) -> Result<()> {
        self.interactor.scroll_to_top().await;
        self.interactor.click("Trolley button", &TROLLEY_LINK).await;
        info!("Trolley button is clicked");
        self.interactor.wait_for_page_ready().await
    }

    /// Displayed price text of the current product
    pub async fn price(&self) -> Result<String> {
        self.interactor.read_text(&PRODUCT_PRICE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::mock::{MockProduct, MockShopfront};
    use crate::pages::SearchResultsPage;
    use crate::Error;
    use std::time::Duration;

    fn quick_policy() -> WaitPolicy {
        WaitPolicy::new(Duration::from_millis(100), Duration::from_millis(5))
    }

    async fn page_on_product() -> (Arc<MockShopfront>, ProductPage) {
        let shop = MockShopfront::new(vec![MockProduct::new("Samsung 43-inch TV", 259.99)]);
        let session: Arc<dyn DriverSession> = Arc::new(shop.open_session());
        session.goto("https://shop.test/").await.unwrap();

        let interactor = ElementInteractor::new(Arc::clone(&session), quick_policy());
        interactor
            .click("Consent accept", &crate::session::registry::CONSENT_ACCEPT)
            .await;

        let search = SearchResultsPage::new(Arc::clone(&session), quick_policy());
        search.search("tv").await.unwrap();
        search.select_result_at(0).await.unwrap();

        (shop, ProductPage::new(session, quick_policy()))
    }

    #[tokio::test]
    async fn title_and_price_read_the_selected_product() {
        let (_shop, page) = page_on_product().await;
        assert_eq!(page.title().await.unwrap(), "Samsung 43-inch TV");
        assert_eq!(page.price().await.unwrap(), "£259.99");
    }

    #[tokio::test]
    async fn add_then_dismiss_round_trips_the_dialog() {
        let (shop, page) = page_on_product().await;

        page.add_to_trolley().await.unwrap();
        page.dismiss_added_dialog().await.unwrap();

        assert_eq!(shop.trolley_quantity(), Some(1));
    }

    #[tokio::test]
    async fn dismiss_without_dialog_times_out() {
        let (_shop, page) = page_on_product().await;
        let err = page.dismiss_added_dialog().await.unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
    }

    #[tokio::test]
    async fn open_trolley_navigates_off_the_product_page() {
        let (_shop, page) = page_on_product().await;
        page.add_to_trolley().await.unwrap();
        page.dismiss_added_dialog().await.unwrap();

        page.open_trolley().await.unwrap();

        // product-only elements are gone after navigation
        let err = page.title().await.unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
    }
}
