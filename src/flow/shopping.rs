//! Shopping flow
//!
//! The five step intents of the trolley scenario, expressed against the page
//! objects. Assertion failures raise [`Error::Assertion`] and end only the
//! scenario they belong to.

use std::sync::Arc;
use tracing::info;

use crate::driver::DriverSession;
use crate::element::WaitPolicy;
use crate::flow::ScenarioContext;
use crate::pages::{HomePage, ProductPage, SearchResultsPage, TrolleyPage};
use crate::{Error, Result};

/// Absolute tolerance for comparing displayed prices
const PRICE_TOLERANCE: f64 = 0.005;

/// One scenario's view of the shop: page objects bound to the scenario's
/// session plus the cross-step context
pub struct ShoppingFlow {
    home: HomePage,
    search: SearchResultsPage,
    product: ProductPage,
    trolley: TrolleyPage,
    context: ScenarioContext,
}

impl ShoppingFlow {
    pub fn new(session: Arc<dyn DriverSession>, policy: WaitPolicy) -> Self {
        Self {
            home: HomePage::new(Arc::clone(&session), policy.clone()),
            search: SearchResultsPage::new(Arc::clone(&session), policy.clone()),
            product: ProductPage::new(Arc::clone(&session), policy.clone()),
            trolley: TrolleyPage::new(session, policy),
            context: ScenarioContext::new(),
        }
    }

    pub fn context(&self) -> &ScenarioContext {
        &self.context
    }

    /// Step 1: confirm we landed on the home page
    pub async fn verify_on_home_page(&self) -> Result<()> {
        self.home.verify_loaded().await
    }

    /// Step 2: search for a named product
    pub async fn search_for(&self, term: &str) -> Result<()> {
        self.search.search(term).await
    }

    /// Step 3: assert every result title belongs to the category
    pub async fn assert_results_match_category(&self, category: &str) -> Result<()> {
        if self.search.results_match_category(category).await? {
            Ok(())
        } else {
            Err(Error::assertion(format!(
                "search results are not limited to category '{}'",
                category
            )))
        }
    }

    /// Step 4: pick a random result, remember its title, add it to the
    /// trolley and dismiss the confirmation dialog
    pub async fn add_random_result_to_trolley(&mut self) -> Result<()> {
        self.search.select_random_result().await?;
        self.record_and_add().await
    }

    /// Step 4 variant: pick the first result containing `needle` instead of
    /// a random one
    pub async fn add_result_containing_to_trolley(&mut self, needle: &str) -> Result<()> {
        self.search.select_result_containing(needle).await?;
        self.record_and_add().await
    }

    async fn record_and_add(&mut self) -> Result<()> {
        let title = self.product.title().await?;
        info!("Product '{}' is being added to the trolley", title);
        self.context.record_product(title);
        self.product.add_to_trolley().await?;
        self.product.dismiss_added_dialog().await
    }

    /// Step 5: open the trolley and assert it shows the recorded product
    pub async fn assert_selected_product_in_trolley(&self) -> Result<()> {
        self.product.open_trolley().await?;
        let shown = self.trolley.product_name().await?;
        let expected = self
            .context
            .selected_product()
            .ok_or_else(|| Error::internal("no product was recorded in this scenario"))?;

        if shown == expected {
            info!("Trolley shows the selected product '{}'", shown);
            Ok(())
        } else {
            Err(Error::assertion(format!(
                "trolley shows '{}' but '{}' was added",
                shown, expected
            )))
        }
    }

    /// Quantity step: select a quantity and return the expected total
    pub async fn increase_quantity(&self, quantity: u32) -> Result<f64> {
        self.trolley.set_quantity_and_expected_total(quantity).await
    }

    /// Subtotal step: assert unit price * quantity equals the displayed
    /// subtotal
    pub async fn assert_subtotal_for_quantity(&self, quantity: u32) -> Result<()> {
        let expected = self.trolley.set_quantity_and_expected_total(quantity).await?;
        let subtotal = self.trolley.subtotal().await?;

        if (expected - subtotal).abs() < PRICE_TOLERANCE {
            info!("Subtotal {} matches unit price * {}", subtotal, quantity);
            Ok(())
        } else {
            Err(Error::assertion(format!(
                "expected subtotal {:.2} for quantity {} but the trolley shows {:.2}",
                expected, quantity, subtotal
            )))
        }
    }
}
