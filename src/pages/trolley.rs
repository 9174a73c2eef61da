//! Trolley page

use std::sync::Arc;
use tracing::info;

use crate::driver::{DriverSession, Locator};
use crate::element::{ElementInteractor, WaitPolicy};
use crate::pages::price::parse_price;
use crate::Result;

pub(crate) const PRODUCT_NAME: Locator = Locator::xpath("(//a[@data-e2e='product-name'])[2]/span");
pub(crate) const LINE_PRICE: Locator = Locator::xpath("//span[@data-e2e='product-line-price']");
pub(crate) const QUANTITY_SELECT: Locator = Locator::xpath("//select[@data-e2e='product-quantity']");
pub(crate) const QUANTITY_OPTIONS: Locator =
    Locator::xpath("//select[@data-e2e='product-quantity']/option");
pub(crate) const SUBTOTAL: Locator = Locator::xpath("//div[@data-e2e='basket-total-price']");

pub struct TrolleyPage {
    interactor: ElementInteractor,
}

impl TrolleyPage {
    pub fn new(session: Arc<dyn DriverSession>, policy: WaitPolicy) -> Self {
        Self {
            interactor: ElementInteractor::new(session, policy),
        }
    }

    /// Name of the product shown in the trolley
    pub async fn product_name(&self) -> Result<String> {
        self.interactor.wait_for_page_ready().await?;
        self.interactor.read_text(&PRODUCT_NAME).await
    }

    /// Price of a single unit, read fresh from the page
    pub async fn unit_price(&self) -> Result<f64> {
        let text = self.interactor.read_text(&LINE_PRICE).await?;
        parse_price(&text)
    }

    /// Select `quantity` from the quantity dropdown and return the total the
    /// trolley should now show.
    ///
    /// The unit price is re-read from the page on every call, so the
    /// expected total always reflects what is currently displayed.
    pub async fn set_quantity_and_expected_total(&self, quantity: u32) -> Result<f64> {
        let unit_price = self.unit_price().await?;

        self.interactor
            .select_dropdown_option(
                "Quantity dropdown",
                &QUANTITY_SELECT,
                &QUANTITY_OPTIONS,
                &quantity.to_string(),
            )
            .await?;

        let expected = unit_price * f64::from(quantity);
        info!("Single unit {} * quantity {} = {}", unit_price, quantity, expected);
        Ok(expected)
    }

    /// Displayed basket subtotal as a number
    pub async fn subtotal(&self) -> Result<f64> {
        let text = self.interactor.read_text(&SUBTOTAL).await?;
        let subtotal = parse_price(&text)?;
        info!("Subtotal is {}", subtotal);
        Ok(subtotal)
    }
}
