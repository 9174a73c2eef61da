//! Scripted in-process shopfront
//!
//! A fake of the shop's four screens (home, search results, product,
//! trolley) behind the [`DriverSession`] trait. It answers the same locators
//! the real site does, simulates the cookie-consent prompt, the
//! added-to-trolley dialog and the quantity dropdown, and invalidates element
//! handles whenever the page re-renders so staleness handling gets exercised
//! for real.
//!
//! Used by the cucumber runner for hermetic runs and by unit and integration
//! tests throughout the crate.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::driver::{DriverSession, ElementHandle, Locator, SessionFactory, Strategy};
use crate::{Error, Result};

// Markup contract of the shop under test. The page objects carry the same
// expressions; `tests::locators_agree_with_page_objects` keeps them in sync.
const HOME_LOGO_ID: &str = "argos-logo";
const CONSENT_ACCEPT_ID: &str = "explicit-consent-prompt-accept";
const SEARCH_BOX_ID: &str = "searchTerm";
const SEARCH_BUTTON_XPATH: &str = "//button[@type='submit']";
const RESULT_TITLES_XPATH: &str = "//div[@data-test='component-product-card-title']";
const PRODUCT_TITLE_XPATH: &str = "//span[@data-test='product-title']";
const ADD_TO_TROLLEY_XPATH: &str = "//button[@data-test='add-to-trolley-button-button']";
const DIALOG_CLOSE_XPATH: &str = "//button[@data-test='component-att-modal-button-close']";
const TROLLEY_LINK_XPATH: &str = "//a[@data-test='trolley']";
const LINE_PRICE_XPATH: &str = "//span[@data-e2e='product-line-price']";
const TROLLEY_NAME_XPATH: &str = "(//a[@data-e2e='product-name'])[2]/span";
const QUANTITY_SELECT_XPATH: &str = "//select[@data-e2e='product-quantity']";
const QUANTITY_OPTIONS_XPATH: &str = "//select[@data-e2e='product-quantity']/option";
const SUBTOTAL_XPATH: &str = "//div[@data-e2e='basket-total-price']";

/// Highest quantity offered by the trolley dropdown
const MAX_QUANTITY: u32 = 8;

/// One product in the shopfront catalogue
#[derive(Debug, Clone)]
pub struct MockProduct {
    pub title: String,
    pub price: f64,
}

impl MockProduct {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShopScreen {
    Home,
    SearchResults,
    Product,
    Trolley,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    HomeLogo,
    ConsentAccept,
    SearchBox,
    SearchButton,
    ResultTitle(usize),
    ProductTitle,
    AddToTrolley,
    DialogClose,
    TrolleyLink,
    LinePrice,
    TrolleyProductName,
    QuantitySelect,
    QuantityOption(u32),
    Subtotal,
}

impl Role {
    fn describe(self) -> &'static str {
        match self {
            Role::HomeLogo => "home logo",
            Role::ConsentAccept => "consent accept button",
            Role::SearchBox => "search box",
            Role::SearchButton => "search button",
            Role::ResultTitle(_) => "search result title",
            Role::ProductTitle => "product title",
            Role::AddToTrolley => "add-to-trolley button",
            Role::DialogClose => "added-to-trolley dialog close button",
            Role::TrolleyLink => "trolley link",
            Role::LinePrice => "product line price",
            Role::TrolleyProductName => "trolley product name",
            Role::QuantitySelect => "quantity dropdown",
            Role::QuantityOption(_) => "quantity option",
            Role::Subtotal => "basket subtotal",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TrolleyLine {
    product: usize,
    quantity: u32,
}

#[derive(Debug)]
struct ShopState {
    screen: ShopScreen,
    consent_open: bool,
    dialog_open: bool,
    search_box: String,
    last_search: String,
    catalog: Vec<MockProduct>,
    selected: Option<usize>,
    trolley: Option<TrolleyLine>,
    generation: u64,
    stale_result_reads: u32,
    stale_quantity_clicks: u32,
    subtotal_override: Option<f64>,
    fail_screenshots: bool,
    screenshots_taken: usize,
    closed: bool,
}

/// The scripted shopfront shared by every element of one mock session
pub struct MockShopfront {
    state: Mutex<ShopState>,
}

impl MockShopfront {
    pub fn new(catalog: Vec<MockProduct>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(ShopState {
                screen: ShopScreen::Home,
                consent_open: false,
                dialog_open: false,
                search_box: String::new(),
                last_search: String::new(),
                catalog,
                selected: None,
                trolley: None,
                generation: 0,
                stale_result_reads: 0,
                stale_quantity_clicks: 0,
                subtotal_override: None,
                fail_screenshots: false,
                screenshots_taken: 0,
                closed: false,
            }),
        })
    }

    /// Catalogue used by the hermetic cucumber runs
    pub fn demo_catalog() -> Vec<MockProduct> {
        vec![
            MockProduct::new("LG 43 Inch Smart 4K UHD HDR LED Television", 329.99),
            MockProduct::new("Samsung 50 Inch Crystal UHD Smart Television", 429.00),
            MockProduct::new("Bush 32 Inch Smart HD Ready Television", 149.99),
            MockProduct::new("Hisense 55 Inch QLED Smart Television", 379.00),
            MockProduct::new("TCL 40 Inch Full HD Android Television", 189.50),
        ]
    }

    /// Open a new session on this shopfront
    pub fn open_session(self: &Arc<Self>) -> MockSession {
        MockSession {
            id: uuid::Uuid::new_v4().to_string(),
            shop: Arc::clone(self),
        }
    }

    /// Session factory bound to this shopfront instance.
    ///
    /// Every session shares the same shop state, which lets tests inspect it
    /// after the fact.
    pub fn factory(self: &Arc<Self>) -> SessionFactory {
        let shop = Arc::clone(self);
        Arc::new(move || {
            let shop = Arc::clone(&shop);
            Box::pin(async move { Ok(Arc::new(shop.open_session()) as Arc<dyn DriverSession>) })
        })
    }

    /// Session factory opening a fresh shopfront per session.
    ///
    /// This is what parallel scenario runs want: no shared state between
    /// workers.
    pub fn fresh_factory(catalog: Vec<MockProduct>) -> SessionFactory {
        Arc::new(move || {
            let catalog = catalog.clone();
            Box::pin(async move {
                let shop = MockShopfront::new(catalog);
                Ok(Arc::new(shop.open_session()) as Arc<dyn DriverSession>)
            })
        })
    }

    /// Make the next `reads` result-list resolutions hand out handles that
    /// are already stale
    pub fn set_stale_result_reads(&self, reads: u32) {
        self.state.lock().expect("shopfront lock poisoned").stale_result_reads = reads;
    }

    /// Make the next `clicks` quantity-option clicks fail with a stale error
    pub fn set_stale_quantity_clicks(&self, clicks: u32) {
        self.state.lock().expect("shopfront lock poisoned").stale_quantity_clicks = clicks;
    }

    /// Display a subtotal unrelated to unit price * quantity
    pub fn set_subtotal_override(&self, subtotal: f64) {
        self.state.lock().expect("shopfront lock poisoned").subtotal_override = Some(subtotal);
    }

    /// Make screenshot capture fail
    pub fn set_fail_screenshots(&self, fail: bool) {
        self.state.lock().expect("shopfront lock poisoned").fail_screenshots = fail;
    }

    pub fn screenshots_taken(&self) -> usize {
        self.state.lock().expect("shopfront lock poisoned").screenshots_taken
    }

    pub fn trolley_quantity(&self) -> Option<u32> {
        self.state
            .lock()
            .expect("shopfront lock poisoned")
            .trolley
            .map(|line| line.quantity)
    }

    pub fn last_search(&self) -> String {
        self.state.lock().expect("shopfront lock poisoned").last_search.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().expect("shopfront lock poisoned").closed
    }

    fn lock(&self) -> Result<MutexGuard<'_, ShopState>> {
        self.state
            .lock()
            .map_err(|_| Error::internal("shopfront lock poisoned"))
    }

    fn role_present(state: &ShopState, role: Role) -> bool {
        match role {
            // persistent site header
            Role::HomeLogo | Role::SearchBox | Role::SearchButton | Role::TrolleyLink => true,
            Role::ConsentAccept => state.consent_open,
            Role::ResultTitle(index) => {
                state.screen == ShopScreen::SearchResults && index < state.catalog.len()
            }
            Role::ProductTitle | Role::AddToTrolley => {
                state.screen == ShopScreen::Product && state.selected.is_some()
            }
            Role::DialogClose => state.dialog_open,
            Role::LinePrice => match state.screen {
                ShopScreen::Product => state.selected.is_some(),
                ShopScreen::Trolley => state.trolley.is_some(),
                _ => false,
            },
            Role::TrolleyProductName
            | Role::QuantitySelect
            | Role::QuantityOption(_)
            | Role::Subtotal => state.screen == ShopScreen::Trolley && state.trolley.is_some(),
        }
    }

    fn check(state: &ShopState, role: Role, generation: u64) -> Result<()> {
        if state.closed {
            return Err(Error::webdriver("session already closed"));
        }
        if generation != state.generation {
            return Err(Error::stale(role.describe()));
        }
        if !Self::role_present(state, role) {
            return Err(Error::element_not_found(role.describe()));
        }
        Ok(())
    }

    fn role_for(locator: &Locator) -> Option<Role> {
        match (locator.strategy(), locator.expression()) {
            (Strategy::Id, HOME_LOGO_ID) => Some(Role::HomeLogo),
            (Strategy::Id, CONSENT_ACCEPT_ID) => Some(Role::ConsentAccept),
            (Strategy::Id, SEARCH_BOX_ID) => Some(Role::SearchBox),
            (Strategy::XPath, SEARCH_BUTTON_XPATH) => Some(Role::SearchButton),
            (Strategy::XPath, RESULT_TITLES_XPATH) => Some(Role::ResultTitle(0)),
            (Strategy::XPath, PRODUCT_TITLE_XPATH) => Some(Role::ProductTitle),
            (Strategy::XPath, ADD_TO_TROLLEY_XPATH) => Some(Role::AddToTrolley),
            (Strategy::XPath, DIALOG_CLOSE_XPATH) => Some(Role::DialogClose),
            (Strategy::XPath, TROLLEY_LINK_XPATH) => Some(Role::TrolleyLink),
            (Strategy::XPath, LINE_PRICE_XPATH) => Some(Role::LinePrice),
            (Strategy::XPath, TROLLEY_NAME_XPATH) => Some(Role::TrolleyProductName),
            (Strategy::XPath, QUANTITY_SELECT_XPATH) => Some(Role::QuantitySelect),
            (Strategy::XPath, QUANTITY_OPTIONS_XPATH) => Some(Role::QuantityOption(1)),
            (Strategy::XPath, SUBTOTAL_XPATH) => Some(Role::Subtotal),
            _ => None,
        }
    }

    fn format_price(value: f64) -> String {
        format!("£{:.2}", value)
    }

    fn click(&self, role: Role, generation: u64) -> Result<()> {
        let mut state = self.lock()?;
        Self::check(&state, role, generation)?;
        match role {
            Role::ConsentAccept => {
                state.consent_open = false;
                state.generation += 1;
            }
            Role::SearchButton => {
                state.last_search = state.search_box.clone();
                state.screen = ShopScreen::SearchResults;
                state.generation += 1;
            }
            Role::ResultTitle(index) => {
                state.selected = Some(index);
                state.screen = ShopScreen::Product;
                state.generation += 1;
            }
            Role::AddToTrolley => {
                let product = state
                    .selected
                    .ok_or_else(|| Error::internal("add-to-trolley with no product selected"))?;
                state.trolley = Some(TrolleyLine {
                    product,
                    quantity: 1,
                });
                state.dialog_open = true;
            }
            Role::DialogClose => {
                state.dialog_open = false;
            }
            Role::TrolleyLink => {
                state.screen = ShopScreen::Trolley;
                state.generation += 1;
            }
            Role::QuantityOption(quantity) => {
                if state.stale_quantity_clicks > 0 {
                    state.stale_quantity_clicks -= 1;
                    return Err(Error::stale(role.describe()));
                }
                if let Some(line) = state.trolley.as_mut() {
                    line.quantity = quantity;
                }
                state.generation += 1;
            }
            Role::HomeLogo => {
                state.screen = ShopScreen::Home;
                state.generation += 1;
            }
            _ => {}
        }
        Ok(())
    }

    fn text(&self, role: Role, generation: u64) -> Result<String> {
        let state = self.lock()?;
        Self::check(&state, role, generation)?;
        let text = match role {
            Role::ResultTitle(index) => state.catalog[index].title.clone(),
            Role::ProductTitle => {
                let index = state
                    .selected
                    .ok_or_else(|| Error::internal("product screen with no selection"))?;
                state.catalog[index].title.clone()
            }
            Role::LinePrice => match state.screen {
                ShopScreen::Product => {
                    let index = state
                        .selected
                        .ok_or_else(|| Error::internal("product screen with no selection"))?;
                    Self::format_price(state.catalog[index].price)
                }
                _ => {
                    let line = state
                        .trolley
                        .ok_or_else(|| Error::internal("trolley screen with no line"))?;
                    Self::format_price(state.catalog[line.product].price)
                }
            },
            Role::TrolleyProductName => {
                let line = state
                    .trolley
                    .ok_or_else(|| Error::internal("trolley screen with no line"))?;
                state.catalog[line.product].title.clone()
            }
            Role::Subtotal => {
                let line = state
                    .trolley
                    .ok_or_else(|| Error::internal("trolley screen with no line"))?;
                let subtotal = state
                    .subtotal_override
                    .unwrap_or(state.catalog[line.product].price * f64::from(line.quantity));
                Self::format_price(subtotal)
            }
            Role::QuantityOption(quantity) => quantity.to_string(),
            Role::SearchBox => state.search_box.clone(),
            Role::HomeLogo => "Argos".to_string(),
            _ => String::new(),
        };
        Ok(text)
    }
}

impl std::fmt::Debug for MockShopfront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockShopfront").finish_non_exhaustive()
    }
}

/// A driver session backed by the scripted shopfront
#[derive(Debug)]
pub struct MockSession {
    id: String,
    shop: Arc<MockShopfront>,
}

#[async_trait]
impl DriverSession for MockSession {
    fn id(&self) -> &str {
        &self.id
    }

    async fn goto(&self, _url: &str) -> Result<()> {
        let mut state = self.shop.lock()?;
        if state.closed {
            return Err(Error::webdriver("session already closed"));
        }
        state.screen = ShopScreen::Home;
        state.consent_open = true;
        state.dialog_open = false;
        state.generation += 1;
        Ok(())
    }

    async fn find(&self, locator: &Locator) -> Result<Arc<dyn ElementHandle>> {
        let state = self.shop.lock()?;
        if state.closed {
            return Err(Error::webdriver("session already closed"));
        }
        let role = MockShopfront::role_for(locator)
            .filter(|role| MockShopfront::role_present(&state, *role))
            .ok_or_else(|| Error::element_not_found(locator.to_string()))?;
        Ok(Arc::new(MockElement {
            shop: Arc::clone(&self.shop),
            role,
            generation: state.generation,
        }))
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<Arc<dyn ElementHandle>>> {
        let mut state = self.shop.lock()?;
        if state.closed {
            return Err(Error::webdriver("session already closed"));
        }

        if locator.strategy() == Strategy::XPath && locator.expression() == RESULT_TITLES_XPATH {
            if state.screen != ShopScreen::SearchResults {
                return Ok(Vec::new());
            }
            // A positive stale_result_reads hands out handles pinned to the
            // previous render, forcing callers through their re-resolve path.
            let generation = if state.stale_result_reads > 0 {
                state.stale_result_reads -= 1;
                state.generation.wrapping_sub(1)
            } else {
                state.generation
            };
            let handles = (0..state.catalog.len())
                .map(|index| {
                    Arc::new(MockElement {
                        shop: Arc::clone(&self.shop),
                        role: Role::ResultTitle(index),
                        generation,
                    }) as Arc<dyn ElementHandle>
                })
                .collect();
            return Ok(handles);
        }

        if locator.strategy() == Strategy::XPath && locator.expression() == QUANTITY_OPTIONS_XPATH {
            if state.screen != ShopScreen::Trolley || state.trolley.is_none() {
                return Ok(Vec::new());
            }
            let generation = state.generation;
            let handles = (1..=MAX_QUANTITY)
                .map(|quantity| {
                    Arc::new(MockElement {
                        shop: Arc::clone(&self.shop),
                        role: Role::QuantityOption(quantity),
                        generation,
                    }) as Arc<dyn ElementHandle>
                })
                .collect();
            return Ok(handles);
        }

        let generation = state.generation;
        let role = MockShopfront::role_for(locator)
            .filter(|role| MockShopfront::role_present(&state, *role));
        Ok(role
            .map(|role| {
                vec![Arc::new(MockElement {
                    shop: Arc::clone(&self.shop),
                    role,
                    generation,
                }) as Arc<dyn ElementHandle>]
            })
            .unwrap_or_default())
    }

    async fn execute(&self, script: &str) -> Result<serde_json::Value> {
        let state = self.shop.lock()?;
        if state.closed {
            return Err(Error::webdriver("session already closed"));
        }
        if script.contains("readyState") {
            return Ok(serde_json::Value::String("complete".to_string()));
        }
        Ok(serde_json::Value::Null)
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        let mut state = self.shop.lock()?;
        if state.closed {
            return Err(Error::webdriver("session already closed"));
        }
        if state.fail_screenshots {
            return Err(Error::webdriver("screenshot capture failed"));
        }
        state.screenshots_taken += 1;
        // minimal PNG signature, enough for a sink to persist
        Ok(b"\x89PNG\r\n\x1a\nmock-shopfront".to_vec())
    }

    async fn quit(&self) -> Result<()> {
        let mut state = self.shop.lock()?;
        state.closed = true;
        Ok(())
    }
}

struct MockElement {
    shop: Arc<MockShopfront>,
    role: Role,
    generation: u64,
}

#[async_trait]
impl ElementHandle for MockElement {
    async fn click(&self) -> Result<()> {
        self.shop.click(self.role, self.generation)
    }

    async fn clear(&self) -> Result<()> {
        let mut state = self.shop.lock()?;
        MockShopfront::check(&state, self.role, self.generation)?;
        if self.role == Role::SearchBox {
            state.search_box.clear();
        }
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> Result<()> {
        let mut state = self.shop.lock()?;
        MockShopfront::check(&state, self.role, self.generation)?;
        if self.role == Role::SearchBox {
            state.search_box.push_str(text);
        }
        Ok(())
    }

    async fn text(&self) -> Result<String> {
        self.shop.text(self.role, self.generation)
    }

    async fn attribute(&self, _name: &str) -> Result<Option<String>> {
        let state = self.shop.lock()?;
        MockShopfront::check(&state, self.role, self.generation)?;
        Ok(None)
    }

    async fn is_displayed(&self) -> Result<bool> {
        let state = self.shop.lock()?;
        MockShopfront::check(&state, self.role, self.generation)?;
        Ok(true)
    }

    async fn is_clickable(&self) -> Result<bool> {
        let state = self.shop.lock()?;
        MockShopfront::check(&state, self.role, self.generation)?;
        Ok(true)
    }

    async fn scroll_into_view(&self) -> Result<()> {
        let state = self.shop.lock()?;
        MockShopfront::check(&state, self.role, self.generation)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_product() -> Vec<MockProduct> {
        vec![MockProduct::new("Samsung 43-inch TV", 19.99)]
    }

    async fn open_on_results(shop: &Arc<MockShopfront>) -> MockSession {
        let session = shop.open_session();
        session.goto("https://shop.test/").await.unwrap();
        session
            .find(&Locator::id(CONSENT_ACCEPT_ID))
            .await
            .unwrap()
            .click()
            .await
            .unwrap();
        let button = session
            .find(&Locator::xpath(SEARCH_BUTTON_XPATH))
            .await
            .unwrap();
        button.click().await.unwrap();
        session
    }

    #[tokio::test]
    async fn consent_prompt_appears_after_navigation_and_dismisses() {
        let shop = MockShopfront::new(single_product());
        let session = shop.open_session();
        session.goto("https://shop.test/").await.unwrap();

        let consent = session.find(&Locator::id(CONSENT_ACCEPT_ID)).await.unwrap();
        consent.click().await.unwrap();

        let gone = session.find(&Locator::id(CONSENT_ACCEPT_ID)).await;
        assert!(matches!(gone.unwrap_err(), Error::ElementNotFound(_)));
    }

    #[tokio::test]
    async fn handles_go_stale_when_the_page_re_renders() {
        let shop = MockShopfront::new(single_product());
        let session = open_on_results(&shop).await;

        let results = session
            .find_all(&Locator::xpath(RESULT_TITLES_XPATH))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);

        // navigating to the product re-renders; the old handle is now stale
        results[0].click().await.unwrap();
        let err = results[0].text().await.unwrap_err();
        assert!(err.is_stale());
    }

    #[tokio::test]
    async fn stale_result_reads_hand_out_pre_stale_handles_once() {
        let shop = MockShopfront::new(single_product());
        let session = open_on_results(&shop).await;
        shop.set_stale_result_reads(1);

        let stale = session
            .find_all(&Locator::xpath(RESULT_TITLES_XPATH))
            .await
            .unwrap();
        assert!(stale[0].is_displayed().await.unwrap_err().is_stale());

        let fresh = session
            .find_all(&Locator::xpath(RESULT_TITLES_XPATH))
            .await
            .unwrap();
        assert!(fresh[0].is_displayed().await.unwrap());
    }

    #[tokio::test]
    async fn trolley_subtotal_tracks_quantity() {
        let shop = MockShopfront::new(single_product());
        let session = open_on_results(&shop).await;

        let results = session
            .find_all(&Locator::xpath(RESULT_TITLES_XPATH))
            .await
            .unwrap();
        results[0].click().await.unwrap();

        session
            .find(&Locator::xpath(ADD_TO_TROLLEY_XPATH))
            .await
            .unwrap()
            .click()
            .await
            .unwrap();
        session
            .find(&Locator::xpath(DIALOG_CLOSE_XPATH))
            .await
            .unwrap()
            .click()
            .await
            .unwrap();
        session
            .find(&Locator::xpath(TROLLEY_LINK_XPATH))
            .await
            .unwrap()
            .click()
            .await
            .unwrap();

        let options = session
            .find_all(&Locator::xpath(QUANTITY_OPTIONS_XPATH))
            .await
            .unwrap();
        assert_eq!(options.len(), MAX_QUANTITY as usize);
        // option "3"
        options[2].click().await.unwrap();
        assert_eq!(shop.trolley_quantity(), Some(3));

        let subtotal = session
            .find(&Locator::xpath(SUBTOTAL_XPATH))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(subtotal, "£59.97");
    }

    #[tokio::test]
    async fn quit_closes_the_session_for_every_operation() {
        let shop = MockShopfront::new(single_product());
        let session = shop.open_session();
        session.goto("https://shop.test/").await.unwrap();
        session.quit().await.unwrap();

        assert!(shop.is_closed());
        assert!(session.goto("https://shop.test/").await.is_err());
        assert!(session.screenshot_png().await.is_err());
    }

    #[test]
    fn locators_agree_with_page_objects() {
        use crate::pages;

        assert_eq!(pages::home::HOME_LOGO.expression(), HOME_LOGO_ID);
        assert_eq!(
            crate::session::registry::CONSENT_ACCEPT.expression(),
            CONSENT_ACCEPT_ID
        );
        assert_eq!(pages::search::SEARCH_BOX.expression(), SEARCH_BOX_ID);
        assert_eq!(pages::search::SEARCH_BUTTON.expression(), SEARCH_BUTTON_XPATH);
        assert_eq!(pages::search::RESULT_TITLES.expression(), RESULT_TITLES_XPATH);
        assert_eq!(pages::product::PRODUCT_TITLE.expression(), PRODUCT_TITLE_XPATH);
        assert_eq!(pages::product::ADD_TO_TROLLEY.expression(), ADD_TO_TROLLEY_XPATH);
        assert_eq!(pages::product::DIALOG_CLOSE.expression(), DIALOG_CLOSE_XPATH);
        assert_eq!(pages::product::TROLLEY_LINK.expression(), TROLLEY_LINK_XPATH);
        assert_eq!(pages::product::PRODUCT_PRICE.expression(), LINE_PRICE_XPATH);
        assert_eq!(pages::trolley::PRODUCT_NAME.expression(), TROLLEY_NAME_XPATH);
        assert_eq!(pages::trolley::LINE_PRICE.expression(), LINE_PRICE_XPATH);
        assert_eq!(pages::trolley::QUANTITY_SELECT.expression(), QUANTITY_SELECT_XPATH);
        assert_eq!(pages::trolley::QUANTITY_OPTIONS.expression(), QUANTITY_OPTIONS_XPATH);
        assert_eq!(pages::trolley::SUBTOTAL.expression(), SUBTOTAL_XPATH);
    }
}
