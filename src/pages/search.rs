//! Search results page

use rand::Rng;
use std::sync::Arc;
use tracing::info;

use crate::driver::{DriverSession, Locator};
use crate::element::{ElementInteractor, WaitPolicy};
use crate::{Error, Result};

pub(crate) const SEARCH_BOX: Locator = Locator::id("searchTerm");
pub(crate) const SEARCH_BUTTON: Locator = Locator::xpath("//button[@type='submit']");
pub(crate) const RESULT_TITLES: Locator =
    Locator::xpath("//div[@data-test='component-product-card-title']");

/// Uniformly random index into a result list, `None` when the list is empty.
///
/// Kept separate from any click side effect so the selection policy is
/// testable with a seeded generator.
pub fn pick_index<R: Rng>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.gen_range(0..len))
    }
}

pub struct SearchResultsPage {
    interactor: ElementInteractor,
}

impl SearchResultsPage {
    pub fn new(session: Arc<dyn DriverSession>, policy: WaitPolicy) -> Self {
        Self {
            interactor: ElementInteractor::new(session, policy),
        }
    }

    /// Enter a product name into the search box and submit
    pub async fn search(&self, term: &str) -> Result<()> {
        self.interactor.enter_text("Search box", &SEARCH_BOX, term).await;
        info!("Product '{}' entered in the search box", term);

        self.interactor.wait_for_clickable(&SEARCH_BUTTON).await?;
        self.interactor.click("Search button", &SEARCH_BUTTON).await;
        Ok(())
    }

    /// True iff every result title contains the category, case-insensitively.
    ///
    /// An empty result set satisfies this vacuously.
    pub async fn results_match_category(&self, category: &str) -> Result<bool> {
        self.interactor.wait_for_page_ready().await?;
        let titles = self.interactor.wait_for_visible_all(&RESULT_TITLES).await?;
        let wanted = category.to_lowercase();

        for title in &titles {
            let text = title.text().await?;
            if !text.to_lowercase().contains(&wanted) {
                info!(
                    "Search results contain '{}', which is outside category '{}'",
                    text, category
                );
                return Ok(false);
            }
        }

        info!("All {} search results belong to category '{}'", titles.len(), category);
        Ok(true)
    }

    /// Click a uniformly random result and wait for the product page
    pub async fn select_random_result(&self) -> Result<()> {
        let results = self.interactor.wait_for_visible_all(&RESULT_TITLES).await?;
        let index = pick_index(results.len(), &mut rand::thread_rng())
            .ok_or_else(|| Error::element_not_found("a search result to select"))?;
        self.click_result(&results, index).await
    }

    /// Click the result at a known index and wait for the product page
    pub async fn select_result_at(&self, index: usize) -> Result<()> {
        let results = self.interactor.wait_for_visible_all(&RESULT_TITLES).await?;
        self.click_result(&results, index).await
    }

    /// Click the first result whose text contains `needle`.
    ///
    /// The card text is lowercased before matching; the needle is used
    /// verbatim, so an uppercase needle never matches.
    pub async fn select_result_containing(&self, needle: &str) -> Result<()> {
        let results = self.interactor.wait_for_visible_all(&RESULT_TITLES).await?;
        for result in results {
            if result.text().await?.to_lowercase().contains(needle) {
                result.click().await?;
                info!("Product containing '{}' selected from the search page", needle);
                self.interactor.wait_for_page_ready().await?;
                return Ok(());
            }
        }
        Err(Error::element_not_found(format!(
            "search result containing '{}'",
            needle
        )))
    }

    async fn click_result(
        &self,
        results: &[Arc<dyn crate::driver::ElementHandle>],
        index: usize,
    ) -> Result<()> {
        let result = results.get(index).ok_or_else(|| {
            Error::element_not_found(format!("search result at index {}", index))
        })?;
        result.click().await?;
        self.interactor.wait_for_page_ready().await?;
        info!("Product at index {} selected from the search page", index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::mock::{MockProduct, MockShopfront};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn quick_policy() -> WaitPolicy {
        WaitPolicy::new(Duration::from_millis(100), Duration::from_millis(5))
    }

    async fn page_on_results(catalog: Vec<MockProduct>) -> (Arc<MockShopfront>, SearchResultsPage) {
        let shop = MockShopfront::new(catalog);
        let session: Arc<dyn DriverSession> = Arc::new(shop.open_session());
        session.goto("https://shop.test/").await.unwrap();

        let page = SearchResultsPage::new(Arc::clone(&session), quick_policy());
        // dismiss consent the way the registry would
        let interactor = ElementInteractor::new(session, quick_policy());
        interactor
            .click("Consent accept", &crate::session::registry::CONSENT_ACCEPT)
            .await;
        page.search("television").await.unwrap();
        (shop, page)
    }

    fn television_catalog() -> Vec<MockProduct> {
        vec![
            MockProduct::new("Bush 32 Inch Television", 149.99),
            MockProduct::new("LG 43 Inch Television", 329.99),
            MockProduct::new("Samsung 50 Inch Television", 429.00),
        ]
    }

    #[test]
    fn pick_index_is_none_on_an_empty_list() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_index(0, &mut rng), None);
    }

    #[test]
    fn pick_index_stays_in_bounds_and_covers_the_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..200 {
            let index = pick_index(5, &mut rng).unwrap();
            assert!(index < 5);
            seen[index] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn pick_index_is_deterministic_under_a_fixed_seed() {
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(pick_index(10, &mut first), pick_index(10, &mut second));
        }
    }

    #[tokio::test]
    async fn search_records_the_submitted_term() {
        let (shop, _page) = page_on_results(television_catalog()).await;
        assert_eq!(shop.last_search(), "television");
    }

    #[tokio::test]
    async fn matching_results_satisfy_the_category_check() {
        let (_shop, page) = page_on_results(television_catalog()).await;
        assert!(page.results_match_category("Television").await.unwrap());
    }

    #[tokio::test]
    async fn one_odd_result_fails_the_category_check() {
        let mut catalog = television_catalog();
        catalog.push(MockProduct::new("Dyson V8 Cordless Vacuum", 249.99));
        let (_shop, page) = page_on_results(catalog).await;

        assert!(!page.results_match_category("television").await.unwrap());
    }

    #[tokio::test]
    async fn an_empty_result_set_matches_any_category_vacuously() {
        let (_shop, page) = page_on_results(Vec::new()).await;
        assert!(page.results_match_category("television").await.unwrap());
    }

    #[tokio::test]
    async fn category_check_survives_stale_result_handles() {
        let (shop, page) = page_on_results(television_catalog()).await;
        shop.set_stale_result_reads(1);
        assert!(page.results_match_category("television").await.unwrap());
    }

    #[tokio::test]
    async fn select_random_result_errors_when_there_is_nothing_to_pick() {
        let (_shop, page) = page_on_results(Vec::new()).await;
        let err = page.select_random_result().await.unwrap_err();
        assert!(matches!(err, Error::ElementNotFound(_)));
    }

    #[tokio::test]
    async fn select_result_containing_matches_lowercased_card_text() {
        let (_shop, page) = page_on_results(television_catalog()).await;
        page.select_result_containing("samsung").await.unwrap();
    }

    #[tokio::test]
    async fn select_result_containing_needle_is_case_sensitive() {
        // the card text is lowercased but the needle is not, so an uppercase
        // needle never matches a title that displays as "Samsung ..."
        let (_shop, page) = page_on_results(television_catalog()).await;
        let err = page.select_result_containing("Samsung").await.unwrap_err();
        assert!(matches!(err, Error::ElementNotFound(_)));
    }
}
