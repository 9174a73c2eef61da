//! Per-scenario state

/// Mutable state scoped to one scenario execution.
///
/// Created at scenario start, discarded at scenario end, mutated only by
/// step handlers.
#[derive(Debug, Default)]
pub struct ScenarioContext {
    selected_product: Option<String>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the title of the product just selected
    pub fn record_product(&mut self, title: String) {
        self.selected_product = Some(title);
    }

    /// Title recorded by an earlier step, if any
    pub fn selected_product(&self) -> Option<&str> {
        self.selected_product.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_remembers_the_last_product() {
        let mut context = ScenarioContext::new();
        assert_eq!(context.selected_product(), None);

        context.record_product("Bush 32 Inch Television".to_string());
        context.record_product("LG 43 Inch Television".to_string());
        assert_eq!(context.selected_product(), Some("LG 43 Inch Television"));
    }
}
