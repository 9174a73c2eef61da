//! Scenario orchestration
//!
//! Binds step intents to page-object operations and carries the scenario's
//! cross-step state. The BDD runner owns the Gherkin phrasing; this module
//! owns what each phrase actually does and which assertions it enforces.

pub mod context;
pub mod shopping;

pub use context::ScenarioContext;
pub use shopping::ShoppingFlow;
