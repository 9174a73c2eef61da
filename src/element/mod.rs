//! Wait-qualified element interaction
//!
//! All page objects go through [`ElementInteractor`], which couples every
//! interaction with an explicit wait on the target element's state.

pub mod interactor;
pub mod wait;

pub use interactor::{ElementInteractor, Interaction};
pub use wait::WaitPolicy;
