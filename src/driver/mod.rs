//! Browser automation boundary
//!
//! Everything the suite needs from a browser is expressed through the
//! [`DriverSession`] and [`ElementHandle`] traits. Two implementations exist:
//! a thirtyfour-backed WebDriver session for live runs and a scripted
//! in-process shopfront for hermetic runs.

pub mod locator;
pub mod mock;
pub mod traits;
pub mod webdriver;

pub use locator::{Locator, Strategy};
pub use traits::{DriverSession, ElementHandle, SessionFactory};
pub use webdriver::WebDriverSession;
