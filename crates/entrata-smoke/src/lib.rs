// entrata-smoke: browser-driven smoke tests for the Entrata marketing site
//
// The library is the thin reusable layer the suite is built on: a browser
// session manager (chromedriver lifecycle + fixed launch options) and a
// resilient element wait that captures a diagnostic screenshot on timeout.
// The six scenarios themselves live in tests/homepage_smoke.rs.

pub mod assertions;
pub mod config;
pub mod driver;
pub mod error;
pub mod locator;
pub mod session;

pub use assertions::{Expectation, expect};
pub use config::{SmokeConfig, TARGET_URL};
pub use driver::ChromeDriver;
pub use error::{Error, Result};
pub use locator::{Locator, Strategy};
pub use session::{Session, Viewport};
