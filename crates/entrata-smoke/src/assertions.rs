// Assertions - auto-retry expectations over located elements
//
// Provides an expect() API that polls element state until the condition
// holds or a bounded timeout elapses, then fails with a message naming the
// subject under test.

use std::time::Duration;

use fantoccini::elements::Element;

use crate::config::{DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};
use crate::{Error, Result};

/// Creates an expectation for an already-located element.
///
/// `subject` names the element in failure messages ("Watch Demo button",
/// "Solutions menu item").
///
/// # Example
///
/// ```ignore
/// use entrata_smoke::expect;
///
/// let button = session.wait_for_element(&locator).await?;
/// expect(&button, "Watch Demo button").to_be_visible().await?;
/// ```
pub fn expect<'a>(element: &'a Element, subject: impl Into<String>) -> Expectation<'a> {
    Expectation {
        element,
        subject: subject.into(),
        timeout: DEFAULT_WAIT_TIMEOUT,
        poll_interval: DEFAULT_POLL_INTERVAL,
    }
}

/// Expectation wraps an element and provides assertion methods with auto-retry.
pub struct Expectation<'a> {
    element: &'a Element,
    subject: String,
    timeout: Duration,
    poll_interval: Duration,
}

// to_* methods consume self; the expectation is built, chained, and used once
#[allow(clippy::wrong_self_convention)]
impl Expectation<'_> {
    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Asserts that the element is visible.
    pub async fn to_be_visible(self) -> Result<()> {
        let start = std::time::Instant::now();

        loop {
            if self.element.is_displayed().await? {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::AssertionTimeout(format!(
                    "expected {} to be visible, but it was not visible after {:?}",
                    self.subject, self.timeout
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Asserts that the element is enabled.
    pub async fn to_be_enabled(self) -> Result<()> {
        let start = std::time::Instant::now();

        loop {
            if self.element.is_enabled().await? {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::AssertionTimeout(format!(
                    "expected {} to be enabled, but it was not enabled after {:?}",
                    self.subject, self.timeout
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Asserts that the element's text contains the given substring.
    pub async fn to_contain_text(self, expected: &str) -> Result<()> {
        let start = std::time::Instant::now();

        loop {
            let text = self.element.text().await?;
            let actual = text.trim();
            if actual.contains(expected) {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::AssertionTimeout(format!(
                    "expected {} to contain text '{}', but had '{}' after {:?}",
                    self.subject, expected, actual, self.timeout
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
