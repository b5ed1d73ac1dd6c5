// Browser session management
//
// One Session per test: spawns its own chromedriver, connects a WebDriver
// client with the fixed launch options, and exposes the element-wait
// primitive that captures a diagnostic screenshot on timeout.

use std::time::Duration;

use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;

use crate::config::SmokeConfig;
use crate::driver::ChromeDriver;
use crate::locator::Locator;
use crate::{Error, Result};

/// Deadline for the document-ready poll after a viewport change
const READY_STATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Browser viewport dimensions, applied transiently to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A live browser session owned by a single test
///
/// Holds the WebDriver client together with the chromedriver process backing
/// it. `close()` releases both on the success path; on panic or early return
/// the kill-on-drop child process tears the browser down instead. A closed
/// session is consumed and cannot be reused.
pub struct Session {
    client: Client,
    driver: ChromeDriver,
    config: SmokeConfig,
}

impl Session {
    /// Launch a ready-to-use browser session
    ///
    /// Spawns chromedriver from the configured path (fatal if missing, before
    /// any navigation), then opens a Chrome session with a maximized start
    /// state, certificate-error tolerance, and popup blocking disabled.
    pub async fn launch(config: SmokeConfig) -> Result<Self> {
        let driver = ChromeDriver::launch(&config.driver_path).await?;

        let mut capabilities = serde_json::Map::new();
        capabilities.insert(
            "goog:chromeOptions".to_string(),
            json!({
                "args": [
                    "--start-maximized",
                    "--ignore-certificate-errors",
                    "--disable-popup-blocking",
                ],
            }),
        );
        capabilities.insert("acceptInsecureCerts".to_string(), json!(true));

        let client = ClientBuilder::native()
            .capabilities(capabilities)
            .connect(&driver.url())
            .await?;

        tracing::info!(driver = %driver.url(), "browser session established");

        Ok(Self {
            client,
            driver,
            config,
        })
    }

    /// The configuration this session was constructed with
    pub fn config(&self) -> &SmokeConfig {
        &self.config
    }

    /// Navigate to the configured target URL
    pub async fn goto_home(&self) -> Result<()> {
        let url = self.config.base_url.clone();
        tracing::debug!(%url, "navigating");
        self.client.goto(&url).await?;
        Ok(())
    }

    /// The current page title
    pub async fn title(&self) -> Result<String> {
        Ok(self.client.title().await?)
    }

    /// Wait for an element using the session-wide default timeout
    ///
    /// See [`Session::wait_for_element_with_timeout`].
    pub async fn wait_for_element(&self, locator: &Locator) -> Result<Element> {
        self.wait_for_element_with_timeout(locator, self.config.wait_timeout)
            .await
    }

    /// Wait for an element with an explicit deadline
    ///
    /// Polls the page until an element matching the locator is present. On
    /// timeout, captures a screenshot to a timestamped file in the working
    /// directory and returns `Error::ElementNotFound` naming the locator and
    /// the screenshot path. Other WebDriver failures propagate unchanged.
    pub async fn wait_for_element_with_timeout(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<Element> {
        let found = self
            .client
            .wait()
            .at_most(timeout)
            .every(self.config.poll_interval)
            .for_element(locator.as_webdriver())
            .await;

        match found {
            Ok(element) => Ok(element),
            Err(CmdError::WaitTimeout) => {
                let screenshot = self.capture_failure_screenshot().await?;
                tracing::warn!(%locator, %screenshot, "element wait timed out");
                Err(Error::ElementNotFound {
                    locator: locator.to_string(),
                    screenshot,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Best-effort lookup: absence is a normal optional result
    ///
    /// Only the not-found condition maps to `Ok(None)`; any other WebDriver
    /// error still propagates, so infrastructure failures are not masked.
    pub async fn find_optional(&self, locator: &Locator) -> Result<Option<Element>> {
        match self.client.find(locator.as_webdriver()).await {
            Ok(element) => Ok(Some(element)),
            Err(e) if e.is_no_such_element() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Resize the browser window to the given viewport
    pub async fn set_viewport(&self, viewport: Viewport) -> Result<()> {
        tracing::debug!(%viewport, "resizing window");
        self.client
            .set_window_size(viewport.width, viewport.height)
            .await?;
        Ok(())
    }

    /// Poll until the page reports `document.readyState == "complete"`
    pub async fn wait_until_ready(&self) -> Result<()> {
        let deadline = tokio::time::Instant::now() + READY_STATE_TIMEOUT;

        loop {
            let state = self
                .client
                .execute("return document.readyState", vec![])
                .await?;
            if state == json!("complete") {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(Error::PageNotReady {
                    timeout: READY_STATE_TIMEOUT,
                });
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// Capture a screenshot to `error_screenshot_<YYYYMMDD_HHMMSS>.png`
    ///
    /// Returns the path the file was written to.
    pub async fn capture_failure_screenshot(&self) -> Result<String> {
        let filename = screenshot_filename(chrono::Local::now().naive_local());
        let png = self.client.screenshot().await?;
        tokio::fs::write(&filename, png).await?;
        Ok(filename)
    }

    /// Release the session: quit the browser and reap chromedriver
    pub async fn close(self) -> Result<()> {
        tracing::info!("closing browser session");
        self.client.close().await?;
        self.driver.shutdown().await?;
        Ok(())
    }
}

/// Diagnostic screenshot filename for the given local timestamp
fn screenshot_filename(timestamp: chrono::NaiveDateTime) -> String {
    format!("error_screenshot_{}.png", timestamp.format("%Y%m%d_%H%M%S"))
}
