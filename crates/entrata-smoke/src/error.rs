// Error types for entrata-smoke

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result type alias for entrata-smoke operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a smoke-test session
#[derive(Debug, Error)]
pub enum Error {
    /// The chromedriver executable is missing at the configured path
    ///
    /// This is a fatal precondition: session setup aborts before any
    /// navigation happens. Point the `CHROMEDRIVER` environment variable at
    /// a valid binary, or pass an explicit path in `SmokeConfig`.
    #[error("chromedriver not found at {}", .path.display())]
    DriverNotFound { path: PathBuf },

    /// The chromedriver process could not be started or exited immediately
    #[error("failed to launch chromedriver: {0}")]
    DriverLaunch(String),

    /// The WebDriver session could not be established
    #[error("failed to open browser session: {0}")]
    NewSession(#[from] fantoccini::error::NewSessionError),

    /// A WebDriver command failed mid-session
    #[error("webdriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No element matched the locator within the wait deadline
    ///
    /// A diagnostic screenshot has already been written; the message carries
    /// its path so the failing test names both the locator and the file.
    #[error("element not found: {locator}. Screenshot saved as {screenshot}")]
    ElementNotFound { locator: String, screenshot: String },

    /// The page never reported `document.readyState == "complete"`
    #[error("page did not reach readyState \"complete\" within {timeout:?}")]
    PageNotReady { timeout: Duration },

    /// An auto-retry assertion did not hold before its deadline
    #[error("assertion timeout: {0}")]
    AssertionTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_not_found_names_locator_and_screenshot() {
        let err = Error::ElementNotFound {
            locator: "xpath '//a[contains(text(), 'Solutions')]'".to_string(),
            screenshot: "error_screenshot_20250101_120000.png".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("//a[contains(text(), 'Solutions')]"));
        assert!(message.contains("error_screenshot_20250101_120000.png"));
    }

    #[test]
    fn driver_not_found_names_path() {
        let err = Error::DriverNotFound {
            path: PathBuf::from("/opt/chromedriver"),
        };
        assert_eq!(err.to_string(), "chromedriver not found at /opt/chromedriver");
    }
}
