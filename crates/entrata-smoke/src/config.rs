// Suite configuration
//
// Everything the session manager needs is carried in an explicit config
// value rather than hidden defaults: driver path, target URL, and the wait
// timings applied by the element-wait primitive.

use std::path::PathBuf;
use std::time::Duration;

/// The single page this suite smoke-tests
pub const TARGET_URL: &str = "https://www.entrata.com";

/// Fallback chromedriver location when `CHROMEDRIVER` is not set
pub const DEFAULT_DRIVER_PATH: &str = "/usr/local/bin/chromedriver";

/// Environment variable overriding the chromedriver path
pub const CHROMEDRIVER_ENV: &str = "CHROMEDRIVER";

/// Default deadline for element waits and auto-retry assertions (10 seconds)
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default polling interval between element probes (250ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Configuration passed into session construction.
///
/// # Example
///
/// ```ignore
/// use entrata_smoke::SmokeConfig;
/// use std::time::Duration;
///
/// let config = SmokeConfig::default()
///     .with_driver_path("/opt/chromedriver/chromedriver")
///     .with_wait_timeout(Duration::from_secs(15));
/// ```
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    /// Filesystem path to the chromedriver executable
    pub driver_path: PathBuf,
    /// URL every scenario navigates to first
    pub base_url: String,
    /// Session-wide default deadline for element waits
    pub wait_timeout: Duration,
    /// Interval between polls inside a wait
    pub poll_interval: Duration,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        let driver_path = std::env::var_os(CHROMEDRIVER_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DRIVER_PATH));

        Self {
            driver_path,
            base_url: TARGET_URL.to_string(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl SmokeConfig {
    /// Sets the chromedriver executable path.
    pub fn with_driver_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.driver_path = path.into();
        self
    }

    /// Sets the URL scenarios navigate to.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the session-wide default wait deadline.
    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Sets the polling interval used inside waits.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}
