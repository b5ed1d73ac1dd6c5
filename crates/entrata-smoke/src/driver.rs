// chromedriver process management
//
// Handles verifying, launching, and tearing down the chromedriver child
// process that each session owns. One process per session, on its own
// OS-assigned port, so concurrently running tests never share a driver.

use std::path::Path;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::process::{Child, Command};

use crate::{Error, Result};

/// How long to wait for chromedriver to start accepting connections
const STARTUP_DEADLINE: Duration = Duration::from_secs(10);

/// Interval between readiness probes during startup
const STARTUP_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Manages a chromedriver child process for the lifetime of one session
///
/// The process is spawned with `kill_on_drop`, so the driver (and the
/// browser it controls) is torn down on every exit path, including test
/// panics that unwind past the owning session.
#[derive(Debug)]
pub struct ChromeDriver {
    process: Child,
    port: u16,
}

impl ChromeDriver {
    /// Launch chromedriver from the given executable path
    ///
    /// This will:
    /// 1. Verify the executable exists (fatal `DriverNotFound` otherwise)
    /// 2. Pick a free local port
    /// 3. Spawn `chromedriver --port=<port>` and detect immediate exit
    /// 4. Poll the port until the driver accepts TCP connections
    ///
    /// # Errors
    ///
    /// Returns `Error::DriverNotFound` if the executable is missing. This is
    /// checked before anything is spawned, so a bad path never reaches the
    /// browser. Returns `Error::DriverLaunch` if the process fails to start
    /// or never starts listening.
    pub async fn launch(executable: &Path) -> Result<Self> {
        if !executable.is_file() {
            return Err(Error::DriverNotFound {
                path: executable.to_path_buf(),
            });
        }

        let port = pick_free_port()?;
        tracing::debug!(path = %executable.display(), port, "spawning chromedriver");

        let mut child = Command::new(executable)
            .arg(format!("--port={port}"))
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::DriverLaunch(format!("failed to spawn process: {e}")))?;

        // Give it a moment to potentially fail
        tokio::time::sleep(Duration::from_millis(100)).await;

        match child.try_wait() {
            Ok(Some(status)) => {
                return Err(Error::DriverLaunch(format!(
                    "chromedriver exited immediately with status: {status}"
                )));
            }
            Ok(None) => {}
            Err(e) => {
                return Err(Error::DriverLaunch(format!(
                    "failed to check process status: {e}"
                )));
            }
        }

        wait_until_listening(port).await?;
        tracing::debug!(port, "chromedriver ready");

        Ok(Self {
            process: child,
            port,
        })
    }

    /// The WebDriver endpoint served by this process
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Kill the driver process and reap it
    pub async fn shutdown(mut self) -> Result<()> {
        tracing::debug!(port = self.port, "shutting down chromedriver");
        // Already-exited is fine here
        let _ = self.process.start_kill();
        self.process.wait().await?;
        Ok(())
    }
}

/// Ask the OS for a free port by binding to port 0 and releasing it
fn pick_free_port() -> Result<u16> {
    let listener = std::net::TcpListener::bind(("127.0.0.1", 0))?;
    Ok(listener.local_addr()?.port())
}

/// Poll until chromedriver accepts TCP connections on its port
async fn wait_until_listening(port: u16) -> Result<()> {
    let deadline = tokio::time::Instant::now() + STARTUP_DEADLINE;

    loop {
        if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return Ok(());
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(Error::DriverLaunch(format!(
                "chromedriver did not start listening on port {port} within {STARTUP_DEADLINE:?}"
            )));
        }
        tokio::time::sleep(STARTUP_POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn missing_executable_is_fatal_before_spawn() {
        let bogus = PathBuf::from("/nonexistent/path/to/chromedriver");
        let result = ChromeDriver::launch(&bogus).await;

        match result {
            Err(Error::DriverNotFound { path }) => assert_eq!(path, bogus),
            other => panic!("expected DriverNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn directory_is_not_an_executable() {
        // A directory at the configured path must also fail the precondition
        let result = ChromeDriver::launch(Path::new("/tmp")).await;
        assert!(matches!(result, Err(Error::DriverNotFound { .. })));
    }

    #[test]
    fn free_ports_are_nonzero() {
        let port = pick_free_port().expect("failed to pick a free port");
        assert_ne!(port, 0);
    }
}
