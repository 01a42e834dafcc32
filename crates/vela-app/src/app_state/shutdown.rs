//! Graceful shutdown: destroy surfaces, stop the assistant.

use std::time::Duration;

use super::core::VelaApp;

impl VelaApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Destroy every surface (tabs, then chrome)
    /// 2. Drop the assistant channels, which ends the async task
    /// 3. Shut down the tokio runtime
    /// 4. Release the window
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(ref mut shell) = self.shell {
            shell.shutdown();
        }
        self.shell = None;
        self.webviews = None;

        self.assistant_tx = None;
        self.assistant_rx = None;
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.window = None;
        self.should_exit = true;
    }
}
