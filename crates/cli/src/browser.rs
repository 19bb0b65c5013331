//! Opens the index page once the server has had time to start.

use std::time::Duration;

/// Fire-and-forget; failures are logged and otherwise ignored.
pub fn open_after_delay(url: String, delay_ms: u64) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let target = url.clone();
        match tokio::task::spawn_blocking(move || open::that(&target)).await {
            Ok(Ok(())) => tracing::info!(%url, "opened browser"),
            Ok(Err(err)) => tracing::warn!(%url, error = %err, "could not open browser"),
            Err(err) => tracing::warn!(error = %err, "browser launch task failed"),
        }
    });
}
