//! Logging and tracing bootstrap.

use campus_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`. Safe to call more than once;
/// only the first call installs anything.
pub fn init(settings: &TelemetrySettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().with_target(false).try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(
            target: "campus-telemetry",
            format = ?settings.log_format,
            "tracing subscriber installed"
        );
    }
}
