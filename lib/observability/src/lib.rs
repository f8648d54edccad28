//! Logging bootstrap shared by the binaries.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` controls filtering (default `info`). Set `LOG_FORMAT=logfmt`
/// for machine-readable output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").as_deref() == Ok("logfmt") {
        registry.with(tracing_logfmt::layer()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
