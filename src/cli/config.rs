//! Resolved runtime configuration and logging setup.

use camino::Utf8PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use super::Cli;

/// Log filter applied when neither `RUST_LOG` nor `--log-level` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings resolved from flags and environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    store_path: Utf8PathBuf,
    log_filter: String,
}

impl TrackerConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub fn new(store_path: impl Into<Utf8PathBuf>, log_filter: impl Into<String>) -> Self {
        Self {
            store_path: store_path.into(),
            log_filter: log_filter.into(),
        }
    }

    /// Resolves the configuration from parsed arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(
            cli.store.clone(),
            cli.log_level
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
        )
    }

    /// Returns the path of the JSON task store.
    #[must_use]
    pub const fn store_path(&self) -> &Utf8PathBuf {
        &self.store_path
    }

    /// Returns the fallback log filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Builds the effective log filter, preferring `RUST_LOG` when set.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

/// Installs the global `tracing` subscriber, writing to standard error so
/// that command output on standard output stays clean.
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init_logging(config: &TrackerConfig) {
    let installed = tracing_subscriber::registry()
        .with(config.env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
