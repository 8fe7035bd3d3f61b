//! Tracing setup for applications embedding the service

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `Config::log_filter`. Returns `false` when
/// a subscriber was already installed.
pub fn init_tracing(config: &Config) -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(config.log_ansi))
        .try_init()
        .is_ok()
}
