//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber filtered according to
//! [`CoreConfig`].

use tracing_subscriber::EnvFilter;

use crate::config::CoreConfig;

/// Filter directive derived from config
///
/// `log_filter` wins when set, otherwise `debug` selects between
/// `debug` and `info`.
pub fn filter_directive(config: &CoreConfig) -> String {
    match &config.log_filter {
        Some(filter) if !filter.trim().is_empty() => filter.clone(),
        _ if config.debug => "debug".to_string(),
        _ => "info".to_string(),
    }
}

/// Install the global subscriber
///
/// Returns false if a subscriber was already installed.
pub fn init(config: &CoreConfig) -> bool {
    let directive = filter_directive(config);
    let (filter, invalid) = match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    if invalid {
        tracing::warn!("Invalid log filter '{}', using 'info'", directive);
    }

    installed
}
