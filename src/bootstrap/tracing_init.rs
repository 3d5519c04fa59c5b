//! Tracing initialization utilities.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Call this before [`AppConfig::from_env`](crate::AppConfig::from_env) so
/// the missing-token diagnostic has somewhere to go.
///
/// # Example
///
/// ```rust
/// use travel_record_core::init_tracing;
///
/// // Debug logging for the app, info for everything else
/// init_tracing("travel_record=debug,info");
/// ```
///
/// # Filter Syntax
///
/// The filter follows the `tracing_subscriber::EnvFilter` syntax:
/// - `info` - Enable info level for all targets
/// - `my_crate=debug` - Enable debug level for `my_crate`
/// - `my_crate=debug,info` - Debug for `my_crate`, info for everything else
/// - `my_crate::module=trace` - Trace level for a specific module
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
