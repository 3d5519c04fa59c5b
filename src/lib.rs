//! Travel Record Core - Shared wiring for the travel record app shell.
//!
//! This crate provides the startup-time building blocks the navigation
//! shell loads once and never mutates:
//!
//! - **config**: Environment-driven configuration bundle (API endpoint,
//!   map provider, upload limits, UI formatting)
//! - **routes**: Declarative route table with lazy component loading
//! - **bootstrap**: Tracing initialization utilities
//!
//! # Features
//!
//! - `config` - Configuration resolution (enabled by default)
//! - `routes` - Route table and component loaders (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,ignore
//! use travel_record_core::{app_routes, init_tracing, AppConfig};
//!
//! fn main() {
//!     init_tracing("travel_record=debug");
//!     let config = AppConfig::from_env();
//!
//!     let table = app_routes(home_view(), map_loader(), records_loader());
//!     shell::run(config, table);
//! }
//! ```

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "routes")]
pub mod routes;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
#[cfg(feature = "config")]
pub use config::{AppConfig, DeploymentMode, GeocodingConfig, MapConfig, RecordConfig, UiConfig};

#[cfg(feature = "routes")]
pub use routes::{
    app_routes, Component, ComponentHandle, ComponentSource, HistoryMode, LoadError, RouteEntry,
    RouteTable,
};

#[cfg(feature = "bootstrap")]
pub use bootstrap::init_tracing;
