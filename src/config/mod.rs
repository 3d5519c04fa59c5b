//! Environment-driven application configuration.

mod app;
mod environment;

pub use app::{AppConfig, GeocodingConfig, MapConfig, RecordConfig, UiConfig};
pub use environment::DeploymentMode;
