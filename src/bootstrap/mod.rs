//! Startup utilities for the hosting application.

mod tracing_init;

pub use tracing_init::init_tracing;
