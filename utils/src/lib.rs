//! Shared utilities for the ZUM Services client.

pub mod logging;

pub use logging::init_tracing_with_level;
