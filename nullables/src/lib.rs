//! Nullable infrastructure for deterministic testing.
//!
//! The client reaches the network only through [`zum_types::Transport`].
//! This crate provides a test-friendly implementation that:
//! - Records every request it is handed
//! - Returns scripted bodies or failures
//! - Never touches the network
//!
//! Usage: swap `HttpTransport` for `NullTransport` in tests.

pub mod transport;

pub use transport::NullTransport;
