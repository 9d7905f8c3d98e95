//! Library crate for usergate.
//!
//! Exposes the user gate classification and its environment configuration.

#![forbid(unsafe_code)]

pub mod config;
pub mod gate;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use config::Config;
pub use gate::{ADMIN_USER, Classification, TARGET, UserGate, UserSource, classify};
