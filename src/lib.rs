pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod i18n;
pub mod preferences;
pub mod search;
pub mod session;
pub mod test_utils;

pub use error::{IndemnityError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
