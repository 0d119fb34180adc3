//! Shared test utilities for indemnity.

pub mod fixtures;
pub mod logging;

#[cfg(test)]
pub mod arbitrary;
