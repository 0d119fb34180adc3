//! E2E test suite entry point.

mod fixture;
mod http_loading;
mod language_switch;
