//! Property test suite entry point.

mod normalize_tests;
mod search_tests;
