//! Output formatters for CLI commands
//!
//! Provides structured formatters for records and search results that can
//! render to multiple formats (Human, JSON, JSONL, Plain).

mod record_card;
mod search_results;

pub use record_card::{RecordCard, RecordView};
pub use search_results::{ResultsBody, SearchResults};
