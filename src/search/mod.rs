//! Catalog search
//!
//! Free-text lookup over the loaded catalog: no ranking, no fuzzy matching.
//!
//! ## Pipeline
//!
//! ```text
//! raw input ──▶ tokenize (trim, normalize, split) ──▶ Query
//!                                                      │
//!              Catalog (normalized haystack per record)│
//!                                                      ▼
//!                                 filter: every term is a substring
//!                                                      │
//!                                                      ▼
//!                    SearchOutcome { EmptyQuery | Matches | NoMatches }
//! ```

pub mod engine;
pub mod normalize;
pub mod query;

pub use engine::{SearchOutcome, filter, run, search, search_outcome};
pub use normalize::normalize;
pub use query::{Query, tokenize};
