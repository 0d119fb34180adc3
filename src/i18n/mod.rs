//! Interface internationalisation.
//!
//! | Code | Language | Direction |
//! |------|----------|-----------|
//! | fr   | French   | ltr       |
//! | ar   | Arabic   | rtl       |
//! | en   | English  | ltr       |
//!
//! Interface strings are embedded at compile time. Record content is
//! localized separately, per field, by [`crate::core::localized`].

mod lang;
mod strings;

pub use lang::{Direction, Lang};
pub use strings::{keys, t};
