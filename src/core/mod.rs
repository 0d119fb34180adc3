//! Core record types and field localization

pub mod localized;
pub mod record;

pub use localized::Localized;
pub use record::{Field, FieldValue, Liability, Record};
