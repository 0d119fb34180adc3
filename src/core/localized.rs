//! Per-language field values with fallback resolution.
//!
//! Catalog files store localizable fields either as a plain value, which
//! applies to every language, or as an object keyed by language code whose
//! values may be `null`:
//!
//! ```json
//! { "name": "Prime de rendement" }
//! { "name": { "fr": "Congé", "en": "Leave", "ar": null } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A plain value or a mapping from language code to value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Localized<T> {
    PerLanguage(BTreeMap<String, Option<T>>),
    Plain(T),
}

impl<T> Localized<T> {
    /// Value for `lang`, else for `fallback`, else `None`.
    ///
    /// `null` entries count as missing. Plain values match every language.
    pub fn get(&self, lang: &str, fallback: &str) -> Option<&T> {
        match self {
            Self::Plain(value) => Some(value),
            Self::PerLanguage(map) => map
                .get(lang)
                .and_then(Option::as_ref)
                .or_else(|| map.get(fallback).and_then(Option::as_ref)),
        }
    }
}

impl<T: Clone + Default> Localized<T> {
    /// Owned value for `lang` with fallback; the type's empty value when
    /// neither language is present.
    pub fn resolve(&self, lang: &str, fallback: &str) -> T {
        self.get(lang, fallback).cloned().unwrap_or_default()
    }
}

impl<T: Default> Default for Localized<T> {
    fn default() -> Self {
        Self::Plain(T::default())
    }
}

impl From<&str> for Localized<String> {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for Localized<String> {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl<T> FromIterator<(String, T)> for Localized<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self::PerLanguage(iter.into_iter().map(|(k, v)| (k, Some(v))).collect())
    }
}

/// Deserialize `null` as the type's default so optional collections never
/// surface as errors.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
