use proptest::prelude::*;

use crate::config::{Config, DataConfig, DocumentConfig, I18nConfig, OutputConfig};
use crate::core::{Liability, Localized, Record};
use crate::i18n::Lang;

/// Words drawn from Latin letters with French accents, plus Arabic letters.
const WORD: &str = "[a-zA-ZÀ-ÿ\u{0621}-\u{064A}]{1,12}";

pub fn arb_lang() -> impl Strategy<Value = Lang> {
    prop_oneof![Just(Lang::Fr), Just(Lang::Ar), Just(Lang::En)]
}

fn arb_liability() -> impl Strategy<Value = Liability> {
    prop_oneof![
        Just(Liability::Yes),
        Just(Liability::No),
        "[a-z]{5,8}".prop_map(Liability::Other),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(WORD, 1..5).prop_map(|words| words.join(" "))
}

/// Plain text or a per-language object that always carries French.
pub fn arb_localized_text() -> impl Strategy<Value = Localized<String>> {
    prop_oneof![
        arb_text().prop_map(Localized::Plain),
        (arb_text(), prop::option::of(arb_text()), prop::option::of(arb_text())).prop_map(
            |(fr, ar, en)| {
                let mut map = std::collections::BTreeMap::new();
                map.insert("fr".to_string(), Some(fr));
                map.insert("ar".to_string(), ar);
                map.insert("en".to_string(), en);
                Localized::PerLanguage(map)
            }
        ),
    ]
}

pub fn arb_record() -> impl Strategy<Value = Record> {
    (
        arb_localized_text(),
        prop::collection::vec("[A-Z]{2,4}", 0..3),
        prop::collection::vec(WORD, 0..4),
        arb_localized_text(),
        arb_text(),
        arb_liability(),
        arb_liability(),
        prop::option::of(1u32..900),
    )
        .prop_map(
            |(name, abbreviations, keywords, definition, reason, cotisable, imposable, pdf_page)| {
                Record {
                    name,
                    abbreviations,
                    keywords: Localized::Plain(keywords),
                    definition,
                    reason: Localized::Plain(reason),
                    cotisable,
                    imposable,
                    exoneration_reason: None,
                    pdf_page,
                }
            },
        )
}

pub fn arb_config() -> impl Strategy<Value = Config> {
    (
        "[a-z/]{1,20}",
        prop::option::of("https?://[a-z]{3,10}\\.org"),
        1u64..120,
        any::<bool>(),
        arb_lang(),
        arb_lang(),
        "[a-z/]{1,20}\\.pdf",
        prop_oneof![Just("human"), Just("json"), Just("jsonl"), Just("plain")],
    )
        .prop_map(
            |(root, base_url, timeout_secs, skip_malformed, default_language, fallback, doc, format)| {
                Config {
                    data: DataConfig {
                        root: root.into(),
                        base_url,
                        timeout_secs,
                        skip_malformed,
                        ..DataConfig::default()
                    },
                    i18n: I18nConfig {
                        default_language,
                        fallback_language: fallback,
                    },
                    document: DocumentConfig { path: doc },
                    output: OutputConfig {
                        format: format.to_string(),
                    },
                }
            },
        )
}

/// Free-text queries mixing words, accents, case and stray whitespace.
pub fn arb_search_query() -> impl Strategy<Value = String> {
    prop::collection::vec(WORD, 0..4).prop_map(|words| format!("  {}  ", words.join("   ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::search::normalize;

    proptest! {
        #[test]
        fn config_survives_toml_roundtrip(config in arb_config()) {
            let text = toml::to_string(&config).unwrap();
            let parsed: Config = toml::from_str(&text).unwrap();
            prop_assert_eq!(parsed.data.root, config.data.root);
            prop_assert_eq!(parsed.data.base_url, config.data.base_url);
            prop_assert_eq!(parsed.i18n.default_language, config.i18n.default_language);
            prop_assert_eq!(parsed.document.path, config.document.path);
        }

        #[test]
        fn record_survives_json_roundtrip(record in arb_record()) {
            let json = serde_json::to_string(&record).unwrap();
            let parsed: Record = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, record);
        }

        #[test]
        fn every_name_word_finds_its_record(
            records in prop::collection::vec(arb_record(), 1..6),
            lang in arb_lang(),
        ) {
            let catalog = Catalog::new(lang, Lang::Fr, records);
            for record in catalog.records() {
                let name = record.name.resolve(lang.code(), "fr");
                for word in name.split_whitespace() {
                    let hits = catalog.search(word);
                    prop_assert!(
                        hits.iter().any(|hit| std::ptr::eq(*hit, record)),
                        "{word:?} did not find {name:?}"
                    );
                }
            }
        }

        #[test]
        fn hits_contain_every_term(
            records in prop::collection::vec(arb_record(), 0..6),
            query in arb_search_query(),
        ) {
            let catalog = Catalog::new(Lang::Fr, Lang::Fr, records);
            let terms: Vec<String> = normalize(&query)
                .split_whitespace()
                .map(str::to_string)
                .collect();
            for (record, haystack) in catalog.entries() {
                let hit = catalog.search(&query).iter().any(|h| std::ptr::eq(*h, record));
                let expected = terms.iter().all(|term| haystack.contains(term.as_str()));
                prop_assert_eq!(hit, expected);
            }
        }
    }
}
