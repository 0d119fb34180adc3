//! indemnity strings - Print the interface strings of the active language

use std::collections::BTreeMap;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, json_ok};
use crate::error::Result;
use crate::i18n::{Lang, keys, t};

#[derive(Args, Debug)]
pub struct StringsArgs {
    /// Only print this key
    pub key: Option<String>,
}

pub fn run(ctx: &AppContext, args: &StringsArgs) -> Result<()> {
    let entries = entries(ctx.lang, args.key.as_deref());

    match ctx.output_format {
        OutputFormat::Json => {
            let map: BTreeMap<&str, &str> = entries.iter().copied().collect();
            emit_json(&json_ok(map).with_lang(ctx.lang))
        }
        OutputFormat::Jsonl => {
            let rows: Vec<_> = entries
                .iter()
                .map(|(key, value)| serde_json::json!({ "key": key, "value": value }))
                .collect();
            emit_jsonl(&rows)
        }
        OutputFormat::Human | OutputFormat::Plain => {
            let mut layout =
                HumanLayout::for_format(ctx.output_format).with_direction(ctx.lang.direction());
            for (key, value) in &entries {
                layout.kv(key, value);
            }
            emit_human(layout);
            Ok(())
        }
    }
}

/// Resolved `(key, value)` pairs in table order, or the single requested key.
fn entries(lang: Lang, only: Option<&str>) -> Vec<(&'static str, &'static str)> {
    match only {
        Some(key) => keys()
            .filter(|candidate| *candidate == key)
            .map(|key| (key, t(lang, key)))
            .collect(),
        None => keys().map(|key| (key, t(lang, key))).collect(),
    }
}
