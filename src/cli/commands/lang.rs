//! indemnity lang - Show or change the interface language
//!
//! Changing the language saves it as a preference and reloads the catalog
//! in that language.

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, json_ok};
use crate::error::Result;
use crate::i18n::{Direction, Lang, t};

#[derive(Args, Debug)]
pub struct LangArgs {
    /// Language to switch to (fr, ar, en)
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
struct LanguageInfo {
    code: Lang,
    name: &'static str,
    direction: Direction,
}

impl From<Lang> for LanguageInfo {
    fn from(lang: Lang) -> Self {
        Self {
            code: lang,
            name: lang.native_name(),
            direction: lang.direction(),
        }
    }
}

#[derive(Debug, Serialize)]
struct LangReport {
    active: LanguageInfo,
    source: &'static str,
    saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    supported: Vec<LanguageInfo>,
}

pub async fn run(ctx: &AppContext, args: &LangArgs) -> Result<()> {
    let report = match &args.code {
        None => LangReport {
            active: ctx.lang.into(),
            source: ctx.lang_source.as_str(),
            saved: false,
            records: None,
            error: None,
            supported: supported(),
        },
        Some(code) => {
            let lang = code.parse::<Lang>()?;
            ctx.preferences.set_language(lang)?;
            tracing::info!(%lang, path = %ctx.preferences.path().display(), "language saved");

            let (records, error) = match ctx.session.load(lang).await {
                Ok(catalog) => (Some(catalog.len()), None),
                Err(err) => (None, Some(err.to_string())),
            };
            LangReport {
                active: lang.into(),
                source: "preference",
                saved: true,
                records,
                error,
                supported: supported(),
            }
        }
    };

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Jsonl => {
            let mut response = json_ok(&report).with_lang(report.active.code);
            if let Some(error) = &report.error {
                response = response.with_warning(format!("catalog unavailable: {error}"));
            }
            emit_json(&response)
        }
        OutputFormat::Human | OutputFormat::Plain => {
            emit_human(layout(&report, ctx.output_format));
            Ok(())
        }
    }
}

fn supported() -> Vec<LanguageInfo> {
    Lang::all().iter().copied().map(LanguageInfo::from).collect()
}

fn layout(report: &LangReport, format: OutputFormat) -> HumanLayout {
    let lang = report.active.code;
    let mut layout = HumanLayout::for_format(format).with_direction(lang.direction());

    layout.kv(
        t(lang, "language"),
        &format!("{} ({})", report.active.name, lang.code()),
    );
    if let Some(count) = report.records {
        layout.kv(t(lang, "results-count"), &count.to_string());
    }
    if report.error.is_some() {
        layout.muted(t(lang, "no-data"));
    }

    layout.blank();
    for info in &report.supported {
        let marker = if info.code == lang { "*" } else { " " };
        layout.push_line(format!(
            "{marker} {} {} ({})",
            info.code.code(),
            info.name,
            info.direction.as_str()
        ));
    }
    layout
}
