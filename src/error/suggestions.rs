//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints that
//! mention the language or resource involved.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::CatalogUnreachable | ErrorCode::CatalogHttpStatus => {
            suggest_catalog_unreachable(code, context)
        }
        ErrorCode::LanguageUnsupported => suggest_language_unsupported(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_catalog_unreachable(code: ErrorCode, context: Option<&Value>) -> String {
    let lang = context
        .and_then(|c| c.get("lang"))
        .and_then(Value::as_str);

    match lang {
        Some(lang) => format!(
            "No catalog could be fetched for '{lang}'. Check that data/{lang}.json exists under \
             the configured data source, or switch language with `indemnity lang fr`"
        ),
        None => code.suggestion().to_string(),
    }
}

fn suggest_language_unsupported(context: Option<&Value>) -> String {
    let requested = context
        .and_then(|c| c.get("lang"))
        .and_then(Value::as_str);

    match requested {
        Some(lang) => format!("'{lang}' is not supported. Use one of: fr, ar, en"),
        None => ErrorCode::LanguageUnsupported.suggestion().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_suggestion_names_language() {
        let ctx = serde_json::json!({ "lang": "ar" });
        let hint = suggest_for_error(ErrorCode::CatalogUnreachable, Some(&ctx));
        assert!(hint.contains("data/ar.json"));
    }

    #[test]
    fn falls_back_to_static_suggestion() {
        let hint = suggest_for_error(ErrorCode::CatalogTimeout, None);
        assert_eq!(hint, ErrorCode::CatalogTimeout.suggestion());
    }

    #[test]
    fn unsupported_language_echoes_code() {
        let ctx = serde_json::json!({ "lang": "de" });
        let hint = suggest_for_error(ErrorCode::LanguageUnsupported, Some(&ctx));
        assert!(hint.starts_with("'de'"));
    }
}
