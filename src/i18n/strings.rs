//! Interface string catalog.
//!
//! All user-facing labels are embedded as static tables, one per language.
//! French is the source language: every key is defined there, and lookups
//! in another language fall back to it.

use super::lang::Lang;

/// Look up an interface string.
///
/// Falls back to French when the key is missing in `lang`, and to the key
/// itself when French does not define it either.
#[must_use]
pub fn t<'a>(lang: Lang, key: &'a str) -> &'a str {
    lookup(table_for(lang), key)
        .or_else(|| lookup(FR, key))
        .unwrap_or(key)
}

/// Every key defined by the source language, in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    FR.iter().map(|&(key, _)| key)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v)
}

const fn table_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Fr => FR,
        Lang::Ar => AR,
        Lang::En => EN,
    }
}

const FR: &[(&str, &str)] = &[
    ("main-title", "🇩🇿 Assistant des Indemnités"),
    ("subtitle", "Référence: Code du Travail Algérien (Loi 90-11)"),
    ("search-placeholder", "Rechercher une indemnité..."),
    ("search-btn", "Rechercher"),
    ("no-results", "Aucun résultat trouvé"),
    ("no-results-for", "Aucun résultat trouvé pour"),
    ("try-again", "Essayez avec un terme différent"),
    ("empty-query", "Veuillez entrer un terme de recherche"),
    ("toggle-pdf", "Afficher/Masquer PDF"),
    ("show-pdf", "Voir dans le Code du Travail"),
    ("hide-pdf", "Masquer PDF"),
    ("pdf-reference", "Décret 96-208 Art. 2"),
    ("definition", "Définition"),
    ("legal-reference", "Référence légale"),
    ("exoneration", "Motif d'exonération"),
    ("cotisable", "Cotisable"),
    ("imposable", "Imposable"),
    ("yes", "Oui"),
    ("no", "Non"),
    ("results-count", "résultat(s)"),
    ("no-data", "Les données des indemnités ne sont pas disponibles."),
    ("data-error", "Erreur lors du chargement des données"),
    ("language", "Langue"),
];

const AR: &[(&str, &str)] = &[
    ("main-title", "🇩🇿 مساعد التعويضات"),
    ("subtitle", "مرجع: قانون العمل الجزائري (القانون 90-11)"),
    ("search-placeholder", "ابحث عن تعويض..."),
    ("search-btn", "بحث"),
    ("no-results", "لا توجد نتائج"),
    ("no-results-for", "لا توجد نتائج لـ"),
    ("try-again", "حاول بمصطلح آخر"),
    ("empty-query", "يرجى إدخال مصطلح للبحث"),
    ("toggle-pdf", "عرض/إخفاء PDF"),
    ("show-pdf", "عرض في قانون العمل"),
    ("hide-pdf", "إخفاء PDF"),
    ("pdf-reference", "المرسوم 96-208 المادة 2"),
    ("definition", "التعريف"),
    ("legal-reference", "المرجع القانوني"),
    ("exoneration", "سبب الإعفاء"),
    ("cotisable", "قابل للاشتراك"),
    ("imposable", "خاضع للضريبة"),
    ("yes", "نعم"),
    ("no", "لا"),
    ("results-count", "نتيجة"),
    ("no-data", "البيانات غير متوفرة حالياً"),
    ("data-error", "حدث خطأ أثناء تحميل البيانات"),
    ("language", "اللغة"),
];

const EN: &[(&str, &str)] = &[
    ("main-title", "🇩🇿 Algerian Allowances Assistant"),
    ("subtitle", "Reference: Algerian Labor Code (Law 90-11)"),
    ("search-placeholder", "Search for an allowance..."),
    ("search-btn", "Search"),
    ("no-results", "No results found"),
    ("no-results-for", "No results found for"),
    ("try-again", "Try a different term"),
    ("empty-query", "Please enter a search term"),
    ("toggle-pdf", "Show/Hide PDF"),
    ("show-pdf", "View in the Labor Code"),
    ("hide-pdf", "Hide PDF"),
    ("pdf-reference", "Decree 96-208 Art. 2"),
    ("definition", "Definition"),
    ("legal-reference", "Legal reference"),
    ("exoneration", "Exemption reason"),
    ("cotisable", "Contributory"),
    ("imposable", "Taxable"),
    ("yes", "Yes"),
    ("no", "No"),
    ("results-count", "result(s)"),
    ("no-data", "Allowance data is not available"),
    ("data-error", "Error loading data"),
    ("language", "Language"),
];
