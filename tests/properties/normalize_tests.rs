use proptest::prelude::*;

use indemnity::search::{Query, normalize, tokenize};

const LATIN: &str = "[a-zàâäçéèêëîïôöùûüÿ ]{0,40}";

/// Accented letter paired with its bare form.
fn arb_letter() -> impl Strategy<Value = (char, char)> {
    prop_oneof![
        prop::char::range('a', 'z').prop_map(|c| (c, c)),
        prop::sample::select(vec![
            ('é', 'e'),
            ('è', 'e'),
            ('ê', 'e'),
            ('à', 'a'),
            ('â', 'a'),
            ('ç', 'c'),
            ('î', 'i'),
            ('ô', 'o'),
            ('ù', 'u'),
            ('û', 'u'),
        ]),
    ]
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "[a-zA-ZÀ-ÖØ-öø-þ\u{0621}-\u{064A}\u{064B}-\u{0652} ]{0,40}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_ignores_case(text in LATIN) {
        prop_assert_eq!(normalize(&text.to_uppercase()), normalize(&text));
    }

    #[test]
    fn normalize_ignores_accents(letters in prop::collection::vec(arb_letter(), 0..24)) {
        let accented: String = letters.iter().map(|(accented, _)| accented).collect();
        let bare: String = letters.iter().map(|(_, bare)| bare).collect();
        prop_assert_eq!(normalize(&accented), bare);
    }

    #[test]
    fn tokenize_terms_have_no_whitespace(raw in "[ a-zA-Zé\t]{0,40}") {
        match tokenize(&raw) {
            Query::Empty => prop_assert!(raw.trim().is_empty()),
            Query::Terms { raw: kept, terms } => {
                prop_assert_eq!(kept.as_str(), raw.trim());
                prop_assert!(!terms.is_empty());
                for term in &terms {
                    prop_assert!(!term.is_empty());
                    prop_assert!(!term.contains(char::is_whitespace));
                    prop_assert_eq!(&normalize(term), term);
                }
            }
        }
    }
}
