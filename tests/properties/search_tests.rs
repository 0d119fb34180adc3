use proptest::prelude::*;

use indemnity::catalog::Catalog;
use indemnity::i18n::Lang;
use indemnity::search::{SearchOutcome, normalize, search, search_outcome};
use indemnity::test_utils::fixtures::{record, sample_catalog};

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    let word = "[a-zéèà]{2,8}";
    let entry = (
        prop::collection::vec(word, 1..4),
        prop::collection::vec(word, 0..3),
    );
    prop::collection::vec(entry, 0..12).prop_map(|entries| {
        let records = entries
            .iter()
            .map(|(name, keywords)| {
                let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();
                record(&name.join(" "), &keywords)
            })
            .collect();
        Catalog::new(Lang::Fr, Lang::Fr, records)
    })
}

proptest! {
    #[test]
    fn blank_query_returns_every_record(catalog in arb_catalog(), blank in "[ \t]{0,5}") {
        prop_assert_eq!(search(&catalog, &blank).len(), catalog.len());
        let is_empty_query = matches!(
            search_outcome(&catalog, &blank),
            SearchOutcome::EmptyQuery { .. }
        );
        prop_assert!(is_empty_query);
    }

    #[test]
    fn hits_keep_catalog_order(catalog in arb_catalog(), query in "[a-zé ]{1,6}") {
        let positions: Vec<usize> = search(&catalog, &query)
            .iter()
            .map(|hit| {
                catalog
                    .records()
                    .iter()
                    .position(|candidate| std::ptr::eq(candidate, *hit))
                    .unwrap()
            })
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn adding_terms_never_widens(catalog in arb_catalog(), first in "[a-z]{1,3}", second in "[a-z]{1,3}") {
        let narrow = search(&catalog, &format!("{first} {second}")).len();
        let wide = search(&catalog, &first).len();
        prop_assert!(narrow <= wide);
    }

    #[test]
    fn query_case_and_accents_do_not_matter(word in "[a-z]{1,4}") {
        let catalog = sample_catalog(Lang::Fr);
        let upper = search(&catalog, &word.to_uppercase()).len();
        prop_assert_eq!(upper, search(&catalog, &word).len());
        prop_assert_eq!(normalize(&word.to_uppercase()), word);
    }
}
