//! Property-based tests for the category classifier.

use budget_core::categories::Category;
use budget_core::classifier::{classify, CATEGORY_KEYWORDS};
use proptest::prelude::*;

/// Index into the keyword table.
fn arb_keyword() -> impl Strategy<Value = (&'static str, Category)> {
    (0..CATEGORY_KEYWORDS.len()).prop_map(|i| CATEGORY_KEYWORDS[i])
}

/// Labels that can never contain a keyword.
fn arb_noise_label() -> impl Strategy<Value = String> {
    "[0-9 #./-]{0,24}"
}

/// Free-form labels, including ones that match.
fn arb_label() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_noise_label(),
        arb_keyword().prop_map(|(k, _)| k.to_lowercase()),
        "[A-Za-z_ ]{0,32}",
    ]
}

proptest! {
    #[test]
    fn keyword_with_padding_classifies_as_its_category(
        (keyword, category) in arb_keyword(),
        prefix in "[0-9]{0,6}",
        suffix in "[0-9]{0,6}",
    ) {
        let label = format!("{} {} {}", prefix, keyword, suffix);
        prop_assert_eq!(classify(&[label]), category);
    }

    #[test]
    fn noise_labels_are_misc(labels in prop::collection::vec(arb_noise_label(), 0..6)) {
        prop_assert_eq!(classify(&labels), Category::Misc);
    }

    #[test]
    fn classification_ignores_case(labels in prop::collection::vec(arb_label(), 0..6)) {
        let upper: Vec<String> = labels.iter().map(|l| l.to_uppercase()).collect();
        let lower: Vec<String> = labels.iter().map(|l| l.to_lowercase()).collect();
        prop_assert_eq!(classify(&upper), classify(&lower));
    }

    #[test]
    fn labels_after_a_match_do_not_matter(
        (keyword, category) in arb_keyword(),
        noise in prop::collection::vec(arb_noise_label(), 0..4),
        rest in prop::collection::vec(arb_label(), 0..4),
    ) {
        let mut labels = noise;
        labels.push(keyword.to_string());
        labels.extend(rest);
        prop_assert_eq!(classify(&labels), category);
    }
}
