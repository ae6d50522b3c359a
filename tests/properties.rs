//! Property tests over escaping, capture names, splitting and balanced matching

use proptest::prelude::*;
use xregex::{escape, match_recursive, Regex, RecursiveOptions};

/// Balanced parenthesised text such as `a(b(c))()`
fn balanced() -> impl Strategy<Value = String> {
    "[a-z]{0,3}".prop_recursive(3, 24, 3, |inner| {
        prop::collection::vec(inner, 0..3)
            .prop_map(|parts| parts.iter().map(|part| format!("({part})")).collect::<String>())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn escaped_text_matches_itself(text in "\\PC{0,40}", flags in "[isx]{0,3}") {
        let escaped = escape(&text);
        let regex = Regex::with_flags(&escaped, &flags).unwrap();
        prop_assert_eq!(regex.native_source(), escaped.as_str());

        let found = regex.find(&text).unwrap();
        prop_assert!(found.is_some());
        prop_assert_eq!(found.unwrap().as_str(), text.as_str());
    }

    #[test]
    fn named_and_numbered_groups_agree(
        name in "[a-z][a-z0-9_]{0,8}",
        value in "[a-z0-9]{1,10}",
    ) {
        let regex = Regex::new(&format!("(?<{name}>[a-z0-9]+)")).unwrap();
        let subject = format!(" {value} ");
        let found = regex.find(&subject).unwrap().unwrap();
        prop_assert_eq!(found.name(&name), Some(value.as_str()));
        prop_assert_eq!(found.get(1), Some(value.as_str()));
    }

    #[test]
    fn whole_match_template_is_identity(text in "[a-z0-9 ]{0,30}") {
        let mut regex = Regex::with_flags("[a-z]+", "g").unwrap();
        prop_assert_eq!(regex.replace(&text, "$&").unwrap(), text);
    }

    #[test]
    fn split_then_join_round_trips(text in "[a-c,]{0,20}") {
        let regex = Regex::new(",").unwrap();
        let pieces: Vec<&str> = regex
            .split(&text, None)
            .unwrap()
            .into_iter()
            .map(|piece| piece.unwrap_or(""))
            .collect();
        prop_assert_eq!(pieces.join(","), text);
    }

    #[test]
    fn outermost_groups_are_recovered(inners in prop::collection::vec(balanced(), 0..4)) {
        let subject = inners
            .iter()
            .map(|inner| format!("({inner})"))
            .collect::<Vec<_>>()
            .join("-");
        let found =
            match_recursive(&subject, r"\(", r"\)", "g", &RecursiveOptions::default()).unwrap();
        let expected: Vec<&str> = inners.iter().map(String::as_str).collect();
        prop_assert_eq!(found.values().unwrap(), expected.as_slice());
    }
}
