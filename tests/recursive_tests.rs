//! Balanced delimiter matching

use xregex::{match_recursive, RecursiveMatches, RecursiveOptions, RegexError, ValuePart};

fn part<'t>(name: &str, value: &'t str, start: usize, end: usize) -> ValuePart<'t> {
    ValuePart {
        name: name.to_string(),
        value,
        start,
        end,
    }
}

#[test]
fn test_nested_parentheses() {
    let found = match_recursive(
        "(t((e))s)t()(ing)",
        r"\(",
        r"\)",
        "g",
        &RecursiveOptions::default(),
    )
    .unwrap();
    assert_eq!(found, RecursiveMatches::Values(vec!["t((e))s", "", "ing"]));
}

#[test]
fn test_first_match_only_without_global() {
    let found = match_recursive("(a)(b)", r"\(", r"\)", "", &RecursiveOptions::default()).unwrap();
    assert_eq!(found.values().unwrap(), &["a"]);
}

#[test]
fn test_multi_character_delimiters() {
    let found = match_recursive(
        "Here is <div> <div>an</div></div> example",
        "<div\\s*>",
        "</div>",
        "gi",
        &RecursiveOptions::default(),
    )
    .unwrap();
    assert_eq!(found.values().unwrap(), &[" <div>an</div>"]);
}

#[test]
fn test_value_names() {
    let options = RecursiveOptions::new().value_names(["between", "left", "match", "right"]);
    let found = match_recursive("x<a<b>>y", "<", ">", "g", &options).unwrap();
    assert_eq!(
        found.parts().unwrap(),
        &[
            part("between", "x", 0, 1),
            part("left", "<", 1, 2),
            part("match", "a<b>", 2, 6),
            part("right", ">", 6, 7),
            part("between", "y", 7, 8),
        ]
    );
}

#[test]
fn test_omitted_value_names() {
    let options = RecursiveOptions::new().value_names(["", "", "inner", ""]);
    let found = match_recursive("(a) (b)", r"\(", r"\)", "g", &options).unwrap();
    assert_eq!(
        found.parts().unwrap(),
        &[part("inner", "a", 1, 2), part("inner", "b", 5, 6)]
    );
}

#[test]
fn test_adjacent_matches_have_no_between_parts() {
    let options = RecursiveOptions::new().value_names(["between", "left", "match", "right"]);
    let found = match_recursive("(a)(b)", r"\(", r"\)", "g", &options).unwrap();
    assert_eq!(
        found.parts().unwrap(),
        &[
            part("left", "(", 0, 1),
            part("match", "a", 1, 2),
            part("right", ")", 2, 3),
            part("left", "(", 3, 4),
            part("match", "b", 4, 5),
            part("right", ")", 5, 6),
        ]
    );
}

#[test]
fn test_zero_width_left_delimiter() {
    let found = match_recursive("<a><b>", "(?=<)", ">", "g", &RecursiveOptions::default()).unwrap();
    assert_eq!(found.values().unwrap(), &["<a", "<b"]);

    let options = RecursiveOptions::new().value_names(["between", "left", "match", "right"]);
    let found = match_recursive("<a><b>", "(?=<)", ">", "g", &options).unwrap();
    assert_eq!(
        found.parts().unwrap(),
        &[
            part("left", "", 0, 0),
            part("match", "<a", 0, 2),
            part("right", ">", 2, 3),
            part("left", "", 3, 3),
            part("match", "<b", 3, 5),
            part("right", ">", 5, 6),
        ]
    );
}

#[test]
fn test_escape_character() {
    let options = RecursiveOptions::new()
        .value_names(["between", "left", "match", "right"])
        .escape_char("\\");
    let found = match_recursive(r"...{1}\{{fn}", "{", "}", "g", &options).unwrap();
    assert_eq!(
        found.parts().unwrap(),
        &[
            part("between", "...", 0, 3),
            part("left", "{", 3, 4),
            part("match", "1", 4, 5),
            part("right", "}", 5, 6),
            part("between", r"\{", 6, 8),
            part("left", "{", 8, 9),
            part("match", "fn", 9, 11),
            part("right", "}", 11, 12),
        ]
    );
}

#[test]
fn test_escaped_delimiters_inside_match() {
    let options = RecursiveOptions::new().escape_char("\\");
    let found = match_recursive(r"[a\]b]", r"\[", r"\]", "g", &options).unwrap();
    assert_eq!(found.values().unwrap(), &[r"a\]b"]);
}

#[test]
fn test_sticky_stops_at_gap() {
    let found = match_recursive(
        "<1><<2>>, <3>",
        "<",
        ">",
        "gy",
        &RecursiveOptions::default(),
    )
    .unwrap();
    assert_eq!(found.values().unwrap(), &["1", "<2>"]);

    let found = match_recursive("x<1>", "<", ">", "gy", &RecursiveOptions::default()).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_left_wins_when_both_delimiters_match_at_same_offset() {
    // '|' opens and closes; the left delimiter is preferred, so nothing ever closes
    let err = match_recursive("|a|", r"\|", r"\|", "g", &RecursiveOptions::default()).unwrap_err();
    assert!(matches!(err, RegexError::UnbalancedDelimiter));
}

#[test]
fn test_unbalanced() {
    let options = RecursiveOptions::default();
    let err = match_recursive("(a(b)", r"\(", r"\)", "g", &options).unwrap_err();
    assert!(matches!(err, RegexError::UnbalancedDelimiter));

    let err = match_recursive("a)b", r"\(", r"\)", "g", &options).unwrap_err();
    assert!(matches!(err, RegexError::UnbalancedDelimiter));
}

#[test]
fn test_no_delimiters() {
    let found = match_recursive("plain", r"\(", r"\)", "g", &RecursiveOptions::default()).unwrap();
    assert!(found.is_empty());

    let options = RecursiveOptions::new().value_names(["between", "", "", ""]);
    let found = match_recursive("plain", r"\(", r"\)", "g", &options).unwrap();
    assert_eq!(found.parts().unwrap(), &[part("between", "plain", 0, 5)]);
}

#[test]
fn test_escape_configuration_errors() {
    let options = RecursiveOptions::new().escape_char("\\\\");
    let err = match_recursive("(a)", r"\(", r"\)", "g", &options).unwrap_err();
    assert!(matches!(err, RegexError::EscapeConfiguration(_)));

    let options = RecursiveOptions::new().escape_char("\\");
    let err = match_recursive("<a>>", "<", r"(>)\1", "g", &options).unwrap_err();
    assert!(matches!(err, RegexError::EscapeConfiguration(_)));
}

#[test]
fn test_empty_escape_disables_escaping() {
    let options = RecursiveOptions::new().escape_char("");
    let found = match_recursive(r"(a\)b)", r"\(", r"\)", "g", &options);
    assert!(matches!(found, Err(RegexError::UnbalancedDelimiter)));
}
