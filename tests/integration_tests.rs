//! Integration tests for pattern compilation
//!
//! Extended syntax, flags, the token registry and pattern copies

use xregex::{cache, escape, Flags, Regex, RegexError, Scope, TokenRegistry, TokenRule};

#[test]
fn test_named_capture() {
    let regex = Regex::new(r"(?<year>\d{4})-(?<month>\d{2})").unwrap();
    assert_eq!(regex.native_source(), r"(\d{4})-(\d{2})");
    assert_eq!(
        regex.capture_names().unwrap(),
        &[Some("year".to_string()), Some("month".to_string())]
    );

    let found = regex.find("on 2021-03-15").unwrap().unwrap();
    assert_eq!(found.name("year"), Some("2021"));
    assert_eq!(found.name("month"), Some("03"));
    assert_eq!(&found["year"], "2021");
    assert_eq!(found.get(2), Some("03"));
    assert_eq!(found.index(), 3);
}

#[test]
fn test_unnamed_groups_keep_no_names() {
    let regex = Regex::new(r"(a)(b)").unwrap();
    assert!(regex.capture_names().is_none());
    assert_eq!(regex.captures_len(), 2);

    let regex = Regex::new(r"(a)(?<second>b)").unwrap();
    assert_eq!(regex.capture_names().unwrap(), &[None, Some("second".to_string())]);
}

#[test]
fn test_named_backreference() {
    let regex = Regex::new(r"(?<ch>\w)\k<ch>").unwrap();
    assert_eq!(regex.native_source(), r"(\w)\1");
    assert_eq!(regex.find("abccd").unwrap().unwrap().as_str(), "cc");

    // A digit after the backreference must not extend its number
    let regex = Regex::new(r"(?<ch>a)\k<ch>1").unwrap();
    assert_eq!(regex.native_source(), r"(a)\1(?:)1");
    assert!(regex.is_match("aa1").unwrap());
}

#[test]
fn test_numeric_capture_name_rejected() {
    let err = Regex::new(r"(?<12>a)").unwrap_err();
    assert!(matches!(err, RegexError::InvalidCaptureName(name) if name == "12"));
}

#[test]
fn test_free_spacing() {
    let regex = Regex::with_flags("a b # comment\n c", "x").unwrap();
    assert_eq!(regex.native_source(), "a(?:)b(?:)c");
    assert!(regex.is_match("abc").unwrap());
    assert!(!regex.is_match("a b c").unwrap());

    // Whitespace between an atom and its quantifier vanishes entirely
    let regex = Regex::with_flags("a +", "x").unwrap();
    assert_eq!(regex.native_source(), "a+");

    // Whitespace inside a class is literal
    let regex = Regex::with_flags("[ ]", "x").unwrap();
    assert!(regex.is_match(" ").unwrap());
}

#[test]
fn test_inline_comment() {
    let regex = Regex::new("a(?#note)b").unwrap();
    assert_eq!(regex.native_source(), "a(?:)b");

    let regex = Regex::new("a(?#note)+").unwrap();
    assert_eq!(regex.native_source(), "a+");
}

#[test]
fn test_leading_mode_modifier() {
    let regex = Regex::new("(?i)abc").unwrap();
    assert!(regex.flags().contains(Flags::IGNORE_CASE));
    assert!(regex.is_match("xABCx").unwrap());

    let regex = Regex::new("(?x) a b").unwrap();
    assert!(regex.flags().contains(Flags::EXTENDED));
    assert!(regex.is_match("ab").unwrap());

    let regex = Regex::new("(?s)a.b").unwrap();
    assert!(regex.is_match("a\nb").unwrap());
}

#[test]
fn test_dot_all() {
    assert!(Regex::with_flags("a.b", "s").unwrap().is_match("a\nb").unwrap());
    assert!(!Regex::new("a.b").unwrap().is_match("a\nb").unwrap());

    // Inside a class the dot stays literal
    let regex = Regex::with_flags("[.]", "s").unwrap();
    assert!(!regex.is_match("x").unwrap());
    assert!(regex.is_match(".").unwrap());
}

#[test]
fn test_explicit_capture() {
    let regex = Regex::with_flags("(a)(?<b>b)", "n").unwrap();
    assert_eq!(regex.native_source(), "(?:a)(b)");
    assert_eq!(regex.captures_len(), 1);
    assert_eq!(regex.find("ab").unwrap().unwrap().name("b"), Some("b"));
}

#[test]
fn test_empty_classes() {
    assert!(!Regex::new("a[]").unwrap().is_match("a").unwrap());
    assert!(Regex::new("a[^]b").unwrap().is_match("a\nb").unwrap());
}

#[test]
fn test_native_syntax_passes_through() {
    let regex = Regex::new(r"(?:x)(?=y)\(\)[(?<n>)]").unwrap();
    assert_eq!(regex.native_source(), r"(?:x)(?=y)\(\)[(?<n>)]");
    assert!(regex.capture_names().is_none());
    assert_eq!(regex.captures_len(), 0);
}

#[test]
fn test_ignore_case_and_multiline_flags() {
    let regex = Regex::with_flags("^b", "im").unwrap();
    assert!(regex.is_match("a\nB").unwrap());
    assert!(!Regex::new("^b").unwrap().is_match("a\nb").unwrap());
}

#[test]
fn test_unknown_flag() {
    let err = Regex::with_flags("a", "gq").unwrap_err();
    assert!(matches!(err, RegexError::UnknownFlag('q')));
}

#[test]
fn test_native_errors_surface() {
    let err = Regex::new("(a").unwrap_err();
    assert!(matches!(err, RegexError::Native(_)));
}

#[test]
fn test_registry_requires_extensibility() {
    let registry = TokenRegistry::new();
    let rule = TokenRule::new("%d", |_, _, _| Ok(r"\d".to_string())).unwrap();
    assert!(matches!(
        registry.register(rule),
        Err(RegexError::ExtensibilityDisabled)
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_custom_token_rule() {
    let registry = TokenRegistry::new();
    registry.enable();
    registry
        .register(TokenRule::new("%d", |_, _, _| Ok(r"\d".to_string())).unwrap())
        .unwrap();
    registry.disable();

    let regex = Regex::with_registry("%d+", Flags::empty(), &registry).unwrap();
    assert_eq!(regex.native_source(), r"\d+");
    assert_eq!(regex.find("ab42").unwrap().unwrap().as_str(), "42");

    // Disabling keeps existing rules
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_later_rule_wins() {
    let registry = TokenRegistry::new();
    registry.enable();
    registry
        .register(TokenRule::new("%d", |_, _, _| Ok(r"\d".to_string())).unwrap())
        .unwrap();
    registry
        .register(TokenRule::new("%d", |_, _, _| Ok("x".to_string())).unwrap())
        .unwrap();

    let regex = Regex::with_registry("%d", Flags::empty(), &registry).unwrap();
    assert_eq!(regex.native_source(), "x");
}

#[test]
fn test_rules_resume_after_longer_token() {
    let registry = TokenRegistry::new();
    registry.enable();
    registry
        .register(TokenRule::new("ab", |_, _, _| Ok("Z".to_string())).unwrap())
        .unwrap();
    registry
        .register(TokenRule::new("b", |_, _, _| Ok("B".to_string())).unwrap())
        .unwrap();

    // "b" is first seen at offset 1, inside the "ab" token, and must still apply later
    let regex = Regex::with_registry("abbxb", Flags::empty(), &registry).unwrap();
    assert_eq!(regex.native_source(), "ZBxB");
}

#[test]
fn test_long_plain_pattern() {
    let pattern = "a".repeat(20_000);
    let regex = Regex::new(&pattern).unwrap();
    assert_eq!(regex.native_source(), pattern);
    assert_eq!(regex.captures_len(), 0);
}

#[test]
fn test_rule_scope_and_trigger() {
    let registry = TokenRegistry::new();
    registry.enable();
    registry
        .register(
            TokenRule::new("~", |_, _, _| Ok("a-z".to_string()))
                .unwrap()
                .scope(Scope::INSIDE_CLASS),
        )
        .unwrap();
    registry
        .register(
            TokenRule::new("!", |_, _, _| Ok("[0-9]".to_string()))
                .unwrap()
                .trigger(|context| context.has_flag(Flags::IGNORE_CASE)),
        )
        .unwrap();

    let regex = Regex::with_registry("~[~]", Flags::empty(), &registry).unwrap();
    assert_eq!(regex.native_source(), "~[a-z]");

    let regex = Regex::with_registry("!", Flags::empty(), &registry).unwrap();
    assert_eq!(regex.native_source(), "!");
    let regex = Regex::with_registry("!", Flags::IGNORE_CASE, &registry).unwrap();
    assert_eq!(regex.native_source(), "[0-9]");
}

#[test]
fn test_handler_sees_capture_state() {
    let registry = TokenRegistry::with_builtins();
    registry.enable();
    registry
        .register(TokenRule::new("@", |_, _, context| {
            Ok(format!("{{{}}}", context.capture_names().len()))
        })
        .unwrap())
        .unwrap();

    let regex = Regex::with_registry("(a)(b)x@", Flags::empty(), &registry).unwrap();
    assert_eq!(regex.native_source(), "(a)(b)x{2}");
}

#[test]
fn test_reentrant_compilation_rejected() {
    let registry = TokenRegistry::new();
    registry.enable();
    registry
        .register(TokenRule::new("%", |_, _, _| {
            Regex::new("a").map(|regex| regex.native_source().to_string())
        })
        .unwrap())
        .unwrap();

    let err = Regex::with_registry("%", Flags::empty(), &registry).unwrap_err();
    assert!(matches!(err, RegexError::ReentrantCompilation));

    // The guard is released once compilation unwinds
    assert!(Regex::with_registry("a", Flags::empty(), &registry).is_ok());
}

#[test]
fn test_copy_with_flags() {
    let regex = Regex::with_flags("(?<word>[a-z]+)", "i").unwrap();
    let copy = regex.copy_with_flags(Flags::GLOBAL, Flags::IGNORE_CASE).unwrap();
    assert!(copy.global());
    assert!(!copy.flags().contains(Flags::IGNORE_CASE));
    assert_eq!(copy.capture_names(), regex.capture_names());
    assert_eq!(copy.source(), regex.source());
    assert!(!copy.is_match("ABC").unwrap());
    assert!(regex.is_match("ABC").unwrap());

    let err = regex
        .copy_with_flags(Flags::GLOBAL, Flags::GLOBAL | Flags::STICKY)
        .unwrap_err();
    assert!(matches!(err, RegexError::FlagConflict(_)));
}

#[test]
fn test_copy_starts_with_fresh_cursor() {
    let mut regex = Regex::with_flags("a", "g").unwrap();
    regex.exec("aaa").unwrap();
    assert_eq!(regex.last_index(), 1);

    let copy = regex.copy_with_flags(Flags::empty(), Flags::empty()).unwrap();
    assert_eq!(copy.last_index(), 0);
    assert_eq!(regex.clone().last_index(), 1);
}

#[test]
fn test_cache_returns_equivalent_patterns() {
    let first = cache(r"(?<n>\d+)", "g").unwrap();
    let second = cache(r"(?<n>\d+)", "g").unwrap();
    assert_eq!(first.native_source(), second.native_source());
    assert_eq!(first.flags(), second.flags());
    assert_eq!(second.last_index(), 0);
    assert!(cache("(", "").is_err());
}

#[test]
fn test_escape() {
    assert_eq!(escape("Escaped? <.>"), r"Escaped\?\x20<\.>");
    assert_eq!(escape("a-b[c]"), r"a\-b\[c\]");

    let text = "1+1=2 (maybe) #hash $5.00";
    for flags in ["", "x", "i", "s"] {
        let regex = Regex::with_flags(&escape(text), flags).unwrap();
        let found = regex.find(text).unwrap().unwrap();
        assert_eq!(found.as_str(), text);
    }
}
