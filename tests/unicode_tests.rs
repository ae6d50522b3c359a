//! Unicode category, script and block tokens

use xregex::{unicode, Flags, Regex, RegexError, TokenRegistry};

#[test]
fn test_letter_category() {
    let regex = Regex::new(r"\p{L}+").unwrap();
    assert_eq!(regex.find("42 héllo!").unwrap().unwrap().as_str(), "héllo");

    let regex = Regex::new(r"\p{Letter}+").unwrap();
    assert_eq!(regex.find("42 héllo!").unwrap().unwrap().as_str(), "héllo");
}

#[test]
fn test_negated_forms() {
    let upper = Regex::new(r"^\p{Lu}$").unwrap();
    assert!(upper.is_match("A").unwrap());
    assert!(!upper.is_match("a").unwrap());

    for pattern in [r"^\P{Lu}$", r"^\p{^Lu}$"] {
        let regex = Regex::new(pattern).unwrap();
        assert!(regex.is_match("a").unwrap(), "{pattern}");
        assert!(!regex.is_match("A").unwrap(), "{pattern}");
    }
}

#[test]
fn test_double_negation_rejected() {
    let err = Regex::new(r"\P{^Lu}").unwrap_err();
    assert!(matches!(err, RegexError::MalformedToken(_)));
}

#[test]
fn test_unknown_name_rejected() {
    let err = Regex::new(r"\p{Klingon}").unwrap_err();
    assert!(matches!(err, RegexError::UnsupportedUnicodeToken(_)));
}

#[test]
fn test_name_spelling_is_loose() {
    for pattern in [
        r"\p{Uppercase Letter}",
        r"\p{uppercase_letter}",
        r"\p{UPPERCASE-LETTER}",
    ] {
        assert!(Regex::new(pattern).unwrap().is_match("Q").unwrap(), "{pattern}");
    }
}

#[test]
fn test_scripts_and_blocks() {
    let greek = Regex::new(r"\p{Greek}+").unwrap();
    assert_eq!(greek.find("abc αβγ").unwrap().unwrap().as_str(), "αβγ");

    let latin = Regex::new(r"^\p{InBasicLatin}+$").unwrap();
    assert!(latin.is_match("plain ascii").unwrap());
    assert!(!latin.is_match("café").unwrap());
}

#[test]
fn test_inside_character_class() {
    let regex = Regex::new(r"[\p{Lu}\d]+").unwrap();
    assert_eq!(regex.find("aAB1c").unwrap().unwrap().as_str(), "AB1");

    let regex = Regex::new(r"[\P{L}]+").unwrap();
    assert_eq!(regex.find("ab12;c").unwrap().unwrap().as_str(), "12;");
}

#[test]
fn test_builtins_alone_reject_unicode_tokens() {
    let registry = TokenRegistry::with_builtins();
    let err = Regex::with_registry(r"\p{Lu}", Flags::empty(), &registry).unwrap_err();
    assert!(matches!(err, RegexError::UnsupportedUnicodeToken(_)));

    unicode::install_categories(&registry).unwrap();
    assert!(!registry.is_enabled());
    let regex = Regex::with_registry(r"\p{Lu}", Flags::empty(), &registry).unwrap();
    assert!(regex.is_match("Z").unwrap());

    // Scripts were not installed
    let err = Regex::with_registry(r"\p{Greek}", Flags::empty(), &registry).unwrap_err();
    assert!(matches!(err, RegexError::UnsupportedUnicodeToken(_)));
}

#[test]
fn test_custom_token_set() {
    let registry = TokenRegistry::with_builtins();
    let vowels = [("Vowel", "006100650069006F0075")];
    assert!(matches!(
        registry.add_unicode_token_set(&vowels, &[]),
        Err(RegexError::ExtensibilityDisabled)
    ));

    registry.enable();
    registry
        .add_unicode_token_set(&vowels, &[("Vowel", "V")])
        .unwrap();
    registry.disable();
    assert!(registry.has_unicode_token("vowel"));
    assert!(registry.has_unicode_token("V"));
    assert!(!registry.has_unicode_token("Consonant"));

    let regex = Regex::with_registry(r"\p{V}+", Flags::empty(), &registry).unwrap();
    assert_eq!(regex.find("xaeix").unwrap().unwrap().as_str(), "aei");
    let regex = Regex::with_registry(r"\P{vowel}+", Flags::empty(), &registry).unwrap();
    assert_eq!(regex.find("aexyi").unwrap().unwrap().as_str(), "xy");
}

#[test]
fn test_empty_token_set() {
    let registry = TokenRegistry::new();
    registry.enable();
    registry.add_unicode_token_set(&[("Nothing", "")], &[]).unwrap();

    let never = Regex::with_registry(r"a\p{Nothing}", Flags::empty(), &registry).unwrap();
    assert!(!never.is_match("a").unwrap());
    assert!(!never.is_match("ab").unwrap());

    let always = Regex::with_registry(r"\P{Nothing}", Flags::empty(), &registry).unwrap();
    assert!(always.is_match("\n").unwrap());
}

#[test]
fn test_malformed_data_rejected() {
    let registry = TokenRegistry::new();
    registry.enable();
    let err = registry
        .add_unicode_token_set(&[("Broken", "00ZZ")], &[])
        .unwrap_err();
    assert!(matches!(err, RegexError::MalformedToken(_)));
}
