//! Replacement templates, closures and literal search

use xregex::{replace_literal, Match, Regex};

#[test]
fn test_named_template() {
    let mut regex = Regex::new(r"(?<first>\w+) (?<last>\w+)").unwrap();
    assert_eq!(
        regex.replace("John Smith", "${last}, ${first}").unwrap(),
        "Smith, John"
    );
}

#[test]
fn test_date_reorder() {
    let mut regex =
        Regex::with_flags(r"(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})", "g").unwrap();
    assert_eq!(
        regex
            .replace("2021-03-15 and 1999-12-31", "${day}/${month}/$1")
            .unwrap(),
        "15/03/2021 and 31/12/1999"
    );
}

#[test]
fn test_two_digit_group_falls_back() {
    let mut three = Regex::new("(a)(b)(c)").unwrap();
    assert_eq!(three.replace("abc", "$11").unwrap(), "a1");

    let mut eleven = Regex::new("(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)(k)").unwrap();
    assert_eq!(eleven.replace("abcdefghijk", "$11").unwrap(), "k");
    assert_eq!(eleven.replace("abcdefghijk", "$12").unwrap(), "a2");
}

#[test]
fn test_special_tokens() {
    let mut regex = Regex::new("b").unwrap();
    assert_eq!(regex.replace("abc", "[$`|$&|$']").unwrap(), "a[a|b|c]c");
    assert_eq!(regex.replace("abc", "$$").unwrap(), "a$c");
    assert_eq!(regex.replace("abc", "${nope}").unwrap(), "a${nope}c");
}

#[test]
fn test_first_or_all_by_flag() {
    let mut once = Regex::new("o").unwrap();
    assert_eq!(once.replace("foo", "0").unwrap(), "f0o");

    let mut every = Regex::with_flags("o", "g").unwrap();
    assert_eq!(every.replace("foo", "0").unwrap(), "f00");

    assert_eq!(once.replace_all("foo", "0").unwrap(), "f00");
    assert_eq!(every.replace_first("foo", "0").unwrap(), "f0o");
}

#[test]
fn test_replace_cursor_handling() {
    let mut global = Regex::with_flags("o", "g").unwrap();
    global.set_last_index(2);
    assert_eq!(global.replace("foo", "0").unwrap(), "f00");
    assert_eq!(global.last_index(), 0);

    let mut single = Regex::new("o").unwrap();
    single.set_last_index(2);
    assert_eq!(single.replace("foo", "0").unwrap(), "f0o");
    assert_eq!(single.last_index(), 2);
}

#[test]
fn test_closure_replacement() {
    let mut regex = Regex::with_flags(r"(?<n>\d+)", "g").unwrap();
    let doubled = regex
        .replace("1 2 30", |found: &Match<'_>| {
            let n: u32 = found["n"].parse().unwrap();
            (n * 2).to_string()
        })
        .unwrap();
    assert_eq!(doubled, "2 4 60");
}

#[test]
fn test_closure_sees_position() {
    let mut regex = Regex::with_flags("x", "g").unwrap();
    let marked = regex
        .replace("axbx", |found: &Match<'_>| found.index().to_string())
        .unwrap();
    assert_eq!(marked, "a1b3");
}

#[test]
fn test_empty_matches_interleave() {
    let mut regex = Regex::with_flags("x*", "g").unwrap();
    assert_eq!(regex.replace("abc", "-").unwrap(), "-a-b-c-");
}

#[test]
fn test_replace_literal() {
    assert_eq!(replace_literal("a.b.c", ".", "!", true).unwrap(), "a!b!c");
    assert_eq!(replace_literal("a.b.c", ".", "!", false).unwrap(), "a!b.c");
    assert_eq!(replace_literal("1+1", "+", "[$&]", true).unwrap(), "1[+]1");
    assert_eq!(replace_literal("a b", " ", "_", true).unwrap(), "a_b");
}

#[test]
fn test_owned_template() {
    let mut regex = Regex::new("(a)").unwrap();
    let template = String::from("<$1>");
    assert_eq!(regex.replace("cat", &template).unwrap(), "c<a>t");
    assert_eq!(regex.replace("cat", template).unwrap(), "c<a>t");
}
