//! Search-and-replace with template expansion
//!
//! Replacement templates understand these tokens:
//!
//! | Token       | Inserts                                                  |
//! |-------------|----------------------------------------------------------|
//! | `$$`        | a literal `$`                                            |
//! | `$&`        | the whole match                                          |
//! | `` $` ``    | the text before the match                                |
//! | `$'`        | the text after the match                                 |
//! | `$n`, `$nn` | group `n`, for one or two digits                         |
//! | `${n}`      | group `n` for any number of digits; `${0}` is the match  |
//! | `${name}`   | the group called `name`                                  |
//!
//! A two-digit `$nn` larger than the group count drops trailing digits until the number
//! fits, re-emitting the dropped digits literally. Tokens that resolve to nothing are left
//! in the output as written. A group that did not participate inserts nothing.

use crate::{
    error::Result,
    matcher::{step_char, Match},
    syntax::Flags,
    Regex,
};

/// Something that can produce the replacement text for a match
pub trait Replacer {
    /// Append the replacement for `found` to `dst`
    fn replace_append(&mut self, found: &Match<'_>, dst: &mut String);
}

impl Replacer for &str {
    fn replace_append(&mut self, found: &Match<'_>, dst: &mut String) {
        expand(self, found, dst);
    }
}

impl Replacer for String {
    fn replace_append(&mut self, found: &Match<'_>, dst: &mut String) {
        expand(self, found, dst);
    }
}

impl Replacer for &String {
    fn replace_append(&mut self, found: &Match<'_>, dst: &mut String) {
        expand(self, found, dst);
    }
}

impl<F> Replacer for F
where
    F: FnMut(&Match<'_>) -> String,
{
    fn replace_append(&mut self, found: &Match<'_>, dst: &mut String) {
        dst.push_str(&self(found));
    }
}

/// Expand `template` for `found` onto `dst`
pub fn expand(template: &str, found: &Match<'_>, dst: &mut String) {
    let mut rest = template;
    while let Some(at) = rest.find('$') {
        dst.push_str(&rest[..at]);
        rest = &rest[at..];
        let consumed = expand_token(rest, found, dst);
        rest = &rest[consumed..];
    }
    dst.push_str(rest);
}

/// Expand the `$` token at the start of `token`; returns how many bytes it spans
fn expand_token(token: &str, found: &Match<'_>, dst: &mut String) -> usize {
    let bytes = token.as_bytes();
    match bytes.get(1) {
        Some(b'$') => {
            dst.push('$');
            2
        }
        Some(b'&') => {
            dst.push_str(found.as_str());
            2
        }
        Some(b'`') => {
            dst.push_str(found.before());
            2
        }
        Some(b'\'') => {
            dst.push_str(found.after());
            2
        }
        Some(b'0'..=b'9') => {
            let digits = bytes[1..]
                .iter()
                .take(2)
                .take_while(|b| b.is_ascii_digit())
                .count();
            expand_numbered(&token[1..1 + digits], &token[..1 + digits], found, dst);
            1 + digits
        }
        Some(b'{') => {
            let name_len = bytes[2..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$'))
                .count();
            if name_len == 0 || bytes.get(2 + name_len) != Some(&b'}') {
                dst.push('$');
                return 1;
            }
            expand_braced(&token[2..2 + name_len], &token[..3 + name_len], found, dst);
            3 + name_len
        }
        _ => {
            dst.push('$');
            1
        }
    }
}

/// `$n` or `$nn`
fn expand_numbered(digits: &str, whole: &str, found: &Match<'_>, dst: &mut String) {
    let groups = found.len() - 1;
    let mut number = digits
        .bytes()
        .fold(0usize, |acc, b| acc * 10 + usize::from(b - b'0'));
    if number == 0 {
        dst.push_str(whole);
        return;
    }
    let mut keep = digits.len();
    while number > groups {
        keep -= 1;
        number /= 10;
    }
    if number == 0 {
        dst.push('$');
    } else {
        dst.push_str(found.get(number).unwrap_or(""));
    }
    dst.push_str(&digits[keep..]);
}

/// `${n}` or `${name}`
fn expand_braced(name: &str, whole: &str, found: &Match<'_>, dst: &mut String) {
    if name.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(number) = name.parse::<usize>() {
            if number < found.len() {
                dst.push_str(found.get(number).unwrap_or(""));
                return;
            }
        }
    }
    match found.name_index(name) {
        Some(index) => dst.push_str(found.get(index).unwrap_or("")),
        None => dst.push_str(whole),
    }
}

impl Regex {
    /// Replace the first match, or every match when the `g` flag is set
    ///
    /// The search ignores the cursor. Afterwards a global pattern's cursor is reset to
    /// zero; other patterns keep theirs.
    pub fn replace<R: Replacer>(&mut self, subject: &str, replacer: R) -> Result<String> {
        let all = self.global();
        self.replace_with(subject, replacer, all)
    }

    /// Replace the first match regardless of flags
    pub fn replace_first<R: Replacer>(&mut self, subject: &str, replacer: R) -> Result<String> {
        self.replace_with(subject, replacer, false)
    }

    /// Replace every match regardless of flags
    pub fn replace_all<R: Replacer>(&mut self, subject: &str, replacer: R) -> Result<String> {
        self.replace_with(subject, replacer, true)
    }

    fn replace_with<R: Replacer>(
        &mut self,
        subject: &str,
        mut replacer: R,
        all: bool,
    ) -> Result<String> {
        let mut output = String::with_capacity(subject.len());
        let mut last_end = 0;
        let mut pos = 0;
        while let Some(found) = self.exec_at(subject, pos, false)? {
            output.push_str(&subject[last_end..found.index()]);
            replacer.replace_append(&found, &mut output);
            last_end = found.end();
            if !all {
                break;
            }
            pos = if found.is_empty() {
                step_char(subject, found.end())
            } else {
                found.end()
            };
        }
        output.push_str(&subject[last_end..]);
        if self.global() {
            self.set_last_index(0);
        }
        Ok(output)
    }
}

/// Replace occurrences of the literal text `search`
///
/// Replacement templates are still expanded against each occurrence.
pub fn replace_literal<R: Replacer>(
    subject: &str,
    search: &str,
    replacer: R,
    all: bool,
) -> Result<String> {
    let flags = if all { Flags::GLOBAL } else { Flags::empty() };
    let mut regex = Regex::from_native(&crate::escape(search), flags)?;
    regex.replace_with(subject, replacer, all)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_with(pattern: &str, subject: &str, template: &str) -> String {
        let regex = Regex::new(pattern).unwrap();
        let found = regex.find(subject).unwrap().unwrap();
        let mut out = String::new();
        expand(template, &found, &mut out);
        out
    }

    #[test]
    fn test_simple_tokens() {
        assert_eq!(expand_with("b", "abc", "[$$]"), "[$]");
        assert_eq!(expand_with("b", "abc", "[$&]"), "[b]");
        assert_eq!(expand_with("b", "abc", "[$`|$']"), "[a|c]");
        assert_eq!(expand_with("b", "abc", "$"), "$");
        assert_eq!(expand_with("b", "abc", "$x"), "$x");
    }

    #[test]
    fn test_numbered_peeling() {
        assert_eq!(expand_with("(a)(b)(c)", "abc", "$11"), "a1");
        assert_eq!(expand_with("(a)(b)(c)", "abc", "$3"), "c");
        assert_eq!(expand_with("(a)(b)(c)", "abc", "$4"), "$4");
        assert_eq!(expand_with("(a)", "a", "$0"), "$0");
        assert_eq!(expand_with("(a)", "a", "$00"), "$00");
        assert_eq!(expand_with("(a)", "a", "$01"), "a");
        assert_eq!(expand_with("a", "a", "$1"), "$1");
    }

    #[test]
    fn test_braced() {
        assert_eq!(expand_with("(?<x>a)", "a", "${x}"), "a");
        assert_eq!(expand_with("(?<x>a)", "a", "${0}"), "a");
        assert_eq!(expand_with("(?<x>a)", "a", "${1}"), "a");
        assert_eq!(expand_with("(?<x>a)", "a", "${2}"), "${2}");
        assert_eq!(expand_with("(?<x>a)", "a", "${y}"), "${y}");
        assert_eq!(expand_with("(?<x>a)", "a", "${x"), "${x");
    }
}
