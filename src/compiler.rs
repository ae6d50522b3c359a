//! Extended pattern compiler
//!
//! Scans an extended pattern once, left to right. At every position the registered token
//! rules get the first chance to rewrite the input; failing that, one native token or one
//! raw character is copied through unchanged. The result is a pattern the native engine
//! accepts, plus the capture-name list gathered on the way.

use std::cell::Cell;
use std::sync::Arc;

use crate::{
    error::{RegexError, Result},
    syntax::{Flags, Scope},
    tokens::{TokenMatch, TokenRegistry, TokenRule},
};

thread_local! {
    /// Set while token handlers and triggers run on this thread
    static IN_TOKEN_RULE: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as running token rules until dropped
struct ReentrancyGuard;

impl ReentrancyGuard {
    fn enter() -> Self {
        IN_TOKEN_RULE.with(|flag| flag.set(true));
        ReentrancyGuard
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        IN_TOKEN_RULE.with(|flag| flag.set(false));
    }
}

/// Mutable state shared with token handlers during one compilation
#[derive(Debug, Clone, Default)]
pub struct CompileContext {
    /// One slot per capturing group opened so far, in output order
    capture_names: Vec<Option<String>>,
    has_named_capture: bool,
    flags: Flags,
}

impl CompileContext {
    /// Fresh context for a compilation with `flags`
    pub fn new(flags: Flags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    /// Flags accumulated so far
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether every flag in `flag` is set
    pub fn has_flag(&self, flag: Flags) -> bool {
        self.flags.contains(flag)
    }

    /// Turn on `flag` for the rest of the compilation
    pub fn set_flag(&mut self, flag: Flags) {
        self.flags |= flag;
    }

    /// Capture names so far; `None` marks an unnamed group
    pub fn capture_names(&self) -> &[Option<String>] {
        &self.capture_names
    }

    /// Whether any named group has been seen
    pub fn has_named_capture(&self) -> bool {
        self.has_named_capture
    }

    /// Record a newly opened capturing group
    pub fn push_capture(&mut self, name: Option<String>) {
        self.has_named_capture |= name.is_some();
        self.capture_names.push(name);
    }

    /// Zero-based slot of the group called `name`
    pub fn capture_index(&self, name: &str) -> Option<usize> {
        self.capture_names
            .iter()
            .position(|slot| slot.as_deref() == Some(name))
    }

    /// Capture names worth keeping on the compiled pattern: only if one of them is named
    pub fn into_capture_names(self) -> Option<Vec<Option<String>>> {
        self.has_named_capture.then_some(self.capture_names)
    }
}

/// Output of a compilation
#[derive(Debug, Clone)]
pub struct Compilation {
    /// Native pattern text, without any inline flag prefix
    pub native: String,
    /// Final context: capture names and accumulated flags
    pub context: CompileContext,
}

/// Where a rule can next match, relative to the cursor
///
/// A leftmost search from some offset that finds a match at `m` proves the rule matches
/// nowhere between that offset and `m`, so the rule is not searched again until the cursor
/// passes `m`.
#[derive(Debug)]
enum Lookahead<'p> {
    Unsearched,
    Found(TokenMatch<'p>),
    Exhausted,
}

/// Compiler state for rewriting one extended pattern
struct Compiler<'p> {
    /// Input pattern
    pattern: &'p str,
    /// Current byte offset in the pattern
    pos: usize,
    /// Native pattern built so far
    output: String,
    /// Inside or outside a character class
    scope: Scope,
    context: CompileContext,
    /// Token rules, highest priority first
    rules: Vec<Arc<TokenRule>>,
    /// Next match of each rule, parallel to `rules`
    lookahead: Vec<Lookahead<'p>>,
}

impl<'p> Compiler<'p> {
    fn new(pattern: &'p str, flags: Flags, registry: &TokenRegistry) -> Self {
        let rules = registry.snapshot();
        let lookahead = rules.iter().map(|_| Lookahead::Unsearched).collect();
        Self {
            pattern,
            pos: 0,
            output: String::with_capacity(pattern.len()),
            scope: Scope::OUTSIDE_CLASS,
            context: CompileContext::new(flags),
            rules,
            lookahead,
        }
    }

    /// Main compilation loop
    fn compile(mut self) -> Result<Compilation> {
        while self.pos < self.pattern.len() {
            if let Some((end, replacement)) = self.run_tokens()? {
                self.output.push_str(&replacement);
                self.pos = if end > self.pos {
                    end
                } else {
                    next_char_boundary(self.pattern, self.pos)
                };
                continue;
            }

            let rest = &self.pattern[self.pos..];
            if let Some(len) = native_token_len(rest, self.scope) {
                self.output.push_str(&rest[..len]);
                self.pos += len;
                continue;
            }

            let Some(ch) = rest.chars().next() else {
                break;
            };
            match ch {
                '[' => self.scope = Scope::INSIDE_CLASS,
                ']' => self.scope = Scope::OUTSIDE_CLASS,
                _ => {}
            }
            self.output.push(ch);
            self.pos += ch.len_utf8();
        }

        log::debug!(
            "compiled {:?} -> {:?} ({} capture groups)",
            self.pattern,
            self.output,
            self.context.capture_names().len()
        );

        Ok(Compilation {
            native: self.output,
            context: self.context,
        })
    }

    /// Try every applicable rule at the cursor; returns the match end and the replacement
    fn run_tokens(&mut self) -> Result<Option<(usize, String)>> {
        let _guard = ReentrancyGuard::enter();

        for (rule, next) in self.rules.iter().zip(self.lookahead.iter_mut()) {
            if !rule.applies(self.scope, &self.context) {
                continue;
            }
            let stale = match next {
                Lookahead::Unsearched => true,
                Lookahead::Found(token) => token.start() < self.pos,
                Lookahead::Exhausted => false,
            };
            if stale {
                *next = match rule.find_from(self.pattern, self.pos)? {
                    Some(token) => Lookahead::Found(token),
                    None => Lookahead::Exhausted,
                };
            }
            let Lookahead::Found(token) = next else {
                continue;
            };
            if token.start() == self.pos {
                log::trace!(
                    "token {:?} matched {:?} at {}",
                    rule.pattern(),
                    token.as_str(),
                    self.pos
                );
                let replacement = rule.handle(token, self.scope, &mut self.context)?;
                return Ok(Some((token.end(), replacement)));
            }
        }

        Ok(None)
    }
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(pos + 1, |ch| pos + ch.len_utf8())
}

/// Length of the native multi-character token at the start of `rest`, if there is one
///
/// Outside classes this covers escapes, non-capturing and lookaround openers, lazy
/// quantifier suffixes and counted repetition. Inside classes only escapes count.
fn native_token_len(rest: &str, scope: Scope) -> Option<usize> {
    let bytes = rest.as_bytes();
    let outside = scope.contains(Scope::OUTSIDE_CLASS);
    match *bytes.first()? {
        b'\\' => escape_len(rest, outside),
        b'(' if outside => group_opener_len(bytes),
        b'?' | b'*' | b'+' if outside && bytes.get(1) == Some(&b'?') => Some(2),
        b'{' if outside => repeat_len(bytes),
        _ => None,
    }
}

fn escape_len(rest: &str, outside: bool) -> Option<usize> {
    let bytes = rest.as_bytes();
    let next = *bytes.get(1)?;
    let len = match next {
        b'0' if outside => 2 + octal_len(&bytes[2..]),
        b'1'..=b'9' if outside => 1 + digit_run(&bytes[1..]),
        b'0'..=b'7' => 1 + octal_len(&bytes[1..]),
        b'x' => 2 + hex_len(&bytes[2..], 2),
        b'u' => 2 + hex_len(&bytes[2..], 4),
        b'c' if bytes.get(2).is_some_and(u8::is_ascii_alphabetic) => 3,
        _ => 1 + rest[1..].chars().next()?.len_utf8(),
    };
    Some(len)
}

/// `[0-3][0-7]{0,2}` or `[4-7][0-7]?`
fn octal_len(bytes: &[u8]) -> usize {
    let is_octal = |b: &&u8| (b'0'..=b'7').contains(*b);
    match bytes.first() {
        Some(b'0'..=b'3') => 1 + bytes[1..].iter().take(2).take_while(is_octal).count(),
        Some(b'4'..=b'7') => 1 + bytes[1..].iter().take(1).take_while(is_octal).count(),
        _ => 0,
    }
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Exactly `digits` hex digits, or a braced `{H..}` form; zero if neither
fn hex_len(bytes: &[u8], digits: usize) -> usize {
    if bytes.len() >= digits && bytes[..digits].iter().all(u8::is_ascii_hexdigit) {
        return digits;
    }
    if bytes.first() == Some(&b'{') {
        let inner = bytes[1..].iter().take_while(|b| b.is_ascii_hexdigit()).count();
        if inner > 0 && bytes.get(1 + inner) == Some(&b'}') {
            return inner + 2;
        }
    }
    0
}

/// `(?:`, `(?=`, `(?!`, `(?<=` and `(?<!`
fn group_opener_len(bytes: &[u8]) -> Option<usize> {
    if bytes.get(1) != Some(&b'?') {
        return None;
    }
    match bytes.get(2)? {
        b':' | b'=' | b'!' => Some(3),
        b'<' if matches!(bytes.get(3), Some(b'=' | b'!')) => Some(4),
        _ => None,
    }
}

/// `{n}`, `{n,}` or `{n,m}`, optionally lazy
fn repeat_len(bytes: &[u8]) -> Option<usize> {
    let mut len = 1;
    let lo = digit_run(&bytes[len..]);
    if lo == 0 {
        return None;
    }
    len += lo;
    if bytes.get(len) == Some(&b',') {
        len += 1;
        len += digit_run(&bytes[len..]);
    }
    if bytes.get(len) != Some(&b'}') {
        return None;
    }
    len += 1;
    if bytes.get(len) == Some(&b'?') {
        len += 1;
    }
    Some(len)
}

/// Whether `rest` starts with a quantifier, which must stay attached to what precedes it
pub(crate) fn starts_with_quantifier(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    match bytes.first() {
        Some(b'?' | b'*' | b'+') => true,
        Some(b'{') => repeat_len(bytes).is_some(),
        _ => false,
    }
}

/// Compile an extended pattern into native syntax using the rules in `registry`
///
/// Fails with [`RegexError::ReentrantCompilation`] when called from inside a token handler
/// or trigger.
pub fn compile(pattern: &str, flags: Flags, registry: &TokenRegistry) -> Result<Compilation> {
    if IN_TOKEN_RULE.with(Cell::get) {
        return Err(RegexError::ReentrantCompilation);
    }
    Compiler::new(pattern, flags, registry).compile()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outside(rest: &str) -> Option<usize> {
        native_token_len(rest, Scope::OUTSIDE_CLASS)
    }

    fn inside(rest: &str) -> Option<usize> {
        native_token_len(rest, Scope::INSIDE_CLASS)
    }

    #[test]
    fn test_native_escapes() {
        assert_eq!(outside(r"\d+"), Some(2));
        assert_eq!(outside(r"\x41z"), Some(4));
        assert_eq!(outside(r"\u0041z"), Some(6));
        assert_eq!(outside(r"\u{1F600}z"), Some(9));
        assert_eq!(outside(r"\cJ"), Some(3));
        assert_eq!(outside(r"\12a"), Some(3));
        assert_eq!(outside(r"\0123"), Some(5));
        assert_eq!(inside(r"\12a"), Some(3));
        assert_eq!(inside(r"\8"), Some(2));
        assert_eq!(outside("\\é"), Some(3));
        assert_eq!(outside("\\"), None);
    }

    #[test]
    fn test_native_group_openers_and_quantifiers() {
        assert_eq!(outside("(?:a)"), Some(3));
        assert_eq!(outside("(?<=a)"), Some(4));
        assert_eq!(outside("(?<!a)"), Some(4));
        assert_eq!(outside("(?<name>a)"), None);
        assert_eq!(outside("(a)"), None);
        assert_eq!(outside("*?"), Some(2));
        assert_eq!(outside("{2,5}?x"), Some(6));
        assert_eq!(outside("{2,}"), Some(4));
        assert_eq!(outside("{,5}"), None);
        assert_eq!(outside("{x}"), None);
        assert_eq!(inside("{2}"), None);
        assert_eq!(inside("(?:"), None);
    }

    #[test]
    fn test_quantifier_lookahead() {
        assert!(starts_with_quantifier("+b"));
        assert!(starts_with_quantifier("{3}"));
        assert!(!starts_with_quantifier("{a}"));
        assert!(!starts_with_quantifier("b"));
        assert!(!starts_with_quantifier(""));
    }
}
