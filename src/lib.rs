//! Extended regular expressions on top of `fancy-regex`
//!
//! Patterns may use syntax the native engine lacks: named capture (`(?<name>..)`,
//! `\k<name>`), a leading mode modifier (`(?ix)`), inline comments (`(?#..)`), free-spacing
//! mode (flag `x`), dot-matches-all (flag `s`), explicit capture (flag `n`) and Unicode
//! category, script and block tokens (`\p{Lu}`, `\p{Greek}`, `\p{InBasicLatin}`).
//! Patterns are rewritten into native syntax by an extensible set of token rules, and
//! capture names are re-attached to match results.
//!
//! On top of plain matching the crate offers position-aware and sticky searches, template
//! and closure replacement with named backreferences, splitting, chained matching, and a
//! matcher for balanced, nested delimiters.
//!
//! All offsets are UTF-8 byte offsets into the searched text.

mod builtins;
pub mod compiler;
pub mod error;
pub mod matcher;
pub mod recursive;
pub mod replace;
pub mod syntax;
pub mod tokens;
pub mod unicode;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

pub use compiler::{CompileContext, Compilation};
pub use error::{RegexError, Result};
pub use matcher::{match_chain, Backref, ChainLink, Match};
pub use recursive::{match_recursive, RecursiveMatches, RecursiveOptions, ValueNames, ValuePart};
pub use replace::{replace_literal, Replacer};
pub use syntax::{Flags, Scope};
pub use tokens::{TokenMatch, TokenRegistry, TokenRule};

static CACHE: Lazy<Mutex<HashMap<(String, String), Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Resource limits handed to the native engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecLimits {
    /// Maximum backtracking steps per search before the search fails with an error
    pub backtrack_limit: usize,
    /// Maximum compiled size of the delegated (non-backtracking) parts
    pub delegate_size_limit: Option<usize>,
}

impl Default for ExecLimits {
    fn default() -> Self {
        Self {
            backtrack_limit: 1_000_000,
            delegate_size_limit: None,
        }
    }
}

impl ExecLimits {
    /// Build a native pattern under these limits
    pub(crate) fn build_native(&self, pattern: &str) -> Result<fancy_regex::Regex> {
        let mut builder = fancy_regex::RegexBuilder::new(pattern);
        builder.backtrack_limit(self.backtrack_limit);
        if let Some(limit) = self.delegate_size_limit {
            builder.delegate_size_limit(limit);
        }
        Ok(builder.build()?)
    }
}

/// A compiled extended pattern
///
/// Owns the native pattern together with its capture-name list. The search cursor
/// (`last_index`) is only used by the stateful [`Regex::exec`] and [`Regex::test`].
#[derive(Debug)]
pub struct Regex {
    /// Extended pattern as written
    source: String,
    /// Rewritten pattern, without the inline flag prefix
    native_source: String,
    flags: Flags,
    native: fancy_regex::Regex,
    /// One slot per capturing group; present only if some group is named
    capture_names: Option<Arc<[Option<String>]>>,
    limits: ExecLimits,
    last_index: usize,
}

impl Clone for Regex {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            native_source: self.native_source.clone(),
            flags: self.flags,
            native: self.native.clone(),
            capture_names: self.capture_names.as_deref().map(Arc::from),
            limits: self.limits,
            last_index: self.last_index,
        }
    }
}

impl Regex {
    /// Compile an extended pattern without flags
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_flags(pattern, "")
    }

    /// Compile an extended pattern with a flag string such as `"gix"`
    pub fn with_flags(pattern: &str, flags: &str) -> Result<Self> {
        let flags = Flags::from_letters(flags)?;
        Self::with_registry(pattern, flags, TokenRegistry::global())
    }

    /// Compile using the token rules of `registry`
    pub fn with_registry(pattern: &str, flags: Flags, registry: &TokenRegistry) -> Result<Self> {
        Self::with_limits(pattern, flags, registry, ExecLimits::default())
    }

    /// Compile using `registry` and custom native-engine limits
    pub fn with_limits(
        pattern: &str,
        flags: Flags,
        registry: &TokenRegistry,
        limits: ExecLimits,
    ) -> Result<Self> {
        let Compilation { native, context } = compiler::compile(pattern, flags, registry)?;
        let flags = context.flags();
        let capture_names: Option<Arc<[Option<String>]>> =
            context.into_capture_names().map(Arc::from);
        Self::assemble(pattern.to_string(), native, flags, capture_names, limits)
    }

    /// Wrap a pattern that is already in native syntax; no token rules run
    pub(crate) fn from_native(pattern: &str, flags: Flags) -> Result<Self> {
        Self::assemble(
            pattern.to_string(),
            pattern.to_string(),
            flags,
            None,
            ExecLimits::default(),
        )
    }

    fn assemble(
        source: String,
        native_source: String,
        flags: Flags,
        capture_names: Option<Arc<[Option<String>]>>,
        limits: ExecLimits,
    ) -> Result<Self> {
        let native = limits.build_native(&format!("{}{}", flags.native_prefix(), native_source))?;
        Ok(Self {
            source,
            native_source,
            flags,
            native,
            capture_names,
            limits,
            last_index: 0,
        })
    }

    /// Copy with flags added and removed
    ///
    /// The copy is rebuilt from the native pattern, so `n`, `s` and `x` keep the effect they
    /// had at compile time; `i`, `m`, `g` and `y` take the new setting. The capture names
    /// are copied, and the copy's `last_index` starts at zero.
    pub fn copy_with_flags(&self, add: Flags, remove: Flags) -> Result<Self> {
        if add.intersects(remove) {
            return Err(RegexError::FlagConflict(format!(
                "{} both added and removed",
                add & remove
            )));
        }
        Self::assemble(
            self.source.clone(),
            self.native_source.clone(),
            (self.flags | add) - remove,
            self.capture_names.as_deref().map(Arc::from),
            self.limits,
        )
    }

    /// Extended pattern as written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Pattern handed to the native engine, without the inline flag prefix
    pub fn native_source(&self) -> &str {
        &self.native_source
    }

    /// Flags in effect, including any set by a leading mode modifier
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether the `g` flag is set
    pub fn global(&self) -> bool {
        self.flags.contains(Flags::GLOBAL)
    }

    /// Whether the `y` flag is set
    pub fn sticky(&self) -> bool {
        self.flags.contains(Flags::STICKY)
    }

    /// Capture names by group position (group 1 first); `None` when no group is named
    pub fn capture_names(&self) -> Option<&[Option<String>]> {
        self.capture_names.as_deref()
    }

    /// Number of capturing groups, not counting the whole match
    pub fn captures_len(&self) -> usize {
        self.native.captures_len() - 1
    }

    /// Cursor used by [`Regex::exec`] for global and sticky patterns
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Move the cursor used by [`Regex::exec`]
    pub fn set_last_index(&mut self, index: usize) {
        self.last_index = index;
    }

    pub(crate) fn native(&self) -> &fancy_regex::Regex {
        &self.native
    }

    pub(crate) fn shared_capture_names(&self) -> Option<Arc<[Option<String>]>> {
        self.capture_names.clone()
    }
}

/// Compile once per pattern and flag pair, returning a copy of the cached pattern afterwards
pub fn cache(pattern: &str, flags: &str) -> Result<Regex> {
    let key = (pattern.to_string(), flags.to_string());
    if let Some(regex) = CACHE.lock().get(&key) {
        return Ok(regex.clone());
    }
    let regex = Regex::with_flags(pattern, flags)?;
    CACHE.lock().insert(key, regex.clone());
    Ok(regex)
}

/// Escape regex metacharacters so `text` matches literally under any flags
///
/// Whitespace is written as a hex escape so free-spacing mode leaves it intact.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        match ch {
            '-' | '[' | ']' | '{' | '}' | '(' | ')' | '*' | '+' | '?' | '.' | ',' | '\\' | '^'
            | '$' | '|' | '#' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            ch if ch.is_ascii_whitespace() || ch == '\x0B' => {
                escaped.push_str(&format!("\\x{:02X}", ch as u32));
            }
            ch if ch.is_whitespace() => escaped.push_str(&format!("\\u{{{:X}}}", ch as u32)),
            ch => escaped.push(ch),
        }
    }
    escaped
}
