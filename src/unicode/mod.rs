//! Unicode property, script and block tokens
//!
//! Adds `\p{Name}`, `\P{Name}` and `\p{^Name}` for every registered name. Names ignore
//! case, spaces, hyphens and underscores. Data covers the Basic Multilingual Plane only.

mod blocks;
mod categories;
mod scripts;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::{
    error::{RegexError, Result},
    syntax::Scope,
    tokens::{TokenRegistry, TokenRule},
};

const SURROGATES: (u32, u32) = (0xD800, 0xDFFF);
const BMP_MAX: u32 = 0xFFFF;

/// Canonical token name: lowercase, with spaces, hyphens and underscores removed
pub fn slug(name: &str) -> String {
    name.chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sorted, merged, inclusive code point ranges
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodePointSet {
    ranges: Vec<(u32, u32)>,
}

impl CodePointSet {
    /// Parse a run of `XXXX` code points and `XXXX-YYYY` ranges
    pub fn parse(data: &str) -> Result<Self> {
        let malformed = || RegexError::MalformedToken(format!("bad code point data: {data:?}"));
        let bytes = data.as_bytes();
        let mut ranges = Vec::new();
        let mut pos = 0;
        while pos < bytes.len() {
            let start = parse_hex4(bytes, pos).ok_or_else(malformed)?;
            pos += 4;
            let mut end = start;
            if bytes.get(pos) == Some(&b'-') {
                end = parse_hex4(bytes, pos + 1).ok_or_else(malformed)?;
                pos += 5;
            }
            if end < start {
                return Err(malformed());
            }
            ranges.push((start, end));
        }
        Ok(Self::from_ranges(ranges))
    }

    fn from_ranges(mut ranges: Vec<(u32, u32)>) -> Self {
        ranges.sort_unstable();
        let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
        for (start, end) in ranges {
            match merged.last_mut() {
                Some(last) if start <= last.1.saturating_add(1) => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        Self { ranges: merged }
    }

    /// Ranges in ascending order
    pub fn ranges(&self) -> &[(u32, u32)] {
        &self.ranges
    }

    /// Every BMP code point not in this set
    pub fn invert(&self) -> Self {
        let mut ranges = Vec::new();
        let mut next = 0u32;
        for &(start, end) in &self.ranges {
            if start > next {
                ranges.push((next, start - 1));
            }
            next = end + 1;
        }
        if next <= BMP_MAX {
            ranges.push((next, BMP_MAX));
        }
        Self { ranges }
    }

    /// Character-class body (`\uXXXX-\uYYYY...`), surrogates left out
    pub fn to_class_body(&self) -> String {
        let mut body = String::new();
        for &(start, end) in &self.ranges {
            for (start, end) in clip_surrogates(start, end) {
                if start == end {
                    body.push_str(&format!("\\u{start:04X}"));
                } else {
                    body.push_str(&format!("\\u{start:04X}-\\u{end:04X}"));
                }
            }
        }
        body
    }
}

fn parse_hex4(bytes: &[u8], pos: usize) -> Option<u32> {
    let digits = std::str::from_utf8(bytes.get(pos..pos + 4)?).ok()?;
    u32::from_str_radix(digits, 16).ok()
}

/// Split a range around the surrogate block, which no `char` can hold
fn clip_surrogates(start: u32, end: u32) -> Vec<(u32, u32)> {
    let (lo, hi) = SURROGATES;
    if end < lo || start > hi {
        return vec![(start, end)];
    }
    let mut parts = Vec::with_capacity(2);
    if start < lo {
        parts.push((start, lo - 1));
    }
    if end > hi {
        parts.push((hi + 1, end));
    }
    parts
}

#[derive(Debug)]
struct UnicodeEntry {
    set: CodePointSet,
    body: String,
    inverted: OnceCell<String>,
}

impl UnicodeEntry {
    fn new(set: CodePointSet) -> Self {
        let body = set.to_class_body();
        Self {
            set,
            body,
            inverted: OnceCell::new(),
        }
    }

    fn inverted_body(&self) -> &str {
        self.inverted.get_or_init(|| self.set.invert().to_class_body())
    }
}

/// Registered Unicode token names, keyed by slug
#[derive(Debug, Default)]
pub struct UnicodeTable {
    entries: RwLock<HashMap<String, Arc<UnicodeEntry>>>,
}

impl UnicodeTable {
    /// Store `mapping` entries, then point each alias at its target
    pub(crate) fn insert(&self, mapping: &[(&str, &str)], aliases: &[(&str, &str)]) -> Result<()> {
        let parsed = mapping
            .iter()
            .map(|(name, data)| {
                let set = CodePointSet::parse(data)?;
                Ok((slug(name), Arc::new(UnicodeEntry::new(set))))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut entries = self.entries.write();
        entries.extend(parsed);
        for (name, alias) in aliases {
            match entries.get(&slug(name)).cloned() {
                Some(entry) => {
                    entries.insert(slug(alias), entry);
                }
                None => log::debug!("Unicode alias {alias:?} names unknown token {name:?}"),
            }
        }
        Ok(())
    }

    /// Whether `name` (in any spelling) is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(&slug(name))
    }

    fn get(&self, name: &str) -> Option<Arc<UnicodeEntry>> {
        self.entries.read().get(&slug(name)).cloned()
    }
}

/// The `\p{..}` rule backed by `table`
pub(crate) fn token_rule(table: Arc<UnicodeTable>) -> Result<TokenRule> {
    let rule = TokenRule::new(r"\\([pP])\{(\^?)([^}]*)\}", move |token, scope, _| {
        let upper = token.get(1) == Some("P");
        let caret = token.get(2) == Some("^");
        if upper && caret {
            return Err(RegexError::MalformedToken(token.as_str().to_string()));
        }
        let entry = table
            .get(token.get(3).unwrap_or(""))
            .ok_or_else(|| RegexError::UnsupportedUnicodeToken(token.as_str().to_string()))?;
        let inverted = upper || caret;

        if scope == Scope::INSIDE_CLASS {
            return Ok(if inverted {
                entry.inverted_body().to_string()
            } else {
                entry.body.clone()
            });
        }
        Ok(match (entry.body.is_empty(), inverted) {
            (true, false) => r"\b\B".to_string(),
            (true, true) => r"[\s\S]".to_string(),
            (false, false) => format!("[{}]", entry.body),
            (false, true) => format!("[^{}]", entry.body),
        })
    })?;
    Ok(rule.scope(Scope::INSIDE_CLASS | Scope::OUTSIDE_CLASS))
}

/// Run `install` with extensibility switched on, restoring the previous state afterwards
fn with_extensibility<F>(registry: &TokenRegistry, install: F) -> Result<()>
where
    F: FnOnce(&TokenRegistry) -> Result<()>,
{
    let was_enabled = registry.is_enabled();
    if !was_enabled {
        registry.enable();
    }
    let result = install(registry);
    if !was_enabled {
        registry.disable();
    }
    result
}

/// General categories such as `\p{Lu}` or `\p{Uppercase Letter}`, `L`/`Letter` included
pub fn install_categories(registry: &TokenRegistry) -> Result<()> {
    with_extensibility(registry, |registry| {
        registry.add_unicode_token_set(categories::CATEGORIES, categories::CATEGORY_ALIASES)
    })
}

/// Scripts such as `\p{Greek}`
pub fn install_scripts(registry: &TokenRegistry) -> Result<()> {
    with_extensibility(registry, |registry| {
        registry.add_unicode_token_set(scripts::SCRIPTS, &[])
    })
}

/// Blocks such as `\p{InBasicLatin}`
pub fn install_blocks(registry: &TokenRegistry) -> Result<()> {
    with_extensibility(registry, |registry| {
        registry.add_unicode_token_set(blocks::BLOCKS, &[])
    })
}

/// Every bundled Unicode package
pub fn install_all(registry: &TokenRegistry) -> Result<()> {
    install_categories(registry)?;
    install_scripts(registry)?;
    install_blocks(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Latin Extended-A"), "latinextendeda");
        assert_eq!(slug("Uppercase_Letter"), "uppercaseletter");
    }

    #[test]
    fn test_parse_and_render() {
        let set = CodePointSet::parse("0041-005A0061-007A00AA").unwrap();
        assert_eq!(set.ranges(), &[(0x41, 0x5A), (0x61, 0x7A), (0xAA, 0xAA)]);
        assert_eq!(set.to_class_body(), r"\u0041-\u005A\u0061-\u007A\u00AA");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CodePointSet::parse("00G1").is_err());
        assert!(CodePointSet::parse("0041-").is_err());
        assert!(CodePointSet::parse("005A-0041").is_err());
    }

    #[test]
    fn test_invert() {
        let set = CodePointSet::parse("0000-0040005B-FFFF").unwrap();
        assert_eq!(set.invert().ranges(), &[(0x41, 0x5A)]);

        let set = CodePointSet::parse("0041").unwrap();
        assert_eq!(set.invert().ranges(), &[(0, 0x40), (0x42, 0xFFFF)]);
    }

    #[test]
    fn test_surrogates_are_clipped() {
        let set = CodePointSet::parse("D700-E000").unwrap();
        assert_eq!(set.to_class_body(), r"\uD700-\uD7FF\uE000");

        let set = CodePointSet::parse("D800-DFFF").unwrap();
        assert_eq!(set.to_class_body(), "");
    }
}
