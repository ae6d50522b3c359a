//! Pattern flags and token scopes

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{RegexError, Result};

bitflags! {
    /// Flags accepted alongside a pattern, written as the letters `gimnsxy`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        /// `g`: search and replace operate on every match
        const GLOBAL = 1;
        /// `i`: case insensitive matching
        const IGNORE_CASE = 2;
        /// `m`: `^` and `$` match at line boundaries
        const MULTILINE = 4;
        /// `n`: only named groups capture
        const EXPLICIT_CAPTURE = 8;
        /// `s`: dot matches every character, newlines included
        const DOT_ALL = 16;
        /// `x`: whitespace and `#` line comments are ignored
        const EXTENDED = 32;
        /// `y`: matches must start at the search position
        const STICKY = 64;
    }
}

/// Flag letters in canonical order
const LETTERS: [(char, Flags); 7] = [
    ('g', Flags::GLOBAL),
    ('i', Flags::IGNORE_CASE),
    ('m', Flags::MULTILINE),
    ('n', Flags::EXPLICIT_CAPTURE),
    ('s', Flags::DOT_ALL),
    ('x', Flags::EXTENDED),
    ('y', Flags::STICKY),
];

impl Flags {
    /// Flags that are handed to the native engine
    pub const NATIVE: Self =
        Self::from_bits_truncate(Self::IGNORE_CASE.bits() | Self::MULTILINE.bits());

    /// Look up a single flag letter
    pub fn from_letter(letter: char) -> Option<Self> {
        LETTERS
            .iter()
            .find(|(ch, _)| *ch == letter)
            .map(|(_, flag)| *flag)
    }

    /// Parse a flag string such as `"gi"`; repeated letters are allowed
    pub fn from_letters(letters: &str) -> Result<Self> {
        letters.chars().try_fold(Flags::empty(), |acc, ch| {
            Flags::from_letter(ch)
                .map(|flag| acc | flag)
                .ok_or(RegexError::UnknownFlag(ch))
        })
    }

    /// Inline group that switches on the native flags, e.g. `(?im)`; empty when none apply
    pub fn native_prefix(self) -> String {
        let native = self & Self::NATIVE;
        if native.is_empty() {
            return String::new();
        }
        format!("(?{native})")
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ch, flag) in LETTERS {
            if self.contains(flag) {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = RegexError;

    fn from_str(s: &str) -> Result<Self> {
        Flags::from_letters(s)
    }
}

bitflags! {
    /// Where in a pattern a token rule applies
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Scope: u8 {
        /// Inside a character class `[...]`
        const INSIDE_CLASS = 0x1;
        /// Everywhere else
        const OUTSIDE_CLASS = 0x2;
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::OUTSIDE_CLASS
    }
}
