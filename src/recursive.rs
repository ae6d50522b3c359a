//! Balanced delimiter matching
//!
//! Finds text between a left and a right delimiter pattern, counting nesting so that only
//! outermost pairs are reported. An optional escape character makes the character after
//! it inert.

use crate::{
    error::{RegexError, Result},
    matcher::{step_char, Match},
    syntax::Flags,
    tokens::TokenRegistry,
    Regex,
};

/// Labels for the parts of labeled output; an unset label drops that part
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueNames {
    /// Text outside any match
    pub between: Option<String>,
    /// Outermost left delimiter
    pub left: Option<String>,
    /// Text inside the outermost delimiters
    pub inner: Option<String>,
    /// Outermost right delimiter
    pub right: Option<String>,
}

impl From<[&str; 4]> for ValueNames {
    /// `[between, left, inner, right]`; an empty string leaves that label unset
    fn from(names: [&str; 4]) -> Self {
        let label = |name: &str| (!name.is_empty()).then(|| name.to_string());
        let [between, left, inner, right] = names;
        Self {
            between: label(between),
            left: label(left),
            inner: label(inner),
            right: label(right),
        }
    }
}

/// Options for [`match_recursive`]
#[derive(Debug, Clone, Default)]
pub struct RecursiveOptions {
    value_names: Option<ValueNames>,
    escape_char: Option<String>,
}

impl RecursiveOptions {
    /// Unlabeled output, no escape character
    pub fn new() -> Self {
        Self::default()
    }

    /// Return labeled parts instead of inner text
    pub fn value_names(mut self, names: impl Into<ValueNames>) -> Self {
        self.value_names = Some(names.into());
        self
    }

    /// Character that escapes the next one; an empty string disables escaping
    pub fn escape_char(mut self, escape: &str) -> Self {
        self.escape_char = (!escape.is_empty()).then(|| escape.to_string());
        self
    }
}

/// One labeled span of the subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuePart<'t> {
    /// Label from [`ValueNames`]
    pub name: String,
    /// Text of the span
    pub value: &'t str,
    /// Byte offset where the span starts
    pub start: usize,
    /// Byte offset just past the span
    pub end: usize,
}

/// Output of [`match_recursive`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecursiveMatches<'t> {
    /// Inner text of each outermost match
    Values(Vec<&'t str>),
    /// Labeled spans, when value names were given
    Parts(Vec<ValuePart<'t>>),
}

impl<'t> RecursiveMatches<'t> {
    /// Inner texts, when no value names were given
    pub fn values(&self) -> Option<&[&'t str]> {
        match self {
            Self::Values(values) => Some(values),
            Self::Parts(_) => None,
        }
    }

    /// Labeled spans, when value names were given
    pub fn parts(&self) -> Option<&[ValuePart<'t>]> {
        match self {
            Self::Values(_) => None,
            Self::Parts(parts) => Some(parts),
        }
    }

    /// Number of values or parts
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Parts(parts) => parts.len(),
        }
    }

    /// Whether nothing was found
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects output in the shape the options ask for
struct Collector<'t, 'o> {
    subject: &'t str,
    names: Option<&'o ValueNames>,
    values: Vec<&'t str>,
    parts: Vec<ValuePart<'t>>,
}

impl<'t, 'o> Collector<'t, 'o> {
    fn part(&mut self, label: &Option<String>, start: usize, end: usize) {
        if let Some(name) = label {
            self.parts.push(ValuePart {
                name: name.clone(),
                value: &self.subject[start..end],
                start,
                end,
            });
        }
    }

    /// One outermost match: any text since the previous one, then the delimiters and content
    fn outer(
        &mut self,
        last_outer_end: usize,
        outer_start: usize,
        inner_start: usize,
        delim_start: usize,
        delim_end: usize,
    ) {
        match self.names {
            None => self.values.push(&self.subject[inner_start..delim_start]),
            Some(names) => {
                if outer_start > last_outer_end {
                    self.part(&names.between, last_outer_end, outer_start);
                }
                self.part(&names.left, outer_start, inner_start);
                self.part(&names.inner, inner_start, delim_start);
                self.part(&names.right, delim_start, delim_end);
            }
        }
    }

    fn finish(self) -> RecursiveMatches<'t> {
        match self.names {
            None => RecursiveMatches::Values(self.values),
            Some(_) => RecursiveMatches::Parts(self.parts),
        }
    }
}

/// Match balanced `left`/`right` delimiter pairs in `subject`
///
/// `left` and `right` are extended patterns compiled with `flags` (`y` excepted). Without
/// `g` only the first outermost match is returned. With `y` matches must follow one another
/// without gaps, starting at offset zero. Where both delimiters match at the same offset the
/// left one wins.
///
/// Fails with [`RegexError::UnbalancedDelimiter`] on a right delimiter with nothing open, or
/// on a subject that ends while a match is still open.
pub fn match_recursive<'t>(
    subject: &'t str,
    left: &str,
    right: &str,
    flags: &str,
    options: &RecursiveOptions,
) -> Result<RecursiveMatches<'t>> {
    let mut flags = Flags::from_letters(flags)?;
    let global = flags.contains(Flags::GLOBAL);
    let sticky = flags.contains(Flags::STICKY);
    flags.remove(Flags::STICKY);

    let registry = TokenRegistry::global();
    let left = Regex::with_registry(left, flags, registry)?;
    let right = Regex::with_registry(right, flags, registry)?;
    let escape = match options.escape_char.as_deref() {
        Some(escape_char) => Some(escape_scanner(escape_char, &left, &right, flags)?),
        None => None,
    };

    let mut collector = Collector {
        subject,
        names: options.value_names.as_ref(),
        values: Vec::new(),
        parts: Vec::new(),
    };
    let mut open_tokens = 0usize;
    let mut delim_start = 0;
    let mut delim_end = 0;
    let mut last_outer_end = 0;
    let mut outer_start = 0;
    let mut inner_start = 0;

    loop {
        if let Some(escape) = &escape {
            if let Some(skipped) = escape.exec_at(subject, delim_end, true)? {
                delim_end = skipped.end();
            }
        }

        let mut left_match = left.exec_at(subject, delim_end, false)?;
        let mut right_match = right.exec_at(subject, delim_end, false)?;
        let left_first = match (&left_match, &right_match) {
            (Some(l), Some(r)) => Some(l.index() <= r.index()),
            _ => None,
        };
        match left_first {
            Some(true) => right_match = None,
            Some(false) => left_match = None,
            None => {}
        }

        match left_match.as_ref().or(right_match.as_ref()).map(Match::range) {
            Some(range) => {
                delim_start = range.start;
                delim_end = range.end;
            }
            None if open_tokens == 0 => break,
            None => {}
        }

        if sticky && open_tokens == 0 && delim_start > last_outer_end {
            break;
        }

        if left_match.is_some() {
            if open_tokens == 0 {
                outer_start = delim_start;
                inner_start = delim_end;
            }
            open_tokens += 1;
            log::trace!("open at {delim_start}, depth {open_tokens}");
        } else if right_match.is_some() && open_tokens > 0 {
            open_tokens -= 1;
            log::trace!("close at {delim_start}, depth {open_tokens}");
            if open_tokens == 0 {
                collector.outer(last_outer_end, outer_start, inner_start, delim_start, delim_end);
                last_outer_end = delim_end;
                if !global {
                    break;
                }
            }
        } else {
            return Err(RegexError::UnbalancedDelimiter);
        }

        // A zero-width delimiter must not be found again at the same offset
        if delim_start == delim_end {
            delim_end = step_char(subject, delim_end);
        }
    }

    if global && !sticky && last_outer_end < subject.len() {
        if let Some(names) = collector.names {
            collector.part(&names.between, last_outer_end, subject.len());
        }
    }

    Ok(collector.finish())
}

/// Sticky pattern consuming escaped characters and runs of text containing no delimiter
fn escape_scanner(escape_char: &str, left: &Regex, right: &Regex, flags: Flags) -> Result<Regex> {
    if escape_char.chars().count() > 1 {
        return Err(RegexError::EscapeConfiguration(
            "can't use more than one escape character".to_string(),
        ));
    }
    if has_numbered_backreference(right.native_source()) {
        return Err(RegexError::EscapeConfiguration(
            "can't use escape character if backreference in delimiter".to_string(),
        ));
    }
    let escaped = crate::escape(escape_char);
    let pattern = format!(
        r"(?:{escaped}[\S\s]|(?:(?!{}|{})[^{escaped}])+)+",
        left.native_source(),
        right.native_source()
    );
    Regex::from_native(&pattern, flags & Flags::NATIVE)
}

/// Whether a native pattern contains `\1`..`\9`, ignoring character classes
fn has_numbered_backreference(native: &str) -> bool {
    let bytes = native.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => match bytes.get(pos + 1) {
                Some(b'1'..=b'9') => return true,
                Some(_) => pos += 2,
                None => pos += 1,
            },
            b'[' => pos = class_end(bytes, pos),
            _ => pos += 1,
        }
    }
    false
}

/// Offset just past the class opening at `start`, or past the `[` if it never closes
fn class_end(bytes: &[u8], start: usize) -> usize {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b']' => return pos + 1,
            _ => pos += 1,
        }
    }
    start + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backreference_detection() {
        assert!(has_numbered_backreference(r"(a)\1"));
        assert!(has_numbered_backreference(r"\\\2"));
        assert!(!has_numbered_backreference(r"\0"));
        assert!(!has_numbered_backreference(r"\\1"));
        assert!(!has_numbered_backreference(r"[\1]"));
        assert!(!has_numbered_backreference(r"[\]\1]x"));
        assert!(!has_numbered_backreference(r"\}"));
    }

    #[test]
    fn test_unclosed_class_still_scanned() {
        assert!(has_numbered_backreference(r"[\1"));
    }
}
