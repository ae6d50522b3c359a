//! Match results and the searches that produce them
//!
//! A [`Match`] carries every group's span plus the capture names of the pattern that made
//! it, so groups can be read by position or by name. Searches start at an arbitrary byte
//! offset and can be pinned to it (sticky).

use std::ops::{Index, Range};
use std::sync::Arc;

use crate::{error::Result, Regex};

/// One successful match and its capture groups
#[derive(Debug, Clone)]
pub struct Match<'t> {
    input: &'t str,
    /// Span of each group; index 0 is the whole match
    groups: Vec<Option<(usize, usize)>>,
    names: Option<Arc<[Option<String>]>>,
}

impl<'t> Match<'t> {
    fn new(
        input: &'t str,
        groups: Vec<Option<(usize, usize)>>,
        names: Option<Arc<[Option<String>]>>,
    ) -> Self {
        Self {
            input,
            groups,
            names,
        }
    }

    /// Byte offset where the match starts
    pub fn index(&self) -> usize {
        self.range().start
    }

    /// Byte offset just past the match
    pub fn end(&self) -> usize {
        self.range().end
    }

    /// Span of the whole match
    pub fn range(&self) -> Range<usize> {
        match self.groups.first().copied().flatten() {
            Some((start, end)) => start..end,
            None => 0..0,
        }
    }

    /// Matched text
    pub fn as_str(&self) -> &'t str {
        &self.input[self.range()]
    }

    /// Whether the match is zero-width
    pub fn is_empty(&self) -> bool {
        self.index() == self.end()
    }

    /// Text of group `index` (0 is the whole match); `None` if it did not participate
    pub fn get(&self, index: usize) -> Option<&'t str> {
        self.group_range(index).map(|range| &self.input[range])
    }

    /// Span of group `index`
    pub fn group_range(&self, index: usize) -> Option<Range<usize>> {
        self.groups
            .get(index)
            .copied()
            .flatten()
            .map(|(start, end)| start..end)
    }

    /// Group number of the group called `name`
    pub fn name_index(&self, name: &str) -> Option<usize> {
        self.names
            .as_deref()?
            .iter()
            .position(|slot| slot.as_deref() == Some(name))
            .map(|slot| slot + 1)
    }

    /// Text of the group called `name`
    pub fn name(&self, name: &str) -> Option<&'t str> {
        self.get(self.name_index(name)?)
    }

    /// Every named group with its text, in group order
    pub fn named(&self) -> Vec<(&str, Option<&'t str>)> {
        let Some(names) = self.names.as_deref() else {
            return Vec::new();
        };
        names
            .iter()
            .enumerate()
            .filter_map(|(slot, name)| Some((name.as_deref()?, self.get(slot + 1))))
            .collect()
    }

    /// Number of groups including the whole match
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Text of every group, whole match first
    pub fn iter(&self) -> impl Iterator<Item = Option<&'t str>> + '_ {
        (0..self.groups.len()).map(move |i| self.get(i))
    }

    /// The searched text
    pub fn input(&self) -> &'t str {
        self.input
    }

    /// Text before the match
    pub fn before(&self) -> &'t str {
        &self.input[..self.index()]
    }

    /// Text after the match
    pub fn after(&self) -> &'t str {
        &self.input[self.end()..]
    }
}

impl<'t> Index<usize> for Match<'t> {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        self.get(index)
            .unwrap_or_else(|| panic!("no group at index '{index}'"))
    }
}

impl<'t> Index<&str> for Match<'t> {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        self.name(name)
            .unwrap_or_else(|| panic!("no group named '{name}'"))
    }
}

/// Smallest char boundary at or after `pos`
pub(crate) fn ceil_char_boundary(text: &str, mut pos: usize) -> usize {
    while pos < text.len() && !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

/// Offset one character past `pos`; past the end of `text` when `pos` is already there
pub(crate) fn step_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(pos + 1, |ch| pos + ch.len_utf8())
}

impl Regex {
    /// Search `subject` from byte offset `pos`
    ///
    /// With `sticky` the match must start exactly at `pos`. The cursor is neither read nor
    /// changed. An offset past the end of `subject` never matches.
    pub fn exec_at<'t>(
        &self,
        subject: &'t str,
        pos: usize,
        sticky: bool,
    ) -> Result<Option<Match<'t>>> {
        if pos > subject.len() {
            return Ok(None);
        }
        let pos = ceil_char_boundary(subject, pos);
        let Some(captures) = self.native().captures_from_pos(subject, pos)? else {
            return Ok(None);
        };
        let groups = (0..captures.len())
            .map(|i| captures.get(i).map(|m| (m.start(), m.end())))
            .collect();
        let found = Match::new(subject, groups, self.shared_capture_names());
        if sticky && found.index() != pos {
            return Ok(None);
        }
        Ok(Some(found))
    }

    /// First match anywhere in `subject`
    pub fn find<'t>(&self, subject: &'t str) -> Result<Option<Match<'t>>> {
        self.exec_at(subject, 0, false)
    }

    /// Whether the pattern matches anywhere in `subject`
    pub fn is_match(&self, subject: &str) -> Result<bool> {
        Ok(self.native().is_match(subject)?)
    }

    /// Stateful search
    ///
    /// Global and sticky patterns search from `last_index` and move it past the match, or
    /// back to zero when nothing matches. Other patterns search from the start and leave
    /// the cursor alone. Sticky patterns only match at the cursor.
    pub fn exec<'t>(&mut self, subject: &'t str) -> Result<Option<Match<'t>>> {
        let stateful = self.global() || self.sticky();
        let start = if stateful { self.last_index() } else { 0 };
        let found = self.exec_at(subject, start, self.sticky())?;
        if stateful {
            self.set_last_index(found.as_ref().map_or(0, Match::end));
        }
        Ok(found)
    }

    /// Stateful match test, with the cursor rules of [`Regex::exec`]
    pub fn test(&mut self, subject: &str) -> Result<bool> {
        Ok(self.exec(subject)?.is_some())
    }

    /// Run `callback` on every match, threading `context` through and returning it
    ///
    /// The callback receives the match, its ordinal and the subject. Zero-width matches
    /// advance the search by one character. The cursor and the `g` flag are ignored.
    pub fn for_each_match<'t, C, F>(
        &self,
        subject: &'t str,
        mut context: C,
        mut callback: F,
    ) -> Result<C>
    where
        F: FnMut(&mut C, &Match<'t>, usize, &'t str),
    {
        let mut pos = 0;
        let mut ordinal = 0;
        while let Some(found) = self.exec_at(subject, pos, false)? {
            callback(&mut context, &found, ordinal, subject);
            ordinal += 1;
            pos = if found.is_empty() {
                step_char(subject, found.end())
            } else {
                found.end()
            };
        }
        Ok(context)
    }

    /// Every match in `subject`, in order
    pub fn find_all<'t>(&self, subject: &'t str) -> Result<Vec<Match<'t>>> {
        self.for_each_match(subject, Vec::new(), |all, found, _, _| all.push(found.clone()))
    }

    /// Split `subject` around matches
    ///
    /// Captured groups of each separator are spliced into the output; a group that did not
    /// participate yields `None`. An empty match at the position where the previous piece
    /// ended does not split, and a match at the very end contributes no groups. At most
    /// `limit` items are returned.
    pub fn split<'t>(
        &self,
        subject: &'t str,
        limit: Option<usize>,
    ) -> Result<Vec<Option<&'t str>>> {
        let limit = limit.unwrap_or(usize::MAX);
        let mut output: Vec<Option<&'t str>> = Vec::new();
        if limit == 0 {
            return Ok(output);
        }

        let mut last_end = 0;
        let mut last_len: Option<usize> = None;
        let mut pos = 0;
        while pos <= subject.len() {
            let Some(found) = self.exec_at(subject, pos, false)? else {
                break;
            };
            if found.end() > last_end {
                output.push(Some(&subject[last_end..found.index()]));
                if found.index() < subject.len() {
                    output.extend(found.iter().skip(1));
                }
                last_len = Some(found.as_str().len());
                last_end = found.end();
                if output.len() >= limit {
                    break;
                }
            }
            pos = if found.is_empty() {
                step_char(subject, found.end())
            } else {
                found.end()
            };
        }

        if last_end == subject.len() {
            if !self.is_match("")? || last_len.is_some_and(|len| len > 0) {
                output.push(Some(""));
            }
        } else {
            output.push(Some(&subject[last_end..]));
        }
        output.truncate(limit);
        Ok(output)
    }
}

/// Which part of a match a [`ChainLink`] passes on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backref {
    Index(usize),
    Name(String),
}

/// One step of [`match_chain`]
#[derive(Debug, Clone)]
pub struct ChainLink<'r> {
    regex: &'r Regex,
    backref: Option<Backref>,
}

impl<'r> ChainLink<'r> {
    /// Pass on whole matches of `regex`
    pub fn new(regex: &'r Regex) -> Self {
        Self {
            regex,
            backref: None,
        }
    }

    /// Pass on group `index` of each match instead
    pub fn group(mut self, index: usize) -> Self {
        self.backref = Some(Backref::Index(index));
        self
    }

    /// Pass on the group called `name` of each match instead
    pub fn named(mut self, name: &str) -> Self {
        self.backref = Some(Backref::Name(name.to_string()));
        self
    }

    fn value_of<'t>(&self, found: &Match<'t>) -> &'t str {
        let value = match &self.backref {
            None => found.get(0),
            Some(Backref::Index(index)) => found.get(*index),
            Some(Backref::Name(name)) => found.name(name),
        };
        value.unwrap_or("")
    }
}

impl<'r> From<&'r Regex> for ChainLink<'r> {
    fn from(regex: &'r Regex) -> Self {
        Self::new(regex)
    }
}

/// Match within the results of the previous step, for each link in turn
///
/// Every match of a link is searched by the next one. Returns the values produced by the
/// last link, or an empty list as soon as a step finds nothing.
pub fn match_chain<'t>(subject: &'t str, chain: &[ChainLink<'_>]) -> Result<Vec<&'t str>> {
    let mut values = vec![subject];
    for (level, link) in chain.iter().enumerate() {
        let mut matches = Vec::new();
        for &value in &values {
            matches = link
                .regex
                .for_each_match(value, matches, |acc, found, _, _| acc.push(link.value_of(found)))?;
        }
        log::trace!("match chain level {level} produced {} values", matches.len());
        if matches.is_empty() {
            return Ok(matches);
        }
        values = matches;
    }
    Ok(values)
}
