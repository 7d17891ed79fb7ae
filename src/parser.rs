//! Line-oriented INI parsing.
//!
//! This module provides the [`Parser`] that feeds text lines into a
//! [`Document`].
//!
//! ## Overview
//!
//! Parsing is a single pass over the input with one piece of carried state:
//! the current section name, held in an explicit [`ParserState`]. Each line is
//! classified independently, in this order:
//!
//! 1. **Comment**: the first character is `;`.
//! 2. **Key/value**: the line contains `=`. The key is everything before the
//!    first `=`, the value everything after it up to an optional `;` comment.
//!    Leading and trailing spaces are trimmed from both.
//! 3. **Section header**: the line contains `[`. The name is the text between
//!    `[` and the next `]`.
//! 4. Anything else is ignored.
//!
//! Lines before the first header belong to the section named `""`.
//!
//! ## Extended dialect
//!
//! With [`Flavor::Extended`](crate::Flavor::Extended), keys ending in `[]`
//! append to an array, and headers may describe a hierarchy:
//!
//! ```rust
//! use ini_array::from_str;
//!
//! let doc = from_str("[Parent.Child]\nx = 1\n[.Leaf]\nitems[] = a\nitems[] = b\n");
//! assert_eq!(doc.all_sections(), vec!["Parent.Child", "Parent.Child.Leaf"]);
//! assert_eq!(doc.children_of("Parent").unwrap(), ["Child"]);
//! assert_eq!(doc.children_of("Parent.Child").unwrap(), ["Leaf"]);
//! assert_eq!(doc.array("Parent.Child.Leaf", "items").unwrap(), ["a", "b"]);
//! ```

use crate::address::is_marked;
use crate::Document;
use tracing::trace;

/// What a single input line was recognized as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    KeyValue,
    ArrayElement,
    Section,
    Ignored,
}

/// State carried from one line to the next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserState {
    /// Name of the section that key/value lines are stored under.
    pub section: String,
    /// Number of lines consumed so far.
    pub line: usize,
}

/// The INI line parser.
///
/// The parser holds no document of its own; every call receives the
/// [`Document`] to populate, and the document's flavor decides which
/// dialect is recognized. A fresh parser starts in the unnamed section `""`.
///
/// # Examples
///
/// ```rust
/// use ini_array::{Document, LineKind, Parser};
///
/// let mut doc = Document::new();
/// let mut parser = Parser::new();
///
/// assert_eq!(parser.parse_line(&mut doc, "; settings"), LineKind::Comment);
/// assert_eq!(parser.parse_line(&mut doc, "[Config]"), LineKind::Section);
/// assert_eq!(parser.parse_line(&mut doc, "Theme = Dark ; default"), LineKind::KeyValue);
/// assert_eq!(parser.state().section, "Config");
/// assert_eq!(doc.value("Config", "Theme").unwrap(), "Dark");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Parser {
    state: ParserState,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes parsing from a previously saved state.
    #[must_use]
    pub fn with_state(state: ParserState) -> Self {
        Parser { state }
    }

    #[must_use]
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> ParserState {
        self.state
    }

    /// Feeds every line of `input` into `doc`.
    ///
    /// Both `\n` and `\r\n` line endings are accepted.
    pub fn parse_str(&mut self, doc: &mut Document, input: &str) {
        for line in input.lines() {
            self.parse_line(doc, line);
        }
    }

    /// Classifies one line and applies it to `doc`.
    pub fn parse_line(&mut self, doc: &mut Document, line: &str) -> LineKind {
        self.state.line += 1;

        let kind = if line.starts_with(';') {
            LineKind::Comment
        } else if let Some((raw_key, rest)) = line.split_once('=') {
            let raw_value = rest.split_once(';').map_or(rest, |(value, _)| value);
            self.parse_entry(doc, trim_spaces(raw_key), trim_spaces(raw_value))
        } else if let Some(start) = line.find('[') {
            let header = &line[start + 1..];
            let header = header.split_once(']').map_or(header, |(name, _)| name);
            self.enter_section(doc, header);
            LineKind::Section
        } else {
            LineKind::Ignored
        };

        trace!(
            line = self.state.line,
            ?kind,
            section = %self.state.section,
            "parsed line"
        );
        kind
    }

    fn parse_entry(&mut self, doc: &mut Document, key: &str, value: &str) -> LineKind {
        if key.is_empty() {
            return LineKind::Ignored;
        }
        if doc.flavor().supports_arrays() && is_marked(key) {
            doc.push_array_element(&self.state.section, key, value);
            LineKind::ArrayElement
        } else {
            doc.insert_scalar(&self.state.section, key, value);
            LineKind::KeyValue
        }
    }

    fn enter_section(&mut self, doc: &mut Document, header: &str) {
        if !doc.flavor().supports_arrays() {
            self.state.section = header.to_string();
            return;
        }

        if let Some(child) = header.strip_prefix('.') {
            // relative header: [.Child] nests under the current section
            doc.connect(&self.state.section, child);
            self.state.section.push_str(header);
        } else {
            if let Some((parent, child)) = header.split_once('.') {
                doc.connect(parent, child);
            }
            self.state.section = header.to_string();
        }
    }
}

/// Trims space characters only; tabs and other whitespace are kept.
#[inline]
fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}
