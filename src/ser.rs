//! INI serialization.
//!
//! This module provides the [`Serializer`] that turns a [`Document`] back
//! into text.
//!
//! ## Overview
//!
//! Each section is written as a `[name]` header followed by one
//! `key = value` line per key and a blank line. Array keys are expanded into
//! one `key[] = element` line per element, which is exactly what the parser
//! reads back as an array. Sections and keys are written in storage order,
//! which is not necessarily the order of the text the document was parsed
//! from.
//!
//! ```rust
//! use ini_array::{to_string, Document};
//!
//! let mut doc = Document::new();
//! doc.add_key("Profile", "Name", "John").unwrap();
//! doc.add_array("Hobby", "items", &["Running", "Football"]).unwrap();
//!
//! assert_eq!(
//!     to_string(&doc),
//!     "[Profile]\nName = John\n\n[Hobby]\nitems[] = Running\nitems[] = Football\n\n"
//! );
//! ```
//!
//! Two names are written with extra care so that they read back unchanged.
//! In the extended dialect a section name starting with `.` would otherwise
//! be read as relative to the previous header, so it is preceded by an empty
//! `[]` header that resets the current section. A key starting with `;` is
//! indented by one space so the line is not taken for a comment.
//!
//! Values are written verbatim. A value with leading or trailing spaces, a
//! `;`, or a line break does not survive a round trip, because the parser
//! trims spaces and treats `;` as the start of a comment.

use crate::{Document, Section, Value};
use std::fmt;

/// The INI serializer.
///
/// # Examples
///
/// ```rust
/// use ini_array::{from_str, Serializer};
///
/// let doc = from_str("[A]\nx = 1\n");
/// let mut serializer = Serializer::new();
/// serializer.serialize_document(&doc);
/// assert_eq!(serializer.into_inner(), "[A]\nx = 1\n\n");
/// ```
#[derive(Debug, Default)]
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends every section of `doc` to the output.
    pub fn serialize_document(&mut self, doc: &Document) {
        for (name, section) in doc.sections() {
            self.write_section(doc, name, section);
        }
    }

    fn write_section(&mut self, doc: &Document, name: &str, section: &Section) {
        if name.starts_with('.') && doc.flavor().supports_arrays() {
            // an empty header resets the parser, so `[.x]` resolves to `.x`
            self.output.push_str("[]\n");
        }
        self.output.push('[');
        self.output.push_str(name);
        self.output.push_str("]\n");

        for (key, scalar) in section {
            match doc.resolve(name, key, scalar) {
                Value::Array(items) => {
                    for element in items {
                        self.write_entry(key, element);
                    }
                }
                Value::Scalar(value) => self.write_entry(key, value),
            }
        }

        self.output.push('\n');
    }

    #[inline]
    fn write_entry(&mut self, key: &str, value: &str) {
        if key.starts_with(';') {
            self.output.push(' ');
        }
        self.output.push_str(key);
        self.output.push_str(" = ");
        self.output.push_str(value);
        self.output.push('\n');
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = Serializer::new();
        serializer.serialize_document(self);
        f.write_str(&serializer.into_inner())
    }
}
