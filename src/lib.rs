//! # ini_array
//!
//! Parse, query, mutate and write INI documents, including an extended
//! dialect with array-valued keys and dotted section names.
//!
//! ## Key Features
//!
//! - **Arrays**: repeated `key[] = element` lines form an ordered list
//! - **Section hierarchy**: `[Parent.Child]` and relative `[.Child]` headers
//! - **Addressing**: every key can be named as `"section/key"`
//! - **Atomic mutations**: a failed operation never leaves a half-applied change
//! - **Serde view**: a [`Document`] serializes to any serde format as nested maps
//!
//! ## Quick Start
//!
//! ```rust
//! use ini_array::{from_str, to_string};
//!
//! let doc = from_str("[Profile]\nName = John\nAge = 25\n");
//!
//! assert_eq!(doc.all_sections(), vec!["Profile"]);
//! assert_eq!(doc.all_keys("Profile").unwrap(), vec!["Name", "Age"]);
//! assert_eq!(doc.value("Profile", "Name").unwrap(), "John");
//!
//! assert_eq!(to_string(&doc), "[Profile]\nName = John\nAge = 25\n\n");
//! ```
//!
//! ### Editing
//!
//! ```rust
//! use ini_array::{Document, Error};
//!
//! let mut doc = Document::new();
//! doc.add_key("Config", "Theme", "Dark").unwrap();
//! doc.add_array("Hobby", "items", &["Running", "Football"]).unwrap();
//!
//! assert!(matches!(
//!     doc.add_key("Config", "Theme", "Light"),
//!     Err(Error::KeyAlreadyExist { .. })
//! ));
//! assert_eq!(doc.value_of_array("Hobby", "items", 1).unwrap(), "Football");
//!
//! doc.remove_array("Hobby", "items").unwrap();
//! assert_eq!(doc.all_sections(), vec!["Config"]);
//! ```
//!
//! ## Format
//!
//! See the [`format`] module for the full description of the text format.
//!
//! ## Concurrency
//!
//! A [`Document`] is a plain value with no internal locking. Share it between
//! threads behind a `Mutex` or `RwLock`.

pub mod address;
pub mod document;
pub mod error;
mod file;
pub mod format;
pub mod macros;
pub mod options;
pub mod parser;
pub mod section;
pub mod ser;
pub mod value;

pub use address::get_array_name;
pub use document::Document;
pub use error::{Error, Result};
pub use options::{Flavor, IniOptions};
pub use parser::{LineKind, Parser, ParserState};
pub use section::Section;
pub use ser::Serializer;
pub use value::Value;

use std::io;

/// Serialize a document to INI text.
///
/// # Examples
///
/// ```rust
/// use ini_array::{to_string, Document};
///
/// let mut doc = Document::new();
/// doc.add_key("Config", "Theme", "Dark").unwrap();
/// assert_eq!(to_string(&doc), "[Config]\nTheme = Dark\n\n");
/// ```
#[must_use]
pub fn to_string(doc: &Document) -> String {
    let mut serializer = Serializer::new();
    serializer.serialize_document(doc);
    serializer.into_inner()
}

/// Serialize a document to a writer as INI text.
///
/// # Examples
///
/// ```rust
/// use ini_array::{to_writer, Document};
///
/// let mut doc = Document::new();
/// doc.add_key("A", "x", "1").unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[A]\nx = 1\n\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W>(mut writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(to_string(doc).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parse INI text into an extended-dialect document.
///
/// Parsing never fails: lines that match no rule are ignored.
///
/// # Examples
///
/// ```rust
/// use ini_array::from_str;
///
/// let doc = from_str("[Hobby]\nitems[] = Running\nitems[] = Football\n");
/// assert!(doc.is_array("Hobby", "items"));
/// assert_eq!(doc.size_of_array("Hobby", "items").unwrap(), 2);
/// ```
#[must_use]
pub fn from_str(s: &str) -> Document {
    from_str_with_options(s, IniOptions::default())
}

/// Parse INI text into a document of the given flavor.
#[must_use]
pub fn from_str_with_options(s: &str, options: IniOptions) -> Document {
    let mut doc = Document::with_options(options);
    Parser::new().parse_str(&mut doc, s);
    doc
}

/// Parse an extended-dialect document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use ini_array::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[A]\nx = 1\n")).unwrap();
/// assert_eq!(doc.value("A", "x").unwrap(), "1");
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
pub fn from_reader<R>(reader: R) -> Result<Document>
where
    R: io::Read,
{
    from_reader_with_options(reader, IniOptions::default())
}

/// Parse a document of the given flavor from an I/O stream.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
pub fn from_reader_with_options<R>(mut reader: R, options: IniOptions) -> Result<Document>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(from_str_with_options(&string, options))
}
