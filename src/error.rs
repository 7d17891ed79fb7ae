//! Error types for INI document operations.
//!
//! Every fallible operation on a [`Document`](crate::Document) returns
//! [`Result<T>`], and every precondition is checked before anything is
//! mutated, so a failed call leaves the document exactly as it was.
//!
//! ## Error Categories
//!
//! - **Lookup errors**: the section or key does not exist ([`Error::KeyNotFound`])
//! - **Conflicts**: the target of an insertion already exists ([`Error::KeyAlreadyExist`])
//! - **Kind mismatches**: scalar operation on an array key or the reverse
//!   ([`Error::KeyIsArray`], [`Error::KeyNotArray`], [`Error::CanNotArray`])
//! - **Array access**: [`Error::IndexOutOfBounds`], [`Error::EmptyArray`]
//! - **I/O errors**: a file could not be opened or written ([`Error::FileLoaded`])
//!
//! ## Examples
//!
//! ```rust
//! use ini_array::{Document, Error};
//!
//! let doc = Document::new();
//! let err = doc.value("Profile", "Name").unwrap_err();
//! assert!(matches!(err, Error::KeyNotFound { .. }));
//! assert!(err.to_string().contains("Profile/Name"));
//! ```

use thiserror::Error;

/// Represents all possible errors raised while querying, mutating, loading or
/// saving an INI document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested section or key does not exist.
    ///
    /// An empty `key` means the section itself is missing.
    #[error("{}", not_found_message(.section, .key))]
    KeyNotFound { section: String, key: String },

    /// The key (or array) to be added already exists.
    #[error("key already exists: {}", join_address(.section, .key))]
    KeyAlreadyExist { section: String, key: String },

    /// An array-only operation was applied to a key that is not an array.
    #[error("key is not an array: {}", join_address(.section, .key))]
    KeyNotArray { section: String, key: String },

    /// A scalar-only operation was applied to an array key.
    #[error("key is an array: {}", join_address(.section, .key))]
    KeyIsArray { section: String, key: String },

    /// The key name carries the `[]` marker, or the document does not support arrays.
    #[error("key can not be an array: {key}")]
    CanNotArray { key: String },

    /// An array element was requested past the end of the array.
    #[error("array index {index} out of bounds (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// An array was added with no elements.
    #[error("array {section}/{key} must have at least one element")]
    EmptyArray { section: String, key: String },

    /// A file could not be opened, read, created or written.
    #[error("file {path:?} does not exist or does not have read/write permissions: {reason}")]
    FileLoaded { path: String, reason: String },

    /// I/O error while reading from or writing to a stream.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a [`Error::KeyNotFound`] for `section/key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::Error;
    ///
    /// let err = Error::key_not_found("Config", "theme");
    /// assert_eq!(err.to_string(), "key not found: Config/theme");
    /// ```
    pub fn key_not_found(section: &str, key: &str) -> Self {
        Error::KeyNotFound {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    /// Creates a [`Error::KeyNotFound`] for a missing section.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::Error;
    ///
    /// let err = Error::section_not_found("Profile");
    /// assert_eq!(err.to_string(), "section not found: Profile");
    /// ```
    pub fn section_not_found(section: &str) -> Self {
        Error::key_not_found(section, "")
    }

    /// Creates a [`Error::KeyAlreadyExist`] for `section/key`.
    pub fn key_already_exist(section: &str, key: &str) -> Self {
        Error::KeyAlreadyExist {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    /// Creates a [`Error::KeyNotArray`] for `section/key`.
    pub fn key_not_array(section: &str, key: &str) -> Self {
        Error::KeyNotArray {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    /// Creates a [`Error::KeyIsArray`] for `section/key`.
    pub fn key_is_array(section: &str, key: &str) -> Self {
        Error::KeyIsArray {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    pub fn can_not_array(key: &str) -> Self {
        Error::CanNotArray {
            key: key.to_string(),
        }
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds { index, len }
    }

    pub fn empty_array(section: &str, key: &str) -> Self {
        Error::EmptyArray {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    /// Creates a [`Error::FileLoaded`] for `path`, keeping the underlying reason.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::Error;
    ///
    /// let err = Error::file_loaded("missing.ini", "No such file or directory");
    /// assert!(err.to_string().contains("missing.ini"));
    /// ```
    pub fn file_loaded<T: std::fmt::Display>(path: &str, reason: T) -> Self {
        Error::FileLoaded {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

fn not_found_message(section: &str, key: &str) -> String {
    if key.is_empty() {
        format!("section not found: {}", section)
    } else {
        format!("key not found: {}", join_address(section, key))
    }
}

/// Formats `section/key`, or just `key` when no section was given.
fn join_address(section: &str, key: &str) -> String {
    if section.is_empty() {
        key.to_string()
    } else {
        format!("{}/{}", section, key)
    }
}
