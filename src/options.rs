//! Configuration options for INI documents.
//!
//! This module provides types to choose the dialect a [`Document`](crate::Document)
//! speaks:
//!
//! - [`IniOptions`]: Main configuration struct
//! - [`Flavor`]: Basic INI, or the extended dialect with arrays and dotted sections
//!
//! The flavor is fixed when a document is created and governs parsing,
//! serialization and whether array operations are available.
//!
//! ## Examples
//!
//! ```rust
//! use ini_array::{from_str_with_options, Flavor, IniOptions};
//!
//! // Basic documents treat `items[]` as an ordinary key name
//! let doc = from_str_with_options("[A]\nitems[] = 1\nitems[] = 2\n", IniOptions::basic());
//! assert_eq!(doc.flavor(), Flavor::Basic);
//! assert_eq!(doc.value("A", "items[]").unwrap(), "2");
//! assert!(!doc.is_array("A", "items"));
//! ```

/// Dialect of INI understood by a document.
///
/// - **Basic**: `key = value` pairs under plain `[section]` headers. Keys
///   carrying `[]` are ordinary names and arrays cannot be added.
/// - **Extended**: adds array keys (`key[] = element` repeated per element)
///   and section hierarchy through `[Parent.Child]` and `[.Child]` headers.
///
/// # Examples
///
/// ```rust
/// use ini_array::Flavor;
///
/// assert_eq!(Flavor::default(), Flavor::Extended);
/// assert!(Flavor::Extended.supports_arrays());
/// assert!(!Flavor::Basic.supports_arrays());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Flavor {
    Basic,
    #[default]
    Extended,
}

impl Flavor {
    /// Returns `true` if array keys and dotted sections are recognized.
    #[must_use]
    pub const fn supports_arrays(&self) -> bool {
        matches!(self, Flavor::Extended)
    }
}

/// Configuration options for INI documents.
///
/// # Examples
///
/// ```rust
/// use ini_array::{Flavor, IniOptions};
///
/// // Default: extended dialect
/// let options = IniOptions::new();
/// assert_eq!(options.flavor, Flavor::Extended);
///
/// // Plain INI only
/// let options = IniOptions::basic();
/// assert_eq!(options.flavor, Flavor::Basic);
///
/// let options = IniOptions::new().with_flavor(Flavor::Basic);
/// assert_eq!(options.flavor, Flavor::Basic);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniOptions {
    pub flavor: Flavor,
}

impl IniOptions {
    /// Creates default options (extended dialect).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for plain INI without arrays or section hierarchy.
    #[must_use]
    pub fn basic() -> Self {
        IniOptions {
            flavor: Flavor::Basic,
        }
    }

    /// Creates options for the extended dialect. Same as [`IniOptions::new`].
    #[must_use]
    pub fn extended() -> Self {
        IniOptions {
            flavor: Flavor::Extended,
        }
    }

    /// Sets the dialect.
    #[must_use]
    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }
}
