//! The in-memory INI document.
//!
//! A [`Document`] owns every section, the array entries of the extended
//! dialect, and the section hierarchy recorded while parsing dotted headers.
//! All query and mutation operations live here.
//!
//! ## Addressing
//!
//! Most operations come in two forms: one taking `section` and `key`
//! separately, and an `_at` form taking a composite address `"section/key"`
//! (see [`crate::address`]).
//!
//! ## Arrays
//!
//! An array is stored under its base name (`items`) and is accompanied by a
//! *scalar shadow entry* in the owning section under the marked name
//! (`items[]`) that holds the last element. The shadow is what
//! [`Document::all_keys`] reports, and the serializer expands it back into one
//! line per element.
//!
//! ```rust
//! use ini_array::Document;
//!
//! let mut doc = Document::new();
//! doc.add_array("Hobby", "items", &["Running", "Football"]).unwrap();
//!
//! assert!(doc.is_array("Hobby", "items"));
//! assert_eq!(doc.size_of_array("Hobby", "items").unwrap(), 2);
//! assert_eq!(doc.value_of_array("Hobby", "items", 1).unwrap(), "Football");
//! assert_eq!(doc.all_keys("Hobby").unwrap(), vec!["items[]"]);
//! ```
//!
//! ## Failure atomicity
//!
//! Every operation checks all of its preconditions before touching the
//! document, so an `Err` always means nothing changed.

use crate::address::{get_array_name, is_marked, shadow_name, split_address};
use crate::{Error, Flavor, IniOptions, Result, Section, Value};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// An INI document: sections of scalar keys, plus arrays and section hierarchy
/// in the extended dialect.
///
/// Two documents compare equal when they hold the same sections, scalar values
/// and arrays, regardless of order. The flavor, the recorded file path and the
/// section hierarchy are not compared.
///
/// # Examples
///
/// ```rust
/// use ini_array::{Document, Error};
///
/// let mut doc = Document::new();
/// doc.add_key("Config", "Theme", "Dark").unwrap();
///
/// let err = doc.add_key("Config", "Theme", "Light").unwrap_err();
/// assert!(matches!(err, Error::KeyAlreadyExist { .. }));
/// assert_eq!(doc.value("Config", "Theme").unwrap(), "Dark");
/// assert!(doc.include("Config/Theme"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    sections: IndexMap<String, Section>,
    arrays: IndexMap<String, IndexMap<String, Vec<String>>>, // section -> base name -> elements
    connections: IndexMap<String, Vec<String>>,              // parent -> child suffixes
    options: IniOptions,
    pub(crate) file_path: Option<PathBuf>,
}

impl Document {
    /// Creates an empty document in the extended dialect.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::{Document, Flavor, IniOptions};
    ///
    /// let doc = Document::with_options(IniOptions::basic());
    /// assert_eq!(doc.flavor(), Flavor::Basic);
    /// assert!(doc.is_empty());
    /// ```
    #[must_use]
    pub fn with_options(options: IniOptions) -> Self {
        Document {
            options,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn flavor(&self) -> Flavor {
        self.options.flavor
    }

    #[must_use]
    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns an iterator over the sections, in storage order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> + '_ {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Checks whether a section (`"section"`) or a key (`"section/key"`) exists.
    ///
    /// Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::from_str;
    ///
    /// let doc = from_str("[General]\nversion = 1.0\n");
    /// assert!(doc.include("General"));
    /// assert!(doc.include("General/version"));
    /// assert!(!doc.include("General/name"));
    /// assert!(!doc.include("Other"));
    /// ```
    #[must_use]
    pub fn include(&self, address: &str) -> bool {
        match split_address(address) {
            Some((section, key)) => self.include_key(section, key),
            None => self.sections.contains_key(address),
        }
    }

    /// Checks whether `key` exists in `section`. Never fails.
    #[must_use]
    pub fn include_key(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|entries| entries.contains_key(key))
    }

    /// Returns the scalar value of `key` in `section`.
    ///
    /// # Errors
    ///
    /// - [`Error::KeyNotFound`] if the section or the key does not exist.
    /// - [`Error::KeyIsArray`] if the key denotes an array; use
    ///   [`Document::value_of_array`] instead.
    pub fn value(&self, section: &str, key: &str) -> Result<&str> {
        let value = self
            .sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .ok_or_else(|| Error::key_not_found(section, key))?;
        if self.is_array(section, key) {
            return Err(Error::key_is_array(section, key));
        }
        Ok(value)
    }

    /// Returns the scalar value at a composite address such as `"Config/path"`.
    ///
    /// # Errors
    ///
    /// Same as [`Document::value`]; an address without `/` is [`Error::KeyNotFound`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::from_str;
    ///
    /// let doc = from_str("[General]\nversion = 1.0\n");
    /// assert_eq!(doc.value_at("General/version").unwrap(), "1.0");
    /// assert!(doc.value_at("General").is_err());
    /// ```
    pub fn value_at(&self, address: &str) -> Result<&str> {
        let (section, key) =
            split_address(address).ok_or_else(|| Error::key_not_found("", address))?;
        self.value(section, key)
    }

    /// Replaces the scalar value of an existing key.
    ///
    /// New keys are created with [`Document::add_key`].
    ///
    /// # Errors
    ///
    /// Same as [`Document::value`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.add_key("Config", "save_passwd", "false").unwrap();
    /// doc.set_value("Config", "save_passwd", "true").unwrap();
    /// assert_eq!(doc.value("Config", "save_passwd").unwrap(), "true");
    /// ```
    pub fn set_value(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        self.value(section, key)?;
        if let Some(slot) = self
            .sections
            .get_mut(section)
            .and_then(|entries| entries.get_mut(key))
        {
            *slot = value.to_string();
        }
        Ok(())
    }

    /// Replaces the scalar value at a composite address.
    ///
    /// # Errors
    ///
    /// Same as [`Document::value_at`].
    pub fn set_value_at(&mut self, address: &str, value: &str) -> Result<()> {
        let (section, key) =
            split_address(address).ok_or_else(|| Error::key_not_found("", address))?;
        self.set_value(section, key, value)
    }

    /// Looks up a key without failing, returning an array view for array keys.
    ///
    /// A marked key (`items[]`) with an array entry yields [`Value::Array`];
    /// every other stored key yields [`Value::Scalar`].
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<Value<'_>> {
        let scalar = self.sections.get(section)?.get(key)?;
        Some(self.resolve(section, key, scalar))
    }

    pub(crate) fn resolve<'a>(&'a self, section: &str, key: &str, scalar: &'a str) -> Value<'a> {
        if is_marked(key) {
            if let Some(items) = self.array_entry(section, key) {
                return Value::Array(items.as_slice());
            }
        }
        Value::Scalar(scalar)
    }

    /// Adds a new scalar key, creating the section if needed.
    ///
    /// # Errors
    ///
    /// - [`Error::CanNotArray`] if `key` carries the `[]` marker.
    /// - [`Error::KeyAlreadyExist`] if the key already exists in the section.
    pub fn add_key(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        if is_marked(key) {
            return Err(Error::can_not_array(key));
        }
        if self.include_key(section, key) {
            return Err(Error::key_already_exist(section, key));
        }
        self.insert_scalar(section, key, value);
        Ok(())
    }

    /// Removes a key. A section left without keys is removed as well.
    ///
    /// Removing an array's shadow key (`items[]`) also removes the array.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the section or key does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.add_key("Profile", "Name", "John").unwrap();
    /// doc.remove_key("Profile", "Name").unwrap();
    /// assert!(doc.all_sections().is_empty());
    /// ```
    pub fn remove_key(&mut self, section: &str, key: &str) -> Result<()> {
        let removed = self
            .sections
            .get_mut(section)
            .and_then(|entries| entries.remove(key));
        if removed.is_none() {
            return Err(Error::key_not_found(section, key));
        }
        if is_marked(key) {
            self.remove_array_entry(section, get_array_name(key));
        }
        self.prune_section(section);
        Ok(())
    }

    /// Returns the names of all sections, in storage order.
    #[must_use]
    pub fn all_sections(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    /// Returns the key names of a section, including marked array keys verbatim.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the section does not exist.
    pub fn all_keys(&self, section: &str) -> Result<Vec<String>> {
        self.sections
            .get(section)
            .map(|entries| entries.keys().cloned().collect())
            .ok_or_else(|| Error::section_not_found(section))
    }

    /// Returns the child suffixes recorded for `parent` by dotted (`[Parent.Child]`)
    /// and relative (`[.Child]`) headers, in the order they were parsed.
    ///
    /// The hierarchy is bookkeeping only: no other operation reads it, and
    /// section names themselves are never decomposed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::from_str;
    ///
    /// let doc = from_str("[Server.Http]\nport = 80\n[.Tls]\nport = 443\n");
    /// assert_eq!(doc.children_of("Server").unwrap(), ["Http"]);
    /// assert_eq!(doc.children_of("Server.Http").unwrap(), ["Tls"]);
    /// assert!(doc.include("Server.Http.Tls/port"));
    /// ```
    #[must_use]
    pub fn children_of(&self, parent: &str) -> Option<&[String]> {
        self.connections.get(parent).map(Vec::as_slice)
    }

    /// Returns `true` if an array exists for `key` (marked or base name) in `section`.
    #[must_use]
    pub fn is_array(&self, section: &str, key: &str) -> bool {
        self.array_entry(section, key).is_some()
    }

    /// Composite-address form of [`Document::is_array`].
    #[must_use]
    pub fn is_array_at(&self, address: &str) -> bool {
        split_address(address).is_some_and(|(section, key)| self.is_array(section, key))
    }

    /// Returns all elements of an array.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotArray`] if no array exists for `key`.
    pub fn array(&self, section: &str, key: &str) -> Result<&[String]> {
        self.array_entry(section, key)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::key_not_array(section, key))
    }

    /// Returns the number of elements of an array.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotArray`] if no array exists for `key`.
    pub fn size_of_array(&self, section: &str, key: &str) -> Result<usize> {
        self.array(section, key).map(<[String]>::len)
    }

    /// Composite-address form of [`Document::size_of_array`].
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotArray`] if the address does not name an array.
    pub fn size_of_array_at(&self, address: &str) -> Result<usize> {
        let (section, key) =
            split_address(address).ok_or_else(|| Error::key_not_array("", address))?;
        self.size_of_array(section, key)
    }

    /// Returns the element at `index` of an array.
    ///
    /// # Errors
    ///
    /// - [`Error::KeyNotArray`] if no array exists for `key`.
    /// - [`Error::IndexOutOfBounds`] if `index >= size_of_array`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::{Document, Error};
    ///
    /// let mut doc = Document::new();
    /// doc.add_array("Hobby", "items", &["Running"]).unwrap();
    /// assert_eq!(doc.value_of_array("Hobby", "items[]", 0).unwrap(), "Running");
    /// assert_eq!(
    ///     doc.value_of_array("Hobby", "items", 3),
    ///     Err(Error::IndexOutOfBounds { index: 3, len: 1 })
    /// );
    /// ```
    pub fn value_of_array(&self, section: &str, key: &str, index: usize) -> Result<&str> {
        let items = self.array(section, key)?;
        items
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| Error::index_out_of_bounds(index, items.len()))
    }

    /// Composite-address form of [`Document::value_of_array`].
    ///
    /// # Errors
    ///
    /// Same as [`Document::value_of_array`].
    pub fn value_of_array_at(&self, address: &str, index: usize) -> Result<&str> {
        let (section, key) =
            split_address(address).ok_or_else(|| Error::key_not_array("", address))?;
        self.value_of_array(section, key, index)
    }

    /// Adds an array under the base name of `key`, creating the section if needed.
    ///
    /// The section also receives the scalar shadow entry `key[]` holding the
    /// last element.
    ///
    /// # Errors
    ///
    /// - [`Error::CanNotArray`] if the document uses [`Flavor::Basic`].
    /// - [`Error::EmptyArray`] if `items` is empty.
    /// - [`Error::KeyAlreadyExist`] if `key` or `key[]` already exists in the section.
    pub fn add_array<S: AsRef<str>>(&mut self, section: &str, key: &str, items: &[S]) -> Result<()> {
        if !self.options.flavor.supports_arrays() {
            return Err(Error::can_not_array(key));
        }
        let base = get_array_name(key);
        let Some(last) = items.last() else {
            return Err(Error::empty_array(section, base));
        };
        let shadow = shadow_name(base);
        if self.include_key(section, &shadow)
            || self.include_key(section, base)
            || self.is_array(section, base)
        {
            return Err(Error::key_already_exist(section, base));
        }

        self.insert_scalar(section, &shadow, last.as_ref());
        self.arrays.entry(section.to_string()).or_default().insert(
            base.to_string(),
            items.iter().map(|item| item.as_ref().to_string()).collect(),
        );
        Ok(())
    }

    /// Removes an array together with its shadow entry. A section left without
    /// keys is removed as well.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotArray`] if no array exists for `key`.
    pub fn remove_array(&mut self, section: &str, key: &str) -> Result<()> {
        let base = get_array_name(key);
        if !self.is_array(section, base) {
            return Err(Error::key_not_array(section, key));
        }
        self.remove_array_entry(section, base);
        if let Some(entries) = self.sections.get_mut(section) {
            entries.remove(&shadow_name(base));
        }
        self.prune_section(section);
        Ok(())
    }

    pub(crate) fn array_entry(&self, section: &str, key: &str) -> Option<&Vec<String>> {
        self.arrays.get(section)?.get(get_array_name(key))
    }

    pub(crate) fn insert_scalar(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Appends one parsed `key[] = value` line: the element goes to the array
    /// and overwrites the shadow entry.
    pub(crate) fn push_array_element(&mut self, section: &str, key: &str, value: &str) {
        self.arrays
            .entry(section.to_string())
            .or_default()
            .entry(get_array_name(key).to_string())
            .or_default()
            .push(value.to_string());
        self.insert_scalar(section, key, value);
    }

    pub(crate) fn connect(&mut self, parent: &str, child: &str) {
        self.connections
            .entry(parent.to_string())
            .or_default()
            .push(child.to_string());
    }

    fn remove_array_entry(&mut self, section: &str, base: &str) {
        if let Some(entries) = self.arrays.get_mut(section) {
            entries.shift_remove(base);
            if entries.is_empty() {
                self.arrays.shift_remove(section);
            }
        }
    }

    fn prune_section(&mut self, section: &str) {
        if self.sections.get(section).is_some_and(Section::is_empty) {
            self.sections.shift_remove(section);
        }
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections && self.arrays == other.arrays
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, section) in &self.sections {
            map.serialize_entry(
                name,
                &SectionEntries {
                    document: self,
                    name,
                    section,
                },
            )?;
        }
        map.end()
    }
}

/// Serializes one section with array keys expanded to sequences.
struct SectionEntries<'a> {
    document: &'a Document,
    name: &'a str,
    section: &'a Section,
}

impl Serialize for SectionEntries<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.section.len()))?;
        for (key, scalar) in self.section {
            map.serialize_entry(key, &self.document.resolve(self.name, key, scalar))?;
        }
        map.end()
    }
}
