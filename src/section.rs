//! Ordered key/value storage for a single INI section.
//!
//! [`Section`] is a thin wrapper around [`IndexMap`] keeping keys in insertion
//! order, so a document serializes deterministically. Key order carries no
//! meaning in the format itself.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// The scalar entries of one section, keyed by name.
///
/// Array keys appear here under their marked name (`items[]`), holding the
/// last element of the array.
///
/// # Examples
///
/// ```rust
/// use ini_array::Section;
///
/// let mut section = Section::new();
/// section.insert("first".to_string(), "1".to_string());
/// section.insert("second".to_string(), "2".to_string());
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = section.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section(IndexMap<String, String>);

impl Section {
    #[must_use]
    pub fn new() -> Self {
        Section(IndexMap::new())
    }

    /// Inserts a key/value pair, returning the previous value if the key existed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::Section;
    ///
    /// let mut section = Section::new();
    /// assert!(section.insert("key".to_string(), "a".to_string()).is_none());
    /// assert_eq!(section.insert("key".to_string(), "b".to_string()).as_deref(), Some("a"));
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Removes a key, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the key names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the key/value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Section {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Section(IndexMap::from_iter(iter))
    }
}
