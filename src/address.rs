//! Composite addresses and the array marker.
//!
//! A key can be named by two strings (`section`, `key`) or by a single
//! composite address `"section/key"`. The address is split at the first `/`,
//! so a section name containing `/` cannot be addressed this way; use the
//! two-argument form of the operation instead. There is no escaping.
//!
//! Array keys are written with the [`ARRAY_MARKER`] suffix: `items[]`. The
//! array itself is stored under the *base name* (`items`), see
//! [`get_array_name`].

/// Suffix that marks a key name as an array element.
pub const ARRAY_MARKER: &str = "[]";

/// Separator between section and key in a composite address.
pub const ADDRESS_SEPARATOR: char = '/';

/// Splits a composite address at the first `/`.
///
/// Returns `None` when the address has no separator, meaning it names a
/// section only.
///
/// # Examples
///
/// ```rust
/// use ini_array::address::split_address;
///
/// assert_eq!(split_address("Config/path"), Some(("Config", "path")));
/// assert_eq!(split_address("a/b/c"), Some(("a", "b/c")));
/// assert_eq!(split_address("Config"), None);
/// ```
#[must_use]
pub fn split_address(address: &str) -> Option<(&str, &str)> {
    address.split_once(ADDRESS_SEPARATOR)
}

/// Strips the array marker from a key name.
///
/// Everything from the first `[]` onward is removed; names without the marker
/// are returned unchanged. Used to normalize between a scalar shadow name
/// (`items[]`) and the array's base name (`items`).
///
/// # Examples
///
/// ```rust
/// use ini_array::get_array_name;
///
/// assert_eq!(get_array_name("items[]"), "items");
/// assert_eq!(get_array_name("items"), "items");
/// ```
#[must_use]
pub fn get_array_name(key: &str) -> &str {
    match key.find(ARRAY_MARKER) {
        Some(pos) => &key[..pos],
        None => key,
    }
}

/// Returns `true` if `key` carries the array marker.
#[inline]
#[must_use]
pub fn is_marked(key: &str) -> bool {
    key.contains(ARRAY_MARKER)
}

/// Builds the scalar shadow name (`base[]`) for an array base name.
#[inline]
#[must_use]
pub fn shadow_name(base: &str) -> String {
    format!("{base}{ARRAY_MARKER}")
}
