/// Builds an extended-dialect [`Document`](crate::Document) from section and key literals.
///
/// Values in brackets become arrays; every other value becomes a scalar key.
/// The macro evaluates to `Result<Document>`, failing the same way
/// [`Document::add_key`](crate::Document::add_key) and
/// [`Document::add_array`](crate::Document::add_array) do.
///
/// # Examples
///
/// ```rust
/// use ini_array::ini;
///
/// let doc = ini! {
///     "Profile" => {
///         "Name" => "John",
///         "Age" => "25",
///     },
///     "Hobby" => {
///         "items" => ["Running", "Football"],
///     },
/// }
/// .unwrap();
///
/// assert_eq!(doc.value("Profile", "Name").unwrap(), "John");
/// assert_eq!(doc.size_of_array("Hobby", "items").unwrap(), 2);
/// ```
#[macro_export]
macro_rules! ini {
    // Array value with no elements
    (@entry $doc:ident, $section:expr, $key:expr, []) => {
        $doc.add_array::<&str>($section, $key, &[])?;
    };

    // Array value
    (@entry $doc:ident, $section:expr, $key:expr, [ $($item:expr),+ $(,)? ]) => {
        $doc.add_array($section, $key, &[$($item),+])?;
    };

    // Scalar value
    (@entry $doc:ident, $section:expr, $key:expr, $value:expr) => {
        $doc.add_key($section, $key, $value)?;
    };

    // Empty document
    () => {
        ::core::result::Result::<$crate::Document, $crate::Error>::Ok($crate::Document::new())
    };

    ($( $section:literal => { $( $key:literal => $value:tt ),* $(,)? } ),* $(,)?) => {
        (|| -> $crate::Result<$crate::Document> {
            let mut document = $crate::Document::new();
            $(
                $(
                    $crate::ini!(@entry document, $section, $key, $value);
                )*
            )*
            Ok(document)
        })()
    };
}
