use ini_array::{from_str, from_str_with_options, to_string, Document, Error, IniOptions};

#[test]
fn test_only_leading_semicolon_comments_a_line() {
    let doc = from_str(";[Hidden]\n;x = 1\n[Shown]\ny = 2 ; note\n");
    assert_eq!(doc.all_sections(), vec!["Shown"]);
    assert_eq!(doc.value("Shown", "y").unwrap(), "2");
}

#[test]
fn test_equals_takes_priority_over_brackets() {
    // a line containing '=' is never a header
    let doc = from_str("[A]\n[weird] = x\n");
    assert_eq!(doc.value("A", "[weird]").unwrap(), "x");
}

#[test]
fn test_lines_without_rules_are_ignored() {
    let doc = from_str("just text\n\n[A]\n    \nx = 1\n");
    assert_eq!(doc.all_keys("A").unwrap(), vec!["x"]);
}

#[test]
fn test_array_and_plain_key_with_same_base() {
    let doc = from_str("[A]\nitems = plain\nitems[] = a\nitems[] = b\n");
    assert_eq!(doc.all_keys("A").unwrap(), vec!["items", "items[]"]);
    assert_eq!(doc.array("A", "items").unwrap(), ["a", "b"]);
    // the base name resolves to the array, so scalar access is refused
    assert!(matches!(
        doc.value("A", "items"),
        Err(Error::KeyIsArray { .. })
    ));
}

#[test]
fn test_arrays_are_per_section() {
    let doc = from_str("[A]\nv[] = 1\n[B]\nv[] = 2\nv[] = 3\n");
    assert_eq!(doc.size_of_array("A", "v").unwrap(), 1);
    assert_eq!(doc.size_of_array("B", "v").unwrap(), 2);
}

#[test]
fn test_array_split_across_headers_of_same_section() {
    let doc = from_str("[A]\nv[] = 1\n[B]\nx = 0\n[A]\nv[] = 2\n");
    assert_eq!(doc.array("A", "v").unwrap(), ["1", "2"]);
    assert_eq!(to_string(&doc), "[A]\nv[] = 1\nv[] = 2\n\n[B]\nx = 0\n\n");
}

#[test]
fn test_slash_in_section_name() {
    let mut doc = Document::new();
    doc.add_key("paths/unix", "bin", "/usr/bin").unwrap();

    // the composite address splits at the first '/', so it misses the key
    assert!(!doc.include("paths/unix/bin"));
    assert!(doc.include_key("paths/unix", "bin"));
    assert_eq!(doc.value("paths/unix", "bin").unwrap(), "/usr/bin");
}

#[test]
fn test_slash_in_key_name() {
    let doc = from_str("[Paths]\nbin/local = /usr/local/bin\n");
    assert_eq!(doc.value_at("Paths/bin/local").unwrap(), "/usr/local/bin");
}

#[test]
fn test_basic_and_extended_parse_differently() {
    let text = "[Root.Leaf]\nlist[] = a\nlist[] = b\n";

    let extended = from_str(text);
    assert!(extended.is_array("Root.Leaf", "list"));
    assert_eq!(extended.children_of("Root").unwrap(), ["Leaf"]);

    let basic = from_str_with_options(text, IniOptions::basic());
    assert!(!basic.is_array("Root.Leaf", "list"));
    assert_eq!(basic.value("Root.Leaf", "list[]").unwrap(), "b");
    assert!(basic.children_of("Root").is_none());
}

#[test]
fn test_repeated_relative_headers_accumulate() {
    let doc = from_str("[A]\n[.B]\n[.C]\nx = 1\n");
    assert_eq!(doc.all_sections(), vec!["A.B.C"]);
    assert_eq!(doc.children_of("A").unwrap(), ["B"]);
    assert_eq!(doc.children_of("A.B").unwrap(), ["C"]);
}
