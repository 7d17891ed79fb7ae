use ini_array::{Document, Error, Flavor, IniOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_open_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demo.ini");
    fs::write(&path, "[Profile]\nName = John\nAge = 25\n").unwrap();

    let doc = Document::open(&path).unwrap();
    assert_eq!(doc.value("Profile", "Name").unwrap(), "John");
    assert_eq!(doc.file_path(), Some(path.as_path()));
}

#[test]
fn test_open_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.ini");

    let err = Document::open(&path).unwrap_err();
    match err {
        Error::FileLoaded { path: reported, .. } => {
            assert!(reported.ends_with("missing.ini"));
        }
        other => panic!("expected FileLoaded, got {:?}", other),
    }
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.ini");

    let mut doc = Document::with_path(&path, IniOptions::new());
    doc.add_key("Config", "Theme", "Dark").unwrap();
    doc.add_array("Hobby", "items", &["Running", "Football"])
        .unwrap();
    doc.save().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "[Config]\nTheme = Dark\n\n[Hobby]\nitems[] = Running\nitems[] = Football\n\n"
    );

    let reloaded = Document::open(&path).unwrap();
    assert_eq!(reloaded, doc);
}

#[test]
fn test_with_path_does_not_touch_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("later.ini");

    let doc = Document::with_path(&path, IniOptions::basic());
    assert!(!path.exists());
    assert_eq!(doc.flavor(), Flavor::Basic);
    assert_eq!(doc.file_path(), Some(path.as_path()));
}

#[test]
fn test_save_without_path_fails() {
    let mut doc = Document::new();
    doc.add_key("A", "x", "1").unwrap();
    assert!(matches!(doc.save(), Err(Error::FileLoaded { .. })));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.ini");

    let doc = Document::new();
    assert!(matches!(doc.save_as(&path), Err(Error::FileLoaded { .. })));
}

#[test]
fn test_save_as_keeps_recorded_path() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("a.ini");
    let copy = dir.path().join("b.ini");

    let mut doc = Document::with_path(&original, IniOptions::new());
    doc.add_key("A", "x", "1").unwrap();
    doc.save_as(&copy).unwrap();

    assert!(copy.exists());
    assert!(!original.exists());
    assert_eq!(doc.file_path(), Some(original.as_path()));
}

#[test]
fn test_load_file_merges_and_resets_section() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.ini");
    let second = dir.path().join("second.ini");
    fs::write(&first, "[A]\nx = 1\n[B]\ny = 2\n").unwrap();
    fs::write(&second, "top = yes\n[A]\nx = 3\n").unwrap();

    let mut doc = Document::open(&first).unwrap();
    doc.load_file(&second).unwrap();

    // the second file's leading key lands in the unnamed section, not in [B]
    assert_eq!(doc.value("", "top").unwrap(), "yes");
    assert!(!doc.include("B/top"));
    assert_eq!(doc.value("A", "x").unwrap(), "3");
    assert_eq!(doc.value("B", "y").unwrap(), "2");
    assert_eq!(doc.file_path(), Some(second.as_path()));
}

#[test]
fn test_failed_load_leaves_document() {
    let dir = tempdir().unwrap();
    let mut doc = Document::new();
    doc.add_key("A", "x", "1").unwrap();
    doc.set_file_path(dir.path().join("kept.ini"));
    let before = doc.clone();

    assert!(doc.load_file(dir.path().join("missing.ini")).is_err());
    assert_eq!(doc, before);
    assert_eq!(doc.file_path(), Some(dir.path().join("kept.ini").as_path()));
}
