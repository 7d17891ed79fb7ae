use ini_array::{from_str, ini, to_string, Document, Error, IniOptions, Value};

const COMPLEX: &str = "\
; sample configuration
[General]
version = 1.0
name = demo ; inline comment

[Language]
items[] = C
items[] = C++
items[] = Rust

[Server.Http]
port = 8080
[.Tls]
port = 8443
cert = server.pem
";

#[test]
fn test_profile_scenario() {
    let doc = from_str("[Profile]\nName = John\nAge = 25\n");
    assert_eq!(doc.all_sections(), vec!["Profile"]);
    assert_eq!(doc.all_keys("Profile").unwrap(), vec!["Name", "Age"]);
    assert_eq!(doc.value("Profile", "Name").unwrap(), "John");
}

#[test]
fn test_hobby_array_scenario() {
    let mut doc = Document::new();
    doc.add_array("Hobby", "items", &["Running", "Football"])
        .unwrap();
    assert_eq!(doc.size_of_array("Hobby", "items").unwrap(), 2);
    assert_eq!(doc.value_of_array("Hobby", "items", 1).unwrap(), "Football");
    assert!(doc.is_array("Hobby", "items"));
}

#[test]
fn test_duplicate_add_key_scenario() {
    let mut doc = Document::new();
    doc.add_key("Config", "Theme", "Dark").unwrap();
    let err = doc.add_key("Config", "Theme", "Light").unwrap_err();
    assert_eq!(err, Error::key_already_exist("Config", "Theme"));
    assert_eq!(doc.value("Config", "Theme").unwrap(), "Dark");
}

#[test]
fn test_complex_document() {
    let doc = from_str(COMPLEX);
    println!("Parsed: {:?}", doc);

    assert_eq!(
        doc.all_sections(),
        vec!["General", "Language", "Server.Http", "Server.Http.Tls"]
    );
    assert_eq!(doc.value_at("General/name").unwrap(), "demo");
    assert_eq!(doc.array("Language", "items").unwrap(), ["C", "C++", "Rust"]);
    assert_eq!(doc.value_at("Server.Http.Tls/port").unwrap(), "8443");
    assert_eq!(doc.children_of("Server").unwrap(), ["Http"]);
    assert_eq!(doc.children_of("Server.Http").unwrap(), ["Tls"]);

    // arrays are listed by their marked name and refuse scalar access
    assert_eq!(doc.all_keys("Language").unwrap(), vec!["items[]"]);
    assert!(matches!(
        doc.value("Language", "items[]"),
        Err(Error::KeyIsArray { .. })
    ));
}

#[test]
fn test_complex_round_trip() {
    let doc = from_str(COMPLEX);
    let text = to_string(&doc);
    println!("Serialized:\n{}", text);

    let back = from_str(&text);
    assert_eq!(doc, back);
    assert_eq!(to_string(&back), text);
}

#[test]
fn test_round_trip_with_dot_section_and_semicolon_key() {
    let mut doc = Document::new();
    doc.add_key("A", "y", "2").unwrap();
    doc.add_key("A", ";k", "v").unwrap();
    doc.add_key(".Top", "x", "1").unwrap();

    let text = to_string(&doc);
    let back = from_str(&text);
    assert_eq!(back.all_sections(), vec!["A", ".Top"]);
    assert_eq!(back.value("A", ";k").unwrap(), "v");
    assert_eq!(back, doc);
    assert_eq!(to_string(&back), text);
}

#[test]
fn test_demo_listing() {
    let doc = from_str(COMPLEX);
    let mut lines = Vec::new();
    for section in doc.all_sections() {
        for key in doc.all_keys(&section).unwrap() {
            if doc.is_array(&section, &key) {
                for i in 0..doc.size_of_array(&section, &key).unwrap() {
                    let element = doc.value_of_array(&section, &key, i).unwrap();
                    lines.push(format!("{}[{}]: {}", ini_array::get_array_name(&key), i, element));
                }
            } else {
                lines.push(format!("{}: {}", key, doc.value(&section, &key).unwrap()));
            }
        }
    }
    assert!(lines.contains(&"items[2]: Rust".to_string()));
    assert!(lines.contains(&"cert: server.pem".to_string()));
}

#[test]
fn test_edit_then_save_text() {
    let mut doc = Document::new();
    doc.add_key("Profile", "Name", "John").unwrap();
    doc.add_key("Profile", "Age", "25").unwrap();
    doc.add_key("Config", "save_passwd", "false").unwrap();
    doc.set_value_at("Config/save_passwd", "true").unwrap();

    doc.add_array("Language", "items", &["C", "C++", "Java", "Python", "Go"])
        .unwrap();
    doc.add_array("Hobby", "items", &["Running", "Football", "Basketball"])
        .unwrap();
    doc.remove_array("Language", "items").unwrap();

    assert_eq!(
        to_string(&doc),
        "[Profile]\nName = John\nAge = 25\n\n\
         [Config]\nsave_passwd = true\n\n\
         [Hobby]\nitems[] = Running\nitems[] = Football\nitems[] = Basketball\n\n"
    );
}

#[test]
fn test_failed_operations_leave_document_unchanged() {
    let mut doc = from_str(COMPLEX);
    let before = doc.clone();
    let text_before = to_string(&doc);

    assert!(doc.add_key("General", "version", "2").is_err());
    assert!(doc.add_key("General", "list[]", "2").is_err());
    assert!(doc.remove_key("General", "missing").is_err());
    assert!(doc.remove_array("General", "version").is_err());
    assert!(doc.add_array("Language", "items", &["x"]).is_err());
    assert!(doc.add_array("General", "version", &["x"]).is_err());
    assert!(doc.set_value("Language", "items[]", "x").is_err());

    assert_eq!(doc, before);
    assert_eq!(to_string(&doc), text_before);
}

#[test]
fn test_index_out_of_bounds() {
    let doc = from_str(COMPLEX);
    assert_eq!(
        doc.value_of_array("Language", "items", 3),
        Err(Error::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_json_view() {
    let doc = from_str("[A]\nx = 1\nlist[] = p\nlist[] = q\n");
    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(json, r#"{"A":{"x":"1","list[]":["p","q"]}}"#);
}

#[test]
fn test_get_mixed_lookup() {
    let doc = from_str(COMPLEX);
    assert_eq!(doc.get("General", "version"), Some(Value::Scalar("1.0")));
    assert!(doc.get("Language", "items[]").unwrap().is_array());
    assert_eq!(doc.get("General", "missing"), None);
}

#[test]
fn test_basic_flavor_document() {
    let doc = ini_array::from_str_with_options(COMPLEX, IniOptions::basic());
    assert_eq!(doc.value("Language", "items[]").unwrap(), "Rust");
    assert_eq!(doc.value(".Tls", "cert").unwrap(), "server.pem");
    assert!(doc.children_of("Server").is_none());
    assert_eq!(
        to_string(&doc),
        "[General]\nversion = 1.0\nname = demo\n\n\
         [Language]\nitems[] = Rust\n\n\
         [Server.Http]\nport = 8080\n\n\
         [.Tls]\nport = 8443\ncert = server.pem\n\n"
    );
}

#[test]
fn test_macro_document_matches_parsed() {
    let built = ini! {
        "Language" => { "items" => ["C", "C++", "Rust"] },
    }
    .unwrap();
    let parsed = from_str("[Language]\nitems[] = C\nitems[] = C++\nitems[] = Rust\n");
    assert_eq!(built, parsed);
}
