//! Array keys: repeated `key[] = element` lines.
//!
//! Run with: cargo run --example arrays

use ini_array::{from_str, get_array_name, to_string, Document};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_str("[Language]\nitems[] = C\nitems[] = C++\nitems[] = Rust\nfavourite = Rust\n");

    for key in doc.all_keys("Language")? {
        if doc.is_array("Language", &key) {
            for i in 0..doc.size_of_array("Language", &key)? {
                println!("{}[{}]: {}", get_array_name(&key), i, doc.value_of_array("Language", &key, i)?);
            }
        } else {
            println!("{}: {}", key, doc.value("Language", &key)?);
        }
    }

    let mut doc = Document::new();
    doc.add_array("Language", "items", &["C", "C++", "Java", "Python", "Go"])?;
    doc.add_array("Hobby", "items", &["Running", "Football", "Basketball"])?;
    doc.remove_array("Language", "items")?;

    println!("\n{}", to_string(&doc));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
