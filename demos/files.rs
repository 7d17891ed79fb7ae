//! Saving to and loading from a file.
//!
//! Run with: cargo run --example files

use ini_array::{Document, IniOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join("ini_array_demo.ini");

    let mut doc = Document::with_path(&path, IniOptions::new());
    doc.add_key("Profile", "Name", "John")?;
    doc.add_array("Hobby", "items", &["Running", "Football"])?;
    doc.save()?;
    println!("Saved {}", path.display());

    let loaded = Document::open(&path)?;
    assert_eq!(loaded, doc);
    println!("Loaded {} sections back", loaded.len());

    if let Err(err) = Document::open(path.with_file_name("does_not_exist.ini")) {
        println!("Expected failure: {}", err);
    }
    Ok(())
}
