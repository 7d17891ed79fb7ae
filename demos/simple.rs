//! Parse an INI document, read it, edit it and write it back.
//!
//! Run with: cargo run --example simple

use ini_array::{from_str, to_string};
use std::error::Error;

const INPUT: &str = "\
[Profile]
Name = John
Age = 25

[Config]
Theme = Dark ; default theme
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = from_str(INPUT);

    for section in doc.all_sections() {
        println!("[{}]", section);
        for key in doc.all_keys(&section)? {
            println!("{}: {}", key, doc.value(&section, &key)?);
        }
    }

    doc.set_value("Config", "Theme", "Light")?;
    doc.add_key("Config", "save_passwd", "true")?;
    doc.remove_key("Profile", "Age")?;

    println!("\nEdited document:\n{}", to_string(&doc));
    Ok(())
}
