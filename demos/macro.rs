//! Building documents with the ini! macro.
//!
//! Run with: cargo run --example macro

use ini_array::{ini, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = ini! {
        "Profile" => {
            "Name" => "John",
            "Age" => "25",
        },
        "Hobby" => {
            "items" => ["Running", "Football", "Basketball"],
        },
    }?;

    print!("{}", to_string(&doc));
    Ok(())
}
