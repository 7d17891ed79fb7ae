//! Dotted and relative section headers.
//!
//! Run with: cargo run --example sections

use ini_array::from_str;

const INPUT: &str = "\
[Server]
host = example.org

[.Http]
port = 80

[.Tls]
port = 443

[Database.Primary]
url = postgres://db
";

fn main() {
    let doc = from_str(INPUT);

    println!("Sections: {:?}", doc.all_sections());
    for parent in ["Server", "Server.Http", "Database"] {
        println!("{} -> {:?}", parent, doc.children_of(parent).unwrap_or_default());
    }
}
