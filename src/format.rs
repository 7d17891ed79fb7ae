//! INI Format Reference
//!
//! This module documents the text format read and written by this library.
//! It contains no code.
//!
//! # Overview
//!
//! A document is a sequence of lines. Lines are classified one at a time;
//! there are no multi-line constructs.
//!
//! ```text
//! ; comment
//! [SectionName]
//! key = value            ; trailing comment, key=value lines only
//! key[] = element0
//! key[] = element1
//!
//! [Parent.Child]
//! [.RelativeChild]
//! ```
//!
//! # Line Types
//!
//! Rules are applied in this order; the first match wins.
//!
//! | Line | Rule | Example |
//! |------|------|---------|
//! | Comment | First character is `;` | `; generated file` |
//! | Key/value | Contains `=` | `name = John` |
//! | Section header | Contains `[` | `[Profile]` |
//! | Ignored | Anything else | blank lines, stray text |
//!
//! ## Comments
//!
//! Only a line whose **first** character is `;` is a comment. An indented
//! `;` does not start a comment line.
//!
//! ## Key/value lines
//!
//! - The key is the text before the **first** `=`; the value is the text
//!   after it. Later `=` characters belong to the value: `url = a=b`.
//! - A `;` after the `=` ends the value (inline comment).
//! - Space characters around key and value are removed. Tabs are kept.
//! - An empty value is allowed (`key =`). A line with an empty key is ignored.
//! - A repeated key overwrites the earlier value.
//! - Lines before the first header belong to the unnamed section `""`,
//!   written back as `[]`.
//!
//! ## Section headers
//!
//! The section name is the text between `[` and the next `]`. A header that
//! is never followed by a key does not create a section: sections exist only
//! while they hold at least one key.
//!
//! # Extended Dialect
//!
//! [`Flavor::Extended`](crate::Flavor::Extended) (the default) adds two features.
//!
//! ## Arrays
//!
//! A key containing `[]` is an array element. Every such line appends its
//! value to the array named by the key with the marker removed:
//!
//! ```text
//! [Hobby]
//! items[] = Running
//! items[] = Football
//! ```
//!
//! yields the array `Hobby/items = ["Running", "Football"]`. The section also
//! holds a scalar entry `items[]` whose value is the last element
//! (`Football`); it is listed by `all_keys` and is how the serializer knows
//! where to write the array back.
//!
//! ## Section hierarchy
//!
//! | Header | Section name | Recorded relation |
//! |--------|--------------|-------------------|
//! | `[Parent.Child]` | `Parent.Child` | `Parent` → `Child` |
//! | `[A.B.C]` | `A.B.C` | `A` → `B.C` |
//! | `[.Child]` after `[Parent]` | `Parent.Child` | `Parent` → `Child` |
//!
//! Only the first `.` is used to split a dotted header. The relation can be
//! read with [`Document::children_of`](crate::Document::children_of); section
//! names are always stored in full.
//!
//! # Basic Dialect
//!
//! [`Flavor::Basic`](crate::Flavor::Basic) treats `key[]` as an ordinary key
//! name and takes every header verbatim with no hierarchy.
//!
//! # Output
//!
//! Each section is written as its header, its keys as `key = value`, and a
//! blank line. Arrays are written as one `key[] = element` line per element.
//! Section and key order follow storage order.
//!
//! In the extended dialect, a section whose name starts with `.` is preceded
//! by an empty `[]` header, so it is not read back as relative to the section
//! before it. A key starting with `;` is written with one leading space, so
//! its line is not read back as a comment.
//!
//! ```rust
//! use ini_array::{from_str, to_string, Document};
//!
//! let mut doc = Document::new();
//! doc.add_key("A", ";note", "kept").unwrap();
//! doc.add_key(".Top", "x", "1").unwrap();
//!
//! let text = to_string(&doc);
//! assert_eq!(text, "[A]\n ;note = kept\n\n[]\n[.Top]\nx = 1\n\n");
//! assert_eq!(from_str(&text), doc);
//! ```
//!
//! # Composite Addresses
//!
//! `"section/key"` names a key in a single string and is split at the first
//! `/`. There is no escaping, so sections whose names contain `/` must be
//! addressed with the two-argument operations.
