//! Application Format Specification
//!
//! This module documents the Application format as implemented by this
//! library.
//!
//! # Overview
//!
//! The Application format is a flat, line-oriented key-value text format for
//! configuration and metadata records. It supports only primitive scalar
//! values: no nesting, no arrays, no nulls, no comments, no multi-line
//! values. What it gives up in expressiveness it returns in being trivially
//! human-editable and diffable.
//!
//! # Grammar
//!
//! ```text
//! document  := line*
//! line      := fieldName ":" SP? value lineEnd
//! fieldName := any-characters-except-colon
//! value     := any-characters-to-end-of-line (trimmed)
//! lineEnd   := "\n" | "\r\n"
//! ```
//!
//! A document is UTF-8 text. Both bare `\n` and `\r\n` are accepted as line
//! terminators on input; output always uses `\r\n`.
//!
//! Example document:
//!
//! ```text
//! Bool: True
//! Byte: 255
//! Char: !
//! Decimal: 1
//! Double: 0.55
//! Int: 10
//! ```
//!
//! # Keys
//!
//! - The **first** `:` on a line separates the key from the value; any later
//!   `:` characters belong to the value (`Start: 09:30` has value `09:30`).
//! - Keys are taken verbatim, with no trimming. `Bool : true` carries the key
//!   `"Bool "`, which matches nothing.
//! - Keys match record field names exactly by default;
//!   [`ApplicationOptions`](crate::ApplicationOptions) enables ASCII
//!   case-insensitive matching, under which `bOoL` resolves to a field named
//!   `Bool`.
//! - A key appearing twice is not an error: the last occurrence wins.
//!
//! # Values
//!
//! Values are trimmed of surrounding whitespace before coercion; interior
//! whitespace is preserved. The space after the colon is conventional on
//! output and optional on input: `Bool:true` and `Bool: true` decode
//! identically.
//!
//! | Kind | Decode grammar | Encode rendering |
//! |------|----------------|------------------|
//! | bool | `true`/`false`, any ASCII casing | `True` / `False` |
//! | i8/i16/i32/i64 | base-10, optional sign | base-10 |
//! | u8/u16/u32/u64 | base-10 | base-10 |
//! | char | exactly one character after trimming | the character |
//! | decimal | `rust_decimal`'s decimal grammar | scale-preserving decimal |
//! | f64 | Rust's float grammar | shortest round-trippable form, never exponential |
//! | string | trimmed text, verbatim | verbatim |
//!
//! This set is closed. Sequences, maps, nested records, enums, byte strings,
//! unit types, `f32`, and 128-bit integers are all rejected with
//! [`Error::UnsupportedKind`](crate::Error::UnsupportedKind) — on encode as
//! well as decode.
//!
//! # Strictness
//!
//! The grammar has no recovery or tolerance rules:
//!
//! - Empty or whitespace-only input is
//!   [`Error::EmptyInput`](crate::Error::EmptyInput).
//! - A line without `:` is
//!   [`Error::MalformedLine`](crate::Error::MalformedLine). This includes
//!   blank lines: a blank separator line inside a document is an error, not
//!   ignorable. (A trailing line terminator at the very end of the document
//!   is fine — it closes the last line rather than opening a blank one.)
//! - A key that resolves to no field is
//!   [`Error::MissingField`](crate::Error::MissingField).
//! - Any failure aborts the whole operation. There is no partial decode and
//!   no skip-and-continue; the error reported is the first offense in
//!   document order.
//!
//! # Absent values
//!
//! Only the string kind has an "absent" state, expressed in Rust as
//! `Option<String>`. Encoding `None` omits the field's line entirely;
//! decoding a document in which the field never appears yields `None`.
//! All other supported kinds are always present. Non-optional fields missing
//! from a document follow serde's usual rules: they are an error unless the
//! field carries `#[serde(default)]`.
//!
//! # Encoding shape
//!
//! - Fields are emitted in declaration order, one line each, `\r\n`
//!   terminated, with a single space after the colon.
//! - Only records (structs) can be encoded; any other document root is
//!   rejected, and a record type with zero fields is
//!   [`Error::NoFields`](crate::Error::NoFields).
//!
//! # Round-tripping
//!
//! `decode(encode(x)) == x` for every supported kind, except that decimal and
//! f64 values preserve numeric equality rather than source formatting (a
//! decimal stored at scale 2 re-reads at scale 2, but a value originally
//! written as `0.50` by hand decodes to the number it denotes, not the
//! spelling).

// This module contains only documentation; no implementation code
