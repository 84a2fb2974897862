//! # serde_application
//!
//! A Serde-compatible codec for the Application format, a flat, line-oriented
//! key-value text format for configuration and metadata records.
//!
//! ## What is the Application format?
//!
//! Each line of a document is one `Name: value` pair. There is no nesting, no
//! arrays, no nulls, no comments — just a record of primitive scalars that a
//! human can read and edit with any text editor:
//!
//! ```text
//! Host: cache-01
//! Port: 11211
//! Secure: True
//! ```
//!
//! ## Key Features
//!
//! - **Serde Compatible**: works with plain `#[derive(Serialize, Deserialize)]`
//!   record types; field declaration order is the output order
//! - **Closed scalar set**: bool, 8/16/32/64-bit signed and unsigned integers,
//!   char, decimal, f64, and strings — anything else is a typed error, never
//!   a silent fallback
//! - **Strict by design**: blank lines, separator-less lines, and unknown
//!   keys are errors; the caller gets a fully populated record or a failure,
//!   never something in between
//! - **Configurable key matching**: opt-in case-insensitive resolution of
//!   keys against field names
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_application::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Endpoint {
//!     #[serde(rename = "Host")]
//!     host: String,
//!     #[serde(rename = "Port")]
//!     port: u16,
//!     #[serde(rename = "Secure")]
//!     secure: bool,
//! }
//!
//! let endpoint = Endpoint {
//!     host: "cache-01".to_string(),
//!     port: 11211,
//!     secure: true,
//! };
//!
//! let text = to_string(&endpoint).unwrap();
//! assert_eq!(text, "Host: cache-01\r\nPort: 11211\r\nSecure: True\r\n");
//!
//! let back: Endpoint = from_str(&text).unwrap();
//! assert_eq!(endpoint, back);
//! ```
//!
//! ### Case-insensitive keys
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_application::{from_str_with_options, ApplicationOptions};
//!
//! #[derive(Deserialize)]
//! struct Flags {
//!     #[serde(rename = "Bool")]
//!     flag: bool,
//! }
//!
//! let options = ApplicationOptions::new().with_case_insensitive_fields(true);
//! let flags: Flags = from_str_with_options("bOoL:true", options).unwrap();
//! assert!(flags.flag);
//! ```
//!
//! ### Decimal fields
//!
//! Arbitrary-precision fixed-point decimals ride serde's string channel, so
//! `rust_decimal::Decimal` fields work out of the box and keep their scale:
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use serde::{Deserialize, Serialize};
//! use serde_application::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Invoice {
//!     #[serde(rename = "Total")]
//!     total: Decimal,
//! }
//!
//! let invoice: Invoice = from_str("Total: 19.99").unwrap();
//! assert_eq!(to_string(&invoice).unwrap(), "Total: 19.99\r\n");
//! ```
//!
//! ## Absent and missing values
//!
//! Only strings have an absent state: an `Option<String>` field that is
//! `None` is omitted from encoded output, and a field that never appears in a
//! decoded document becomes `None`. Non-optional fields missing from a
//! document are an error unless annotated `#[serde(default)]`.
//!
//! ## Concurrency
//!
//! Every encode and decode call is independent and synchronous, and the only
//! configuration is an immutable flag, so options values and documents can be
//! shared freely across threads.
//!
//! ## Format Specification
//!
//! The full grammar, the supported-kind table, and the strictness rules are
//! documented in the [`format`] module.

pub mod de;
pub mod error;
pub mod format;
pub mod kind;
pub mod options;
pub mod ser;

mod coerce;
mod fields;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use kind::ScalarKind;
pub use options::ApplicationOptions;
pub use ser::Serializer;

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize a record to an Application format string.
///
/// Fields are rendered in declaration order, one `"Name: value"` line each,
/// `\r\n` terminated. Absent (`None`) values are omitted.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_application::to_string;
///
/// #[derive(Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "x: 1\r\ny: 2\r\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value is not a record, declares no fields, or has
/// a field whose type is outside the supported scalar set.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new();
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize a record to a writer in Application format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::Io(e.to_string()))?;
    Ok(())
}

/// Deserialize a record from a string of Application format text.
///
/// Keys are matched against field names exactly; use
/// [`from_str_with_options`] for case-insensitive matching.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_application::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is empty, a line is malformed, a key matches
/// no field, or a value cannot be coerced into its field's scalar kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_str_with_options(s, ApplicationOptions::default())
}

/// Deserialize a record from a string with explicit options.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_application::{from_str_with_options, ApplicationOptions};
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let options = ApplicationOptions::new().with_case_insensitive_fields(true);
/// let point: Point = from_str_with_options("X: 1\nY: 2", options).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// As [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: ApplicationOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::with_options(s, options);
    T::deserialize(&mut deserializer)
}

/// Deserialize a record from bytes of Application format text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, or as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::Message(e.to_string()))?;
    from_str(s)
}

/// Deserialize a record from an I/O stream of Application format text.
///
/// # Errors
///
/// Returns an error if reading fails, or as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::Io(e.to_string()))?;
    from_str(&string)
}
