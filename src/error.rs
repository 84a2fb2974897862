//! Error types for Application format serialization and deserialization.
//!
//! Every failure aborts the whole operation: the caller never receives a
//! partially populated record, and the error always corresponds to the first
//! offending line or field in document order.
//!
//! ## Error Categories
//!
//! - **Input errors**: empty input, lines without a `:` separator
//! - **Resolution errors**: keys that match no record field
//! - **Type errors**: field types outside the supported scalar set, values
//!   that cannot be coerced into their field's kind
//! - **Shape errors**: encoding a record type that declares no fields
//!
//! ## Examples
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_application::{from_str, Error};
//!
//! #[derive(Deserialize, Debug)]
//! struct Host {
//!     name: String,
//! }
//!
//! let err = from_str::<Host>("no separator here").unwrap_err();
//! assert!(matches!(err, Error::MalformedLine { line: 1 }));
//! ```

use crate::kind::ScalarKind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding or decoding
/// the Application format.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Decode was called with empty or whitespace-only input.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// A line has no `:` separator. Blank lines are malformed too: the format
    /// has no blank-line tolerance.
    #[error("line {line} has no ':' separator")]
    MalformedLine { line: usize },

    /// A key resolved to no record field under the active case mode.
    #[error("no record field matches key \"{name}\"")]
    MissingField { name: String },

    /// A field's declared type is outside the supported scalar set. Raised on
    /// both the encode and decode paths.
    #[error("{kind} is not representable in the Application format")]
    UnsupportedKind { kind: String },

    /// A textual value could not be parsed into its field's scalar kind.
    #[error("cannot coerce \"{value}\" into {kind}")]
    CoercionFailure { value: String, kind: ScalarKind },

    /// Encode was called on a record type that declares no fields.
    #[error("record type {record} declares no fields")]
    NoFields { record: String },

    /// IO error from the reader/writer adapters.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used for errors reported through serde's `custom`
    /// channel (e.g. a derived impl's missing-field report).
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn unsupported(kind: impl Into<String>) -> Self {
        Error::UnsupportedKind { kind: kind.into() }
    }

    pub(crate) fn coercion(value: &str, kind: ScalarKind) -> Self {
        Error::CoercionFailure {
            value: value.to_string(),
            kind,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
