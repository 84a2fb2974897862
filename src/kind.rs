//! The closed set of scalar kinds the Application format supports.
//!
//! Every value in an Application document is one of the [`ScalarKind`]s below.
//! The set is fixed at compile time: there is no registry and no way to add a
//! kind at runtime. Anything outside the set (sequences, maps, nested records,
//! enums, `f32`, 128-bit integers, byte strings) is rejected with
//! [`Error::UnsupportedKind`](crate::Error::UnsupportedKind) on both the
//! encode and decode paths.

use std::fmt;

/// A scalar kind representable in the Application format.
///
/// # Examples
///
/// ```rust
/// use serde_application::ScalarKind;
///
/// assert_eq!(ScalarKind::Double.as_str(), "f64");
/// assert_eq!(ScalarKind::ALL.len(), 13);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Char,
    Decimal,
    Double,
    Text,
}

impl ScalarKind {
    /// Every kind the format supports, in a fixed order.
    pub const ALL: [ScalarKind; 13] = [
        ScalarKind::Bool,
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::U8,
        ScalarKind::U16,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::Char,
        ScalarKind::Decimal,
        ScalarKind::Double,
        ScalarKind::Text,
    ];

    /// Returns the name used for this kind in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::Char => "char",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Double => "f64",
            ScalarKind::Text => "string",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
