//! Application format deserialization.
//!
//! This module provides the [`Deserializer`] implementation that parses
//! Application format documents into Rust records.
//!
//! ## Overview
//!
//! Decoding is a forward walk over the document, one line per field:
//!
//! - **Line splitting**: both `\n` and `\r\n` terminators are accepted; a
//!   trailing terminator does not produce a phantom blank line
//! - **Pair splitting**: the first `:` on each line separates key from value;
//!   later `:` characters belong to the value
//! - **Key resolution**: keys are matched against the record's declared
//!   fields, case-insensitively when configured
//! - **Coercion**: values are parsed into each field's declared scalar kind
//!
//! The grammar is strict: blank lines are malformed (there is no blank-line
//! tolerance), and a key carrying incidental whitespace does not resolve.
//! Duplicate keys are not an error; the last occurrence wins.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_application::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Data {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let data: Data = from_str("x: 1\ny: 2").unwrap();
//! assert_eq!(data, Data { x: 1, y: 2 });
//! ```

use crate::coerce;
use crate::fields;
use crate::kind::ScalarKind;
use crate::options::ApplicationOptions;
use crate::{Error, Result};
use serde::de;
use serde::de::value::BorrowedStrDeserializer;
use serde::forward_to_deserialize_any;

/// The Application format deserializer.
///
/// Parses a document into a Rust record implementing `Deserialize`. Created
/// via [`Deserializer::from_str`], or [`Deserializer::with_options`] to
/// enable case-insensitive key matching.
pub struct Deserializer<'de> {
    input: &'de str,
    options: ApplicationOptions,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, ApplicationOptions::default())
    }

    pub fn with_options(input: &'de str, options: ApplicationOptions) -> Self {
        Deserializer { input, options }
    }
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    /// Only records exist at the document root.
    fn deserialize_any<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("non-record document root"))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        visitor.visit_map(RecordAccess {
            lines: self.input.lines(),
            line_no: 0,
            fields,
            case_insensitive: self.options.case_insensitive_fields,
            value: None,
        })
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct seq tuple tuple_struct map
        enum identifier ignored_any
    }
}

/// Walks the document line by line and feeds the record's visitor one
/// resolved pair at a time, so failures surface in document order.
struct RecordAccess<'de> {
    lines: std::str::Lines<'de>,
    line_no: usize,
    fields: &'static [&'static str],
    case_insensitive: bool,
    value: Option<&'de str>,
}

impl<'de> RecordAccess<'de> {
    /// Parses and resolves the next line that is not superseded by a later
    /// line for the same field.
    fn next_pair(&mut self) -> Result<Option<(&'static str, &'de str)>> {
        while let Some(line) = self.lines.next() {
            self.line_no += 1;
            let sep = line.find(':').ok_or(Error::MalformedLine {
                line: self.line_no,
            })?;
            let key = &line[..sep];
            let value = line[sep + 1..].trim();
            let field = fields::resolve(key, self.fields, self.case_insensitive)?;

            // Last write wins: a later line for the same field replaces this
            // one, so the earlier value is never handed to the visitor.
            let superseded = self.lines.clone().any(|later| {
                later
                    .split_once(':')
                    .map_or(false, |(later_key, _)| {
                        fields::matches(later_key, field, self.case_insensitive)
                    })
            });
            if superseded {
                continue;
            }

            return Ok(Some((field, value)));
        }
        Ok(None)
    }
}

impl<'de> de::MapAccess<'de> for RecordAccess<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.next_pair()? {
            Some((field, value)) => {
                self.value = Some(value);
                seed.deserialize(BorrowedStrDeserializer::new(field)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ScalarDeserializer { value }),
            None => Err(de::Error::custom(
                "next_value_seed called before next_key_seed",
            )),
        }
    }
}

/// Deserializes one field's value text into the scalar kind the field's
/// `Deserialize` impl asks for. Non-scalar requests are how an out-of-set
/// field type announces itself, and they fail here.
struct ScalarDeserializer<'de> {
    value: &'de str,
}

impl<'de> de::Deserializer<'de> for ScalarDeserializer<'de> {
    type Error = Error;

    /// The string channel: `String` fields and stringly scalars such as
    /// `rust_decimal::Decimal` take the trimmed text verbatim.
    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.value)
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_bool(coerce::parse_bool(self.value)?)
    }

    fn deserialize_i8<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_i8(coerce::parse_number(self.value, ScalarKind::I8)?)
    }

    fn deserialize_i16<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_i16(coerce::parse_number(self.value, ScalarKind::I16)?)
    }

    fn deserialize_i32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_i32(coerce::parse_number(self.value, ScalarKind::I32)?)
    }

    fn deserialize_i64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_i64(coerce::parse_number(self.value, ScalarKind::I64)?)
    }

    fn deserialize_i128<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("i128"))
    }

    fn deserialize_u8<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_u8(coerce::parse_number(self.value, ScalarKind::U8)?)
    }

    fn deserialize_u16<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_u16(coerce::parse_number(self.value, ScalarKind::U16)?)
    }

    fn deserialize_u32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_u32(coerce::parse_number(self.value, ScalarKind::U32)?)
    }

    fn deserialize_u64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_u64(coerce::parse_number(self.value, ScalarKind::U64)?)
    }

    fn deserialize_u128<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("u128"))
    }

    fn deserialize_f32<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("f32"))
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f64(coerce::parse_number(self.value, ScalarKind::Double)?)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_char(coerce::parse_char(self.value)?)
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.value)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.value)
    }

    fn deserialize_bytes<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("byte string"))
    }

    fn deserialize_byte_buf<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("byte string"))
    }

    /// A pair whose line is present is always a `Some`; absence is expressed
    /// by the line not existing at all.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("unit"))
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("unit"))
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("sequence"))
    }

    fn deserialize_tuple<V>(self, _len: usize, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("sequence"))
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("sequence"))
    }

    fn deserialize_map<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("map"))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("nested record"))
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported("enum"))
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.value)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.value)
    }
}
