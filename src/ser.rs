//! Application format serialization.
//!
//! This module provides the [`Serializer`] implementation that renders Rust
//! records as Application format documents.
//!
//! ## Overview
//!
//! Encoding walks the record's fields in declaration order and appends one
//! `"Name: value"` line per present field, each terminated with `\r\n`:
//!
//! - Booleans render as `True`/`False`
//! - Integers and `f64` render through `Display` (shortest round-trippable
//!   decimal form for floats, never exponential)
//! - Strings and characters render verbatim
//! - An absent value (`None`) omits the field's line entirely
//!
//! Field types outside the supported scalar set fail with
//! [`Error::UnsupportedKind`](crate::Error::UnsupportedKind); a record type
//! declaring no fields fails with [`Error::NoFields`](crate::Error::NoFields).
//!
//! ## Usage
//!
//! Most users should use [`to_string`](crate::to_string) in the crate root.
//! For buffer reuse the serializer can be driven directly:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_application::Serializer;
//!
//! #[derive(Serialize)]
//! struct Greeting {
//!     message: String,
//! }
//!
//! let mut serializer = Serializer::new();
//! let greeting = Greeting { message: "hello".to_string() };
//! greeting.serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), "message: hello\r\n");
//! ```

use crate::coerce;
use crate::{Error, Result};
use serde::ser::{self, Impossible, Serialize};

/// The Application format serializer.
///
/// Converts a Rust record implementing `Serialize` into a document string.
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn new() -> Self {
        // Typical records fit well under this; avoids early reallocations.
        Serializer {
            output: String::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Impossible<(), Error>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = RecordSerializer<'a>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        if len == 0 {
            return Err(Error::NoFields {
                record: name.to_string(),
            });
        }
        Ok(RecordSerializer { ser: self })
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    /// A fieldless marker type has nothing to enumerate.
    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok> {
        Err(Error::NoFields {
            record: name.to_string(),
        })
    }

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_i128(self, _v: i128) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_u128(self, _v: u128) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::unsupported("non-record document root"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(Error::unsupported("enum"))
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported("sequence"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported("sequence"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported("map"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported("enum"))
    }
}

/// Emits the record's fields in declaration order.
pub struct RecordSerializer<'a> {
    ser: &'a mut Serializer,
}

impl ser::SerializeStruct for RecordSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(FieldSerializer {
            output: &mut self.ser.output,
            key,
        })
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

/// Serializes one field's value as a `"Name: value\r\n"` line, or nothing at
/// all for an absent value.
struct FieldSerializer<'a> {
    output: &'a mut String,
    key: &'static str,
}

impl FieldSerializer<'_> {
    fn write_line(self, rendered: &str) -> Result<()> {
        self.output.push_str(self.key);
        self.output.push_str(": ");
        self.output.push_str(rendered);
        self.output.push_str("\r\n");
        Ok(())
    }
}

impl<'a> ser::Serializer for FieldSerializer<'a> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Impossible<(), Error>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Impossible<(), Error>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.write_line(coerce::render_bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.write_line(&v.to_string())
    }

    fn serialize_i128(self, _v: i128) -> Result<Self::Ok> {
        Err(Error::unsupported("i128"))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.write_line(&v.to_string())
    }

    fn serialize_u128(self, _v: u128) -> Result<Self::Ok> {
        Err(Error::unsupported("u128"))
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok> {
        Err(Error::unsupported("f32"))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        self.write_line(&v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.write_line(v.encode_utf8(&mut [0u8; 4]))
    }

    /// `String` fields and stringly scalars such as `rust_decimal::Decimal`
    /// arrive here.
    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        self.write_line(v)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(Error::unsupported("byte string"))
    }

    /// Absent value: the field is omitted from the output entirely.
    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::unsupported("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Err(Error::unsupported("unit"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(Error::unsupported("enum"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported("sequence"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported("sequence"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported("nested record"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported("enum"))
    }
}
