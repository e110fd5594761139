use std::fmt::Display;

use serde::ser::{Error as _, Impossible, Serialize};

use crate::{Error, Result};

/// Serializes map keys, which must be strings.
///
/// Integers and unit variants are accepted and converted to their string
/// form.
pub struct KeySerializer;

fn err_not_string() -> Error {
    Error::custom("map key must be a string")
}

macro_rules! to_string {
    ($($method:ident: $ty:ty)+) => {
        $(
            fn $method(self, v: $ty) -> Result<String> {
                Ok(v.to_string())
            }
        )+
    };
}

macro_rules! reject {
    ($($method:ident: $ty:ty)+) => {
        $(
            fn $method(self, _: $ty) -> Result<String> {
                Err(err_not_string())
            }
        )+
    };
}

impl serde::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    to_string! {
        serialize_i8: i8
        serialize_i16: i16
        serialize_i32: i32
        serialize_i64: i64
        serialize_u8: u8
        serialize_u16: u16
        serialize_u32: u32
        serialize_u64: u64
        serialize_char: char
        serialize_str: &str
    }

    reject! {
        serialize_bool: bool
        serialize_f32: f32
        serialize_f64: f64
        serialize_bytes: &[u8]
    }

    fn serialize_none(self) -> Result<String> {
        Err(err_not_string())
    }

    fn serialize_some<T: ?Sized>(self, _: &T) -> Result<String>
    where
        T: Serialize,
    {
        Err(err_not_string())
    }

    fn serialize_unit(self) -> Result<String> {
        Err(err_not_string())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(err_not_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T: ?Sized>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: Serialize,
    {
        Err(err_not_string())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(err_not_string())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(err_not_string())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(err_not_string())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(err_not_string())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(err_not_string())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(err_not_string())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(err_not_string())
    }

    fn collect_str<T: ?Sized>(self, value: &T) -> Result<String>
    where
        T: Display,
    {
        Ok(value.to_string())
    }
}
