//! The canonical binary encoding.
//!
//! Every value is a tag byte followed by a tag-specific payload.
//!
//! | Tag    | Value          | Payload                                   |
//! | ------ | -------------- | ----------------------------------------- |
//! | `0x00` | null           |                                           |
//! | `0x01` | `false`        |                                           |
//! | `0x02` | `true`         |                                           |
//! | `0x10` | integer        | SLEB128                                   |
//! | `0x20` | string         | ULEB128 length, UTF-8 bytes               |
//! | `0x21` | bytes          | ULEB128 length, raw bytes                 |
//! | `0x30` | list           | ULEB128 count, elements                   |
//! | `0x40` | map            | ULEB128 count, string key and value pairs |
//!
//! Map entries are written in ascending order of the keys' UTF-8 bytes.

mod decode;
mod encode;
pub mod varint;

pub use crate::codec::decode::{decode, decode_with};
pub use crate::codec::encode::{encode, encode_into};

/// A tag byte identifying the kind of an encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    Null = 0x00,
    False = 0x01,
    True = 0x02,
    Int = 0x10,
    String = 0x20,
    Bytes = 0x21,
    List = 0x30,
    Map = 0x40,
}

impl Tag {
    /// Returns the tag for the given byte, if it is defined.
    pub const fn from_u8(byte: u8) -> Option<Self> {
        let tag = match byte {
            0x00 => Self::Null,
            0x01 => Self::False,
            0x02 => Self::True,
            0x10 => Self::Int,
            0x20 => Self::String,
            0x21 => Self::Bytes,
            0x30 => Self::List,
            0x40 => Self::Map,
            _ => return None,
        };
        Some(tag)
    }
}

impl From<Tag> for u8 {
    #[inline]
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

#[test]
fn tag_u8() {
    for byte in 0..=u8::MAX {
        if let Some(tag) = Tag::from_u8(byte) {
            assert_eq!(u8::from(tag), byte);
        }
    }
    assert_eq!(Tag::from_u8(0x03), None);
    assert_eq!(Tag::from_u8(0xff), None);
}
