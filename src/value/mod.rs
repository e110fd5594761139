//! Defines the [`Value`] enum, the in-memory form of every encodable value.

mod from;
#[cfg(feature = "serde")]
mod ser;

pub use std::collections::btree_map;
pub use std::collections::BTreeMap as Map;
pub use std::vec::Vec as List;

#[cfg(feature = "serde")]
pub use crate::value::ser::{to_value, Serializer};

/// A structured value represented as a recursive enum.
///
/// Strings and bytes are always distinct. Integers are signed 64-bit. Maps
/// are keyed by strings and hold at most one entry per key.
///
/// Values can be constructed using the [`From`] impls, the
/// [`value!`][crate::value!] macro or, with the `serde` feature,
/// [`to_value`].
///
/// # Examples
///
/// ```
/// use strata::Value;
///
/// let value = strata::value! { name: "strata", retries: 3 };
/// assert_eq!(value.get("retries"), Some(&Value::Int(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    String(String),
    Bytes(Vec<u8>),
    List(List<Value>),
    Map(Map<String, Value>),
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Self::Null
    }
}

impl Value {
    /// Construct a bytes value.
    ///
    /// There is no `From<Vec<u8>>` impl because a vector of small integers
    /// converts to a list.
    #[inline]
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Construct a map value from entries. When a key repeats the last
    /// entry wins.
    pub fn map_from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut map = Map::new();
        for (k, v) in entries {
            map.insert(k.into(), v.into());
        }
        Self::Map(map)
    }

    /// A human readable name for the kind of this value.
    pub fn human(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the entry for `key` if this is a map that contains it.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|m| m.get(key))
    }
}
