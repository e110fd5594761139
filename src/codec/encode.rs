use crate::codec::varint::{encode_sleb128, encode_uleb128};
use crate::codec::Tag;
use crate::value::Map;
use crate::Value;

/// Encode a value into its canonical binary form.
///
/// Equal values always produce identical bytes.
///
/// # Examples
///
/// ```
/// let bytes = strata::encode(&strata::Value::Int(1));
/// assert_eq!(bytes, [0x10, 0x01]);
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(value, &mut out);
    log::trace!("encoded {} value into {} bytes", value.human(), out.len());
    out
}

/// Append the canonical binary form of a value to `out`.
pub fn encode_into(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Null => out.push(Tag::Null.into()),
        Value::Bool(false) => out.push(Tag::False.into()),
        Value::Bool(true) => out.push(Tag::True.into()),
        Value::Int(i) => {
            out.push(Tag::Int.into());
            encode_sleb128(*i, out);
        }
        Value::String(s) => encode_payload(Tag::String, s.as_bytes(), out),
        Value::Bytes(b) => encode_payload(Tag::Bytes, b, out),
        Value::List(list) => {
            out.push(Tag::List.into());
            encode_len(list.len(), out);
            for item in list {
                encode_into(item, out);
            }
        }
        Value::Map(map) => {
            out.push(Tag::Map.into());
            encode_len(map.len(), out);
            for (key, value) in canonical_entries(map) {
                encode_payload(Tag::String, key.as_bytes(), out);
                encode_into(value, out);
            }
        }
    }
}

fn encode_payload(tag: Tag, payload: &[u8], out: &mut Vec<u8>) {
    out.push(tag.into());
    encode_len(payload.len(), out);
    out.extend_from_slice(payload);
}

fn encode_len(len: usize, out: &mut Vec<u8>) {
    // usize is at most 64 bits on every supported target
    encode_uleb128(len as u64, out);
}

/// Returns the entries of a map ordered by the UTF-8 bytes of their keys.
fn canonical_entries(map: &Map<String, Value>) -> Vec<(&str, &Value)> {
    let mut entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
    entries
}
