#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strata::{DecodeErrorKind, Value};

#[derive(Debug, Arbitrary)]
enum Input {
    Null,
    Bool(bool),
    Int(i64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Input>),
    Map(BTreeMap<String, Input>),
}

impl From<Input> for Value {
    fn from(input: Input) -> Self {
        match input {
            Input::Null => Value::Null,
            Input::Bool(b) => Value::Bool(b),
            Input::Int(i) => Value::Int(i),
            Input::String(s) => Value::String(s),
            Input::Bytes(b) => Value::Bytes(b),
            Input::List(list) => Value::List(list.into_iter().map(Value::from).collect()),
            Input::Map(map) => Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

fuzz_target!(|input: Input| {
    let value = Value::from(input);
    let bytes = strata::encode(&value);
    match strata::decode(&bytes) {
        Ok(decoded) => assert_eq!(decoded, value),
        Err(err) => assert_eq!(err.kind(), DecodeErrorKind::NestingTooDeep),
    }
    assert_eq!(strata::hash_value(&value), strata::hash_bytes(&bytes));
});
