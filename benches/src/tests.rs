use strata::Value;

use crate::fixture::{Profile, Registry};

#[test]
fn registry_to_value() {
    let registry = Registry {
        region: "eu-west".to_owned(),
        profiles: vec![Profile {
            name: "Nancy Wheeler".to_owned(),
            id: -17,
            verbose: false,
            avatar_hash: vec![0x9f, 0x86],
            tags: vec!["admin".to_owned()],
        }],
    };
    let value = strata::to_value(registry).unwrap();
    assert_eq!(
        value,
        strata::value! {
            region: "eu-west",
            profiles: [{
                name: "Nancy Wheeler",
                id: -17,
                verbose: false,
                avatar_hash: Value::bytes([0x9f, 0x86]),
                tags: ["admin"],
            }],
        }
    );
}

#[test]
fn random_text_round_trips() {
    let value = crate::value(25);
    let text = format!("{value:#}");
    assert_eq!(strata::parse(&text).unwrap(), value);
    assert_eq!(strata::decode(&strata::encode(&value)).unwrap(), value);
}
